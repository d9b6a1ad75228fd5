pub mod fetch;
pub mod play;
