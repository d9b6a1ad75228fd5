//! HTML entity decoding for question text.
//!
//! The trivia service entity-encodes every text field (`&quot;`, `&#039;`,
//! `&amp;`, ...). Decoding happens once at the client boundary so the rest
//! of the system only ever sees plain text.

use std::borrow::Cow;

/// Decode HTML character entities in `raw` to their literal characters.
///
/// Unrecognized sequences pass through unchanged; there are no error
/// conditions.
pub fn decode(raw: &str) -> String {
    match html_escape::decode_html_entities(raw) {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_common_entities() {
        assert_eq!(decode("&quot;hello&#039;s&quot;"), "\"hello's\"");
        assert_eq!(decode("Dungeons &amp; Dragons"), "Dungeons & Dragons");
        assert_eq!(decode("1 &lt; 2 &gt; 0"), "1 < 2 > 0");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(decode("no entities here"), "no entities here");
        assert_eq!(decode(""), "");
    }

    #[test]
    fn unknown_sequences_are_left_alone() {
        assert_eq!(decode("&notarealentity; stays"), "&notarealentity; stays");
        assert_eq!(decode("lone & ampersand"), "lone & ampersand");
    }

    #[test]
    fn numeric_entities() {
        assert_eq!(decode("&#233;tude"), "\u{e9}tude");
        assert_eq!(decode("&#x41;BC"), "ABC");
    }
}
