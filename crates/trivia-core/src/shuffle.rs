//! Answer option shuffling.
//!
//! Options are shuffled once when a question is normalized, not per
//! render, so the order a player sees is stable for the whole session.

use rand::seq::SliceRandom;
use rand::Rng;

/// Build the displayed option list for a question: the correct answer plus
/// every incorrect answer, in a uniformly random permutation.
///
/// Duplicates in `incorrect` are preserved. The RNG is injected so tests
/// can pin the ordering with a seeded generator.
pub fn answer_options<R: Rng>(correct: &str, incorrect: &[String], rng: &mut R) -> Vec<String> {
    let mut options = Vec::with_capacity(incorrect.len() + 1);
    options.push(correct.to_string());
    options.extend(incorrect.iter().cloned());
    // Fisher-Yates, via rand
    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn incorrect(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn preserves_multiset() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = answer_options("right", &incorrect(&["a", "b", "c"]), &mut rng);
        assert_eq!(options.len(), 4);
        let mut sorted = options.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["a", "b", "c", "right"]);
    }

    #[test]
    fn preserves_duplicates() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = answer_options("x", &incorrect(&["x", "y"]), &mut rng);
        assert_eq!(options.iter().filter(|o| o.as_str() == "x").count(), 2);
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn single_option_quiz() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = answer_options("only", &[], &mut rng);
        assert_eq!(options, vec!["only"]);
    }

    #[test]
    fn seeded_shuffle_is_deterministic() {
        let a = answer_options("c", &incorrect(&["i1", "i2", "i3"]), &mut StdRng::seed_from_u64(42));
        let b = answer_options("c", &incorrect(&["i1", "i2", "i3"]), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn permutations_are_roughly_uniform() {
        // 4 options -> 24 permutations. Over 1000 seeded trials every
        // permutation should show up close to the expected ~42 times.
        let mut rng = StdRng::seed_from_u64(1234);
        let mut counts: HashMap<Vec<String>, u32> = HashMap::new();
        for _ in 0..1000 {
            let options = answer_options("c", &incorrect(&["i1", "i2", "i3"]), &mut rng);
            *counts.entry(options).or_default() += 1;
        }
        assert_eq!(counts.len(), 24);
        for (perm, count) in &counts {
            assert!(
                (10..=90).contains(count),
                "permutation {perm:?} appeared {count} times"
            );
        }
    }
}
