//! Property-based tests for the matcher primitives and combinators.
//!
//! These pin the contracts the grammars depend on: literal matches exactly
//! the prefix, optional is total, and failing composites hand back the
//! original input so alternation and scanning can retry from the same
//! position.

use proptest::prelude::*;

use gigline::matcher::{
    alternation, digit, literal, one_or_more, optional, scan_until, sequence,
};

proptest! {
    /// literal(L)(s) succeeds iff s starts with L, and on success the match
    /// is L and the remainder is s minus that prefix.
    #[test]
    fn literal_prefix_law(l in "[a-zA-Z0-9 .$@:-]{0,8}", s in "[a-zA-Z0-9 .$@:-]{0,32}") {
        let m = literal(l.clone());
        match m.apply(&s) {
            Ok((matched, remainder)) => {
                prop_assert!(s.starts_with(&l));
                prop_assert_eq!(matched, l.as_str());
                prop_assert_eq!(remainder, &s[l.len()..]);
            }
            Err(original) => {
                prop_assert!(!s.starts_with(&l));
                prop_assert_eq!(original, s.as_str());
            }
        }
    }

    /// optional never fails, for any inner matcher and any input.
    #[test]
    fn optional_is_total(l in "[a-z]{0,4}", s in "\\PC{0,32}") {
        prop_assert!(optional(literal(l)).apply(&s).is_ok());
        prop_assert!(optional(digit()).apply(&s).is_ok());
    }

    /// A failing sequence reports the original input unchanged, even when
    /// earlier steps consumed part of it.
    #[test]
    fn sequence_failure_restores_input(s in "[0-9]{1,4}[a-z]{1,4}") {
        // Digits match, then the trailing literal cannot.
        let m = sequence(vec![one_or_more(digit()), literal("!")]);
        prop_assert_eq!(m.apply(&s), Err(s.as_str()));
    }

    /// Success slices partition the input: matched + remainder == input.
    #[test]
    fn matched_and_remainder_partition_input(s in "\\PC{0,32}") {
        let m = one_or_more(digit());
        if let Ok((matched, remainder)) = m.apply(&s) {
            prop_assert_eq!(format!("{}{}", matched, remainder), s);
        }
    }

    /// Alternation returns the first success regardless of later entries.
    #[test]
    fn alternation_prefers_earlier(s in "AM[a-z]{0,8}") {
        let first = alternation(vec![literal("AM"), literal("A")]);
        prop_assert_eq!(first.apply(&s).unwrap().0, "AM");
        let flipped = alternation(vec![literal("A"), literal("AM")]);
        prop_assert_eq!(flipped.apply(&s).unwrap().0, "A");
    }

    /// scan_until returns the first position where the target matches, and
    /// the prefix never contains an earlier match.
    #[test]
    fn scan_until_finds_first_position(prefix in "[a-z ]{0,16}", suffix in "\\PC{0,16}") {
        let m = literal("@");
        let input = format!("{}@{}", prefix, suffix);
        let (skipped, remainder) = scan_until(&m, &input).unwrap();
        prop_assert!(!skipped.contains('@'));
        prop_assert!(remainder.starts_with('@'));
    }

    /// scan_until fails with the original input when no position matches.
    #[test]
    fn scan_until_failure_restores_input(s in "[a-z ]{0,32}") {
        prop_assert_eq!(scan_until(&literal("@"), &s), Err(s.as_str()));
    }
}
