#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]

//! Word-level text helpers shared by the chatbot crates.
//!
//! Contract: every function here is pure and deterministic. Tokens are
//! lower-case and never contain whitespace.

/// Lower-case and trim a line of user text or a dataset key.
pub fn normalise(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Split `s` into lower-cased tokens on runs of whitespace.
///
/// Empty pieces (leading, trailing or repeated whitespace) are dropped, so
/// `"  Hello   World "` yields `["hello", "world"]` and a blank line yields
/// nothing.
pub fn tokenise(s: &str) -> Vec<String> {
    s.to_lowercase()
        .split(char::is_whitespace)
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect()
}

/// Levenshtein edit distance between `a` and `b`.
///
/// Unit cost for insertion, deletion and substitution over `char`s. Uses a
/// single rolling row sized by the shorter input.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let (long, short) = if a.chars().count() >= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short: Vec<char> = short.chars().collect();
    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, ca) in long.chars().enumerate() {
        // row still holds the previous line here; row[0] == i
        let mut diag = i;
        let mut left = i + 1;
        if let Some(first) = row.first_mut() {
            *first = left;
        }
        for (cb, cell) in short.iter().zip(row.iter_mut().skip(1)) {
            let up = *cell;
            let value = (up + 1)
                .min(left + 1)
                .min(diag + usize::from(ca != *cb));
            diag = up;
            *cell = value;
            left = value;
        }
    }
    row.last().copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tokenise_lowercases_and_splits() {
        assert_eq!(tokenise("How ARE you"), vec!["how", "are", "you"]);
    }

    #[test]
    fn tokenise_drops_empty_pieces() {
        assert_eq!(tokenise("  hello \t\n world  "), vec!["hello", "world"]);
        assert!(tokenise("").is_empty());
        assert!(tokenise("   \t ").is_empty());
    }

    #[test]
    fn tokenise_keeps_punctuation_inside_tokens() {
        // only whitespace separates tokens
        assert_eq!(tokenise("what's up?"), vec!["what's", "up?"]);
    }

    #[test]
    fn normalise_trims_and_lowercases() {
        assert_eq!(normalise("  HeLLo There \n"), "hello there");
    }

    #[test]
    fn levenshtein_known_values() {
        assert_eq!(levenshtein("hello", "hello"), 0);
        assert_eq!(levenshtein("hello", "helo"), 1);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("things", "you"), 6);
    }

    #[test]
    fn levenshtein_empty_inputs() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abcd"), 4);
    }

    #[test]
    fn levenshtein_counts_chars_not_bytes() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("привет", "превет"), 1);
    }

    proptest! {
        #[test]
        fn distance_to_self_is_zero(a in "\\PC{0,12}") {
            prop_assert_eq!(levenshtein(&a, &a), 0);
        }

        #[test]
        fn distance_is_symmetric(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
            prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
        }

        #[test]
        fn distance_to_empty_is_length(a in "\\PC{0,12}") {
            prop_assert_eq!(levenshtein(&a, ""), a.chars().count());
        }

        #[test]
        fn tokens_are_lowercase_without_whitespace(s in "[a-zA-Z \t\n]{0,40}") {
            for t in tokenise(&s) {
                prop_assert!(!t.is_empty());
                prop_assert!(!t.chars().any(char::is_whitespace));
                prop_assert_eq!(t.to_lowercase(), t.clone());
            }
        }
    }
}
