use tokenize::{levenshtein, tokenise};

/// Credit for a user word equal to a question word.
pub const EXACT_CREDIT: f64 = 1.0;
/// Credit for a user word within [`FUZZY_MAX_DISTANCE`] edits of a question word.
pub const FUZZY_CREDIT: f64 = 0.5;
/// Largest edit distance that still earns [`FUZZY_CREDIT`].
pub const FUZZY_MAX_DISTANCE: usize = 2;

/// Credit earned by one (user word, question word) pair.
pub fn credit(user: &str, key: &str) -> f64 {
    if user == key {
        EXACT_CREDIT
    } else if levenshtein(user, key) <= FUZZY_MAX_DISTANCE {
        FUZZY_CREDIT
    } else {
        0.0
    }
}

/// Score a user utterance against a dataset question.
///
/// Every pair of words contributes its [`credit`], and the sum is divided
/// by the longer of the two word counts. Duplicate words count once per
/// pair, so the result is not clamped and can exceed 1.0 (`"hi hi"`
/// against `"hi hi"` scores 2.0). Empty input on either side scores 0.
pub fn score(user: &str, key: &str) -> f64 {
    score_tokens(&tokenise(user), &tokenise(key))
}

/// [`score`] over already tokenised input.
pub fn score_tokens(user: &[String], key: &[String]) -> f64 {
    if user.is_empty() || key.is_empty() {
        return 0.0;
    }
    let matches: f64 = user
        .iter()
        .flat_map(|u| key.iter().map(move |k| credit(u, k)))
        .sum();
    matches / user.len().max(key.len()) as f64
}
