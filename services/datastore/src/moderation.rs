//! Moderation — deterministic banned-word censoring
//!
//! A whitespace-delimited token that case-insensitively equals a banned
//! word is replaced by the censor marker; tokens are re-joined with
//! single spaces. Only whole tokens match: a banned word glued to
//! punctuation passes through.

const CENSOR: &str = "****";

const BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Rewrite `body` with banned tokens censored.
///
/// The result can differ in length from the input; the length limit is
/// enforced on the original body, before this rewrite.
pub fn censor(body: &str) -> String {
    body.split_whitespace()
        .map(|word| {
            if BANNED_WORDS.iter().any(|banned| word.eq_ignore_ascii_case(banned)) {
                CENSOR
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
