#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing)]
#![deny(missing_docs, unused_must_use)]

//! Chatbot: fuzzy question matching over a small Q/A dataset
//!
//! The crate holds the response selection engine and everything the two
//! front ends (`gui` and `chat`) share. A reply is chosen by scoring the
//! user's words against every dataset question, giving half credit to
//! words within edit distance two, and sampling one of the answers of the
//! best question when it scores above one half. Anything weaker falls back
//! to a fixed pool of generic replies.
//!
//! Layout (important files):
//! - `rng.rs` — RNG construction and uniform sampling
//! - `scorer.rs` — token overlap score with fuzzy credit
//! - `dataset.rs` — insertion-ordered question → answers store + defaults
//! - `loader.rs` — `Q:` / `A:` dataset file parser
//! - `engine.rs` — `ResponseEngine` and the context hook
//! - `config.rs` — optional `chatbot.json` settings
//! - `transcript.rs` — `[HH:MM] Sender: text` lines for the UI
//! - `bin/gui.rs` — egui window; `bin/chat.rs` — console REPL

/// RNG helpers: seeded construction and uniform picks.
pub mod rng;
/// Error types for dataset loading and settings.
pub mod error;
/// Match scoring between a user utterance and a dataset question.
pub mod scorer;
/// Question → answers store and built-in defaults.
pub mod dataset;
/// Dataset file parser.
pub mod loader;
/// Response selection.
pub mod engine;
/// Runtime settings.
pub mod config;
/// Diagnostic logging setup.
pub mod logging;
/// Transcript lines shown by the front ends.
pub mod transcript;

pub use config::Settings;
pub use dataset::{Dataset, DatasetEntry};
pub use engine::{ContextResponder, NoContext, ResponseEngine, FALLBACK_RESPONSES, MATCH_THRESHOLD};
pub use error::{ConfigError, DatasetError};
pub use memory::{HistoryBuffer, MAX_HISTORY};
pub use transcript::{accept_input, Message, Sender};

/// Welcome text shown when a session starts.
pub const WELCOME_MESSAGE: &str = "Welcome to ChatBot!

I can help you with:
📚 General conversation
💻 Programming help
🎬 Movie recommendations
😄 Jokes and entertainment
❓ Questions and answers

Just type your message and press Enter or click Send!";

/// Build the engine a front end runs with: defaults plus the configured
/// dataset file, and an RNG seeded from the settings (or from entropy).
pub fn session_engine(settings: &Settings) -> ResponseEngine<rand_chacha::ChaCha8Rng> {
    let dataset = Dataset::bootstrap(&settings.dataset_path);
    let rng = rng::session_rng(settings.seed);
    ResponseEngine::new(dataset, rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_engine_falls_back_to_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            dataset_path: dir.path().join("absent.txt"),
            seed: Some(7),
            ..Settings::default()
        };
        let engine = session_engine(&settings);
        assert!(engine.dataset().get("hello").is_some());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn seeded_sessions_reply_identically() {
        let settings = Settings {
            dataset_path: "definitely-missing-dataset.txt".into(),
            seed: Some(42),
            ..Settings::default()
        };
        let mut a = session_engine(&settings);
        let mut b = session_engine(&settings);
        for line in ["hello", "how are you", "something else entirely"] {
            assert_eq!(a.reply(line), b.reply(line));
        }
    }
}
