use std::collections::HashMap;
use std::path::Path;

use tokenize::{normalise, tokenise};

use crate::loader;

/// Built-in entries loaded before any dataset file.
pub const DEFAULT_ENTRIES: &[(&str, &[&str])] = &[
    ("hello", &["Hi there!", "Hello!", "Greetings!"]),
    (
        "how are you",
        &[
            "I'm doing well, thank you!",
            "I'm great, how are you?",
            "All good, thanks for asking!",
        ],
    ),
    ("hi", &["Hello!", "Hi! How can I help you today?"]),
    ("goodbye", &["Goodbye!", "See you later!", "Take care!"]),
    ("thank you", &["You're welcome!", "Happy to help!", "Anytime!"]),
    (
        "what is your name",
        &["I'm ChatBot, your friendly assistant.", "People call me ChatBot."],
    ),
    (
        "tell me a joke",
        &[
            "Why do programmers prefer dark mode? Because light attracts bugs!",
            "I told my computer I needed a break. It said: no problem, I'll go to sleep.",
        ],
    ),
    (
        "recommend a movie",
        &["You might enjoy Inception.", "How about The Matrix?", "Try Spirited Away."],
    ),
    (
        "help me with programming",
        &[
            "Sure! Which language are you working with?",
            "Happy to help. What are you trying to build?",
        ],
    ),
];

/// One question with its possible answers.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetEntry {
    key: String,
    tokens: Vec<String>,
    answers: Vec<String>,
}

impl DatasetEntry {
    /// Lower-cased, trimmed question text.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Question words, tokenised once at insertion.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Answers in file order, verbatim. Never empty.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }
}

/// Question → answers store.
///
/// Iterates in insertion order of each key's first `put`; replacing a key
/// keeps its original slot. Read-only once a session has started.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    entries: Vec<DatasetEntry>,
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dataset holding only [`DEFAULT_ENTRIES`].
    pub fn with_defaults() -> Self {
        let mut dataset = Self::new();
        for (key, answers) in DEFAULT_ENTRIES {
            dataset.put(key, answers.iter().map(|a| a.to_string()).collect());
        }
        dataset
    }

    /// Defaults overlaid with the entries of the dataset file at `path`.
    ///
    /// A missing or unreadable file is logged and the session carries on
    /// with whatever was loaded so far.
    pub fn bootstrap(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let mut dataset = Self::with_defaults();
        match loader::load_file(path, &mut dataset) {
            Ok(n) => tracing::info!("loaded {} entries from {}", n, path.display()),
            Err(e) => tracing::warn!("{e}; using default responses only"),
        }
        tracing::debug!("dataset ready with {} questions", dataset.len());
        dataset
    }

    /// Insert or replace the answers for `key`.
    ///
    /// The key is trimmed and lower-cased. Blank answers are dropped; if none
    /// remain the dataset is left untouched and `false` is returned.
    pub fn put(&mut self, key: &str, mut answers: Vec<String>) -> bool {
        answers.retain(|a| !a.trim().is_empty());
        if answers.is_empty() {
            return false;
        }
        let key = normalise(key);
        match self.index.get(&key) {
            Some(&slot) => {
                if let Some(entry) = self.entries.get_mut(slot) {
                    entry.answers = answers;
                }
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(DatasetEntry {
                    tokens: tokenise(&key),
                    key,
                    answers,
                });
            }
        }
        true
    }

    /// Answers for `key` (normalised the same way as [`Dataset::put`]).
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.index
            .get(&normalise(key))
            .and_then(|&slot| self.entries.get(slot))
            .map(DatasetEntry::answers)
    }

    /// `(question, answers)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.entries.iter().map(|e| (e.key(), e.answers()))
    }

    /// Full entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, DatasetEntry> {
        self.entries.iter()
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no question is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
