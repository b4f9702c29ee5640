#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tokenize::normalise;

use crate::dataset::Dataset;
use crate::error::DatasetError;

/// Dataset file looked up in the working directory when no setting names one.
pub const DEFAULT_DATASET_FILE: &str = "chatbot_dataset.txt";

const QUESTION_PREFIX: &str = "Q:";
const ANSWER_PREFIX: &str = "A:";

/// Load `Q:` / `A:` entries from the file at `path` into `dataset`.
///
/// Returns the number of entries stored. See [`load_reader`] for the format
/// and for what survives a failed read.
pub fn load_file(path: impl AsRef<Path>, dataset: &mut Dataset) -> Result<usize, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Missing {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("reading dataset from {}", path.display());
    load_reader(BufReader::new(file), dataset)
}

/// Load entries from any line source.
///
/// Every line is trimmed. A `Q:` line starts a new question (lower-cased)
/// and stores the previous one; `A:` lines add a verbatim answer to the
/// current question (an `A:` line with nothing after it adds nothing);
/// anything else is skipped. A question without answers is never stored. When a line cannot be read, entries stored so far stay
/// in `dataset` and the question being collected is dropped.
pub fn load_reader<R: BufRead>(reader: R, dataset: &mut Dataset) -> Result<usize, DatasetError> {
    let mut stored = 0usize;
    let mut current_key: Option<String> = None;
    let mut current_answers: Vec<String> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| DatasetError::Read { line: i + 1, source })?;
        let line = line.trim();

        if let Some(question) = line.strip_prefix(QUESTION_PREFIX) {
            if let Some(key) = current_key.take() {
                if dataset.put(&key, std::mem::take(&mut current_answers)) {
                    stored += 1;
                } else {
                    tracing::debug!("question {:?} has no answers, skipped", key);
                }
            }
            current_key = Some(normalise(question));
            current_answers.clear();
        } else if let Some(answer) = line.strip_prefix(ANSWER_PREFIX) {
            let answer = answer.trim();
            if answer.is_empty() {
                tracing::trace!("line {}: blank answer, ignored", i + 1);
            } else {
                current_answers.push(answer.to_string());
            }
        } else if !line.is_empty() {
            tracing::trace!("line {}: not a Q:/A: line, ignored", i + 1);
        }
    }

    if let Some(key) = current_key {
        if dataset.put(&key, current_answers) {
            stored += 1;
        }
    }
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answers(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn load(text: &str) -> (Dataset, usize) {
        let mut d = Dataset::new();
        let n = load_reader(Cursor::new(text.as_bytes()), &mut d).unwrap();
        (d, n)
    }

    #[test]
    fn parses_entries_in_order() {
        let (d, n) = load(
            "Q: What is Rust?\nA: A systems language.\nA: A crab's favourite.\n\nQ: Bye\nA: See you!\n",
        );
        assert_eq!(n, 2);
        let keys: Vec<&str> = d.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["what is rust?", "bye"]);
        assert_eq!(
            d.get("what is rust?"),
            Some(&answers(&["A systems language.", "A crab's favourite."])[..])
        );
    }

    #[test]
    fn trims_lines_and_keeps_answer_case() {
        let (d, _) = load("   Q:   HELLO there  \n\t A:   Hi, FRIEND!  \n");
        assert_eq!(d.get("hello there"), Some(&answers(&["Hi, FRIEND!"])[..]));
    }

    #[test]
    fn ignores_comments_and_orphan_answers() {
        let (d, n) = load("# greetings\nA: orphan\nrandom text\nQ: hi\nA: hey\n");
        assert_eq!(n, 1);
        assert_eq!(d.get("hi"), Some(&answers(&["hey"])[..]));
    }

    #[test]
    fn question_without_answers_is_skipped() {
        let (d, n) = load("Q: lonely\nQ: paired\nA: yes\nQ: trailing\n");
        assert_eq!(n, 1);
        assert_eq!(d.get("lonely"), None);
        assert_eq!(d.get("trailing"), None);
        assert!(d.get("paired").is_some());
    }

    #[test]
    fn blank_answers_are_skipped() {
        let (d, n) = load("Q: ping\nA:\nA: pong\nQ: silent\nA:   \n");
        assert_eq!(n, 1);
        assert_eq!(d.get("ping"), Some(&answers(&["pong"])[..]));
        assert_eq!(d.get("silent"), None);
    }

    #[test]
    fn later_question_overrides_earlier() {
        let (d, n) = load("Q: hi\nA: one\nQ: HI\nA: two\n");
        assert_eq!(n, 2);
        assert_eq!(d.len(), 1);
        assert_eq!(d.get("hi"), Some(&answers(&["two"])[..]));
    }

    #[test]
    fn file_overrides_defaults() {
        let mut d = Dataset::with_defaults();
        load_reader(Cursor::new("Q: hello\nA: Howdy!\n"), &mut d).unwrap();
        assert_eq!(d.get("hello"), Some(&answers(&["Howdy!"])[..]));
        assert!(d.get("how are you").is_some());
    }

    #[test]
    fn read_failure_keeps_stored_entries() {
        let mut d = Dataset::with_defaults();
        let bytes: &[u8] = b"Q: hello\nA: Yo\nQ: pending\nA: lost\n\xff\xfe\nQ: never\nA: seen\n";
        let err = load_reader(Cursor::new(bytes), &mut d).unwrap_err();
        assert!(matches!(err, DatasetError::Read { line: 5, .. }), "{err:?}");
        assert_eq!(d.get("hello"), Some(&answers(&["Yo"])[..]));
        assert_eq!(d.get("pending"), None);
        assert_eq!(d.get("never"), None);
        assert!(d.get("how are you").is_some());
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut d = Dataset::new();
        let err = load_file(dir.path().join("missing.txt"), &mut d).unwrap_err();
        assert!(matches!(err, DatasetError::Missing { .. }));
        assert!(d.is_empty());
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_DATASET_FILE);
        std::fs::write(&path, "Q: ping\nA: pong\n").unwrap();
        let mut d = Dataset::new();
        assert_eq!(load_file(&path, &mut d).unwrap(), 1);
        assert_eq!(d.get("ping"), Some(&answers(&["pong"])[..]));
    }
}
