use std::io;
use std::path::PathBuf;

/// Errors raised while loading a dataset file.
///
/// Neither is fatal to a session: the caller logs the error and keeps
/// whatever entries were already in the dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The file could not be opened (absent, permissions, ...).
    #[error("dataset file {} could not be opened: {source}", .path.display())]
    Missing {
        /// path that was tried
        path: PathBuf,
        /// underlying I/O error
        source: io::Error,
    },
    /// Reading failed part-way through the file.
    #[error("dataset read failed at line {line}: {source}")]
    Read {
        /// 1-based line number that could not be read
        line: usize,
        /// underlying I/O error
        source: io::Error,
    },
}

/// Errors raised while loading the settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("settings file {} could not be read: {source}", .path.display())]
    Read {
        /// settings path
        path: PathBuf,
        /// underlying I/O error
        source: io::Error,
    },
    /// The file is not valid settings JSON.
    #[error("settings file {} is malformed: {source}", .path.display())]
    Parse {
        /// settings path
        path: PathBuf,
        /// parser error with line/column
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn missing_message_names_path() {
        let err = DatasetError::Missing {
            path: PathBuf::from("chatbot_dataset.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("chatbot_dataset.txt"), "{msg}");
        assert!(err.source().is_some());
    }

    #[test]
    fn read_message_names_line() {
        let err = DatasetError::Read {
            line: 12,
            source: io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"),
        };
        assert!(err.to_string().contains("line 12"));
    }
}
