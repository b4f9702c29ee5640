use std::fmt;

use chrono::{Local, NaiveTime};

/// Who wrote a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// the person at the keyboard
    You,
    /// the chatbot
    Bot,
}

impl Sender {
    /// Label shown before the message text.
    pub fn label(self) -> &'static str {
        match self {
            Sender::You => "You",
            Sender::Bot => "Bot",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One timestamped line of the conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// local wall-clock time the line was added
    pub time: NaiveTime,
    /// author
    pub sender: Sender,
    /// text as typed or replied
    pub text: String,
}

impl Message {
    /// Message stamped with the current local time.
    pub fn now(sender: Sender, text: impl Into<String>) -> Self {
        Self::at(Local::now().time(), sender, text)
    }

    /// Message with an explicit time.
    pub fn at(time: NaiveTime, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            time,
            sender,
            text: text.into(),
        }
    }

    /// `HH:MM` stamp.
    pub fn timestamp(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.timestamp(), self.sender, self.text)
    }
}

/// Accept a line typed by the user: trimmed, or `None` when blank.
pub fn accept_input(raw: &str) -> Option<&str> {
    let line = raw.trim();
    (!line.is_empty()).then_some(line)
}
