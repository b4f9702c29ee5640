use memory::HistoryBuffer;
use rand::Rng;
use tokenize::{normalise, tokenise};

use crate::dataset::{Dataset, DatasetEntry};
use crate::rng::pick;
use crate::scorer::score_tokens;

/// A question must score strictly above this to be answered from the dataset.
pub const MATCH_THRESHOLD: f64 = 0.5;

/// Generic replies used when no question matches well enough.
pub const FALLBACK_RESPONSES: [&str; 5] = [
    "I'm not quite sure about that. Could you rephrase?",
    "Interesting! Tell me more about that.",
    "I'm still learning about that topic. Could you elaborate?",
    "That's a good question! Let me think about it...",
    DEFAULT_RESPONSE,
];

/// Last-resort reply, also the final entry of [`FALLBACK_RESPONSES`].
pub const DEFAULT_RESPONSE: &str = "I'm not sure how to respond to that.";

/// Hook consulted before dataset matching once the conversation has history.
///
/// Returning `Some` short-circuits the reply. Implementations see the
/// normalised utterance and the recorded history (which already includes
/// the utterance when the front end records before replying).
pub trait ContextResponder {
    /// Reply based on conversation context, or `None` to defer to matching.
    fn context_reply(&self, utterance: &str, history: &HistoryBuffer) -> Option<String>;
}

/// Default hook: never answers from context.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContext;

impl ContextResponder for NoContext {
    fn context_reply(&self, _utterance: &str, _history: &HistoryBuffer) -> Option<String> {
        None
    }
}

impl<F> ContextResponder for F
where
    F: Fn(&str, &HistoryBuffer) -> Option<String>,
{
    fn context_reply(&self, utterance: &str, history: &HistoryBuffer) -> Option<String> {
        self(utterance, history)
    }
}

/// Picks the bot's reply to each user line.
///
/// Owns the dataset, the conversation history and the RNG used for every
/// uniform pick, so a seeded RNG gives a reproducible conversation.
pub struct ResponseEngine<R> {
    dataset: Dataset,
    history: HistoryBuffer,
    context: Box<dyn ContextResponder>,
    rng: R,
}

impl<R: Rng> ResponseEngine<R> {
    /// Engine over `dataset` with an empty history and the [`NoContext`] hook.
    pub fn new(dataset: Dataset, rng: R) -> Self {
        Self {
            dataset,
            history: HistoryBuffer::new(),
            context: Box::new(NoContext),
            rng,
        }
    }

    /// Replace the context hook.
    pub fn with_context(mut self, responder: impl ContextResponder + 'static) -> Self {
        self.context = Box::new(responder);
        self
    }

    /// Remember a user line for the context hook.
    pub fn record(&mut self, utterance: &str) {
        if !self.history.record(utterance) {
            tracing::trace!("utterance already in history");
        }
    }

    /// Reply to a user line. Always returns a non-empty string.
    ///
    /// Questions are scanned in dataset insertion order and only a strictly
    /// better score replaces the current best, so the earlier question wins
    /// a tie.
    pub fn reply(&mut self, raw: &str) -> String {
        let utterance = normalise(raw);

        if !self.history.is_empty() {
            if let Some(reply) = self.context.context_reply(&utterance, &self.history) {
                tracing::debug!("context hook answered");
                return reply;
            }
        }

        let (best, best_score) = best_match(&self.dataset, &utterance);
        tracing::debug!(
            "best match {:?} scored {:.3}",
            best.map(DatasetEntry::key),
            best_score
        );

        if best_score > MATCH_THRESHOLD {
            if let Some(answer) = best.and_then(|e| pick(e.answers(), &mut self.rng)) {
                return answer.clone();
            }
        }
        self.fallback()
    }

    fn fallback(&mut self) -> String {
        pick(&FALLBACK_RESPONSES, &mut self.rng)
            .copied()
            .unwrap_or(DEFAULT_RESPONSE)
            .to_string()
    }

    /// Conversation history recorded so far.
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Questions and answers this engine matches against.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

/// Best-scoring question for an already normalised utterance.
fn best_match<'a>(dataset: &'a Dataset, utterance: &str) -> (Option<&'a DatasetEntry>, f64) {
    let user = tokenise(utterance);
    let mut best = None;
    let mut best_score = 0.0;
    for entry in dataset.iter() {
        let s = score_tokens(&user, entry.tokens());
        if s > best_score {
            best_score = s;
            best = Some(entry);
        }
    }
    (best, best_score)
}
