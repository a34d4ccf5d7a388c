//! Chat preview transcript for manually testing a configured bot.
//!
//! DESIGN
//! ======
//! The transcript is append-only and optimistic: the human turn is added
//! before the request is issued and is never rolled back. At most one request
//! is outstanding per session; `begin_send` refuses further submissions while
//! `awaiting_reply` is set, and refuses empty or whitespace-only input.
//! Failures append a fixed apology turn so the conversation shape stays
//! consistent for the reader.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::HistoryEntry;

/// Synthetic assistant turn every fresh transcript starts with.
pub const GREETING: &str = "Hi! What can I help you with?";

/// Assistant turn appended when the question-answering call fails.
pub const FAILURE_REPLY: &str = "Sorry, I encountered an error while processing your request.";

/// Who produced a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    Human,
    Assistant,
}

impl Speaker {
    /// Wire-format role string used in the QA request history.
    pub fn role(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Assistant => "assistant",
        }
    }

    /// Display label shown above a chat bubble.
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "You",
            Self::Assistant => "Agent",
        }
    }
}

/// One message in the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub speaker: Speaker,
    pub content: String,
    pub timestamp: String,
}

/// Everything needed to issue one question-answering request: the trimmed
/// question and the transcript as it stood before the question was appended.
#[derive(Clone, Debug, PartialEq)]
pub struct SendRequest {
    pub question: String,
    pub history: Vec<HistoryEntry>,
}

/// In-memory, append-only transcript of a single preview conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTranscript {
    pub turns: Vec<Turn>,
    pub awaiting_reply: bool,
}

impl ChatTranscript {
    /// Fresh transcript containing only the synthetic greeting.
    pub fn new(timestamp: String) -> Self {
        Self {
            turns: vec![Turn {
                speaker: Speaker::Assistant,
                content: GREETING.to_owned(),
                timestamp,
            }],
            awaiting_reply: false,
        }
    }

    /// Try to start a send. Returns `None` (and changes nothing) when the
    /// input is empty after trimming or a reply is still outstanding.
    /// Otherwise appends the human turn, arms the in-flight flag, and returns
    /// the request payload with the history captured before the append.
    pub fn begin_send(&mut self, input: &str, timestamp: String) -> Option<SendRequest> {
        let question = input.trim();
        if question.is_empty() || self.awaiting_reply {
            return None;
        }
        let history = self
            .turns
            .iter()
            .map(|turn| HistoryEntry {
                role: turn.speaker.role().to_owned(),
                content: turn.content.clone(),
            })
            .collect();
        self.turns.push(Turn {
            speaker: Speaker::Human,
            content: question.to_owned(),
            timestamp,
        });
        self.awaiting_reply = true;
        Some(SendRequest {
            question: question.to_owned(),
            history,
        })
    }

    /// Record the assistant's reply and release the in-flight flag.
    pub fn complete(&mut self, reply: String, timestamp: String) {
        self.turns.push(Turn {
            speaker: Speaker::Assistant,
            content: reply,
            timestamp,
        });
        self.awaiting_reply = false;
    }

    /// Record a failed request as the fixed apology turn. The optimistic
    /// human turn stays in place.
    pub fn fail(&mut self, timestamp: String) {
        self.complete(FAILURE_REPLY.to_owned(), timestamp);
    }

    /// Discard the whole transcript and start over with the greeting.
    pub fn reset(&mut self, timestamp: String) {
        *self = Self::new(timestamp);
    }
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new(String::new())
    }
}
