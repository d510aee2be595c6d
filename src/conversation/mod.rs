//! Conversation types and history composition.
//!
//! A conversation is an ordered sequence of [`Turn`]s, each tagged with the
//! speaker [`Role`]. The history is owned per invocation: it is built from the
//! caller-supplied turns, grows by the new user turn and (on success) the
//! backend's assistant turn, and is never persisted by this crate.

use serde::{Deserialize, Serialize};

/// Speaker of a single conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Speaker label used by the prompt-text serialization.
    pub fn speaker_label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }

    /// The role expected to speak after this one.
    pub fn next_speaker(&self) -> Role {
        match self {
            Role::User => Role::Assistant,
            Role::Assistant => Role::User,
        }
    }
}

/// One message in a conversation. Immutable once created; ordering within a
/// history is chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Ordered conversation history, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationHistory {
    turns: Vec<Turn>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_turns(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Serialize the history into a single alternating-speaker text block for
    /// raw-prompt backends.
    ///
    /// Each turn renders as `"User: <content>\n"` or `"Assistant: <content>\n"`,
    /// followed by a trailing cue naming the next expected speaker. Content is
    /// passed through verbatim: a turn containing the literal `"User: "` or
    /// `"Assistant: "` substrings will blur the speaker boundaries on the
    /// backend side. That is the contract of this serialization, not something
    /// this crate escapes around.
    pub fn render_prompt(&self) -> String {
        let mut prompt = String::new();
        for turn in &self.turns {
            prompt.push_str(turn.role.speaker_label());
            prompt.push_str(": ");
            prompt.push_str(&turn.content);
            prompt.push('\n');
        }

        // Cue for the next speaker. An empty history cues the assistant,
        // matching the normal case where a user turn was just appended.
        let next = match self.turns.last() {
            Some(turn) => turn.role.next_speaker(),
            None => Role::Assistant,
        };
        prompt.push_str(next.speaker_label());
        prompt.push_str(": ");
        prompt
    }
}

impl IntoIterator for ConversationHistory {
    type Item = Turn;
    type IntoIter = std::vec::IntoIter<Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.into_iter()
    }
}
