#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use uuid::Uuid;

use crate::net::types::ChatTurn;

/// Who authored a chat entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Role name used in the conversation history payload.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single rendered chat entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatEntry {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
}

/// State for the floating career-assistant widget.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub open: bool,
    pub entries: Vec<ChatEntry>,
    /// True while a reply is pending; sending is disabled meanwhile.
    pub busy: bool,
}

impl ChatState {
    /// Append an entry authored by `role`.
    pub fn push(&mut self, role: ChatRole, text: String) {
        self.entries.push(ChatEntry {
            id: Uuid::new_v4().to_string(),
            role,
            text,
        });
    }

    /// Prior turns as the backend expects them, oldest first.
    ///
    /// Called before the outgoing message is pushed; the backend receives
    /// that message in its own field, not as part of the history.
    pub fn history_payload(&self) -> Vec<ChatTurn> {
        self.entries
            .iter()
            .map(|entry| ChatTurn {
                role: entry.role.wire_name().to_owned(),
                content: entry.text.clone(),
            })
            .collect()
    }
}
