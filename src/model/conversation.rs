use crate::model::message::{ChatMessage, Role};

/// Ordered chat history for one city session.
///
/// Index 0 always holds the system instruction. Entries are only ever
/// removed by [`Conversation::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::system(system_prompt)],
        }
    }

    /// Drop the whole history and start over from a single system entry.
    pub fn reset(&mut self, system_prompt: impl Into<String>) {
        self.messages.clear();
        self.messages.push(ChatMessage::system(system_prompt));
    }

    /// Rewrite the system entry in place. Later entries are untouched.
    pub fn refresh_system_prompt(&mut self, system_prompt: impl Into<String>) {
        self.messages[0].content = system_prompt.into();
    }

    pub fn append_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::user(text));
    }

    pub fn append_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(text));
    }

    pub fn system_prompt(&self) -> &str {
        &self.messages[0].content
    }

    /// Full history, system entry included. This is what gets sent.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The part of the history shown in the chat view.
    pub fn visible(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().filter(|m| m.role != Role::System)
    }

    /// Number of user and assistant entries.
    pub fn turn_count(&self) -> usize {
        self.messages.len() - 1
    }
}
