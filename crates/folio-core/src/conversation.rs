//! Conversation state as a plain value.
//!
//! The message log and the transient UI flags live in one
//! [`ConversationState`]. Every transition goes through
//! [`ConversationState::apply`], a pure function, so the controller's
//! behaviour can be checked without a UI or a provider.

use folio_types::message::{Message, MessageId, NewMessage};

/// A state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetInput(String),
    OpenSuggestions,
    CloseSuggestions,
    /// Append a message; the log assigns its id.
    Append(NewMessage),
    BeginPending,
    EndPending,
    /// Discard the log and transient flags, rotating the conversation id.
    Reset { conversation_id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversationState {
    pub conversation_id: String,
    pub messages: Vec<Message>,
    pub input: String,
    pub suggestions_open: bool,
    pub pending: bool,
    /// Next id to hand out. Survives resets so ids are never reused.
    next_id: u64,
}

impl ConversationState {
    pub fn new(conversation_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            messages: Vec::new(),
            input: String::new(),
            suggestions_open: false,
            pending: false,
            next_id: 1,
        }
    }

    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::SetInput(text) => self.input = text,
            Action::OpenSuggestions => self.suggestions_open = true,
            Action::CloseSuggestions => self.suggestions_open = false,
            Action::Append(draft) => {
                let id = MessageId(self.next_id);
                self.next_id += 1;
                self.messages.push(draft.into_message(id));
            }
            Action::BeginPending => self.pending = true,
            Action::EndPending => self.pending = false,
            Action::Reset { conversation_id } => {
                let next_id = self.next_id;
                self = Self::new(conversation_id);
                self.next_id = next_id;
            }
        }
        self
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new(String::new())
    }
}
