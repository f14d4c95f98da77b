use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Events emitted by the conversation controller.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A message was appended to the log
    MessageAppended { message: Message },

    /// The pending/typing indicator flipped
    PendingChanged { pending: bool },

    /// The input buffer was replaced (typing, or cleared on submit)
    InputChanged { text: String },

    /// The suggestion panel was opened or closed
    SuggestionsToggled { open: bool },

    /// The log was discarded by "new chat"
    Cleared { conversation_id: String },

    /// A provider call failed; the error text was also appended as a message
    Error { message: String },
}
