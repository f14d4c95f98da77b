//! Port traits: the boundary between the core and the browser.
//!
//! Implementations live in `folio-platform`; the core only sees these traits.

use async_trait::async_trait;
use folio_types::Result;

// ─── Answer Port ─────────────────────────────────────────────

/// The hosted model that answers free-form questions about the site owner.
#[async_trait(?Send)]
pub trait AnswerPort {
    /// Send one question and return the answer text.
    /// An empty string means the provider had nothing to say.
    async fn ask(&self, question: &str) -> Result<String>;

    /// Name of this provider (for logging/debug)
    fn provider_name(&self) -> &str;
}

// ─── Handoff Port ────────────────────────────────────────────

/// One-shot slot carrying the landing page's question into the chat view.
pub trait HandoffPort {
    /// Store the question, replacing any previous one.
    fn put(&self, question: &str) -> Result<()>;

    /// Read and clear the stored question.
    fn take(&self) -> Result<Option<String>>;
}
