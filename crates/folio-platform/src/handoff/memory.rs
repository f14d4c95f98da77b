//! In-memory handoff.
//! Only survives within one page load; used when web storage is blocked.

use std::cell::RefCell;
use folio_core::ports::HandoffPort;
use folio_types::Result;

pub struct MemoryHandoff {
    slot: RefCell<Option<String>>,
}

impl MemoryHandoff {
    pub fn new() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }
}

impl Default for MemoryHandoff {
    fn default() -> Self {
        Self::new()
    }
}

impl HandoffPort for MemoryHandoff {
    fn put(&self, question: &str) -> Result<()> {
        *self.slot.borrow_mut() = Some(question.to_string());
        Ok(())
    }

    fn take(&self) -> Result<Option<String>> {
        Ok(self.slot.borrow_mut().take())
    }
}
