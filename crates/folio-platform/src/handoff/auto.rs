//! Pick the best available handoff slot.
//!
//! Priority: localStorage → Memory (fallback)

use std::rc::Rc;
use folio_core::ports::HandoffPort;
use super::{LocalStorageHandoff, MemoryHandoff};

pub fn detect_handoff(key: &str) -> Rc<dyn HandoffPort> {
    match LocalStorageHandoff::open(key) {
        Ok(local) => {
            log::info!("Handoff backend: localStorage");
            Rc::new(local)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemoryHandoff::new())
        }
    }
}
