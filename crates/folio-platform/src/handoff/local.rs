//! `localStorage` handoff.
//! Survives a reload between the landing page and the chat view.

use folio_core::ports::HandoffPort;
use folio_types::{FolioError, Result};
use web_sys::Storage;

pub struct LocalStorageHandoff {
    key: String,
    storage: Storage,
}

impl LocalStorageHandoff {
    /// Open the window's `localStorage`. Fails outside a browser or when
    /// storage is disabled.
    pub fn open(key: impl Into<String>) -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| FolioError::JsInterop("No window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| FolioError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| FolioError::Storage("localStorage not available".to_string()))?;
        Ok(Self {
            key: key.into(),
            storage,
        })
    }
}

impl HandoffPort for LocalStorageHandoff {
    fn put(&self, question: &str) -> Result<()> {
        self.storage
            .set_item(&self.key, question)
            .map_err(|e| FolioError::Storage(format!("{:?}", e)))
    }

    fn take(&self) -> Result<Option<String>> {
        let value = self
            .storage
            .get_item(&self.key)
            .map_err(|e| FolioError::Storage(format!("{:?}", e)))?;
        if value.is_some() {
            self.storage
                .remove_item(&self.key)
                .map_err(|e| FolioError::Storage(format!("{:?}", e)))?;
        }
        Ok(value)
    }
}
