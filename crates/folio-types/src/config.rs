use serde::{Deserialize, Serialize};

use crate::profile::Profile;

/// Top-level site configuration.
///
/// Every section has defaults, so a JSON override only needs the
/// fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FolioConfig {
    pub answer: AnswerConfig,
    pub palette: PaletteConfig,
    pub handoff: HandoffConfig,
    pub profile: Profile,
}

impl FolioConfig {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Where free-form questions are sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerConfig {
    /// POST endpoint taking `{ "question": .. }` and returning `{ "answer": .. }`
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/ask".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// Geometry of the command palette, in logical pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub row_height: f32,
    pub max_rows: usize,
    /// Never shrink the panel below this many rows
    pub min_rows: usize,
    /// Space between the anchor and the panel
    pub gap: f32,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            row_height: 40.0,
            max_rows: 7,
            min_rows: 1,
            gap: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandoffConfig {
    /// Browser storage key holding the landing page's question
    pub storage_key: String,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            storage_key: "initialQuery".to_string(),
        }
    }
}
