//! JSON bodies exchanged with the answer endpoint.
//!
//! Request: `{ "question": "..." }`.
//! Success: `{ "answer": "..." }` (missing answer is treated as empty).
//! Failure: any non-2xx status, usually `{ "error": "<code>", "detail": "..." }`.

use serde::{Deserialize, Serialize};

use folio_types::{FolioError, Result};

/// Error code the endpoint uses when its own credential is missing
pub const CONFIGURATION_ERROR: &str = "configuration_error";

#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub question: &'a str,
}

#[derive(Debug, Deserialize)]
struct AskResponse {
    #[serde(default)]
    answer: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    detail: Option<String>,
}

/// Extract the answer from a 2xx body.
pub fn parse_answer(body: &str) -> Result<String> {
    let response: AskResponse = serde_json::from_str(body)?;
    Ok(response.answer.unwrap_or_default())
}

/// Turn a non-2xx response into an error.
pub fn classify_failure(status: u16, body: &str) -> FolioError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) if err.error == CONFIGURATION_ERROR => {
            FolioError::Config(err.detail.unwrap_or(err.error))
        }
        Ok(err) => FolioError::Provider {
            status,
            detail: match err.detail {
                Some(detail) if !detail.is_empty() => format!("{}: {}", err.error, detail),
                _ => err.error,
            },
        },
        Err(_) => {
            let text = body.trim();
            FolioError::Provider {
                status,
                detail: if text.is_empty() {
                    "unknown error".to_string()
                } else {
                    text.to_string()
                },
            }
        }
    }
}
