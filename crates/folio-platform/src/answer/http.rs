//! HTTP answer provider.
//!
//! POSTs the question to the site's own endpoint, which holds the model
//! credential server-side. Uses browser `fetch()` via gloo-net.

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use folio_core::ports::AnswerPort;
use folio_types::{config::AnswerConfig, FolioError, Result};

use super::wire::{classify_failure, parse_answer, AskRequest};

pub struct HttpAnswerProvider {
    config: AnswerConfig,
}

impl HttpAnswerProvider {
    pub fn new(config: AnswerConfig) -> Self {
        Self { config }
    }

    async fn post(&self, question: &str) -> Result<String> {
        let abort = AbortOnDrop::new()?;

        let response = Request::post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .abort_signal(Some(&abort.0.signal()))
            .json(&AskRequest { question })
            .map_err(|e| FolioError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| FolioError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FolioError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(classify_failure(status, &body));
        }
        parse_answer(&body)
    }
}

#[async_trait(?Send)]
impl AnswerPort for HttpAnswerProvider {
    async fn ask(&self, question: &str) -> Result<String> {
        let timeout_ms = self.config.timeout_ms;
        let timeout = TimeoutFuture::new(timeout_ms.min(u32::MAX as u64) as u32);

        match future::select(Box::pin(self.post(question)), Box::pin(timeout)).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => {
                log::warn!("{} timed out after {}ms", self.config.endpoint, timeout_ms);
                Err(FolioError::Timeout(timeout_ms))
            }
        }
    }

    fn provider_name(&self) -> &str {
        &self.config.endpoint
    }
}

/// Aborts the fetch when the request future is dropped early
/// (timeout, or the controller cancelling the call).
struct AbortOnDrop(web_sys::AbortController);

impl AbortOnDrop {
    fn new() -> Result<Self> {
        web_sys::AbortController::new()
            .map(Self)
            .map_err(|e| FolioError::JsInterop(format!("{:?}", e)))
    }
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}
