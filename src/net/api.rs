//! HTTP helpers for the QA backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs; failure details are carried verbatim into
//! transcript error entries, so messages stay human-readable rather than
//! becoming panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::ClientError;

/// Response of `GET /send`.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
    #[serde(default)]
    pub chart_count: u32,
}

/// Ask the backend a question via `GET /send?question=...`.
///
/// # Errors
///
/// Returns `ClientError::Backend` with the status line or transport
/// detail when the round trip fails.
pub async fn fetch_answer(question: &str) -> Result<AnswerResponse, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/send")
            .query([("question", question)])
            .send()
            .await
            .map_err(|e| ClientError::Backend(e.to_string()))?;
        if !resp.ok() {
            return Err(ClientError::Backend(format!(
                "{} {}",
                resp.status(),
                resp.status_text()
            )));
        }
        resp.json::<AnswerResponse>()
            .await
            .map_err(|e| ClientError::Backend(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = question;
        Err(ClientError::Backend("not available on server".to_owned()))
    }
}

/// Fetch one chart-option document via `GET /chart?chart_index=...`.
///
/// The body is returned as raw JSON text: its shape belongs to the
/// charting surface, not to this client.
///
/// # Errors
///
/// Returns `ClientError::Chart` scoped to the requested index.
pub async fn fetch_chart(index: u32) -> Result<String, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let chart_err = |detail: String| ClientError::Chart { index, detail };
        let resp = gloo_net::http::Request::get("/chart")
            .query([("chart_index", index.to_string())])
            .send()
            .await
            .map_err(|e| chart_err(e.to_string()))?;
        if !resp.ok() {
            return Err(chart_err(format!("{} {}", resp.status(), resp.status_text())));
        }
        resp.text().await.map_err(|e| chart_err(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ClientError::Chart {
            index,
            detail: "not available on server".to_owned(),
        })
    }
}
