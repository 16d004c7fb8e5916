//! Conversation controller: input validation, dispatch to the backend,
//! response sequencing, and the error path.
//!
//! CONCURRENCY
//! ===========
//! Submissions are independent tasks spawned on the UI thread. There is no
//! cancellation and no de-duplication: racing responses append in whatever
//! order they complete. The transcript is an append-log, not a reordering
//! buffer.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use leptos::prelude::*;

use crate::error::ClientError;
use crate::glossary;
use crate::net::api::AnswerResponse;
use crate::state::conversation::{ConversationState, TranscriptEntry, validate_question};

/// Fixed pacing delay before a received answer is rendered. A UX decision,
/// independent of network latency.
pub const ANSWER_DELAY_MS: u64 = 500;

/// Copyable handle over the per-session conversation state and the
/// append-only transcript. Provided once via context in [`crate::app::App`].
#[derive(Clone, Copy)]
pub struct Controller {
    pub conversation: RwSignal<ConversationState>,
    pub entries: RwSignal<Vec<TranscriptEntry>>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    pub fn new() -> Self {
        Self {
            conversation: RwSignal::new(ConversationState::default()),
            entries: RwSignal::new(Vec::new()),
        }
    }

    /// Accept a question: assign the next ordinal, append the Question
    /// entry optimistically, and spawn the backend round trip.
    ///
    /// # Errors
    ///
    /// `ClientError::EmptyQuestion` when the text is empty after trimming;
    /// nothing is appended and the counter is untouched.
    pub fn submit(&self, question: &str) -> Result<(), ClientError> {
        validate_question(question)?;

        let mut ordinal = 0;
        self.conversation.update(|c| ordinal = c.next_ordinal());
        self.entries.update(|entries| {
            entries.push(TranscriptEntry::Question {
                ordinal,
                body: question.to_owned(),
            });
        });

        leptos::logging::log!("[Q{ordinal}] dispatched");

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(resolve(self.entries, ordinal, question.to_owned()));

        Ok(())
    }

    /// Error path for a failed chart slot. Scoped to that slot: the Answer
    /// entry and sibling slots stay as they are.
    pub fn chart_failed(&self, ordinal: u32, error: &ClientError) {
        leptos::logging::warn!("[A{ordinal}] chart failed: {error}");
        self.entries.update(|entries| entries.push(error_entry(ordinal, error)));
    }
}

/// Await the backend answer for one submission and append the outcome.
/// Runs to completion even if newer submissions finish first.
#[cfg(feature = "hydrate")]
async fn resolve(entries: RwSignal<Vec<TranscriptEntry>>, ordinal: u32, question: String) {
    match crate::net::api::fetch_answer(&question).await {
        Ok(resp) => {
            gloo_timers::future::sleep(std::time::Duration::from_millis(ANSWER_DELAY_MS)).await;
            entries.update(|entries| entries.push(answer_entry(ordinal, &resp)));
        }
        Err(err) => {
            leptos::logging::warn!("[Q{ordinal}] failed: {err}");
            entries.update(|entries| entries.push(error_entry(ordinal, &err)));
        }
    }
}

/// Build the Answer entry for a backend response, running the keyword
/// annotator over the answer text.
pub fn answer_entry(ordinal: u32, resp: &AnswerResponse) -> TranscriptEntry {
    TranscriptEntry::Answer {
        ordinal,
        body: glossary::annotate(&resp.answer),
        chart_count: resp.chart_count,
    }
}

/// Build the unlabeled Error entry for a failed operation. The failed
/// ordinal never gets a matching `[A]` line.
pub fn error_entry(ordinal: u32, error: &ClientError) -> TranscriptEntry {
    TranscriptEntry::Error {
        ordinal,
        body: error.to_string(),
    }
}
