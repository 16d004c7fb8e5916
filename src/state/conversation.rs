#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use crate::error::ClientError;

/// Per-session conversation state: the question counter and the shrinking
/// empty-state placeholder. Created once at session start, in-memory only.
#[derive(Clone, Debug, Default)]
pub struct ConversationState {
    pub question_count: u32,
    pub placeholder: Placeholder,
}

impl ConversationState {
    /// Increment the question counter and return the ordinal assigned to
    /// the new question. Monotonic; never rolled back on failure.
    pub fn next_ordinal(&mut self) -> u32 {
        self.question_count += 1;
        self.question_count
    }
}

/// The `.null` empty-state region. It shrinks by the transcript's scroll
/// overflow on every append and latches inactive once it reaches zero.
#[derive(Clone, Debug)]
pub struct Placeholder {
    remaining: Option<f64>,
    active: bool,
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            remaining: None,
            active: true,
        }
    }
}

impl Placeholder {
    /// Record the initial placeholder height. First measurement wins;
    /// later calls are ignored.
    pub fn measure(&mut self, height: f64) {
        if self.remaining.is_none() {
            self.remaining = Some(height.max(0.0));
        }
    }

    /// Shrink by `overflow` pixels. Once remaining reaches zero the
    /// placeholder is clamped and deactivated forever (one-way latch).
    pub fn absorb(&mut self, overflow: f64) {
        if !self.active {
            return;
        }
        let Some(remaining) = self.remaining else {
            return;
        };
        let next = remaining - overflow;
        if next <= 0.0 {
            self.remaining = Some(0.0);
            self.active = false;
        } else {
            self.remaining = Some(next);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Inline height to apply to the placeholder element, `None` until the
    /// region has been measured.
    pub fn css_height(&self) -> Option<String> {
        self.remaining.map(|r| format!("{r}px"))
    }
}

/// One entry in the append-only transcript. Entries are never mutated
/// after creation.
#[derive(Clone, Debug, PartialEq)]
pub enum TranscriptEntry {
    Question {
        ordinal: u32,
        body: String,
    },
    /// `body` may contain the annotator's inline markup.
    Answer {
        ordinal: u32,
        body: String,
        chart_count: u32,
    },
    /// Carries the ordinal of the question that failed, but renders
    /// unlabeled: a failed question never gets an `[A]` line.
    Error {
        ordinal: u32,
        body: String,
    },
}

impl TranscriptEntry {
    pub fn ordinal(&self) -> u32 {
        match self {
            Self::Question { ordinal, .. } | Self::Answer { ordinal, .. } | Self::Error { ordinal, .. } => *ordinal,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Self::Question { body, .. } | Self::Answer { body, .. } | Self::Error { body, .. } => body,
        }
    }

    /// CSS class tagging the entry kind.
    pub fn kind_class(&self) -> &'static str {
        match self {
            Self::Question { .. } => "question",
            Self::Answer { .. } => "answer",
            Self::Error { .. } => "answer-error",
        }
    }

    /// Visible label prefix: `[Q<n>]：` / `[A<n>]：`. Errors have none.
    pub fn label(&self) -> Option<String> {
        match self {
            Self::Question { ordinal, .. } => Some(format!("[Q{ordinal}]：")),
            Self::Answer { ordinal, .. } => Some(format!("[A{ordinal}]：")),
            Self::Error { .. } => None,
        }
    }
}

/// Reject questions that are empty after trimming. The raw text is what
/// gets dispatched to the backend on success.
pub fn validate_question(question: &str) -> Result<(), ClientError> {
    if question.trim().is_empty() {
        Err(ClientError::EmptyQuestion)
    } else {
        Ok(())
    }
}
