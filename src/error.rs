//! Error taxonomy for the chat client.
//!
//! Every failure is terminal for the operation that raised it: validation
//! blocks a submission, backend and chart failures become transcript error
//! entries. None of them is fatal to the session.

/// Client-side error cases surfaced to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The question was empty after trimming. Shown as a modal alert;
    /// no transcript entry is created.
    #[error("问题输入不可为空")]
    EmptyQuestion,

    /// The `/send` round trip failed. The detail is appended to the
    /// transcript verbatim; no retry.
    #[error("请求失败：{0}")]
    Backend(String),

    /// A single chart slot failed to load. Scoped to that slot only.
    #[error("图表 {index} 加载失败：{detail}")]
    Chart { index: u32, detail: String },
}
