/// Failures reported by the external word index.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("index backend unreachable: {reason}")]
    Unreachable { reason: String },

    #[error("index lookup timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("index returned a malformed response: {reason}")]
    MalformedResponse { reason: String },
}
