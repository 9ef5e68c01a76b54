pub mod index_error;
pub mod storage_error;
pub mod vote_error;

pub use index_error::IndexError;
pub use storage_error::StorageError;
pub use vote_error::VoteError;

/// Convenience alias used throughout the workspace.
pub type ConcordResult<T> = Result<T, ConcordError>;

/// Root error type. Transports map it through [`ConcordError::code`].
#[derive(Debug, thiserror::Error)]
pub enum ConcordError {
    #[error("word index unavailable: {0}")]
    IndexUnavailable(#[from] IndexError),

    #[error(transparent)]
    Vote(#[from] VoteError),

    #[error(
        "translation '{translated_word}' ({target_language}) already exists for word {source_word_id}"
    )]
    Conflict {
        source_word_id: String,
        target_language: String,
        translated_word: String,
    },

    #[error("invalid thresholds: {reason}")]
    InvalidThreshold { reason: String },

    #[error("invalid word record: {reason}")]
    InvalidWord { reason: String },

    #[error("word not found: {id}")]
    WordNotFound { id: String },

    #[error("translation not found: {id}")]
    TranslationNotFound { id: String },

    #[error("configuration error: {reason}")]
    Config { reason: String },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ConcordError {
    /// Stable machine-readable code for transports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::IndexUnavailable(_) => "INDEX_UNAVAILABLE",
            Self::Vote(VoteError::DuplicateVote { .. }) => "DUPLICATE_VOTE",
            Self::Vote(VoteError::SelfVote { .. }) => "SELF_VOTE",
            Self::Conflict { .. } => "CONFLICT",
            Self::InvalidThreshold { .. } => "INVALID_THRESHOLD",
            Self::InvalidWord { .. } => "INVALID_WORD",
            Self::WordNotFound { .. } => "WORD_NOT_FOUND",
            Self::TranslationNotFound { .. } => "TRANSLATION_NOT_FOUND",
            Self::Config { .. } => "CONFIG_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    pub fn is_duplicate_vote(&self) -> bool {
        matches!(self, Self::Vote(VoteError::DuplicateVote { .. }))
    }

    pub fn is_self_vote(&self) -> bool {
        matches!(self, Self::Vote(VoteError::SelfVote { .. }))
    }
}
