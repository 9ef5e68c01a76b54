/// Translation/vote store failures.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("store backend failure: {message}")]
    Backend { message: String },

    #[error("store lock poisoned: {resource}")]
    Poisoned { resource: String },
}
