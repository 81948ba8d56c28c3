pub type Result<T> = std::result::Result<T, Error>;

/// Failures abort the run immediately; no retry, no partial-result
/// salvage.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("trainer: {0}")]
    Trainer(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn trainer(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Trainer(Box::new(err))
    }

    pub fn trainer_msg(msg: impl Into<String>) -> Self {
        Self::Trainer(msg.into().into())
    }
}
