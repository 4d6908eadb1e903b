use thiserror::Error;

/// Conditions that abort the run with a dedicated exit status.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("{0} environment variable must be set")]
    MissingWebhook(&'static str),
    #[error("Could not find the internship section in the document")]
    SectionNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FatalError {
    pub fn exit_code(&self) -> u8 {
        match self {
            FatalError::MissingWebhook(_) => 2,
            FatalError::SectionNotFound | FatalError::Other(_) => 1,
        }
    }
}
