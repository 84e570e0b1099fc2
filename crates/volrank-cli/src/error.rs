use thiserror::Error;
use volrank_core::PipelineError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] volrank_core::ValidationError),

    #[error(transparent)]
    Source(#[from] volrank_core::SourceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<PipelineError> for CliError {
    fn from(error: PipelineError) -> Self {
        match error {
            PipelineError::Validation(error) => Self::Validation(error),
            PipelineError::Source(error) => Self::Source(error),
        }
    }
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Source(_) => 3,
            Self::Io(_) => 10,
        }
    }
}
