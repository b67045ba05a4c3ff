use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("{errors} shader(s) failed to compile")]
    BatchFailed { errors: usize },

    #[error(transparent)]
    Library(#[from] slangc_spirv::Error),
}
