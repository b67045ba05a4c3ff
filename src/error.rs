//! Crate-level error type and `Result` alias.
//! Wraps I/O, compiler and configuration failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Compiler error: {0}")]
    Compiler(#[from] crate::io::CompilerError),

    #[error("Invalid config {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
