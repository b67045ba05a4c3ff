//! Command Line Interface layer.
//!
//! Argument parsing (`args`), CLI error types (`errors`) and orchestration
//! (`runner`) for single-shader and directory runs. Build scripts that want
//! to compile shaders directly should use the library API instead.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
