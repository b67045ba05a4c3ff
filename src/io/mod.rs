//! I/O layer: runs the external shader compiler as a blocking subprocess.
pub mod compiler;
pub use compiler::CompilerError;
