//! slangc-spirv CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, compile one shader or a
//! directory, and exit non-zero when the compiler fails.

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
