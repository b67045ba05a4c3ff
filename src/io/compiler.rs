use std::process::ExitStatus;

use thiserror::Error;
use tracing::debug;

use crate::core::invocation::Invocation;

/// Errors raised while driving the external compiler
#[derive(Debug, Error)]
pub enum CompilerError {
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not create output directory {dir}: {source}")]
    OutputDir {
        dir: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} failed ({})", describe_code(.code))]
    Failed { program: String, code: Option<i32> },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Run the invocation and block until the compiler exits.
///
/// The output directory is created first. Compiler output is inherited.
pub fn run(invocation: &Invocation) -> Result<(), CompilerError> {
    if let Some(dir) = invocation.output_dir() {
        std::fs::create_dir_all(dir).map_err(|source| CompilerError::OutputDir {
            dir: dir.display().to_string(),
            source,
        })?;
    }

    debug!("Running: {}", invocation);
    let program = invocation.program.to_string_lossy().into_owned();
    let status = invocation
        .to_command()
        .status()
        .map_err(|source| CompilerError::Spawn {
            program: program.clone(),
            source,
        })?;

    check_status(&program, status)
}

fn check_status(program: &str, status: ExitStatus) -> Result<(), CompilerError> {
    if status.success() {
        Ok(())
    } else {
        Err(CompilerError::Failed {
            program: program.to_string(),
            code: status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::core::invocation::CompileRequest;
    use crate::core::params::CompileParams;
    use crate::types::ShaderStage;

    fn invocation(compiler: &str, output: PathBuf) -> Invocation {
        let request = CompileRequest {
            input: PathBuf::from("blur.cs.slang"),
            output,
            root: PathBuf::from("."),
            depfile: None,
        };
        Invocation::build(
            &request,
            ShaderStage::Compute,
            &CompileParams::default().with_compiler(compiler),
        )
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let inv = invocation(
            "slangc-spirv-test-no-such-program",
            dir.path().join("blur.cs.spv"),
        );
        let err = run(&inv).unwrap_err();
        assert!(matches!(err, CompilerError::Spawn { .. }));
        assert!(err.to_string().contains("slangc-spirv-test-no-such-program"));
    }

    #[cfg(unix)]
    #[test]
    fn creates_output_dir_and_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/deeper/blur.cs.spv");
        run(&invocation("true", out.clone())).unwrap();
        assert!(out.parent().unwrap().is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&invocation("false", dir.path().join("blur.cs.spv"))).unwrap_err();
        match err {
            CompilerError::Failed { program, code } => {
                assert_eq!(program, "false");
                assert_eq!(code, Some(1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn failure_message() {
        let err = CompilerError::Failed {
            program: "slangc".to_string(),
            code: Some(2),
        };
        assert_eq!(err.to_string(), "slangc failed (exit status 2)");
        let err = CompilerError::Failed {
            program: "slangc".to_string(),
            code: None,
        };
        assert_eq!(err.to_string(), "slangc failed (terminated by signal)");
    }
}
