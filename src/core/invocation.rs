//! Construction of a single compiler command line.
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::core::params::CompileParams;
use crate::types::ShaderStage;

/// Paths describing one shader to compile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Shader root; `<root>/<shared_include>` becomes the first include path
    pub root: PathBuf,
    pub depfile: Option<PathBuf>,
}

/// A fully resolved compiler invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub stage: ShaderStage,
    pub output: PathBuf,
}

impl Invocation {
    pub fn build(request: &CompileRequest, stage: ShaderStage, params: &CompileParams) -> Self {
        let mut args: Vec<OsString> = vec![request.input.clone().into_os_string()];

        args.push("-I".into());
        args.push(request.root.join(&params.shared_include).into_os_string());
        for include in &params.extra_includes {
            args.push("-I".into());
            args.push(include.clone().into_os_string());
        }

        args.push("-target".into());
        args.push(params.target.clone().into());
        args.push("-profile".into());
        args.push(stage.profile().into());
        args.push("-entry".into());
        args.push(params.entry.clone().into());
        args.extend(params.extra_args.iter().map(OsString::from));

        args.push("-o".into());
        args.push(request.output.clone().into_os_string());

        if let Some(depfile) = &request.depfile {
            args.push("-depfile".into());
            args.push(depfile.clone().into_os_string());
        }

        Self {
            program: params.compiler.clone().into(),
            args,
            stage,
            output: request.output.clone(),
        }
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output.parent().filter(|p| !p.as_os_str().is_empty())
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", quoted(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quoted(arg))?;
        }
        Ok(())
    }
}

fn quoted(arg: &OsStr) -> String {
    let s = arg.to_string_lossy();
    if !s.is_empty() && !s.contains(|c: char| c.is_whitespace() || c == '\'' || c == '"') {
        s.into_owned()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}
