use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_COMPILER: &str = "slangc";

/// Compiler settings suitable for config files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileParams {
    /// Program to execute; resolved through `PATH` when not absolute
    pub compiler: String,
    /// Value passed to `-target`
    pub target: String,
    /// Value passed to `-entry`
    pub entry: String,
    /// Subdirectory of the shader root added as the first include path
    pub shared_include: String,
    pub extra_includes: Vec<PathBuf>,
    /// Raw arguments placed right before `-o`
    pub extra_args: Vec<String>,
}

impl Default for CompileParams {
    fn default() -> Self {
        Self {
            compiler: DEFAULT_COMPILER.to_string(),
            target: "spirv".to_string(),
            entry: "main".to_string(),
            shared_include: "shared".to_string(),
            extra_includes: Vec::new(),
            extra_args: Vec::new(),
        }
    }
}

impl CompileParams {
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| Error::Config {
            path: origin.to_string(),
            source,
        })
    }

    /// Load parameters from a JSON file; absent keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json, &path.display().to_string())
    }

    pub fn with_compiler(mut self, compiler: impl Into<String>) -> Self {
        self.compiler = compiler.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let params =
            CompileParams::from_json_str(r#"{ "compiler": "/opt/slang/bin/slangc" }"#, "inline")
                .unwrap();
        assert_eq!(params.compiler, "/opt/slang/bin/slangc");
        assert_eq!(params.target, "spirv");
        assert_eq!(params.entry, "main");
        assert_eq!(params.shared_include, "shared");
        assert!(params.extra_includes.is_empty());
    }

    #[test]
    fn invalid_json_names_its_origin() {
        let err = CompileParams::from_json_str("{ entry: ", "shaders.json").unwrap_err();
        assert!(matches!(err, Error::Config { ref path, .. } if path == "shaders.json"));
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        std::fs::write(
            &path,
            r#"{ "entry": "csMain", "extra_args": ["-O3"], "extra_includes": ["third_party"] }"#,
        )
        .unwrap();
        let params = CompileParams::from_json_file(&path).unwrap();
        assert_eq!(params.entry, "csMain");
        assert_eq!(params.extra_args, vec!["-O3".to_string()]);
        assert_eq!(params.extra_includes, vec![PathBuf::from("third_party")]);
        assert_eq!(params.compiler, DEFAULT_COMPILER);
    }
}
