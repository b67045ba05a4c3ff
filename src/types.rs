//! Shared types used across the crate.
//! `ShaderStage` and the static stage table that maps a two-letter file name
//! code to its compiler profile and output suffix.
use serde::{Deserialize, Serialize};

/// One row of the stage table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageInfo {
    pub stage: ShaderStage,
    /// Code embedded in file names, e.g. `blur.cs.slang`
    pub code: &'static str,
    /// Value passed to `-profile`
    pub profile: &'static str,
    /// Suffix of the compiled artifact
    pub suffix: &'static str,
}

pub static STAGE_INFO: [StageInfo; 3] = [
    StageInfo {
        stage: ShaderStage::Compute,
        code: "cs",
        profile: "cs_6_0",
        suffix: ".cs.spv",
    },
    StageInfo {
        stage: ShaderStage::Vertex,
        code: "vx",
        profile: "vs_6_0",
        suffix: ".vx.spv",
    },
    StageInfo {
        stage: ShaderStage::Pixel,
        code: "px",
        profile: "ps_6_0",
        suffix: ".px.spv",
    },
];

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShaderStage {
    Compute,
    Vertex,
    Pixel,
}

impl ShaderStage {
    pub fn info(self) -> &'static StageInfo {
        match self {
            ShaderStage::Compute => &STAGE_INFO[0],
            ShaderStage::Vertex => &STAGE_INFO[1],
            ShaderStage::Pixel => &STAGE_INFO[2],
        }
    }

    /// Exact, case-sensitive lookup of a file name code.
    pub fn from_code(code: &str) -> Option<Self> {
        STAGE_INFO
            .iter()
            .find(|info| info.code == code)
            .map(|info| info.stage)
    }

    pub fn code(self) -> &'static str {
        self.info().code
    }

    pub fn profile(self) -> &'static str {
        self.info().profile
    }

    pub fn output_suffix(self) -> &'static str {
        self.info().suffix
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code().to_uppercase())
    }
}
