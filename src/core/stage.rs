use std::path::Path;

use crate::types::ShaderStage;

/// Infer the shader stage from a `name.<code>.<ext>` file name.
///
/// The code is the second-to-last dot-separated component of the final path
/// component, and the name needs at least three components. Anything else,
/// or an unknown code, yields `None`.
pub fn detect_stage(path: &Path) -> Option<ShaderStage> {
    let name = path.file_name()?.to_str()?;
    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() < 3 {
        return None;
    }
    ShaderStage::from_code(parts[parts.len() - 2])
}

/// Leading component of a file name, used to name batch outputs.
pub fn shader_stem(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.split('.').next().filter(|s| !s.is_empty())
}

/// Bare file name for log lines, falling back to the whole path.
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(name: &str) -> Option<ShaderStage> {
        detect_stage(Path::new(name))
    }

    #[test]
    fn double_suffix_names() {
        assert_eq!(stage("blur.cs.slang"), Some(ShaderStage::Compute));
        assert_eq!(stage("mesh.vx.slang"), Some(ShaderStage::Vertex));
        assert_eq!(stage("lit.px.spv"), Some(ShaderStage::Pixel));
        assert_eq!(stage("shaders/post/tone.map.px.slang"), Some(ShaderStage::Pixel));
    }

    #[test]
    fn only_file_name_is_inspected() {
        assert_eq!(stage("shaders/x.cs/plain.slang"), None);
        assert_eq!(stage("a.vx.b/fog.cs.slang"), Some(ShaderStage::Compute));
    }

    #[test]
    fn unrecognized_names() {
        assert_eq!(stage("shader.slang"), None);
        assert_eq!(stage("cs.slang"), None);
        assert_eq!(stage("geo.gs.slang"), None);
        assert_eq!(stage("blur.CS.slang"), None);
        assert_eq!(stage("blur.slang.cs"), None);
        assert_eq!(stage(""), None);
    }

    #[test]
    fn empty_components_still_count() {
        assert_eq!(stage(".cs.slang"), Some(ShaderStage::Compute));
        assert_eq!(stage("x.px."), Some(ShaderStage::Pixel));
    }

    #[test]
    fn stems() {
        assert_eq!(shader_stem(Path::new("dir/blur.cs.slang")), Some("blur"));
        assert_eq!(shader_stem(Path::new(".cs.slang")), None);
    }

    #[test]
    fn labels() {
        assert_eq!(file_label(Path::new("shaders/post/common.slang")), "common.slang");
        assert_eq!(file_label(Path::new("..")), "..");
    }
}
