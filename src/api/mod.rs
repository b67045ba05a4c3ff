//! High-level library API: compile one shader or a directory of shaders.
//! Prefer these entrypoints over the `core` and `io` primitives when
//! embedding the compiler driver, e.g. from a `build.rs`.
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::invocation::{CompileRequest, Invocation};
use crate::core::params::CompileParams;
use crate::core::stage::{detect_stage, file_label, shader_stem};
use crate::error::Result;
use crate::io::compiler;
use crate::types::ShaderStage;

/// What happened to a single shader
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    Compiled { stage: ShaderStage, output: PathBuf },
    /// File name does not encode a known stage; nothing was run
    Skipped { reason: String },
}

/// Counters for a directory run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub compiled: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Resolve the compiler invocation for a shader, or `None` when its name
/// carries no recognized stage.
pub fn plan_shader(request: &CompileRequest, params: &CompileParams) -> Option<Invocation> {
    let stage = detect_stage(&request.input)?;
    Some(Invocation::build(request, stage, params))
}

/// Compile a single shader, blocking until the compiler exits.
pub fn compile_shader(request: &CompileRequest, params: &CompileParams) -> Result<CompileOutcome> {
    let Some(invocation) = plan_shader(request, params) else {
        let name = file_label(&request.input);
        info!("[Skip] Unknown stage in: {}", name);
        return Ok(CompileOutcome::Skipped {
            reason: format!("unknown stage in {}", name),
        });
    };

    info!("[Slang] {} -> {}", invocation.stage, invocation.output.display());
    compiler::run(&invocation)?;

    Ok(CompileOutcome::Compiled {
        stage: invocation.stage,
        output: invocation.output,
    })
}

/// Output path for a shader compiled in directory mode:
/// `<output_dir>/<stem><stage suffix>`.
pub fn batch_output_path(input: &Path, output_dir: &Path) -> Option<PathBuf> {
    let stage = detect_stage(input)?;
    let stem = shader_stem(input)?;
    Some(output_dir.join(format!("{}{}", stem, stage.output_suffix())))
}

/// Regular files directly inside `input_dir`, in file name order.
fn shader_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = std::fs::read_dir(input_dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();
    entries.retain(|path| {
        if path.is_dir() {
            debug!("Ignoring directory: {:?}", path);
            return false;
        }
        true
    });
    Ok(entries)
}

/// One entry of a directory plan: a compiler invocation, or a file that
/// would be skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedShader {
    Compile(Invocation),
    Skip(PathBuf),
}

/// Resolve what `compile_directory` would do for each file, without running
/// anything or creating `output_dir`.
pub fn plan_directory(
    input_dir: &Path,
    output_dir: &Path,
    root: &Path,
    params: &CompileParams,
) -> Result<Vec<PlannedShader>> {
    let plans = shader_files(input_dir)?
        .into_iter()
        .map(|path| {
            let Some(output) = batch_output_path(&path, output_dir) else {
                return PlannedShader::Skip(path);
            };
            let request = CompileRequest {
                input: path.clone(),
                output,
                root: root.to_path_buf(),
                depfile: None,
            };
            match plan_shader(&request, params) {
                Some(invocation) => PlannedShader::Compile(invocation),
                None => PlannedShader::Skip(path),
            }
        })
        .collect();
    Ok(plans)
}

/// Compile every shader file directly inside `input_dir` into `output_dir`.
///
/// Entries are visited in file name order and subdirectories are ignored.
/// Files without a recognized stage are skipped. With `continue_on_error` a
/// failing shader is counted and the run goes on; otherwise the first
/// failure is returned.
pub fn compile_directory(
    input_dir: &Path,
    output_dir: &Path,
    root: &Path,
    params: &CompileParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    let plans = plan_directory(input_dir, output_dir, root, params)?;

    std::fs::create_dir_all(output_dir)?;
    info!("Compiling shaders from {:?} into {:?}", input_dir, output_dir);

    let mut report = BatchReport::default();
    for plan in plans {
        let invocation = match plan {
            PlannedShader::Compile(invocation) => invocation,
            PlannedShader::Skip(path) => {
                info!("[Skip] Unknown stage in: {}", file_label(&path));
                report.skipped += 1;
                continue;
            }
        };

        info!("[Slang] {} -> {}", invocation.stage, invocation.output.display());
        match compiler::run(&invocation) {
            Ok(()) => report.compiled += 1,
            Err(e) if continue_on_error => {
                warn!("Error compiling {}: {}", invocation.output.display(), e);
                report.errors += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!(
        "Done: compiled={} skipped={} errors={}",
        report.compiled, report.skipped, report.errors
    );
    Ok(report)
}
