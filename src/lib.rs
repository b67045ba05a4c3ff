#![doc = r#"
slangc-spirv — compile Slang shaders to SPIR-V by driving `slangc`.

The shader stage is taken from the file name: `blur.cs.slang` is a compute
shader, `mesh.vx.slang` a vertex shader and `lit.px.slang` a pixel shader.
Files whose names carry no recognized stage are skipped without running the
compiler. All real compilation work is done by the external compiler; this
crate only builds the command line and waits for it.

| code | profile  | output suffix |
|------|----------|---------------|
| `cs` | `cs_6_0` | `.cs.spv`     |
| `vx` | `vs_6_0` | `.vx.spv`     |
| `px` | `ps_6_0` | `.px.spv`     |

Compile one shader
------------------
```rust,no_run
use std::path::PathBuf;
use slangc_spirv::{compile_shader, CompileOutcome, CompileParams, CompileRequest};

fn main() -> slangc_spirv::Result<()> {
    let request = CompileRequest {
        input: PathBuf::from("shaders/blur.cs.slang"),
        output: PathBuf::from("build/shaders/blur.cs.spv"),
        root: PathBuf::from("shaders"),
        depfile: Some(PathBuf::from("build/shaders/blur.cs.spv.d")),
    };

    match compile_shader(&request, &CompileParams::default())? {
        CompileOutcome::Compiled { stage, output } => println!("{stage} -> {}", output.display()),
        CompileOutcome::Skipped { reason } => println!("skipped: {reason}"),
    }
    Ok(())
}
```

Compile a directory
-------------------
```rust,no_run
use std::path::Path;
use slangc_spirv::{compile_directory, CompileParams};

fn main() -> slangc_spirv::Result<()> {
    let report = compile_directory(
        Path::new("shaders"),
        Path::new("build/shaders"),
        Path::new("shaders"),
        &CompileParams::default(),
        true, // continue_on_error
    )?;
    println!("compiled={} skipped={} errors={}", report.compiled, report.skipped, report.errors);
    Ok(())
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — `ShaderStage` and the stage table.
- [`core`] — stage detection, parameters and command line construction.
- [`io`] — subprocess execution.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use core::invocation::{CompileRequest, Invocation};
pub use core::params::{CompileParams, DEFAULT_COMPILER};
pub use core::stage::detect_stage;
pub use error::{Error, Result};
pub use io::CompilerError;
pub use types::{STAGE_INFO, ShaderStage, StageInfo};

pub use api::{
    BatchReport, CompileOutcome, PlannedShader, batch_output_path, compile_directory,
    compile_shader, plan_directory, plan_shader,
};
