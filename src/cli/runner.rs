use tracing::info;
use tracing_subscriber::EnvFilter;

use slangc_spirv::core::stage::file_label;
use slangc_spirv::{
    CompileOutcome, CompileParams, CompileRequest, PlannedShader, compile_directory,
    compile_shader, plan_directory, plan_shader,
};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be set when embedded; ignore that case.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Config file first, then the `--compiler` / `SLANGC` override.
fn resolve_params(args: &CliArgs) -> Result<CompileParams, AppError> {
    let params = match &args.config {
        Some(path) => CompileParams::from_json_file(path)?,
        None => CompileParams::default(),
    };
    Ok(match &args.compiler {
        Some(compiler) => params.with_compiler(compiler.clone()),
        None => params,
    })
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.verbose);
    let params = resolve_params(&args)?;

    if let Some(input_dir) = args.input_dir {
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        if args.dry_run {
            for plan in plan_directory(&input_dir, &output_dir, &args.root, &params)? {
                match plan {
                    PlannedShader::Compile(invocation) => println!("{}", invocation),
                    PlannedShader::Skip(path) => {
                        info!("[Skip] Unknown stage in: {}", file_label(&path))
                    }
                }
            }
            return Ok(());
        }

        let report = compile_directory(
            &input_dir,
            &output_dir,
            &args.root,
            &params,
            args.keep_going,
        )?;
        if report.errors > 0 {
            return Err(AppError::BatchFailed {
                errors: report.errors,
            }
            .into());
        }
        return Ok(());
    }

    let input = args.input.ok_or(AppError::MissingArgument {
        arg: "--input".to_string(),
    })?;
    let output = args.output.ok_or(AppError::MissingArgument {
        arg: "--output".to_string(),
    })?;
    let request = CompileRequest {
        input,
        output,
        root: args.root,
        depfile: args.depfile,
    };

    if args.dry_run {
        match plan_shader(&request, &params) {
            Some(invocation) => println!("{}", invocation),
            None => info!("[Skip] Unknown stage in: {}", file_label(&request.input)),
        }
        return Ok(());
    }

    match compile_shader(&request, &params).map_err(AppError::from)? {
        CompileOutcome::Compiled { output, .. } => info!("Compiled {:?}", output),
        CompileOutcome::Skipped { .. } => {}
    }
    Ok(())
}
