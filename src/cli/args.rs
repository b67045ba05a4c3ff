use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "slangc-spirv", version, about = "Compile Slang shaders to SPIR-V")]
pub struct CliArgs {
    /// Input shader file (.slang), e.g. blur.cs.slang
    #[arg(long, required_unless_present = "input_dir", conflicts_with = "input_dir")]
    pub input: Option<PathBuf>,

    /// Output SPIR-V file (.spv)
    #[arg(long, requires = "input")]
    pub output: Option<PathBuf>,

    /// Shader root directory; <root>/shared is added to the include path
    #[arg(long)]
    pub root: PathBuf,

    /// Optional depfile for incremental builds
    #[arg(long, requires = "input")]
    pub depfile: Option<PathBuf>,

    /// Directory of shaders to compile (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output directory for batch mode
    #[arg(long, requires = "input_dir")]
    pub output_dir: Option<PathBuf>,

    /// Batch mode: keep compiling after a shader fails
    #[arg(long, default_value_t = false)]
    pub keep_going: bool,

    /// Compiler executable to run instead of slangc
    #[arg(long, env = "SLANGC")]
    pub compiler: Option<String>,

    /// JSON file with compiler parameters
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the compiler command line instead of running it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
