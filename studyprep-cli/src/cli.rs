// studyprep-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use studyprep_core::config::DEFAULT_OUTPUT_DIR;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Studyprep: prepares lecture videos for study-guide generation",
    long_about = "Copies a local video into a managed workspace and extracts a low-bitrate \
                  audio track plus periodic frame captures using ffmpeg."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prepares a local video: working copy, audio track and frame captures
    Prepare(PrepareArgs),
    /// Probes a video and prints the sampling plan without writing anything
    Plan(PlanArgs),
}

/// Sampling overrides. Unset flags fall back to MAX_IMAGENES /
/// INTERVALO_DESEADO, then to the built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct SamplingArgs {
    /// Maximum number of frame captures
    #[arg(long, value_name = "COUNT", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_frames: Option<u32>,

    /// Desired seconds between frame captures
    #[arg(long, value_name = "SECONDS", value_parser = parse_interval)]
    pub interval: Option<f64>,
}

#[derive(Parser, Debug)]
pub struct PrepareArgs {
    /// Local video file. Prompted for interactively when omitted
    #[arg(value_name = "INPUT_PATH")]
    pub input_path: Option<PathBuf>,

    /// Workspace root for the working copy, audio and frames
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub sampling: SamplingArgs,

    /// Print the result as JSON instead of a summary
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Local video file
    #[arg(required = true, value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    #[command(flatten)]
    pub sampling: SamplingArgs,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

fn parse_interval(value: &str) -> Result<f64, String> {
    let secs: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if secs.is_finite() && secs > 0.0 {
        Ok(secs)
    } else {
        Err(format!("interval must be greater than zero, got {value}"))
    }
}
