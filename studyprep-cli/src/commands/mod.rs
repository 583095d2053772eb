//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command. Helpers
//! shared by both commands (configuration resolution, the interactive input
//! prompt) live here.

pub mod plan;
pub mod prepare;

use crate::cli::SamplingArgs;
use crate::error::{CliErrorContext, CliResult};

use studyprep_core::{CoreConfig, CoreConfigBuilder};

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use log::debug;

/// Resolves the core configuration: environment first, then CLI flags.
pub fn resolve_config(output_dir: &Path, sampling: &SamplingArgs) -> CliResult<CoreConfig> {
    let mut builder = CoreConfigBuilder::from_config(CoreConfig::from_env(output_dir.to_path_buf()));

    if let Some(max_frames) = sampling.max_frames {
        builder = builder.max_frames(max_frames as usize);
    }
    if let Some(interval) = sampling.interval {
        builder = builder.desired_interval_secs(interval);
    }

    let config = builder.build();
    config.validate()?;
    debug!(
        "Sampling bounds: interval {}s, at most {} frames",
        config.desired_interval_secs, config.max_frames
    );
    Ok(config)
}

/// Trims whitespace and one layer of surrounding quotes, as left behind when
/// a file is dragged into a terminal.
pub fn clean_input_path(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| trimmed.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(trimmed);
    unquoted.trim().to_string()
}

/// Asks for the input path on `output` and reads one line from `input`.
pub fn prompt_for_input<R: BufRead, W: Write>(mut input: R, mut output: W) -> CliResult<PathBuf> {
    write!(output, "Path to the local video file: ").cli_context("Failed to write prompt")?;
    output.flush().cli_context("Failed to write prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .cli_context("Failed to read input path")?;

    let cleaned = clean_input_path(&line);
    (!cleaned.is_empty())
        .then(|| PathBuf::from(cleaned))
        .cli_context("No input video path given")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_clean_input_path() {
        assert_eq!(clean_input_path("  /videos/a.mp4\n"), "/videos/a.mp4");
        assert_eq!(clean_input_path("\"/videos/my talk.mp4\"\n"), "/videos/my talk.mp4");
        assert_eq!(clean_input_path("'/videos/b.mkv'"), "/videos/b.mkv");
        // Unbalanced quotes are kept.
        assert_eq!(clean_input_path("\"/videos/c.mp4"), "\"/videos/c.mp4");
        assert_eq!(clean_input_path("   \n"), "");
    }

    #[test]
    fn test_prompt_reads_one_line() {
        let mut shown = Vec::new();
        let path = prompt_for_input(Cursor::new("'lecture 1.mp4'\nignored\n"), &mut shown).unwrap();
        assert_eq!(path, PathBuf::from("lecture 1.mp4"));
        assert_eq!(String::from_utf8(shown).unwrap(), "Path to the local video file: ");
    }

    #[test]
    fn test_prompt_rejects_empty_answer() {
        let err = prompt_for_input(Cursor::new("\n"), Vec::new()).unwrap_err();
        assert!(err.to_string().contains("No input video path given"));
    }

    #[test]
    fn test_flags_override_defaults() {
        let sampling = SamplingArgs {
            max_frames: Some(40),
            interval: Some(5.0),
        };
        let config = resolve_config(Path::new("work"), &sampling).unwrap();
        assert_eq!(config.max_frames, 40);
        assert_eq!(config.desired_interval_secs, 5.0);
        assert_eq!(config.output_dir, PathBuf::from("work"));
    }
}
