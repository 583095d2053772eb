//! FFprobe integration for container metadata.
//!
//! Duration comes from the `ffprobe` crate's typed format section. The title
//! tag is read with a dedicated `ffprobe -show_entries format_tags=title`
//! call so that a file whose tags fail to deserialize still gets a duration,
//! and vice versa.
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::external::MediaInspector;
use ffprobe::{FfProbeError, ffprobe};
use std::path::Path;
use std::process::Command;

/// `MediaInspector` backed by the system `ffprobe` binary.
#[derive(Debug, Clone, Default)]
pub struct FfprobeInspector;

impl FfprobeInspector {
    pub fn new() -> Self {
        Self
    }
}

impl MediaInspector for FfprobeInspector {
    fn probe_duration(&self, path: &Path) -> CoreResult<f64> {
        log::debug!("Running ffprobe (via crate) for duration on: {}", path.display());
        match ffprobe(path) {
            Ok(metadata) => {
                let raw = metadata.format.duration.ok_or_else(|| {
                    CoreError::ProbeParse(format!(
                        "No format duration reported for {}",
                        path.display()
                    ))
                })?;
                parse_duration_output(&raw)
            }
            Err(err) => Err(map_ffprobe_error(err, "duration")),
        }
    }

    fn probe_title(&self, path: &Path) -> CoreResult<Option<String>> {
        log::debug!("Running ffprobe for title tag on: {}", path.display());
        let output = Command::new("ffprobe")
            .args([
                "-v",
                "error",
                "-show_entries",
                "format_tags=title",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(path)
            .output()
            .map_err(|e| command_start_error("ffprobe (title)", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            return Err(command_failed_error("ffprobe (title)", output.status, stderr));
        }

        Ok(parse_title_output(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Parses the textual duration ffprobe reports, e.g. `"612.480000"`.
pub(crate) fn parse_duration_output(raw: &str) -> CoreResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| CoreError::ProbeParse(format!("invalid duration '{}': {}", raw.trim(), e)))
}

/// Extracts the title from `format_tags=title` output.
///
/// Some ffprobe builds keep the `TAG:title=` key even with `nokey=1`; it is
/// stripped. Blank output means the container has no title.
pub(crate) fn parse_title_output(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(|line| line.trim())
        .map(|line| line.strip_prefix("TAG:title=").unwrap_or(line).trim())
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

fn map_ffprobe_error(err: FfProbeError, context: &str) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => command_start_error(format!("ffprobe ({context})"), io_err),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            command_failed_error(format!("ffprobe ({context})"), output.status, stderr)
        }
        FfProbeError::Deserialize(err) => {
            CoreError::ProbeParse(format!("ffprobe {context} output deserialization: {err}"))
        }
        _ => CoreError::ProbeParse(format!("Unknown ffprobe error during {context}: {err:?}")),
    }
}
