// ============================================================================
// studyprep-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffprobe and ffmpeg
//
// The preparation pipeline talks to media tools only through two narrow
// capability traits:
//
// - MediaInspector: read-only probes (container duration, title tag)
// - MediaExtractor: audio encode and frame sampling
//
// Production implementations live in `ffprobe_executor` and
// `ffmpeg_executor`; `mocks` provides fakes that return canned values and
// record the requests they receive.

use crate::error::{CoreError, CoreResult};

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Contains the ffprobe-backed MediaInspector
pub mod ffprobe_executor;

/// Contains the ffmpeg spawner abstraction and the ffmpeg-backed MediaExtractor
pub mod ffmpeg_executor;

/// Fake collaborators for tests
pub mod mocks;

pub use ffmpeg_executor::{FfmpegExtractor, FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner};
pub use ffprobe_executor::FfprobeInspector;

// ============================================================================
// CAPABILITY TRAITS
// ============================================================================

/// Read-only inspection of a media container.
pub trait MediaInspector {
    /// Container duration in seconds, from format-level metadata.
    fn probe_duration(&self, path: &Path) -> CoreResult<f64>;

    /// Embedded `title` tag, or `None` when the container has none.
    fn probe_title(&self, path: &Path) -> CoreResult<Option<String>>;
}

/// Parameters for the audio-only encode.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub bitrate_kbps: u32,
}

/// Parameters for periodic frame sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRequest {
    pub input: PathBuf,
    /// printf-style output pattern, e.g. `ia_frames/frame_%03d.jpg`
    pub output_pattern: PathBuf,
    pub interval_secs: f64,
    /// ffmpeg `-q:v` value
    pub quality: u8,
}

/// Media extraction operations. Each call blocks until the tool finishes.
pub trait MediaExtractor {
    /// Strips video and encodes the audio stream, overwriting `output`.
    fn extract_audio(&self, request: &AudioRequest) -> CoreResult<()>;

    /// Writes one image every `interval_secs`, overwriting same-named files.
    fn extract_frames(&self, request: &FrameRequest) -> CoreResult<()>;
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks if a required external command is available and executable.
///
/// Runs `<cmd_name> -version` and only looks at whether it could be started.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", cmd_name);
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{}': {}", cmd_name, e);
            Err(CoreError::CommandStart(cmd_name.to_string(), e))
        }
    }
}

/// Checks that both `ffprobe` and `ffmpeg` can be started.
pub fn check_media_tools() -> CoreResult<()> {
    check_dependency("ffprobe")?;
    check_dependency("ffmpeg")
}
