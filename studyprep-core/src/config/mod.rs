//! Configuration structures and constants for the studyprep-core library.
//!
//! The core never reads the process environment while preparing media. The
//! CLI resolves settings once (environment, then flags) into a `CoreConfig`
//! and passes it in explicitly.

mod builder;
pub mod utils;

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

pub use builder::CoreConfigBuilder;

// Default constants

/// Ceiling on the number of frame captures produced by one run.
pub const DEFAULT_MAX_FRAMES: usize = 150;

/// Desired gap, in seconds, between two consecutive frame captures.
pub const DEFAULT_DESIRED_INTERVAL_SECS: f64 = 2.0;

/// Duration assumed when the container duration cannot be probed.
pub const DEFAULT_DURATION_SECS: f64 = 600.0;

/// Audio bitrate used for the extracted track. Low on purpose: the track is
/// only consumed by speech/content analysis.
pub const AUDIO_BITRATE_KBPS: u32 = 32;

/// ffmpeg `-q:v` value for frame captures (2 is near-best JPEG quality).
pub const FRAME_JPEG_QUALITY: u8 = 2;

/// Output root used when the caller does not supply one.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Environment variable holding the frame ceiling.
pub const ENV_MAX_FRAMES: &str = "MAX_IMAGENES";

/// Environment variable holding the desired capture interval.
pub const ENV_DESIRED_INTERVAL: &str = "INTERVALO_DESEADO";

/// Main configuration structure for the studyprep-core library.
///
/// # Examples
///
/// ```rust
/// use studyprep_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .output_dir("work")
///     .max_frames(90)
///     .desired_interval_secs(3.0)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoreConfig {
    /// Root directory of the managed workspace
    pub output_dir: PathBuf,

    /// Seconds between frame captures when the ceiling allows it
    pub desired_interval_secs: f64,

    /// Maximum number of frame captures per run
    pub max_frames: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            desired_interval_secs: DEFAULT_DESIRED_INTERVAL_SECS,
            max_frames: DEFAULT_MAX_FRAMES,
        }
    }
}

impl CoreConfig {
    /// Creates a configuration with default sampling bounds.
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            ..Default::default()
        }
    }

    /// Creates a configuration whose sampling bounds come from
    /// `MAX_IMAGENES` / `INTERVALO_DESEADO`.
    ///
    /// Missing, unparsable, zero, negative or non-finite values fall back
    /// to the defaults without reporting anything.
    pub fn from_env(output_dir: PathBuf) -> Self {
        let max_frames = utils::get_env_usize(ENV_MAX_FRAMES, DEFAULT_MAX_FRAMES);
        let desired_interval_secs =
            utils::get_env_f64(ENV_DESIRED_INTERVAL, DEFAULT_DESIRED_INTERVAL_SECS);

        Self {
            output_dir,
            desired_interval_secs: if is_valid_interval(desired_interval_secs) {
                desired_interval_secs
            } else {
                DEFAULT_DESIRED_INTERVAL_SECS
            },
            max_frames: if max_frames > 0 {
                max_frames
            } else {
                DEFAULT_MAX_FRAMES
            },
        }
    }

    /// Checks the sampling bounds.
    pub fn validate(&self) -> CoreResult<()> {
        if !is_valid_interval(self.desired_interval_secs) {
            return Err(CoreError::Config(format!(
                "desired interval must be a positive number of seconds, got {}",
                self.desired_interval_secs
            )));
        }
        if self.max_frames == 0 {
            return Err(CoreError::Config(
                "max frames must be at least 1".to_string(),
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(CoreError::Config("output directory is empty".to_string()));
        }
        Ok(())
    }
}

pub(crate) fn is_valid_interval(secs: f64) -> bool {
    secs.is_finite() && secs > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CoreConfig::default();
        assert_eq!(config.max_frames, 150);
        assert_eq!(config.desired_interval_secs, 2.0);
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_bounds() {
        let mut config = CoreConfig::new(PathBuf::from("out"));
        config.desired_interval_secs = 0.0;
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));

        config.desired_interval_secs = f64::NAN;
        assert!(config.validate().is_err());

        config.desired_interval_secs = 1.0;
        config.max_frames = 0;
        assert!(config.validate().is_err());

        config.max_frames = 10;
        config.output_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }
}
