// ============================================================================
// studyprep-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of CoreConfig. Every field has a default, so `build`
// never fails; call `CoreConfig::validate` before use.

use std::path::PathBuf;

use super::{CoreConfig, DEFAULT_DESIRED_INTERVAL_SECS, DEFAULT_MAX_FRAMES, DEFAULT_OUTPUT_DIR};

/// Builder for creating CoreConfig instances.
#[derive(Debug, Clone)]
pub struct CoreConfigBuilder {
    output_dir: PathBuf,
    desired_interval_secs: f64,
    max_frames: usize,
}

impl Default for CoreConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            desired_interval_secs: DEFAULT_DESIRED_INTERVAL_SECS,
            max_frames: DEFAULT_MAX_FRAMES,
        }
    }

    /// Starts from an existing configuration, e.g. one read from the environment.
    pub fn from_config(config: CoreConfig) -> Self {
        Self {
            output_dir: config.output_dir,
            desired_interval_secs: config.desired_interval_secs,
            max_frames: config.max_frames,
        }
    }

    /// Sets the workspace root.
    pub fn output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Sets the desired number of seconds between frame captures.
    pub fn desired_interval_secs(mut self, secs: f64) -> Self {
        self.desired_interval_secs = secs;
        self
    }

    /// Sets the frame ceiling.
    pub fn max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Builds a CoreConfig instance from the builder.
    pub fn build(self) -> CoreConfig {
        CoreConfig {
            output_dir: self.output_dir,
            desired_interval_secs: self.desired_interval_secs,
            max_frames: self.max_frames,
        }
    }
}
