//! Core library that turns a local video into study-guide working artifacts.
//!
//! Given an input video and an output root, the preparer produces a working
//! copy of the video, a low-bitrate audio track and a folder of periodic
//! JPEG frame captures, plus a discovered or inferred title. The capture
//! interval adapts to the video length so that no more than a configured
//! number of frames is produced.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use studyprep_core::external::{FfmpegExtractor, FfprobeInspector, SidecarSpawner};
//! use studyprep_core::{CoreConfig, prepare_local_media};
//! use std::path::{Path, PathBuf};
//!
//! let config = CoreConfig::from_env(PathBuf::from("output"));
//! let prepared = prepare_local_media(
//!     &FfprobeInspector::new(),
//!     &FfmpegExtractor::new(SidecarSpawner),
//!     &config,
//!     Path::new("lecture.mp4"),
//! )
//! .unwrap();
//! println!("{} frames for '{}'", prepared.frames_written, prepared.title());
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod processing;
pub mod temp_files;
pub mod utils;

// Re-exports for public API
pub use config::{CoreConfig, CoreConfigBuilder};
pub use error::{CoreError, CoreResult, ExtractionStep};
pub use external::{MediaExtractor, MediaInspector, check_media_tools};
pub use processing::{
    MediaMetadata, PreparedMedia, SamplingPlan, WorkspaceLayout, compute_interval,
    plan_local_media, prepare_local_media,
};
pub use utils::{format_bytes, format_duration, guide_path};
