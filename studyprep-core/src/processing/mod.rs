//! Local media preparation.
//!
//! Submodules, in pipeline order:
//!
//! - `workspace`: fixed artifact layout, cleanup and the working copy
//! - `probe`: duration/title probing with fallbacks
//! - `sampling`: adaptive capture interval
//! - `extract`: audio and frame extraction requests
//! - `pipeline`: the end-to-end preparer

pub mod extract;
pub mod pipeline;
pub mod probe;
pub mod sampling;
pub mod workspace;

pub use pipeline::{PreparedMedia, plan_local_media, prepare_local_media};
pub use probe::MediaMetadata;
pub use sampling::{SamplingPlan, compute_interval};
pub use workspace::WorkspaceLayout;
