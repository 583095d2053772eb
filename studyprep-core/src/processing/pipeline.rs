// ============================================================================
// studyprep-core/src/processing/pipeline.rs
// ============================================================================
//
// LOCAL MEDIA PREPARER: End-to-end preparation of one input video
//
// Strictly sequential, single-threaded:
//
//   input check -> clean workspace -> copy -> probe working copy
//               -> sampling plan -> audio -> frames -> count frames
//
// A missing input is rejected before the workspace is touched. Probe
// failures degrade to defaults. Extraction failures end the run; whatever
// ffmpeg managed to write is not reported as a usable result.

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Serialize;

use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::external::{MediaExtractor, MediaInspector};
use crate::processing::extract::extract_media;
use crate::processing::probe::{MediaMetadata, default_title, probe_metadata};
use crate::processing::sampling::SamplingPlan;
use crate::processing::workspace::{WorkspaceLayout, ensure_input_exists};
use crate::utils::{format_bytes, format_duration};

/// Frames above the ceiling tolerated before warning. ffmpeg's fps filter
/// can emit one extra frame at end of stream.
const FRAME_COUNT_TOLERANCE: usize = 2;

/// Artifacts handed to the analysis and rendering stages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedMedia {
    pub working_video: PathBuf,
    pub audio: PathBuf,
    pub frames_dir: PathBuf,
    pub metadata: MediaMetadata,
    pub plan: SamplingPlan,
    /// Number of frame images present after extraction
    pub frames_written: usize,
    /// Size of the working copy in bytes
    pub working_copy_bytes: u64,
}

impl PreparedMedia {
    /// Title handed to the guide stages, probed or derived from the file name.
    pub fn title(&self) -> &str {
        &self.metadata.title
    }
}

/// Prepares `input` inside `config.output_dir`.
///
/// # Errors
///
/// * `CoreError::Config` - invalid sampling bounds
/// * `CoreError::InputMissing` - `input` is not an existing file; nothing
///   on disk has been changed
/// * `CoreError::InputInWorkspace` - `input` is itself a file the cleanup
///   would delete (an earlier working copy, the audio track or a frame);
///   nothing on disk has been changed
/// * `CoreError::ExtractionFailed` - the audio or frame step failed; when
///   audio fails, frame extraction is never attempted
/// * `CoreError::Io` - the workspace could not be cleaned or the copy failed
pub fn prepare_local_media<I, E>(
    inspector: &I,
    extractor: &E,
    config: &CoreConfig,
    input: &Path,
) -> CoreResult<PreparedMedia>
where
    I: MediaInspector + ?Sized,
    E: MediaExtractor + ?Sized,
{
    config.validate()?;
    ensure_input_exists(input)?;

    info!("Processing local file: {}", input.display());
    let layout = WorkspaceLayout::new(&config.output_dir, input);
    layout.ensure_input_outside(input)?;
    layout.prepare()?;

    info!("Copying video into workspace: {}", layout.working_video.display());
    let working_copy_bytes = layout.copy_input(input)?;

    info!("Analyzing working copy ({})", format_bytes(working_copy_bytes));
    let metadata = probe_metadata(inspector, &layout.working_video, &default_title(input));
    let plan = SamplingPlan::new(metadata.duration_secs, config);
    log_plan(&plan, config);

    extract_media(extractor, &layout, &plan)?;

    let frames_written = layout.frame_files()?.len();
    if frames_written > config.max_frames + FRAME_COUNT_TOLERANCE {
        warn!(
            "ffmpeg wrote {} frames, above the ceiling of {}",
            frames_written, config.max_frames
        );
    }
    info!(
        "Prepared '{}': {} frame(s), audio at {}",
        metadata.title,
        frames_written,
        layout.audio.display()
    );

    Ok(PreparedMedia {
        working_video: layout.working_video,
        audio: layout.audio,
        frames_dir: layout.frames_dir,
        metadata,
        plan,
        frames_written,
        working_copy_bytes,
    })
}

/// Probes `input` in place and computes its sampling plan without touching
/// the workspace.
pub fn plan_local_media<I: MediaInspector + ?Sized>(
    inspector: &I,
    config: &CoreConfig,
    input: &Path,
) -> CoreResult<(MediaMetadata, SamplingPlan)> {
    config.validate()?;
    ensure_input_exists(input)?;

    let metadata = probe_metadata(inspector, input, &default_title(input));
    let plan = SamplingPlan::new(metadata.duration_secs, config);
    log_plan(&plan, config);
    Ok((metadata, plan))
}

fn log_plan(plan: &SamplingPlan, config: &CoreConfig) {
    if plan.widened {
        info!(
            "Long video ({}). Sampling 1 frame every {:.2}s to stay within {} frames",
            format_duration(plan.duration_secs),
            plan.interval_secs,
            config.max_frames
        );
    } else {
        info!(
            "Maximum density: 1 frame every {}s (~{} frames)",
            plan.interval_secs, plan.expected_frames
        );
    }
}
