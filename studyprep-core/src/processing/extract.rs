//! Drives the two extraction steps against the working copy.
//!
//! Audio runs first and must succeed before frame sampling starts. Neither
//! step is retried.

use log::info;

use crate::config::{AUDIO_BITRATE_KBPS, FRAME_JPEG_QUALITY};
use crate::error::{CoreError, CoreResult, ExtractionStep, extraction_failed};
use crate::external::{AudioRequest, FrameRequest, MediaExtractor};
use crate::processing::sampling::SamplingPlan;
use crate::processing::workspace::WorkspaceLayout;

pub fn audio_request(layout: &WorkspaceLayout) -> AudioRequest {
    AudioRequest {
        input: layout.working_video.clone(),
        output: layout.audio.clone(),
        bitrate_kbps: AUDIO_BITRATE_KBPS,
    }
}

pub fn frame_request(layout: &WorkspaceLayout, plan: &SamplingPlan) -> FrameRequest {
    FrameRequest {
        input: layout.working_video.clone(),
        output_pattern: layout.frame_pattern(),
        interval_secs: plan.interval_secs,
        quality: FRAME_JPEG_QUALITY,
    }
}

/// Extracts the audio track, then the frame captures.
pub fn extract_media<E: MediaExtractor + ?Sized>(
    extractor: &E,
    layout: &WorkspaceLayout,
    plan: &SamplingPlan,
) -> CoreResult<()> {
    info!("Extracting audio to {}", layout.audio.display());
    extractor
        .extract_audio(&audio_request(layout))
        .map_err(|e| as_extraction_error(ExtractionStep::Audio, e))?;

    info!(
        "Extracting frames every {:.2}s into {}",
        plan.interval_secs,
        layout.frames_dir.display()
    );
    extractor
        .extract_frames(&frame_request(layout, plan))
        .map_err(|e| as_extraction_error(ExtractionStep::Frames, e))?;

    Ok(())
}

/// Any failure during an extraction step counts as that step failing.
fn as_extraction_error(step: ExtractionStep, err: CoreError) -> CoreError {
    match err {
        CoreError::ExtractionFailed { .. } => err,
        other => extraction_failed(step, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoreConfig;
    use crate::external::mocks::MockExtractor;
    use std::path::{Path, PathBuf};

    fn layout() -> WorkspaceLayout {
        WorkspaceLayout::new(Path::new("out"), Path::new("/videos/talk.mp4"))
    }

    #[test]
    fn test_requests_use_fixed_bitrate_and_quality() {
        let plan = SamplingPlan::new(600.0, &CoreConfig::default());
        let extractor = MockExtractor::new();

        extract_media(&extractor, &layout(), &plan).unwrap();

        let audio = extractor.audio_requests();
        assert_eq!(audio.len(), 1);
        assert_eq!(audio[0].input, PathBuf::from("out/video_work.mp4"));
        assert_eq!(audio[0].output, PathBuf::from("out/audio.mp3"));
        assert_eq!(audio[0].bitrate_kbps, 32);

        let frames = extractor.frame_requests();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].interval_secs, 4.0);
        assert_eq!(frames[0].quality, 2);
        assert_eq!(frames[0].output_pattern, PathBuf::from("out/ia_frames/frame_%03d.jpg"));
    }

    #[test]
    fn test_audio_failure_skips_frames() {
        let plan = SamplingPlan::new(60.0, &CoreConfig::default());
        let extractor = MockExtractor::new().failing_audio();

        let err = extract_media(&extractor, &layout(), &plan).unwrap_err();

        assert!(matches!(err, CoreError::ExtractionFailed { step: ExtractionStep::Audio, .. }));
        assert!(extractor.frame_requests().is_empty());
    }

    #[test]
    fn test_frame_failure_is_reported_as_frames_step() {
        let plan = SamplingPlan::new(60.0, &CoreConfig::default());
        let extractor = MockExtractor::new().failing_frames();

        let err = extract_media(&extractor, &layout(), &plan).unwrap_err();

        assert!(matches!(err, CoreError::ExtractionFailed { step: ExtractionStep::Frames, .. }));
        assert_eq!(extractor.audio_requests().len(), 1);
    }

    #[test]
    fn test_io_errors_become_extraction_failures() {
        let err = as_extraction_error(
            ExtractionStep::Frames,
            CoreError::Io(std::io::Error::other("disk full")),
        );
        assert!(matches!(err, CoreError::ExtractionFailed { step: ExtractionStep::Frames, .. }));
    }
}
