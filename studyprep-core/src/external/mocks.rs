// studyprep-core/src/external/mocks.rs

// --- Fake collaborators (for testing) ---
//
// MockInspector answers probes with canned values; MockExtractor records the
// requests it receives and can simulate ffmpeg writing its outputs or
// failing a step. Both are single-threaded (Rc/RefCell), like the pipeline.

use super::{AudioRequest, FrameRequest, MediaExtractor, MediaInspector};
use crate::error::{CoreError, CoreResult, ExtractionStep, extraction_failed};
use crate::processing::workspace::frame_file_name;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Mock implementation of MediaInspector.
#[derive(Clone, Debug, Default)]
pub struct MockInspector {
    /// `None` makes the duration probe fail
    duration: Option<f64>,
    title: Option<String>,
    fail_title: bool,
    probed: Rc<RefCell<Vec<PathBuf>>>,
}

impl MockInspector {
    /// Inspector reporting `secs` and no title tag.
    pub fn with_duration(secs: f64) -> Self {
        Self {
            duration: Some(secs),
            ..Default::default()
        }
    }

    /// Inspector whose duration probe fails; the title probe still answers.
    pub fn without_duration() -> Self {
        Default::default()
    }

    /// Inspector whose duration and title probes both fail.
    pub fn failing() -> Self {
        Self::without_duration().with_failing_title()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_failing_title(mut self) -> Self {
        self.fail_title = true;
        self
    }

    /// Paths passed to either probe, in call order.
    pub fn probed_paths(&self) -> Vec<PathBuf> {
        self.probed.borrow().clone()
    }
}

impl MediaInspector for MockInspector {
    fn probe_duration(&self, path: &Path) -> CoreResult<f64> {
        log::info!("MockInspector::probe_duration called for: {}", path.display());
        self.probed.borrow_mut().push(path.to_path_buf());
        self.duration.ok_or_else(|| {
            CoreError::ProbeParse(format!("mock duration probe failure for {}", path.display()))
        })
    }

    fn probe_title(&self, path: &Path) -> CoreResult<Option<String>> {
        log::info!("MockInspector::probe_title called for: {}", path.display());
        self.probed.borrow_mut().push(path.to_path_buf());
        if self.fail_title {
            return Err(CoreError::ProbeParse(format!(
                "mock title probe failure for {}",
                path.display()
            )));
        }
        Ok(self.title.clone())
    }
}

/// Mock implementation of MediaExtractor.
#[derive(Clone, Debug, Default)]
pub struct MockExtractor {
    audio_requests: Rc<RefCell<Vec<AudioRequest>>>,
    frame_requests: Rc<RefCell<Vec<FrameRequest>>>,
    fail_audio: bool,
    fail_frames: bool,
    /// When set, frame extraction writes `ceil(duration / interval)` files
    simulated_duration: Option<f64>,
    write_audio: bool,
}

impl MockExtractor {
    pub fn new() -> Self {
        Default::default()
    }

    /// Simulates ffmpeg output: a dummy audio file and one dummy frame per
    /// interval over `duration_secs`.
    pub fn writing_outputs(duration_secs: f64) -> Self {
        Self {
            simulated_duration: Some(duration_secs),
            write_audio: true,
            ..Default::default()
        }
    }

    pub fn failing_audio(mut self) -> Self {
        self.fail_audio = true;
        self
    }

    pub fn failing_frames(mut self) -> Self {
        self.fail_frames = true;
        self
    }

    pub fn audio_requests(&self) -> Vec<AudioRequest> {
        self.audio_requests.borrow().clone()
    }

    pub fn frame_requests(&self) -> Vec<FrameRequest> {
        self.frame_requests.borrow().clone()
    }
}

impl MediaExtractor for MockExtractor {
    fn extract_audio(&self, request: &AudioRequest) -> CoreResult<()> {
        log::info!("MockExtractor::extract_audio called: {:?}", request);
        self.audio_requests.borrow_mut().push(request.clone());
        if self.fail_audio {
            return Err(extraction_failed(
                ExtractionStep::Audio,
                "mock ffmpeg exited with exit status: 1",
            ));
        }
        if self.write_audio {
            std::fs::write(&request.output, b"ID3 mock audio")?;
        }
        Ok(())
    }

    fn extract_frames(&self, request: &FrameRequest) -> CoreResult<()> {
        log::info!("MockExtractor::extract_frames called: {:?}", request);
        self.frame_requests.borrow_mut().push(request.clone());
        if self.fail_frames {
            return Err(extraction_failed(
                ExtractionStep::Frames,
                "mock ffmpeg exited with exit status: 1",
            ));
        }
        if let Some(duration) = self.simulated_duration {
            let dir = request
                .output_pattern
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            let count = (duration / request.interval_secs).ceil() as usize;
            for index in 1..=count {
                std::fs::write(dir.join(frame_file_name(index)), b"\xFF\xD8mock jpeg")?;
            }
        }
        Ok(())
    }
}
