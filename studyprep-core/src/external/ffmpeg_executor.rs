// ============================================================================
// studyprep-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: FFmpeg Process Management and Extraction
//
// KEY COMPONENTS:
// - FfmpegProcess: Trait representing an active FFmpeg process
// - FfmpegSpawner: Trait for creating new FFmpeg processes
// - SidecarSpawner: Concrete spawner using ffmpeg-sidecar
// - FfmpegExtractor: MediaExtractor that builds and runs the audio and
//   frame-sampling commands
//
// Every extraction is a single blocking invocation. The event stream is
// drained while the process runs so ffmpeg never stalls on a full stderr
// pipe, and error lines are kept for the failure diagnostic.

use crate::error::{
    CoreResult, ExtractionStep, command_failed_error, command_start_error, command_wait_error,
    extraction_failed,
};
use crate::external::{AudioRequest, FrameRequest, MediaExtractor};
use ffmpeg_sidecar::child::FfmpegChild as SidecarChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::process::ExitStatus;

/// Number of ffmpeg error lines kept for a failure message.
const MAX_ERROR_LINES: usize = 8;

// --- FFmpeg Execution Abstraction ---

/// Trait representing an active ffmpeg process instance.
pub trait FfmpegProcess {
    /// Processes events from the running command using a provided handler closure.
    fn handle_events<F>(&mut self, handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>;

    /// Waits for the command to complete and returns its exit status.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Trait representing something that can spawn an FfmpegProcess.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;
    /// Spawns the ffmpeg command, consuming the command object.
    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

// --- Concrete Implementation using ffmpeg-sidecar ---

/// Wrapper around `ffmpeg_sidecar::child::FfmpegChild` implementing `FfmpegProcess`.
pub struct SidecarProcess(SidecarChild);

impl FfmpegProcess for SidecarProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let iterator = self.0.iter().map_err(|e| {
            log::error!("Failed to get ffmpeg event iterator: {}", e);
            command_failed_error(
                "ffmpeg (sidecar - get iter)",
                ExitStatus::default(),
                e.to_string(),
            )
        })?;
        for event in iterator {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.0
            .wait()
            .map_err(|e| command_wait_error("ffmpeg (sidecar)", e))
    }
}

/// Concrete implementation of `FfmpegSpawner` using `ffmpeg-sidecar`.
#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        cmd.spawn()
            .map(SidecarProcess)
            .map_err(|e| command_start_error("ffmpeg (sidecar)", e))
    }
}

// --- Command Builders ---

/// `ffmpeg -y -i <input> -vn -b:a <bitrate>k <output>`
pub fn build_audio_command(request: &AudioRequest) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new();
    cmd.overwrite();
    cmd.input(request.input.to_string_lossy().as_ref());
    cmd.arg("-vn");
    cmd.arg("-b:a");
    cmd.arg(format!("{}k", request.bitrate_kbps));
    cmd.output(request.output.to_string_lossy().as_ref());
    cmd
}

/// `ffmpeg -y -i <input> -vf fps=1/<interval> -q:v <quality> <pattern>`
pub fn build_frames_command(request: &FrameRequest) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new();
    cmd.overwrite();
    cmd.input(request.input.to_string_lossy().as_ref());
    cmd.arg("-vf");
    cmd.arg(format!("fps=1/{}", request.interval_secs));
    cmd.arg("-q:v");
    cmd.arg(request.quality.to_string());
    cmd.output(request.output_pattern.to_string_lossy().as_ref());
    cmd
}

/// Space-joined argument list, for logging.
fn command_line(cmd: &mut FfmpegCommand) -> String {
    cmd.as_inner()
        .get_args()
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

// --- Extractor ---

/// `MediaExtractor` that runs ffmpeg through an `FfmpegSpawner`.
#[derive(Debug, Clone, Default)]
pub struct FfmpegExtractor<S: FfmpegSpawner = SidecarSpawner> {
    spawner: S,
}

impl<S: FfmpegSpawner> FfmpegExtractor<S> {
    pub fn new(spawner: S) -> Self {
        Self { spawner }
    }

    /// Spawns `cmd`, drains its events and fails on a non-zero exit.
    fn run(&self, step: ExtractionStep, mut cmd: FfmpegCommand) -> CoreResult<()> {
        log::debug!("Running {} command: ffmpeg {}", step, command_line(&mut cmd));

        let mut process = self
            .spawner
            .spawn(cmd)
            .map_err(|e| extraction_failed(step, e))?;

        let mut error_lines: Vec<String> = Vec::new();
        process
            .handle_events(|event| {
                match event {
                    FfmpegEvent::Error(line)
                    | FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, line) => {
                        log::debug!("ffmpeg ({}): {}", step, line);
                        if error_lines.len() == MAX_ERROR_LINES {
                            error_lines.remove(0);
                        }
                        error_lines.push(line);
                    }
                    FfmpegEvent::Log(_, line) => log::trace!("ffmpeg ({}): {}", step, line),
                    _ => {}
                }
                Ok(())
            })
            .map_err(|e| extraction_failed(step, e))?;

        let status = process.wait().map_err(|e| extraction_failed(step, e))?;
        if !status.success() {
            log::error!("ffmpeg {} exited with {}", step, status);
            let detail = if error_lines.is_empty() {
                String::new()
            } else {
                format!(": {}", error_lines.join(" | "))
            };
            return Err(extraction_failed(
                step,
                format!("ffmpeg exited with {status}{detail}"),
            ));
        }

        Ok(())
    }
}

impl<S: FfmpegSpawner> MediaExtractor for FfmpegExtractor<S> {
    fn extract_audio(&self, request: &AudioRequest) -> CoreResult<()> {
        self.run(ExtractionStep::Audio, build_audio_command(request))
    }

    fn extract_frames(&self, request: &FrameRequest) -> CoreResult<()> {
        self.run(ExtractionStep::Frames, build_frames_command(request))
    }
}
