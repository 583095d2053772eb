// ============================================================================
// studyprep-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for the studyprep core library
//
// Fatal conditions (missing input, failed extraction) surface as `CoreError`
// variants and are returned to the caller. Probe-level failures are also
// expressed as `CoreError` but are absorbed by the metadata prober, which
// falls back to defaults instead of propagating them.

use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// The extraction step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStep {
    Audio,
    Frames,
}

impl fmt::Display for ExtractionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionStep::Audio => write!(f, "audio extraction"),
            ExtractionStep::Frames => write!(f, "frame extraction"),
        }
    }
}

/// Errors produced by the core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Input file does not exist: {}", .0.display())]
    InputMissing(PathBuf),

    #[error(
        "Input file {} is a workspace artifact that would be replaced; move it out of the output directory",
        .0.display()
    )]
    InputInWorkspace(PathBuf),

    #[error("{step} failed: {message}")]
    ExtractionFailed {
        step: ExtractionStep,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to start '{0}': {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("Failed waiting for '{0}': {1}")]
    CommandWait(String, #[source] std::io::Error),

    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Failed to parse probe output: {0}")]
    ProbeParse(String),

    #[error("Required dependency not found: {0}")]
    DependencyNotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result alias used throughout the core library.
pub type CoreResult<T> = Result<T, CoreError>;

pub fn command_start_error(command: impl Into<String>, err: std::io::Error) -> CoreError {
    CoreError::CommandStart(command.into(), err)
}

pub fn command_wait_error(command: impl Into<String>, err: std::io::Error) -> CoreError {
    CoreError::CommandWait(command.into(), err)
}

pub fn command_failed_error(
    command: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        command: command.into(),
        status,
        stderr: stderr.into(),
    }
}

/// Wraps any error raised while running an extraction step.
pub(crate) fn extraction_failed(step: ExtractionStep, err: impl fmt::Display) -> CoreError {
    CoreError::ExtractionFailed {
        step,
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_missing_message_names_path() {
        let err = CoreError::InputMissing(PathBuf::from("/videos/lecture.mp4"));
        assert_eq!(err.to_string(), "Input file does not exist: /videos/lecture.mp4");
    }

    #[test]
    fn test_extraction_failed_message_names_step() {
        let err = extraction_failed(ExtractionStep::Audio, "exit status: 1");
        assert_eq!(err.to_string(), "audio extraction failed: exit status: 1");
    }
}
