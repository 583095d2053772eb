// ============================================================================
// studyprep-core/src/processing/workspace.rs
// ============================================================================
//
// WORKSPACE: Fixed artifact layout under the output root
//
// Every run writes to the same paths:
//
//   <root>/video_work.<ext>          working copy of the input
//   <root>/audio.mp3                 extracted audio track
//   <root>/ia_frames/frame_NNN.jpg   periodic frame captures
//
// `prepare` removes whatever a previous run left at those paths so each run
// starts clean. The layout assumes a single run owns the root at a time.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{CoreError, CoreResult};
use crate::temp_files;

pub const WORKING_VIDEO_STEM: &str = "video_work";
pub const AUDIO_FILE_NAME: &str = "audio.mp3";
pub const FRAMES_DIR_NAME: &str = "ia_frames";
pub const FRAME_FILE_PATTERN: &str = "frame_%03d.jpg";
pub const FRAME_EXTENSION: &str = "jpg";

/// Extension given to the working copy when the input has none.
const FALLBACK_VIDEO_EXTENSION: &str = "mp4";

/// Paths of the artifacts produced by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceLayout {
    pub root: PathBuf,
    pub working_video: PathBuf,
    pub audio: PathBuf,
    pub frames_dir: PathBuf,
}

impl WorkspaceLayout {
    /// Derives the layout for `input` under `output_root`. Touches nothing on disk.
    pub fn new(output_root: &Path, input: &Path) -> Self {
        let extension = input
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| FALLBACK_VIDEO_EXTENSION.to_string());

        Self {
            root: output_root.to_path_buf(),
            working_video: output_root.join(format!("{WORKING_VIDEO_STEM}.{extension}")),
            audio: output_root.join(AUDIO_FILE_NAME),
            frames_dir: output_root.join(FRAMES_DIR_NAME),
        }
    }

    /// Output path pattern handed to ffmpeg for frame captures.
    pub fn frame_pattern(&self) -> PathBuf {
        self.frames_dir.join(FRAME_FILE_PATTERN)
    }

    /// Fails with `InputInWorkspace` when `input` is one of the files
    /// `prepare` deletes or the copy overwrites. Both the path as given and
    /// its symlink target are checked.
    pub fn ensure_input_outside(&self, input: &Path) -> CoreResult<()> {
        let as_given = match (input.parent(), input.file_name()) {
            (Some(parent), Some(name)) => {
                let parent = if parent.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    parent
                };
                parent.canonicalize().ok().map(|dir| dir.join(name))
            }
            _ => None,
        };
        let resolved = input.canonicalize().ok();

        let clashes = as_given
            .iter()
            .chain(resolved.iter())
            .any(|path| self.is_artifact(path));
        if clashes {
            return Err(CoreError::InputInWorkspace(input.to_path_buf()));
        }
        Ok(())
    }

    /// True when the absolute `path` names a file managed by this layout.
    fn is_artifact(&self, path: &Path) -> bool {
        let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
            return false;
        };
        let same_dir = |dir: &Path| dir.canonicalize().is_ok_and(|dir| dir == parent);

        if same_dir(&self.root) {
            let is_copy = Path::new(name).file_stem().and_then(|s| s.to_str())
                == Some(WORKING_VIDEO_STEM);
            let is_audio = self.audio.file_name() == Some(name);
            if is_copy || is_audio {
                return true;
            }
        }
        same_dir(&self.frames_dir)
            && Path::new(name)
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(FRAME_EXTENSION))
    }

    /// Brings the workspace to a clean state.
    ///
    /// Creates the root and frame directory if needed, removes the stale
    /// audio track, any earlier working copy and every `.jpg` in the frame
    /// directory. Other files are left alone. Safe to call repeatedly.
    pub fn prepare(&self) -> CoreResult<()> {
        fs::create_dir_all(&self.root)?;

        if self.audio.is_file() {
            debug!("Removing stale audio track {}", self.audio.display());
            fs::remove_file(&self.audio)?;
        }

        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            let is_old_copy = path.is_file()
                && path.file_stem().and_then(|s| s.to_str()) == Some(WORKING_VIDEO_STEM);
            if is_old_copy {
                debug!("Removing previous working copy {}", path.display());
                fs::remove_file(&path)?;
            }
        }

        fs::create_dir_all(&self.frames_dir)?;
        let mut removed = 0usize;
        for path in self.frame_files()? {
            fs::remove_file(&path)?;
            removed += 1;
        }
        if removed > 0 {
            debug!(
                "Removed {} stale frame(s) from {}",
                removed,
                self.frames_dir.display()
            );
        }

        Ok(())
    }

    /// Copies `input` byte-for-byte to the working-copy path.
    ///
    /// The data is written to a staging file in the root first and renamed
    /// over the working copy once complete. Returns the number of bytes copied.
    pub fn copy_input(&self, input: &Path) -> CoreResult<u64> {
        ensure_input_exists(input)?;

        let extension = self
            .working_video
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or(FALLBACK_VIDEO_EXTENSION);
        let staged = temp_files::create_staging_file(&self.root, WORKING_VIDEO_STEM, extension)?;

        let bytes = fs::copy(input, staged.path())?;
        staged
            .persist(&self.working_video)
            .map_err(|e| CoreError::Io(e.error))?;

        debug!(
            "Copied {} bytes from {} to {}",
            bytes,
            input.display(),
            self.working_video.display()
        );
        Ok(bytes)
    }

    /// Lists the `.jpg` files in the frame directory, sorted by name.
    /// A missing frame directory yields an empty list.
    pub fn frame_files(&self) -> CoreResult<Vec<PathBuf>> {
        if !self.frames_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut frames: Vec<PathBuf> = fs::read_dir(&self.frames_dir)?
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if !path.is_file() {
                    return None;
                }
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .filter(|ext| ext.eq_ignore_ascii_case(FRAME_EXTENSION))
                    .map(|_| path.clone())
            })
            .collect();
        frames.sort();
        Ok(frames)
    }
}

/// Fails with `InputMissing` unless `input` is an existing regular file.
pub fn ensure_input_exists(input: &Path) -> CoreResult<()> {
    if input.is_file() {
        Ok(())
    } else {
        Err(CoreError::InputMissing(input.to_path_buf()))
    }
}

/// Name of the `index`-th frame capture (1-based), matching [`FRAME_FILE_PATTERN`].
pub fn frame_file_name(index: usize) -> String {
    format!("frame_{index:03}.{FRAME_EXTENSION}")
}
