//! Metadata probing with graceful degradation.
//!
//! Duration and title are nice to have, not required for extraction, so a
//! failed probe is logged and replaced by a default instead of aborting.

use std::path::Path;

use log::warn;
use serde::Serialize;

use crate::config::DEFAULT_DURATION_SECS;
use crate::external::MediaInspector;

/// Title used when neither a tag nor a usable file name is available.
const UNTITLED: &str = "video";

/// Duration and human title of a video.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaMetadata {
    /// Positive, finite duration in seconds
    pub duration_secs: f64,
    /// Non-empty title
    pub title: String,
    /// True when `duration_secs` is the default sentinel
    pub duration_fallback: bool,
    /// True when `title` was derived from the file name
    pub title_fallback: bool,
}

/// Default title for `input`: its file name without extension.
pub fn default_title(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().trim().to_string())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Probes `media` for duration and title.
///
/// The two probes are independent: one failing does not skip the other.
/// `fallback_title` is used when there is no usable title tag.
pub fn probe_metadata<I: MediaInspector + ?Sized>(
    inspector: &I,
    media: &Path,
    fallback_title: &str,
) -> MediaMetadata {
    let (duration_secs, duration_fallback) = match inspector.probe_duration(media) {
        Ok(secs) if secs.is_finite() && secs > 0.0 => (secs, false),
        Ok(secs) => {
            warn!(
                "Unusable duration {} for {}, assuming {}s",
                secs,
                media.display(),
                DEFAULT_DURATION_SECS
            );
            (DEFAULT_DURATION_SECS, true)
        }
        Err(e) => {
            warn!(
                "Could not read duration of {}: {}. Assuming {}s",
                media.display(),
                e,
                DEFAULT_DURATION_SECS
            );
            (DEFAULT_DURATION_SECS, true)
        }
    };

    let tagged_title = match inspector.probe_title(media) {
        Ok(title) => title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()),
        Err(e) => {
            warn!("Could not read title tag of {}: {}", media.display(), e);
            None
        }
    };

    let fallback_title = if fallback_title.trim().is_empty() {
        UNTITLED
    } else {
        fallback_title.trim()
    };
    let (title, title_fallback) = match tagged_title {
        Some(title) => (title, false),
        None => (fallback_title.to_string(), true),
    };

    MediaMetadata {
        duration_secs,
        title,
        duration_fallback,
        title_fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::mocks::MockInspector;

    #[test]
    fn test_probed_values_are_used() {
        let inspector = MockInspector::with_duration(125.5).with_title("  Thermodynamics  ");
        let meta = probe_metadata(&inspector, Path::new("out/video_work.mp4"), "lecture_04");

        assert_eq!(meta.duration_secs, 125.5);
        assert_eq!(meta.title, "Thermodynamics");
        assert!(!meta.duration_fallback);
        assert!(!meta.title_fallback);
    }

    #[test]
    fn test_failed_probes_fall_back() {
        let inspector = MockInspector::failing();
        let meta = probe_metadata(&inspector, Path::new("out/video_work.mp4"), "lecture_04");

        assert_eq!(meta.duration_secs, 600.0);
        assert_eq!(meta.title, "lecture_04");
        assert!(meta.duration_fallback);
        assert!(meta.title_fallback);
    }

    #[test]
    fn test_title_probed_even_when_duration_fails() {
        let inspector = MockInspector::without_duration().with_title("Kept");
        let meta = probe_metadata(&inspector, Path::new("clip.mp4"), "clip");
        assert_eq!(meta.duration_secs, 600.0);
        assert_eq!(meta.title, "Kept");
    }

    #[test]
    fn test_degenerate_duration_is_treated_as_failure() {
        for bad in [0.0, -12.0, f64::NAN] {
            let meta = probe_metadata(&MockInspector::with_duration(bad), Path::new("a.mp4"), "a");
            assert_eq!(meta.duration_secs, 600.0);
            assert!(meta.duration_fallback);
        }
    }

    #[test]
    fn test_blank_tag_uses_file_name() {
        let inspector = MockInspector::with_duration(10.0).with_title("   ");
        let meta = probe_metadata(&inspector, Path::new("x.mp4"), "My Talk");
        assert_eq!(meta.title, "My Talk");
        assert!(meta.title_fallback);
    }

    #[test]
    fn test_default_title_strips_extension() {
        assert_eq!(default_title(Path::new("/videos/Week 3 - Graphs.mp4")), "Week 3 - Graphs");
        assert_eq!(default_title(Path::new("archive.tar.gz")), "archive.tar");
        assert_eq!(default_title(Path::new("/")), "video");
    }
}
