//! Adaptive frame-sampling rate calculation.
//!
//! The capture interval starts at the configured desired interval and is
//! widened just enough that a video of the given duration yields at most
//! `max_frames` captures. Frames are never dropped after the fact; the
//! ceiling is honoured purely through the interval.

use serde::Serialize;

use crate::config::{
    CoreConfig, DEFAULT_DESIRED_INTERVAL_SECS, DEFAULT_DURATION_SECS, DEFAULT_MAX_FRAMES,
    is_valid_interval,
};

/// Returns the capture interval, in seconds, for a video of `duration_secs`.
///
/// When `duration / desired_interval` exceeds `max_frames` the interval
/// becomes `duration / max_frames`, otherwise `desired_interval` is returned
/// unchanged. The result is always positive and finite: a degenerate
/// duration is replaced by [`DEFAULT_DURATION_SECS`] and degenerate bounds
/// by their defaults.
///
/// ```rust
/// use studyprep_core::processing::sampling::compute_interval;
///
/// assert_eq!(compute_interval(60.0, 2.0, 150), 2.0);
/// assert_eq!(compute_interval(600.0, 2.0, 150), 4.0);
/// ```
#[must_use]
pub fn compute_interval(duration_secs: f64, desired_interval_secs: f64, max_frames: usize) -> f64 {
    let duration = sanitize_duration(duration_secs);
    let desired = if is_valid_interval(desired_interval_secs) {
        desired_interval_secs
    } else {
        DEFAULT_DESIRED_INTERVAL_SECS
    };
    let max_frames = effective_max_frames(max_frames) as f64;

    if duration / desired > max_frames {
        duration / max_frames
    } else {
        desired
    }
}

/// Frame ceiling actually applied: zero means the default.
fn effective_max_frames(max_frames: usize) -> usize {
    if max_frames == 0 {
        DEFAULT_MAX_FRAMES
    } else {
        max_frames
    }
}

/// Replaces a non-positive or non-finite duration with the default sentinel.
#[must_use]
pub fn sanitize_duration(duration_secs: f64) -> f64 {
    if duration_secs.is_finite() && duration_secs > 0.0 {
        duration_secs
    } else {
        DEFAULT_DURATION_SECS
    }
}

/// Sampling decision for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingPlan {
    /// Duration the plan was computed for
    pub duration_secs: f64,
    /// Seconds between consecutive captures
    pub interval_secs: f64,
    /// Approximate number of captures ffmpeg will write
    pub expected_frames: usize,
    /// True when the desired interval had to be widened to respect the ceiling
    pub widened: bool,
}

impl SamplingPlan {
    pub fn new(duration_secs: f64, config: &CoreConfig) -> Self {
        let duration_secs = sanitize_duration(duration_secs);
        let interval_secs =
            compute_interval(duration_secs, config.desired_interval_secs, config.max_frames);
        let widened = interval_secs != config.desired_interval_secs;
        // A widened interval is `duration / max`, which can divide back to
        // a hair above `max`.
        let expected_frames = ((duration_secs / interval_secs).ceil() as usize)
            .min(effective_max_frames(config.max_frames));

        Self {
            duration_secs,
            interval_secs,
            expected_frames,
            widened,
        }
    }

    /// ffmpeg video filter selecting one frame every `interval_secs`.
    pub fn fps_filter(&self) -> String {
        format!("fps=1/{}", self.interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_short_video_keeps_desired_interval() {
        assert_eq!(compute_interval(60.0, 2.0, 150), 2.0);
        // Exactly at the ceiling is not widened.
        assert_eq!(compute_interval(300.0, 2.0, 150), 2.0);
    }

    #[test]
    fn test_long_video_widens_to_ceiling() {
        let interval = compute_interval(600.0, 2.0, 150);
        assert!((interval - 4.0).abs() < EPS);

        let duration = 7_321.5;
        let interval = compute_interval(duration, 2.0, 150);
        assert!((interval - duration / 150.0).abs() < EPS);
        assert!((duration / interval - 150.0).abs() < 1e-6);
    }

    #[test]
    fn test_interval_never_increases_with_larger_ceiling() {
        for duration in [1.0, 45.0, 299.0, 600.0, 3_600.0, 86_400.0] {
            for desired in [0.5, 2.0, 7.25] {
                let mut previous = f64::INFINITY;
                for max_frames in 1..400 {
                    let interval = compute_interval(duration, desired, max_frames);
                    assert!(
                        interval <= previous + EPS,
                        "interval grew for D={duration} I={desired} M={max_frames}"
                    );
                    previous = interval;
                }
            }
        }
    }

    #[test]
    fn test_degenerate_duration_uses_sentinel() {
        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let interval = compute_interval(bad, 2.0, 150);
            assert!((interval - 4.0).abs() < EPS, "duration {bad} gave {interval}");
        }
    }

    #[test]
    fn test_degenerate_bounds_never_produce_bad_interval() {
        let interval = compute_interval(600.0, 0.0, 0);
        assert!(interval.is_finite() && interval > 0.0);
        assert!((interval - 4.0).abs() < EPS);
    }

    #[test]
    fn test_expected_frames_never_exceed_ceiling() {
        for max_frames in [1, 7, 150, 1_000] {
            let config = CoreConfig {
                max_frames,
                ..CoreConfig::default()
            };
            for i in 0..20_000 {
                let duration = 300.5 + 0.37 * f64::from(i);
                let plan = SamplingPlan::new(duration, &config);
                assert!(
                    plan.expected_frames <= max_frames,
                    "D={duration} M={max_frames} gave {} frames",
                    plan.expected_frames
                );
                if plan.widened {
                    assert_eq!(plan.expected_frames, max_frames, "D={duration}");
                }
            }
        }
        // Known case where duration / (duration / 150) rounds above 150.
        let plan = SamplingPlan::new(304.57, &CoreConfig::default());
        assert_eq!(plan.expected_frames, 150);
    }

    #[test]
    fn test_plan_reports_expected_frames() {
        let config = CoreConfig::new(PathBuf::from("out"));

        let short = SamplingPlan::new(60.0, &config);
        assert_eq!(short.interval_secs, 2.0);
        assert_eq!(short.expected_frames, 30);
        assert!(!short.widened);
        assert_eq!(short.fps_filter(), "fps=1/2");

        let long = SamplingPlan::new(600.0, &config);
        assert_eq!(long.interval_secs, 4.0);
        assert_eq!(long.expected_frames, 150);
        assert!(long.widened);
        assert_eq!(long.fps_filter(), "fps=1/4");
    }
}
