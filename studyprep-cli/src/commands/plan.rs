//! Implementation of the 'plan' subcommand: probe the input in place and
//! print the sampling plan. Nothing is written to disk.

use crate::cli::PlanArgs;
use crate::commands::resolve_config;
use crate::error::{CliErrorContext, CliResult};

use studyprep_core::config::DEFAULT_OUTPUT_DIR;
use studyprep_core::external::{FfprobeInspector, check_dependency};
use studyprep_core::processing::workspace::ensure_input_exists;
use studyprep_core::{MediaMetadata, SamplingPlan, format_duration, plan_local_media};

use console::style;
use serde_json::json;
use std::io::{self, Write};
use std::path::Path;

pub fn run_plan(args: PlanArgs) -> CliResult<()> {
    let config = resolve_config(Path::new(DEFAULT_OUTPUT_DIR), &args.sampling)?;
    ensure_input_exists(&args.input_path)?;
    check_dependency("ffprobe")?;

    let (metadata, plan) = plan_local_media(&FfprobeInspector::new(), &config, &args.input_path)?;

    let mut stdout = io::stdout().lock();
    if args.json {
        let report = json!({ "metadata": metadata, "plan": plan });
        serde_json::to_writer_pretty(&mut stdout, &report)
            .map_err(io::Error::from)
            .cli_context("Failed to write JSON report")?;
        writeln!(stdout).cli_context("Failed to write JSON report")?;
    } else {
        write_plan(&mut stdout, &metadata, &plan, config.max_frames)
            .cli_context("Failed to write plan")?;
    }
    Ok(())
}

pub fn write_plan<W: Write>(
    out: &mut W,
    metadata: &MediaMetadata,
    plan: &SamplingPlan,
    max_frames: usize,
) -> io::Result<()> {
    writeln!(out, "{}", style("Sampling Plan").bold().underlined())?;
    writeln!(out, "  Title:    {}", metadata.title)?;
    writeln!(out, "  Duration: {}", format_duration(plan.duration_secs))?;
    writeln!(out, "  Interval: {:.2}s", plan.interval_secs)?;
    writeln!(
        out,
        "  Frames:   ~{} (ceiling {})",
        style(plan.expected_frames).bold(),
        max_frames
    )?;
    if metadata.duration_fallback {
        writeln!(
            out,
            "  {}",
            style("Duration could not be probed; the default was assumed").yellow()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyprep_core::CoreConfig;

    #[test]
    fn test_plan_output_flags_fallback() {
        console::set_colors_enabled(false);
        let config = CoreConfig::default();
        let metadata = MediaMetadata {
            duration_secs: 600.0,
            title: "lecture".to_string(),
            duration_fallback: true,
            title_fallback: true,
        };
        let plan = SamplingPlan::new(metadata.duration_secs, &config);

        let mut out = Vec::new();
        write_plan(&mut out, &metadata, &plan, config.max_frames).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Interval: 4.00s"));
        assert!(text.contains("~150 (ceiling 150)"));
        assert!(text.contains("default was assumed"));
    }
}
