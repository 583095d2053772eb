//! Implementation of the 'prepare' subcommand.
//!
//! Resolves the input (argument or interactive prompt), checks that ffmpeg
//! and ffprobe are installed, then hands off to
//! `studyprep_core::prepare_local_media` and reports the artifacts.

use crate::cli::PrepareArgs;
use crate::commands::{prompt_for_input, resolve_config};
use crate::error::{CliErrorContext, CliResult};
use crate::logging::get_timestamp;

use studyprep_core::external::{FfmpegExtractor, FfprobeInspector, SidecarSpawner};
use studyprep_core::processing::workspace::ensure_input_exists;
use studyprep_core::{
    PreparedMedia, check_media_tools, format_bytes, format_duration, guide_path,
    prepare_local_media,
};

use console::style;
use log::info;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

pub fn run_prepare(args: PrepareArgs) -> CliResult<()> {
    let input_path = match args.input_path {
        Some(path) => path,
        None => prompt_for_input(io::stdin().lock(), io::stdout())?,
    };
    let config = resolve_config(&args.output_dir, &args.sampling)?;

    ensure_input_exists(&input_path)?;
    check_media_tools()?;

    info!("Studyprep run started: {}", get_timestamp());
    let start = Instant::now();
    let prepared = prepare_local_media(
        &FfprobeInspector::new(),
        &FfmpegExtractor::new(SidecarSpawner),
        &config,
        &input_path,
    )?;
    info!("Preparation finished in {:.1}s", start.elapsed().as_secs_f64());

    let mut stdout = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &prepared)
            .map_err(io::Error::from)
            .cli_context("Failed to write JSON report")?;
        writeln!(stdout).cli_context("Failed to write JSON report")?;
    } else {
        write_summary(&mut stdout, &prepared, &config.output_dir)
            .cli_context("Failed to write summary")?;
    }
    Ok(())
}

/// Writes the human-readable summary of a prepared video.
pub fn write_summary<W: Write>(
    out: &mut W,
    prepared: &PreparedMedia,
    output_dir: &Path,
) -> io::Result<()> {
    let plan = &prepared.plan;
    writeln!(out)?;
    writeln!(out, "{}", style("Preparation Summary").bold().underlined())?;
    writeln!(out, "  {} {}", style("Title:      ").bold(), prepared.title())?;
    writeln!(
        out,
        "  {} {}{}",
        style("Duration:   ").bold(),
        format_duration(prepared.metadata.duration_secs),
        if prepared.metadata.duration_fallback { " (assumed)" } else { "" }
    )?;
    writeln!(
        out,
        "  {} 1 frame every {:.2}s{}",
        style("Sampling:   ").bold(),
        plan.interval_secs,
        if plan.widened { " (widened to fit the ceiling)" } else { "" }
    )?;
    writeln!(
        out,
        "  {} {} written to {}",
        style("Frames:     ").bold(),
        style(prepared.frames_written).green().bold(),
        prepared.frames_dir.display()
    )?;
    writeln!(out, "  {} {}", style("Audio:      ").bold(), prepared.audio.display())?;
    writeln!(
        out,
        "  {} {} ({})",
        style("Working copy:").bold(),
        prepared.working_video.display(),
        format_bytes(prepared.working_copy_bytes)
    )?;
    writeln!(
        out,
        "  {} {}",
        style("Guide PDF:  ").bold(),
        guide_path(output_dir, prepared.title()).display()
    )?;
    Ok(())
}
