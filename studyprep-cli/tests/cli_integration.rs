use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::error::Error;
use std::path::PathBuf;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn studyprep_cmd() -> Command {
    let mut cmd = Command::cargo_bin("studyprep").expect("Failed to find studyprep binary");
    // Keep the developer's .env / shell settings out of the tests.
    cmd.env_remove("MAX_IMAGENES").env_remove("INTERVALO_DESEADO");
    cmd
}

#[test]
fn test_help_lists_subcommands() -> Result<(), Box<dyn Error>> {
    studyprep_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("prepare"))
        .stdout(contains("plan"));
    Ok(())
}

#[test]
fn test_prepare_non_existent_input() -> Result<(), Box<dyn Error>> {
    let output_dir = tempdir()?;
    let non_existent_input = PathBuf::from("surely/this/does/not/exist/input.mp4");

    studyprep_cmd()
        .current_dir(output_dir.path())
        .arg("prepare")
        .arg(&non_existent_input)
        .arg("--output")
        .arg(output_dir.path().join("work"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("does not exist"));

    // The workspace is never created for a missing input.
    assert!(!output_dir.path().join("work").exists());
    Ok(())
}

#[test]
fn test_prompted_input_is_unquoted() -> Result<(), Box<dyn Error>> {
    let output_dir = tempdir()?;

    studyprep_cmd()
        .current_dir(output_dir.path())
        .arg("prepare")
        .write_stdin("\"missing lecture.mp4\"\n")
        .assert()
        .failure()
        .stdout(contains("Path to the local video file"))
        .stderr(contains("missing lecture.mp4"))
        .stderr(contains("\"missing").not());
    Ok(())
}

#[test]
fn test_empty_prompt_answer_fails() -> Result<(), Box<dyn Error>> {
    studyprep_cmd()
        .arg("prepare")
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(contains("No input video path given"));
    Ok(())
}

#[test]
fn test_zero_max_frames_is_rejected() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    let input_file = input_dir.path().join("clip.mp4");
    std::fs::write(&input_file, "dummy content")?;

    studyprep_cmd()
        .arg("plan")
        .arg(&input_file)
        .arg("--max-frames")
        .arg("0")
        .assert()
        .failure()
        .stderr(contains("max-frames"));
    Ok(())
}

#[test]
fn test_invalid_interval_is_rejected() -> Result<(), Box<dyn Error>> {
    studyprep_cmd()
        .args(["plan", "clip.mp4", "--interval=-2"])
        .assert()
        .failure()
        .stderr(contains("greater than zero"));

    studyprep_cmd()
        .args(["plan", "clip.mp4", "--interval", "0"])
        .assert()
        .failure()
        .stderr(contains("greater than zero"));
    Ok(())
}

#[test]
fn test_plan_non_existent_input() -> Result<(), Box<dyn Error>> {
    studyprep_cmd()
        .args(["plan", "surely/not/here.mkv"])
        .assert()
        .failure()
        .stderr(contains("does not exist"));
    Ok(())
}
