use studyprep_core::config::{CoreConfig, ENV_DESIRED_INTERVAL, ENV_MAX_FRAMES};
use std::env;
use std::path::PathBuf;

// Single test so the environment is never mutated by two tests at once.
#[test]
fn test_env_var_overrides_and_fallbacks() {
    let out = PathBuf::from("output");

    // SAFETY: this is the only test in this binary touching the environment.
    unsafe {
        env::remove_var(ENV_MAX_FRAMES);
        env::remove_var(ENV_DESIRED_INTERVAL);
    }
    let config = CoreConfig::from_env(out.clone());
    assert_eq!(config.max_frames, 150);
    assert_eq!(config.desired_interval_secs, 2.0);

    unsafe {
        env::set_var(ENV_MAX_FRAMES, "90");
        env::set_var(ENV_DESIRED_INTERVAL, "3.5");
    }
    let config = CoreConfig::from_env(out.clone());
    assert_eq!(config.max_frames, 90);
    assert_eq!(config.desired_interval_secs, 3.5);
    assert_eq!(config.output_dir, out);

    // Unparsable values fall back silently.
    unsafe {
        env::set_var(ENV_MAX_FRAMES, "lots");
        env::set_var(ENV_DESIRED_INTERVAL, "two");
    }
    let config = CoreConfig::from_env(out.clone());
    assert_eq!(config.max_frames, 150);
    assert_eq!(config.desired_interval_secs, 2.0);

    // So do values that parse but would produce a degenerate interval.
    unsafe {
        env::set_var(ENV_MAX_FRAMES, "0");
        env::set_var(ENV_DESIRED_INTERVAL, "-1");
    }
    let config = CoreConfig::from_env(out.clone());
    assert_eq!(config.max_frames, 150);
    assert_eq!(config.desired_interval_secs, 2.0);
    assert!(config.validate().is_ok());

    unsafe {
        env::remove_var(ENV_MAX_FRAMES);
        env::remove_var(ENV_DESIRED_INTERVAL);
    }
}
