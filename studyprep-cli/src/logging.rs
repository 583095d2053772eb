// ============================================================================
// studyprep-cli/src/logging.rs
// ============================================================================
//
// LOGGING UTILITIES: Logger setup and timestamp helpers
//
// The application uses the `log` facade with `env_logger` as the backend.
// Default level is info, `--verbose` raises it to debug, and RUST_LOG
// overrides both:
// - RUST_LOG=warn: Only warnings and errors
// - RUST_LOG=debug: Includes the ffmpeg/ffprobe command lines
// - RUST_LOG=trace: Includes raw ffmpeg log events

use console::style;
use log::LevelFilter;
use std::io::Write;

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Level used when RUST_LOG is not set.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes env_logger on stderr with colored level tags.
pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default_level(verbose))
        .parse_default_env()
        .format(|buf, record| {
            let level = match record.level() {
                log::Level::Error => style("ERROR").red().bold(),
                log::Level::Warn => style("WARN ").yellow(),
                log::Level::Info => style("INFO ").green(),
                log::Level::Debug => style("DEBUG").blue(),
                log::Level::Trace => style("TRACE").magenta(),
            };
            writeln!(buf, "{} {} {}", buf.timestamp_seconds(), level, record.args())
        });

    // A logger may already be installed when running under a test harness.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_shape() {
        let ts = get_timestamp();
        assert_eq!(ts.len(), 15);
        assert_eq!(ts.as_bytes()[8], b'_');
        assert!(ts.chars().filter(|c| *c != '_').all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_verbose_raises_level() {
        assert_eq!(default_level(false), LevelFilter::Info);
        assert_eq!(default_level(true), LevelFilter::Debug);
    }
}
