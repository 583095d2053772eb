// studyprep-cli/src/lib.rs
//
// Library portion of the Studyprep CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, PlanArgs, PrepareArgs};
pub use commands::plan::run_plan;
pub use commands::prepare::run_prepare;
