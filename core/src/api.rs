//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `tping_core::api` instead of reaching into internal modules.

pub use crate::config::{
    load_default, AppConfig, ClassifyConfig, ColorMode, LoggingConfig, OutputConfig,
    RunnerConfig,
};
pub use crate::error::{CliError, RunnerError};
pub use crate::format::{Classification, LineClassifier, LineFormatter, Palette};
pub use crate::runner::{
    ctrl_c_interrupts, run_session, ExitReport, Interrupts, LineReader, RunOutcome,
    RunSessionArgs, RunnerPlugin, RunnerSession, RunnerStartArgs,
};
