use std::ffi::OsString;

#[derive(Debug, Clone)]
pub struct RunnerStartArgs {
    pub program: String,
    /// Forwarded verbatim, never inspected.
    pub args: Vec<OsString>,
    pub inherit_stderr: bool,
}

/// Terminal status of the child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitReport {
    pub code: Option<i32>,
    pub success: bool,
    pub detail: String,
}

impl ExitReport {
    pub fn from_status(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
            success: status.success(),
            detail: status.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub exit_code: Option<i32>,
    pub success: bool,
    pub lines: u64,
    pub duration_ms: u64,
    pub interrupted: bool,
}
