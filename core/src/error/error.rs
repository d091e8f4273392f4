use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Runner(#[from] RunnerError),
    #[error("config error: {0}")]
    Config(String),
}

/// Failures of a single ping run. The `Display` text is what the user sees.
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to get command output: {0}")]
    Pipe(String),
    #[error("Failed to start command: {0}")]
    Spawn(String),
    #[error("stream io error: {stream} {source}")]
    StreamIo {
        stream: &'static str,
        source: std::io::Error,
    },
    #[error("Failed to wait for command: {0}")]
    Wait(String),
}

impl CliError {
    /// 0: success
    /// 11: config error
    /// 20: runner start / IO error
    /// 50: internal/uncategorized
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 11,
            CliError::Runner(re) => match re {
                RunnerError::Pipe(_) => 20,
                RunnerError::Spawn(_) => 20,
                RunnerError::StreamIo { .. } => 20,
                RunnerError::Wait(_) => 50,
            },
        }
    }
}
