use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub runner: RunnerConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub classify: ClassifyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default = "default_logging_file")]
    pub file: bool,

    /// EnvFilter string, e.g. "warn" or "tping_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses OS temp dir.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_file() -> bool {
    false
}

fn default_logging_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: default_logging_file(),
            level: default_logging_level(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Executable resolved on PATH (or an explicit path).
    #[serde(default = "default_program")]
    pub program: String,

    /// Let ping's stderr reach the terminal. When false it is discarded.
    #[serde(default = "default_inherit_stderr")]
    pub inherit_stderr: bool,

    /// Keep reading after Ctrl-C so ping's own summary is still rendered.
    #[serde(default = "default_drain_on_interrupt")]
    pub drain_on_interrupt: bool,

    /// Exit with ping's exit code instead of 0 when ping fails.
    #[serde(default)]
    pub propagate_exit_code: bool,
}

fn default_program() -> String {
    "ping".to_string()
}

fn default_inherit_stderr() -> bool {
    true
}

fn default_drain_on_interrupt() -> bool {
    true
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            inherit_stderr: default_inherit_stderr(),
            drain_on_interrupt: default_drain_on_interrupt(),
            propagate_exit_code: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(format!(
                "invalid color mode '{other}' (expected auto, always or never)"
            )),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Keyword rules for line classification.
///
/// The defaults match the English output of the Windows `ping` utility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyConfig {
    /// Matched case-sensitively; checked first.
    #[serde(default = "default_success_keywords")]
    pub success: Vec<String>,

    /// Matched case-insensitively.
    #[serde(default = "default_failure_keywords")]
    pub failure: Vec<String>,
}

pub fn default_success_keywords() -> Vec<String> {
    vec!["TTL".to_string()]
}

pub fn default_failure_keywords() -> Vec<String> {
    vec![
        "request timed out".to_string(),
        "general failure".to_string(),
        "unreachable".to_string(),
    ]
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            success: default_success_keywords(),
            failure: default_failure_keywords(),
        }
    }
}
