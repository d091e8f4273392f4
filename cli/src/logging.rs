//! Tracing setup. Logs never touch stdout, which carries the decorated ping stream.
//!
//! ping's own stderr is inherited onto our stderr, so console logs are only written
//! there when a person is watching (stderr is a terminal) or `RUST_LOG` asks for them.
use std::path::PathBuf;

use tping_core::config::LoggingConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

/// Where log records go for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTargets {
    pub filter: String,
    pub console: bool,
    pub file_dir: Option<PathBuf>,
}

pub fn plan_targets(
    logging: &LoggingConfig,
    rust_log: Option<&str>,
    stderr_is_tty: bool,
) -> Result<Option<LogTargets>, String> {
    if !logging.enabled {
        return Ok(None);
    }
    if !logging.console && !logging.file {
        return Err("logging disabled for both console and file".to_string());
    }

    let rust_log = rust_log.map(str::trim).filter(|v| !v.is_empty());
    let console = logging.console && (stderr_is_tty || rust_log.is_some());
    let file_dir = logging.file.then(|| log_dir(logging));
    if !console && file_dir.is_none() {
        return Ok(None);
    }

    Ok(Some(LogTargets {
        filter: rust_log.unwrap_or(&logging.level).to_string(),
        console,
        file_dir,
    }))
}

fn log_dir(logging: &LoggingConfig) -> PathBuf {
    match logging
        .directory
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(d) => PathBuf::from(d),
        None => std::env::temp_dir().join("tping"),
    }
}

pub fn init_tracing(logging: &LoggingConfig) -> Result<(), String> {
    let stderr_is_tty = atty::is(atty::Stream::Stderr);
    let rust_log = std::env::var("RUST_LOG").ok();
    let Some(targets) = plan_targets(logging, rust_log.as_deref(), stderr_is_tty)? else {
        return Ok(());
    };

    let filter = EnvFilter::try_new(&targets.filter).map_err(|e| e.to_string())?;

    let file_writer = match &targets.file_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|e| format!("create log dir failed: {e}"))?;
            let file_name = format!("tping.{}.log", std::process::id());
            let (non_blocking, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            let _ = LOG_GUARD.set(guard);
            Some(non_blocking)
        }
        None => None,
    };

    let console_layer = targets.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(stderr_is_tty)
    });

    let file_layer = file_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(console: bool, file: bool) -> LoggingConfig {
        LoggingConfig {
            console,
            file,
            directory: Some("/var/log/tping".to_string()),
            ..LoggingConfig::default()
        }
    }

    #[test]
    fn console_follows_stderr_terminal() {
        let t = plan_targets(&logging(true, false), None, true).unwrap().unwrap();
        assert!(t.console);
        assert_eq!(t.filter, "warn");

        assert_eq!(plan_targets(&logging(true, false), None, false).unwrap(), None);
    }

    #[test]
    fn rust_log_forces_console_and_overrides_level() {
        let t = plan_targets(&logging(true, false), Some("tping_core=debug"), false)
            .unwrap()
            .unwrap();
        assert!(t.console);
        assert_eq!(t.filter, "tping_core=debug");

        let t = plan_targets(&logging(true, false), Some("  "), true).unwrap().unwrap();
        assert_eq!(t.filter, "warn");
    }

    #[test]
    fn file_target_uses_configured_directory() {
        let t = plan_targets(&logging(true, true), None, false).unwrap().unwrap();
        assert!(!t.console);
        assert_eq!(t.file_dir, Some(PathBuf::from("/var/log/tping")));
    }

    #[test]
    fn disabled_or_contradictory_settings() {
        let off = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        assert_eq!(plan_targets(&off, Some("debug"), true).unwrap(), None);
        assert!(plan_targets(&logging(false, false), None, true).is_err());
    }
}
