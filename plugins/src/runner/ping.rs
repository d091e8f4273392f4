use anyhow::Result;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncRead;
use tokio::process::{Child, Command};

use tping_core::api::{ExitReport, RunnerPlugin, RunnerSession, RunnerStartArgs};

/// Launches the system ping utility with the caller's arguments untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct PingRunnerPlugin;

#[async_trait]
impl RunnerPlugin for PingRunnerPlugin {
    fn name(&self) -> &str {
        "ping"
    }

    async fn start_session(&self, args: &RunnerStartArgs) -> Result<Box<dyn RunnerSession>> {
        let stderr = if args.inherit_stderr {
            Stdio::inherit()
        } else {
            Stdio::null()
        };

        let child = Command::new(&args.program)
            .args(&args.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(stderr)
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| spawn_error(&args.program, e))?;

        tracing::debug!(program = %args.program, pid = ?child.id(), "spawned");
        Ok(Box::new(PingRunnerSession { child }))
    }
}

fn spawn_error(program: &str, e: std::io::Error) -> anyhow::Error {
    match e.kind() {
        std::io::ErrorKind::NotFound => {
            anyhow::anyhow!("executable '{program}' not found on PATH ({e})")
        }
        std::io::ErrorKind::PermissionDenied => {
            anyhow::anyhow!("'{program}' cannot be executed ({e})")
        }
        _ => anyhow::anyhow!("{program}: {e}"),
    }
}

struct PingRunnerSession {
    child: Child,
}

#[async_trait]
impl RunnerSession for PingRunnerSession {
    fn pid(&self) -> Option<u32> {
        self.child.id()
    }

    fn stdout(&mut self) -> Option<Box<dyn AsyncRead + Unpin + Send>> {
        self.child
            .stdout
            .take()
            .map(|s| Box::new(s) as Box<dyn AsyncRead + Unpin + Send>)
    }

    async fn wait(&mut self) -> Result<ExitReport> {
        let status = self.child.wait().await?;
        Ok(ExitReport::from_status(status))
    }

    async fn kill(&mut self) -> Result<()> {
        self.child.kill().await?;
        Ok(())
    }
}
