use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWriteExt, DuplexStream};

use tping_core::api::{
    Classification, ExitReport, LineClassifier, LineFormatter, Palette, RunnerPlugin,
    RunnerSession, RunnerStartArgs,
};

/// Success on "TTL", failure on "timed out", neutral otherwise.
pub struct TestClassifier;

impl LineClassifier for TestClassifier {
    fn name(&self) -> &str {
        "test"
    }

    fn classify(&self, line: &str) -> Classification {
        if line.contains("TTL") {
            Classification::Success
        } else if line.to_lowercase().contains("timed out") {
            Classification::Failure
        } else {
            Classification::Neutral
        }
    }
}

pub fn formatter(color: bool) -> LineFormatter {
    LineFormatter::new(Palette::for_capability(color), Box::new(TestClassifier))
}

pub fn start_args() -> RunnerStartArgs {
    RunnerStartArgs {
        program: "ping".to_string(),
        args: vec!["-n".into(), "2".into(), "10.0.0.1".into()],
        inherit_stderr: false,
    }
}

pub fn exit(code: i32) -> ExitReport {
    ExitReport {
        code: Some(code),
        success: code == 0,
        detail: format!("exit status: {code}"),
    }
}

pub struct FakeRunner {
    pub output: Vec<u8>,
    pub exit: ExitReport,
    pub fail_start: bool,
    pub pipe_stdout: bool,
    /// Keep stdout open after `output` until the session is killed, like `ping -t`.
    pub keep_running: bool,
    pub killed: Arc<AtomicBool>,
}

impl FakeRunner {
    pub fn new(output: &[u8], exit: ExitReport) -> Self {
        Self {
            output: output.to_vec(),
            exit,
            fail_start: false,
            pipe_stdout: true,
            keep_running: false,
            killed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn was_killed(&self) -> bool {
        self.killed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RunnerPlugin for FakeRunner {
    fn name(&self) -> &str {
        "fake"
    }

    async fn start_session(
        &self,
        args: &RunnerStartArgs,
    ) -> anyhow::Result<Box<dyn RunnerSession>> {
        if self.fail_start {
            anyhow::bail!("executable '{}' not found on PATH", args.program);
        }
        let (stdout, writer) = if self.keep_running {
            let (mut writer, reader) = tokio::io::duplex(64 * 1024);
            writer.write_all(&self.output).await?;
            (boxed(reader), Some(writer))
        } else {
            (boxed(std::io::Cursor::new(self.output.clone())), None)
        };

        Ok(Box::new(FakeSession {
            stdout: self.pipe_stdout.then_some(stdout),
            writer,
            exit: self.exit.clone(),
            killed: self.killed.clone(),
        }))
    }
}

fn boxed<R>(rd: R) -> Box<dyn AsyncRead + Unpin + Send>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    Box::new(rd)
}

struct FakeSession {
    stdout: Option<Box<dyn AsyncRead + Unpin + Send>>,
    writer: Option<DuplexStream>,
    exit: ExitReport,
    killed: Arc<AtomicBool>,
}

#[async_trait]
impl RunnerSession for FakeSession {
    fn pid(&self) -> Option<u32> {
        Some(4242)
    }

    fn stdout(&mut self) -> Option<Box<dyn AsyncRead + Unpin + Send>> {
        self.stdout.take()
    }

    async fn wait(&mut self) -> anyhow::Result<ExitReport> {
        if self.killed.load(Ordering::SeqCst) {
            return Ok(ExitReport {
                code: None,
                success: false,
                detail: "signal: 9 (SIGKILL)".to_string(),
            });
        }
        Ok(self.exit.clone())
    }

    async fn kill(&mut self) -> anyhow::Result<()> {
        self.killed.store(true, Ordering::SeqCst);
        // Closing the write side ends the stdout stream.
        self.writer = None;
        Ok(())
    }
}

/// Replaces every `[YYYY-MM-DD HH:MM:SS]` body with `<ts>` so output can be compared.
pub fn mask_timestamps(text: &str) -> String {
    text.lines()
        .map(|line| {
            let Some(rest) = line.strip_prefix('[') else {
                return line.to_string();
            };
            match rest.find(']') {
                Some(end) => format!("[<ts>{}", &rest[end..]),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
