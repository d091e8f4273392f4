use std::time::Instant;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::RunnerError;
use crate::format::LineFormatter;

use super::interrupt::Interrupts;
use super::io_pump::LineReader;
use super::traits::{RunnerPlugin, RunnerSession};
use super::types::{RunOutcome, RunnerStartArgs};

enum Event {
    Line(std::io::Result<Option<String>>),
    Interrupt(Option<()>),
}

pub struct RunSessionArgs<'a, W> {
    pub runner: &'a dyn RunnerPlugin,
    pub start: RunnerStartArgs,
    pub formatter: &'a LineFormatter,
    pub out: W,
    /// When set, the first interrupt is noted and output keeps draining so the child's
    /// own summary is rendered; the second kills the child. When `None`, interrupts are
    /// left to the default process handling.
    pub interrupts: Option<Interrupts>,
}

/// Starts the child, renders each stdout line as it arrives, then reports the exit status.
#[tracing::instrument(
    name = "core.run_session",
    skip(args),
    fields(runner = args.runner.name(), program = %args.start.program)
)]
pub async fn run_session<W>(args: RunSessionArgs<'_, W>) -> Result<RunOutcome, RunnerError>
where
    W: AsyncWrite + Unpin,
{
    let RunSessionArgs {
        runner,
        start,
        formatter,
        mut out,
        mut interrupts,
    } = args;

    let started = Instant::now();
    let mut session = runner
        .start_session(&start)
        .await
        .map_err(|e| RunnerError::Spawn(format!("{e:#}")))?;
    tracing::info!(pid = ?session.pid(), args = start.args.len(), "ping started");

    let Some(stdout) = session.stdout() else {
        abort_session(&mut *session).await;
        return Err(RunnerError::Pipe("child stdout is not piped".to_string()));
    };

    let mut reader = LineReader::new(stdout);
    let mut lines = 0u64;
    let mut interrupted = false;

    loop {
        let event = match interrupts.as_mut() {
            Some(rx) => tokio::select! {
                biased;
                sig = rx.recv() => Event::Interrupt(sig),
                line = reader.next_line() => Event::Line(line),
            },
            None => Event::Line(reader.next_line().await),
        };

        let next = match event {
            Event::Line(next) => next,
            Event::Interrupt(Some(())) if !interrupted => {
                interrupted = true;
                tracing::info!("interrupt received, draining remaining ping output");
                continue;
            }
            Event::Interrupt(Some(())) => {
                tracing::info!("second interrupt, stopping ping");
                if let Err(e) = session.kill().await {
                    tracing::warn!(error = %e, "failed to kill ping");
                }
                interrupts = None;
                continue;
            }
            Event::Interrupt(None) => {
                interrupts = None;
                continue;
            }
        };

        let line = match next {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "read from ping stdout failed, treating as end of stream");
                break;
            }
        };

        let rendered = formatter.render(&line);
        tracing::trace!(class = ?formatter.classify(&line), "line");
        if let Err(source) = emit(&mut out, &rendered).await {
            abort_session(&mut *session).await;
            return Err(stdout_error(source));
        }
        lines += 1;
    }

    let report = session
        .wait()
        .await
        .map_err(|e| RunnerError::Wait(format!("{e:#}")))?;
    let duration_ms = started.elapsed().as_millis() as u64;
    tracing::info!(
        exit_code = ?report.code,
        lines,
        duration_ms,
        interrupted,
        "ping finished"
    );

    if !report.success {
        emit(&mut out, &format!("Command finished with error: {}", report.detail))
            .await
            .map_err(stdout_error)?;
    }

    Ok(RunOutcome {
        exit_code: report.code,
        success: report.success,
        lines,
        duration_ms,
        interrupted,
    })
}

async fn emit<W>(out: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}

fn stdout_error(source: std::io::Error) -> RunnerError {
    RunnerError::StreamIo {
        stream: "stdout",
        source,
    }
}

async fn abort_session(session: &mut dyn RunnerSession) {
    if let Err(e) = session.kill().await {
        tracing::warn!(error = %e, "failed to kill ping");
    }
    let _ = session.wait().await;
}
