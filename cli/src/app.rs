//! Wires configuration, terminal capability and plugins into one streaming run.
use tping_core::api as core_api;
use tping_plugins::factory;

use crate::commands::cli::Args;
use crate::terminal;

#[tracing::instrument(name = "cli.run_app", skip(args, cfg))]
pub async fn run_app(args: Args, cfg: &core_api::AppConfig) -> Result<i32, core_api::CliError> {
    let color = terminal::color_capability(cfg.output.color);
    let formatter = core_api::LineFormatter::new(
        core_api::Palette::for_capability(color),
        factory::build_classifier(cfg),
    );
    let runner = factory::build_runner();
    tracing::debug!(
        color,
        classifier = formatter.classifier_name(),
        runner = runner.name(),
        "run initialized"
    );

    let outcome = core_api::run_session(core_api::RunSessionArgs {
        runner: &*runner,
        start: core_api::RunnerStartArgs {
            program: cfg.runner.program.clone(),
            args: args.ping_args,
            inherit_stderr: cfg.runner.inherit_stderr,
        },
        formatter: &formatter,
        out: tokio::io::stdout(),
        interrupts: cfg
            .runner
            .drain_on_interrupt
            .then(core_api::ctrl_c_interrupts),
    })
    .await?;

    Ok(exit_code_for_outcome(
        &outcome,
        cfg.runner.propagate_exit_code,
    ))
}

/// Exit code used after an interrupted run when the child's status is mirrored.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// The child's failure is already reported on stdout; the wrapper itself only fails
/// when asked to mirror the child's status.
pub fn exit_code_for_outcome(outcome: &core_api::RunOutcome, propagate: bool) -> i32 {
    if !propagate {
        return 0;
    }
    if outcome.interrupted {
        return INTERRUPTED_EXIT_CODE;
    }
    if outcome.success {
        return 0;
    }
    outcome.exit_code.filter(|c| *c != 0).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(success: bool, exit_code: Option<i32>) -> core_api::RunOutcome {
        core_api::RunOutcome {
            exit_code,
            success,
            lines: 3,
            duration_ms: 10,
            interrupted: false,
        }
    }

    fn interrupted(success: bool, exit_code: Option<i32>) -> core_api::RunOutcome {
        core_api::RunOutcome {
            interrupted: true,
            ..outcome(success, exit_code)
        }
    }

    #[test]
    fn child_failure_is_not_propagated_by_default() {
        assert_eq!(exit_code_for_outcome(&outcome(false, Some(1)), false), 0);
        assert_eq!(exit_code_for_outcome(&outcome(true, Some(0)), true), 0);
    }

    #[test]
    fn propagation_mirrors_child_code() {
        assert_eq!(exit_code_for_outcome(&outcome(false, Some(2)), true), 2);
        // Terminated by a signal: no code available.
        assert_eq!(exit_code_for_outcome(&outcome(false, None), true), 1);
    }

    #[test]
    fn interrupted_runs_exit_130_only_when_mirroring() {
        assert_eq!(exit_code_for_outcome(&interrupted(true, Some(0)), true), 130);
        assert_eq!(exit_code_for_outcome(&interrupted(false, None), true), 130);
        assert_eq!(exit_code_for_outcome(&interrupted(false, None), false), 0);
    }
}
