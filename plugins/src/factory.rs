use tping_core::api::{AppConfig, LineClassifier, RunnerPlugin};

use crate::classify::KeywordClassifier;
use crate::runner::PingRunnerPlugin;

/// Program, stderr policy and arguments travel per run in `RunnerStartArgs`.
pub fn build_runner() -> Box<dyn RunnerPlugin> {
    Box::new(PingRunnerPlugin)
}

pub fn build_classifier(cfg: &AppConfig) -> Box<dyn LineClassifier> {
    Box::new(KeywordClassifier::from_config(&cfg.classify))
}
