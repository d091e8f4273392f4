use tping_core::api::{Classification, ClassifyConfig, LineClassifier};

/// Substring rules over a single line, first match wins:
/// any success keyword (case-sensitive), then any failure keyword (case-insensitive).
///
/// The default rule set targets the English Windows `ping` output. Other locales are
/// not detected; supply keywords through `[classify]` in the config instead.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    success: Vec<String>,
    failure: Vec<String>,
}

impl KeywordClassifier {
    pub fn new<S, F>(success: S, failure: F) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            success: success
                .into_iter()
                .map(Into::<String>::into)
                .filter(|k| !k.is_empty())
                .collect(),
            failure: failure
                .into_iter()
                .map(|k| Into::<String>::into(k).to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn from_config(cfg: &ClassifyConfig) -> Self {
        Self::new(cfg.success.iter().cloned(), cfg.failure.iter().cloned())
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::from_config(&ClassifyConfig::default())
    }
}

impl LineClassifier for KeywordClassifier {
    fn name(&self) -> &str {
        "keywords"
    }

    fn classify(&self, line: &str) -> Classification {
        if self.success.iter().any(|k| line.contains(k.as_str())) {
            return Classification::Success;
        }

        let lower = line.to_lowercase();
        if self.failure.iter().any(|k| lower.contains(k.as_str())) {
            return Classification::Failure;
        }

        Classification::Neutral
    }
}
