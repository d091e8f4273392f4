/// Category of a single ping output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Success,
    Failure,
    Neutral,
}

/// Maps a line to a category. Must be stateless: the result may only depend on `line`.
pub trait LineClassifier: Send + Sync {
    fn name(&self) -> &str;
    fn classify(&self, line: &str) -> Classification;
}
