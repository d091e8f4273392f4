use chrono::{Local, NaiveDateTime};

use super::{Classification, LineClassifier, Palette};

/// `[YYYY-MM-DD HH:MM:SS]`, local time, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct LineFormatter {
    palette: Palette,
    classifier: Box<dyn LineClassifier>,
}

impl LineFormatter {
    pub fn new(palette: Palette, classifier: Box<dyn LineClassifier>) -> Self {
        Self {
            palette,
            classifier,
        }
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    pub fn classify(&self, line: &str) -> Classification {
        self.classifier.classify(line)
    }

    /// Decorates `line` using the local clock.
    pub fn render(&self, line: &str) -> String {
        self.render_at(line, Local::now().naive_local())
    }

    /// Returns the display text for `line` without a trailing newline.
    ///
    /// Blank or whitespace-only lines come back as an empty string: no timestamp and
    /// no color codes, whatever the palette.
    pub fn render_at(&self, line: &str, at: NaiveDateTime) -> String {
        if line.trim().is_empty() {
            return String::new();
        }

        let p = &self.palette;
        let color = p.color_for(self.classify(line));
        format!(
            "[{}{}{}] {}{}{}",
            p.timestamp,
            at.format(TIMESTAMP_FORMAT),
            p.reset,
            color,
            line,
            p.reset
        )
    }
}
