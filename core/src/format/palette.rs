use super::Classification;

/// Escape sequences used to wrap a decorated line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub timestamp: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
    pub neutral: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub const fn ansi() -> Self {
        Self {
            timestamp: "\x1b[33m",
            success: "\x1b[32m",
            failure: "\x1b[31m",
            neutral: "\x1b[37m",
            reset: "\x1b[0m",
        }
    }

    pub const fn plain() -> Self {
        Self {
            timestamp: "",
            success: "",
            failure: "",
            neutral: "",
            reset: "",
        }
    }

    pub const fn for_capability(color: bool) -> Self {
        if color {
            Self::ansi()
        } else {
            Self::plain()
        }
    }

    pub fn color_for(&self, class: Classification) -> &'static str {
        match class {
            Classification::Success => self.success,
            Classification::Failure => self.failure,
            Classification::Neutral => self.neutral,
        }
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::plain()
    }
}
