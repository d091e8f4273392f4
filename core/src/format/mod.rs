//! Line decoration: classification contract, color palette and the formatter that
//! turns one raw ping line into one display line.

mod classify;
mod formatter;
mod palette;

pub use classify::{Classification, LineClassifier};
pub use formatter::{LineFormatter, TIMESTAMP_FORMAT};
pub use palette::Palette;
