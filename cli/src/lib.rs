//! tping library: exposed so the binary and unit tests share the same modules.

pub mod app;
pub mod commands;
pub mod logging;
pub mod terminal;
pub mod usage;
