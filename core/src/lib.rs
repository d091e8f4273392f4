//! Core of `tping`: configuration, error taxonomy, line formatting and the streaming
//! loop that drives one ping child process.

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod runner;
