pub mod classify;
pub mod factory;
pub mod runner;
