mod interrupt;
mod io_pump;
mod run;
mod traits;
pub mod types;

pub use interrupt::{ctrl_c_interrupts, Interrupts};
pub use io_pump::LineReader;
pub use run::{run_session, RunSessionArgs};
pub use traits::{RunnerPlugin, RunnerSession};
pub use types::{ExitReport, RunOutcome, RunnerStartArgs};
