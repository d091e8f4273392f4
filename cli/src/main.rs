use std::io::Write;

use tping_cli::commands::cli::Args;
use tping_cli::{app, logging, usage};
use tping_core::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            // Diagnostics belong on the same stream as the decorated ping output.
            let _ = writeln!(std::io::stdout(), "{e}");
            e.exit_code()
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, CliError> {
    let args = Args::from_env();
    if args.is_empty() {
        usage::print_usage();
        return Ok(0);
    }

    let cfg = tping_core::config::load_default().map_err(|e| CliError::Config(format!("{e:#}")))?;
    logging::init_tracing(&cfg.logging).map_err(CliError::Config)?;

    app::run_app(args, &cfg).await
}
