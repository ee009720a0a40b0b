//! `castbook` terminal entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging, open the cast store.
//! - Hand stdin/stdout to the terminal form.

mod config;
mod terminal;

use anyhow::Context;
use castbook_core::{init_logging, FormController, SqliteCastStore};
use clap::Parser;
use config::Cli;
use log::info;

fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let config = Cli::parse().into_config(&cwd);

    // Logging is diagnostics only; the form still works without it.
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    let store = SqliteCastStore::new(&config.db_path);
    let mut controller = FormController::open(store).with_context(|| {
        format!(
            "failed to open cast store at `{}`",
            config.db_path.display()
        )
    })?;
    info!(
        "event=session_start module=cli status=ok db_path={} records={}",
        config.db_path.display(),
        controller.records().len()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    terminal::run_session(&mut controller, &mut stdin.lock(), &mut stdout.lock())
        .context("terminal session failed")?;

    info!("event=session_end module=cli status=ok");
    log::logger().flush();
    Ok(())
}
