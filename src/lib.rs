//! standup-timesheet library root.
//! Exposes the CLI parser, the Slack client, the extraction core and run().

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod slack;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;
use slack::{STANDUP_BOT_ID, SlackClient};
use tracing_subscriber::EnvFilter;
use ui::messages::{info, success, warning};
use utils::date::{default_from, parse_date, start_of_day_utc};
use utils::path::expand_tilde;

/// Logs go to stderr; RUST_LOG wins over --verbose.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 2️⃣ validate --from before touching the network
    let from = match &cli.from {
        Some(s) => parse_date(s)?,
        None => default_from(),
    };

    // 3️⃣ config file + CLI overrides
    let cfg_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);
    let cfg = Config::load(&cfg_path)?.merge(
        cli.workspace.as_ref(),
        cli.token.as_ref(),
        cli.auth_cookie.as_ref(),
    );

    if cfg.workspace.is_empty() {
        warning("No workspace configured (use --workspace or the config file)");
    }

    // 4️⃣ fetch + extract
    info(format!("Reading standup answers since {from}"));
    let client = SlackClient::new(&cfg);
    let entries = core::Core::build_timesheet(&client, STANDUP_BOT_ID, start_of_day_utc(from))?;

    // 5️⃣ emit
    let out = cli.output.as_deref().map(expand_tilde);
    export::write_json(&entries, out.as_deref(), cli.pretty)?;

    if let Some(p) = &out {
        success(format!(
            "{} timesheet entries written to {}",
            entries.len(),
            p.display()
        ));
    }

    Ok(())
}
