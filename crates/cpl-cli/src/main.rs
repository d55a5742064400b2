use clap::Parser;

use cpl_cli::{commands, tracing_setup, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref(), cli.db.as_deref())?;
    tracing_setup::init_tracing(&config.observability);
    tracing::debug!(version = cpl_core::constants::VERSION, "cpl starting");

    let output = commands::run(&config, cli.command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
