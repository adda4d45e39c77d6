use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use wheel_of_the_year::{
    parse_timestamp, poll_once, register_card_or_warn, run, Config, JsonFileRegistry,
    JsonLinesSink,
};

#[derive(Parser, Debug)]
#[command(name = "wheel-of-the-year", version, about = "Publish Wheel of the Year sensor states as JSON lines")]
struct Args {
    /// Publish a single batch and exit.
    #[arg(long)]
    once: bool,

    /// Evaluate at this instant instead of the local clock (implies --once).
    #[arg(long, value_name = "TIMESTAMP")]
    at: Option<String>,

    #[arg(long, value_name = "SECS")]
    interval_secs: Option<u64>,

    /// Dashboard resource storage file to register the card in.
    #[arg(long, value_name = "PATH")]
    resources: Option<PathBuf>,

    #[arg(long)]
    card_version: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = Config::from_env().context("reading configuration from environment")?;
    if let Some(secs) = args.interval_secs {
        config.scan_interval = Duration::from_secs(secs);
    }
    if let Some(version) = args.card_version {
        config.card_version = version;
    }
    if args.resources.is_some() {
        config.resources_path = args.resources;
    }
    if args.once {
        config.max_ticks = Some(1);
    }
    config.validate().context("invalid configuration")?;

    if let Some(path) = &config.resources_path {
        let mut registry = JsonFileRegistry::new(path);
        register_card_or_warn(&mut registry, &config.card_version);
    }

    let mut sink = JsonLinesSink::new(io::stdout().lock());

    if let Some(raw) = args.at {
        let now = parse_timestamp(&raw).with_context(|| format!("parsing --at {raw:?}"))?;
        poll_once(&now, &mut sink)?;
        return Ok(());
    }

    run(&config, &mut sink).await?;
    Ok(())
}
