//! flux-counter: drive a counter and a running sum from the command line.

mod actions;
mod app;
mod logger;
mod reducers;
mod state;
mod step;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use flux_counter_config::CounterConfig;

use app::CounterApp;
use step::Step;

#[derive(Parser)]
#[command(name = "flux-counter")]
#[command(about = "Apply counter and sum steps to a flux store and print the final state")]
struct Cli {
    /// Config file (defaults to ./.flux-counter.toml, then the global config)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting counter, overrides the config
    #[arg(long, allow_negative_numbers = true)]
    counter: Option<i64>,

    /// Starting sum, overrides the config
    #[arg(long, allow_negative_numbers = true)]
    sum: Option<i64>,

    /// Print every dispatched action
    #[arg(long)]
    trace: bool,

    /// Steps to apply in order: inc, dec, double, sum:N, reset, noop
    #[arg(required = true)]
    steps: Vec<Step>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CounterConfig::load_from_path(path)?,
        None => CounterConfig::load()?,
    };

    if let Some(log_file) = logger::init(&config)? {
        eprintln!("Logging to {}", log_file.display());
    }

    log::info!("Starting flux-counter");

    let app = CounterApp::new(
        cli.counter.unwrap_or(config.initial_counter),
        cli.sum.unwrap_or(config.initial_sum),
    )?;

    if cli.trace {
        app.trace();
    }

    app.apply_all(cli.steps)?;

    let state = app.state();
    let output = if config.pretty {
        serde_json::to_string_pretty(&state)
    } else {
        serde_json::to_string(&state)
    }
    .context("Failed to serialize state")?;
    println!("{}", output);

    log::info!(
        "Exiting flux-counter (counter={}, sum={})",
        state::slice_value(&state, reducers::COUNTER_KEY),
        state::slice_value(&state, reducers::SUM_KEY)
    );
    Ok(())
}
