//! Command-line shell for Grotto interactive fiction.

mod demo;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use gr_runtime::{Controller, Host, LocalClock, ShellConfig, StdRandom};
use gr_term::StdioPager;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "grotto",
    about = "Grotto: a paged terminal shell for interactive fiction",
    version
)]
struct Cli {
    /// JSON configuration file (lifecycle, capability, pacing, seed)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for reproducible play (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, silent unless `RUST_LOG` asks for more.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), String> {
    let mut config = match &cli.config {
        Some(path) => ShellConfig::load(path).map_err(|e| e.to_string())?,
        None => ShellConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    info!(?config, "starting shell");

    let pager = StdioPager::stdio(&config.capability, config.pacing);
    let host = Host::new(
        pager,
        Box::new(LocalClock),
        Box::new(StdRandom::from_seed(config.seed)),
    );

    let mut controller = Controller::new(demo::Demo::new(), host, config.lifecycle, io::stderr());
    controller.run().map_err(|e| e.to_string())
}
