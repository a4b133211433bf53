//! Headless 2048 runner (default binary).
//!
//! Reads line-delimited JSON commands on stdin and answers with one JSON
//! observation (or error) per line on stdout. Logs go to stderr so stdout
//! stays a clean protocol channel.

use std::io::{self, BufWriter};

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use tile_2048::adapter::{Session, SessionConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play 2048 over a line-delimited JSON protocol on stdio", long_about = None)]
struct Args {
    /// RNG seed (overrides TILE2048_SEED)
    #[arg(long, value_name = "N")]
    seed: Option<u32>,

    /// Log replies as pretty JSON at debug level (overrides TILE2048_PRETTY)
    #[arg(long)]
    pretty: bool,

    /// Log the grid after every move (overrides TILE2048_LOG_BOARD)
    #[arg(long)]
    log_board: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = resolve_config(args, SessionConfig::from_env());
    log::debug!("config: {:?}", config);

    let mut session = Session::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), BufWriter::new(stdout.lock()))
}

fn resolve_config(args: Args, mut config: SessionConfig) -> SessionConfig {
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.pretty |= args.pretty;
    config.log_board |= args.log_board;
    config
}
