//! Console Referee Binary
//!
//! Plays one match of rock-paper-scissors-plus on stdin/stdout.

use clap::Parser;
use rps_plus::{run_match, ConsoleError, Referee, RefereeConfig};

#[derive(Parser)]
#[command(author, version, about = "Best-of-three rock-paper-scissors-plus against a random bot", long_about = None)]
struct Args {
    /// Seed the bot for a reproducible match
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the rules banner
    #[arg(long)]
    no_rules: bool,

    /// Log each round to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), ConsoleError> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = RefereeConfig {
        seed: args.seed,
        show_rules: !args.no_rules,
    };
    let mut referee = Referee::from_config(&config);
    log::info!("opponent seed {}", referee.opponent().seed());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match run_match(&mut referee, &config, stdin.lock(), stdout.lock()) {
        Ok(_) => Ok(()),
        Err(err) => {
            log::error!("{err}");
            Err(err)
        }
    }
}
