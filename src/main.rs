use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use bitboard_chess::config::{CliArgs, GameConfig};
use bitboard_chess::orchestrator::Orchestrator;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = GameConfig::from(CliArgs::parse());

    let outcome = match Orchestrator::from_config(&config).and_then(Orchestrator::play) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let line: Vec<String> = outcome.moves.iter().map(|mv| mv.to_string()).collect();
    info!("Moves: {}", line.join(" "));
    info!("Final position: {}", outcome.final_fen);
    ExitCode::SUCCESS
}
