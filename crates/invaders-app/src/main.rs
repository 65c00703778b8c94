use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;

use clap::Parser;
use log::{error, info};

use invaders_app::config::load_config;
use invaders_app::error::AppError;
use invaders_app::game_loop::{run_game_loop, Pacing};
use invaders_app::input::spawn_stdin_reader;
use invaders_sim::InvadersEngine;

#[derive(Parser, Debug)]
#[command(name = "invaders")]
#[command(about = "Headless Space Invaders simulation streaming JSON snapshots")]
struct Args {
    /// TOML file overriding any subset of the game settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed, overrides the config file
    #[arg(long)]
    seed: Option<u64>,
    /// Run this many fixed-timestep ticks as fast as possible, then exit
    #[arg(long)]
    headless_ticks: Option<u64>,
    /// Emit only every n-th snapshot
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    every: u64,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    let mut engine = InvadersEngine::new(config)?;

    let pacing = match args.headless_ticks {
        Some(ticks) => Pacing::Headless { ticks },
        None => Pacing::RealTime,
    };
    let realtime = pacing == Pacing::RealTime;

    let (cmd_tx, cmd_rx) = mpsc::channel();
    let _reader = spawn_stdin_reader(cmd_tx, realtime)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let every = args.every;

    let summary = run_game_loop(&mut engine, &cmd_rx, pacing, |frame, snapshot| {
        if frame % every != 0 {
            return Ok(());
        }
        serde_json::to_writer(&mut out, snapshot)?;
        out.write_all(b"\n")?;
        if realtime {
            out.flush()?;
        }
        Ok(())
    })?;
    out.flush()?;

    info!(
        "finished after {} frames ({:?}), final score {}",
        summary.frames, summary.exit, summary.final_score
    );
    Ok(())
}
