//! Arena Duel entry point
//!
//! Runs the simulation headless with scripted input. The opponent is driven
//! by an external program when `--oracle` is given, otherwise by the
//! built-in chase oracle.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env};
use log::LevelFilter;

use arena_duel::SimConfig;
use arena_duel::oracle::{ArgMode, AsyncOracle, ChaseOracle, DecisionOracle, ProcessOracle};
use arena_duel::presentation::{HeadlessPresenter, InputScript};
use arena_duel::runner::{Simulation, run};
use arena_duel::sim::TickInput;

/// A two-actor arena shooter with an externally decided opponent
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Oracle program, run once per poll with the world state as its last argument
    #[arg(long)]
    oracle: Option<String>,

    /// Argument passed to the oracle before the state (repeatable)
    #[arg(long = "oracle-arg", value_name = "ARG")]
    oracle_args: Vec<String>,

    /// Launch the oracle through the platform shell with a quoted payload
    #[arg(long)]
    shell: bool,

    /// Query the oracle on a worker thread instead of blocking the tick
    #[arg(long)]
    async_oracle: bool,

    /// Reply deadline for --async-oracle before the opponent stays put
    #[arg(long, default_value_t = 500)]
    oracle_timeout_ms: u64,

    /// JSON file overriding simulation tunables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Quit after this many ticks
    #[arg(long, default_value_t = 3600)]
    max_ticks: u64,

    /// Press fire every N ticks (at least 2, so each press is a new edge)
    #[arg(long, value_parser = clap::value_parser!(u64).range(2..))]
    fire_every: Option<u64>,

    /// Hold a direction for the whole run (repeatable)
    #[arg(long, value_enum, value_name = "DIR")]
    hold: Vec<Direction>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let env = Env::default().default_filter_or(level.to_string());
    let _ = Builder::from_env(env).try_init();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Direction {
    Up,
    Down,
    Left,
    Right,
}

fn held_input(dirs: &[Direction]) -> TickInput {
    let mut input = TickInput::default();
    for dir in dirs {
        match dir {
            Direction::Up => input.up = true,
            Direction::Down => input.down = true,
            Direction::Left => input.left = true,
            Direction::Right => input.right = true,
        }
    }
    input
}

fn build_oracle(args: &Args) -> Box<dyn DecisionOracle> {
    let inner: Box<dyn DecisionOracle + Send> = match &args.oracle {
        Some(program) => {
            let mode = if args.shell { ArgMode::Shell } else { ArgMode::Direct };
            log::info!("Using oracle program `{}` ({:?})", program, mode);
            Box::new(
                ProcessOracle::new(program.clone())
                    .with_args(args.oracle_args.iter().cloned())
                    .with_mode(mode),
            )
        }
        None => {
            log::info!("No --oracle given; using built-in chase oracle");
            Box::new(ChaseOracle)
        }
    };

    if !args.async_oracle {
        return inner;
    }
    Box::new(AsyncOracle::spawn(
        inner,
        Duration::from_millis(args.oracle_timeout_ms),
    ))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => match SimConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };

    let mut sim = Simulation::new(config, build_oracle(&args));
    let mut presenter = HeadlessPresenter::new(InputScript {
        hold: held_input(&args.hold),
        fire_every: args.fire_every,
        max_ticks: Some(args.max_ticks),
    });

    let outcome = run(&mut sim, &mut presenter);
    println!("{:?}", outcome);
    ExitCode::SUCCESS
}
