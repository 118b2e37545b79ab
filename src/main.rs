use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use instant::Instant;

use doomtick::debug::TickStats;
use doomtick::scheduler::TICK_SECONDS;
use doomtick::{arena, logging, Scheduler, SimConfig};

/// Headless runner: drives the demo arena against the wall clock.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON simulation config (skill, mode, level, seed)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seconds of wall-clock time to run
    #[arg(short, long, default_value_t = 10.0)]
    seconds: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    log::info!(
        "skill {} | {} | level {:?} | seed {:#x}",
        config.skill,
        config.mode.label(),
        config.level,
        config.seed
    );

    let mut sim = arena::build(config)?;
    let mut scheduler = Scheduler::new();
    let mut stats = TickStats::new();

    let start = Instant::now();
    let mut last = start;
    while start.elapsed().as_secs_f64() < args.seconds {
        let now = Instant::now();
        let delta = now.duration_since(last).as_secs_f64();
        last = now;

        let ticks = scheduler.advance(&mut sim, delta);
        stats.record_frame(ticks, sim.world.len() as usize);
        std::thread::sleep(Duration::from_secs_f64(TICK_SECONDS / 2.0));
    }

    log::info!(
        "done: {} ticks in {:.1}s | {}",
        sim.tick,
        scheduler.elapsed(),
        scheduler.timers.summary()
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);
    log::info!("doomtick starting up");

    if let Err(e) = run(&args) {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}
