#[macro_use]
extern crate log;

use std::env;
use std::process;

use getopts::Options;

use conquest::game::cadence::Cadence;
use conquest::game::{GameConfig, Outcome, Simulation};
use conquest::server;

const HEADLESS_STEP: f64 = 1.0 / 60.0;

fn load_config(path: Option<String>, seed: Option<String>) -> Result<GameConfig, String> {
    let mut config = match path {
        Some(path) => GameConfig::from_file(&path)
            .map_err(|error| format!("{}: {}", path, error))?,
        None => GameConfig::default()
    };

    if let Some(seed) = seed {
        let seed = seed.parse::<u64>()
            .map_err(|error| format!("bad seed `{}`: {}", seed, error))?;
        config.seed = Some(seed);
    }

    Ok(config)
}

/// Plays both sides with the planner until someone wins or `seconds` of game
/// time have passed.
fn run_headless(config: &GameConfig, seconds: f64) -> Result<(), String> {
    let mut simulation = Simulation::initialize(config).map_err(|error| error.to_string())?;

    let player_id = simulation.player().id();
    let mut player_clock = Cadence::primed(simulation.ai().ai_delay());
    let mut ai_clock = Cadence::primed(simulation.ai().ai_delay());

    let mut elapsed = 0.0;
    while elapsed < seconds && simulation.outcome().is_none() {
        simulation.tick(HEADLESS_STEP);

        for _ in 0..player_clock.advance(HEADLESS_STEP) {
            simulation.plan_move_for(player_id);
        }
        for _ in 0..ai_clock.advance(HEADLESS_STEP) {
            simulation.plan_ai_move();
        }

        elapsed += HEADLESS_STEP;
    }

    let summary = match simulation.outcome() {
        Some(Outcome::PlayerWins) => format!("{} wins", simulation.player().name()),
        Some(Outcome::AiWins) => format!("{} wins", simulation.ai().name()),
        None => "no winner".to_string()
    };

    println!("After {:.1}s: {}", elapsed, summary);
    for planet in simulation.planets() {
        let owner = planet.owner()
            .and_then(|owner| simulation.profile(owner))
            .map_or("neutral", |profile| profile.name());

        println!("  planet {:>2} {:>8} {:>5}", planet.id(), owner, planet.score());
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("s", "server", "address and port for server binding", "127.0.0.1:9999");
    opts.optopt("H", "headless", "simulate an AI-vs-AI match for the given game seconds", "SECONDS");
    opts.optopt("c", "config", "game configuration json file", "FILE");
    opts.optopt("", "seed", "seed for planet placement and spawn jitter", "N");
    opts.optflag("h", "help", "print this help message");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => { m }
        Err(f) => {
            eprintln!("{}", f);
            process::exit(2);
        }
    };

    if matches.opt_present("h") {
        let brief = format!("Usage: {} [options]", program);
        print!("{}", opts.usage(&brief));
        return;
    }

    let config = match load_config(matches.opt_str("c"), matches.opt_str("seed")) {
        Ok(config) => config,
        Err(message) => {
            error!("{}", message);
            process::exit(1);
        }
    };

    if let Some(seconds) = matches.opt_str("H") {
        let seconds = match seconds.parse::<f64>() {
            Ok(seconds) => seconds,
            Err(error) => {
                error!("bad headless duration `{}`: {}", seconds, error);
                process::exit(2);
            }
        };

        if let Err(message) = run_headless(&config, seconds) {
            error!("{}", message);
            process::exit(1);
        }
        return;
    }

    match matches.opt_str("s") {
        Some(address) => {
            info!("Starting server on {}", address);
            server::run(address, config);
        },

        None => {
            let brief = format!("Usage: {} [options]", program);
            print!("{}", opts.usage(&brief));
        }
    }
}
