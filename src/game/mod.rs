pub mod ai;
pub mod cadence;
pub mod config;
pub mod event;
pub mod layout;
pub mod planet;
pub mod player;
pub mod ship;
pub mod simulation;
pub mod victory;
pub mod wave;

use crate::common::PlayerId;

pub use self::config::GameConfig;
pub use self::event::GameEvent;
pub use self::simulation::{Simulation, SimulationBuilder};
pub use self::victory::Outcome;

pub const PLAYER_ID: PlayerId = 0;
pub const AI_ID: PlayerId = 1;
