pub mod color;
pub mod error;
pub mod position;
pub mod to_command;
pub mod utils;
pub mod websocket_handler;

pub use self::error::{ConfigError, ParseCommandError, ParseCommandResult, SetupError};
pub use self::position::Position;

pub type Id = u64;
pub type PlanetId = usize;
pub type PlayerId = usize;
