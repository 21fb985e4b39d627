use std::io;

use rustc_serialize::json::ParserError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseCommandError {
    #[error("malformed json: {0}")]
    ParserError(ParserError),

    #[error("broken command: {0}")]
    BrokenCommand(ws::Error),

    #[error("missed property `{0}`")]
    MissedProperty(String),

    #[error("incompatible type of property `{0}`")]
    IncompatibleType(String),

    #[error("unsupported action `{0}`")]
    UnsupportedAction(String)
}

pub type ParseCommandResult<T> = Result<T, ParseCommandError>;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("missing instance of settings for the {0}")]
    MissingProfile(&'static str),

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),

    #[error("layout infeasible: placed {placed} of {requested} planets, gave up after {attempts} attempts")]
    LayoutInfeasible {
        requested: usize,
        placed: usize,
        attempts: usize
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] io::Error),

    #[error("cannot parse config: {0}")]
    Parse(#[from] ParseCommandError),

    #[error("invalid config value: {0}")]
    Invalid(String)
}
