#[macro_use]
extern crate log;

pub mod common;
pub mod game;
pub mod server;
