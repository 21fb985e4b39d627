mod command;
mod json;
mod server;

use crate::game::GameConfig;

pub use self::server::Server;

pub fn run(address: String, config: GameConfig) {
    let mut server = Server::new(config);
    server.run(address);
}
