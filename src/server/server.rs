use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver as ChannelReceiver};
use std::thread;
use std::time::Duration;

use ws::{listen, Sender};

use crate::common::websocket_handler::WebsocketHandler;
use crate::game::cadence::Cadence;
use crate::game::{GameConfig, GameEvent, Simulation};
use crate::server::command::Command;
use crate::server::json;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ServerState {
    Waiting,
    Playing,
    Finished
}

impl ServerState {
    fn name(&self) -> &'static str {
        match *self {
            ServerState::Waiting => "waiting",
            ServerState::Playing => "playing",
            ServerState::Finished => "finished"
        }
    }
}

pub struct Server {
    state: ServerState,
    config: GameConfig,
    connections: HashMap<u32, Sender>,
    controller: Option<u32>,
    simulation: Option<Simulation>,
    ai_clock: Cadence
}

impl Server {
    pub fn new(config: GameConfig) -> Self {
        let ai_delay = config.ai_delay;

        Server {
            state: ServerState::Waiting,
            config,
            connections: HashMap::new(),
            controller: None,
            simulation: None,
            ai_clock: Cadence::primed(ai_delay)
        }
    }

    pub fn run(&mut self, address: String) {
        let (tx, rx) = channel::<Command>();

        thread::spawn(move || {
            if let Err(error) = listen(&address[..], |sender| WebsocketHandler::new(sender, tx.clone())) {
                error!("Websocket listener on {} failed: {}", address, error);
            }
        });

        let mut time = time::precise_time_s();
        loop {
            self.process(&rx);

            let dt = time::precise_time_s() - time;
            time = time::precise_time_s();

            self.update(dt);
            self.render();

            thread::sleep(FRAME);
        }
    }

    fn process(&mut self, rx: &ChannelReceiver<Command>) {
        while let Ok(command) = rx.try_recv() {
            let connection_id = command.sender().connection_id();
            let is_controller = self.controller == Some(connection_id);

            match command {
                Command::Connect { sender } => self.add_connection(sender),

                Command::Disconnect { .. } => self.remove_connection(connection_id),

                Command::Ready { sender } => {
                    if is_controller && self.state != ServerState::Playing {
                        self.start_game(&sender);
                    }
                },

                Command::Select { planet_id, selected, .. } => {
                    if is_controller {
                        self.apply(|simulation| {
                            let player_id = simulation.player().id();
                            simulation.select_planet(player_id, planet_id, selected)
                        });
                    }
                },

                Command::Dispatch { target_id, .. } => {
                    if is_controller {
                        self.apply(|simulation| {
                            let player_id = simulation.player().id();
                            simulation.dispatch_selected(player_id, target_id)
                        });
                    }
                },

                Command::Click { planet_id, .. } => {
                    if is_controller {
                        self.apply(|simulation| {
                            let player_id = simulation.player().id();
                            simulation.click_planet(player_id, planet_id)
                        });
                    }
                }
            }
        }
    }

    fn apply<F>(&mut self, command: F)
        where F: FnOnce(&mut Simulation) -> Vec<GameEvent>
    {
        if self.state != ServerState::Playing {
            return;
        }

        if let Some(simulation) = self.simulation.as_mut() {
            let events = command(simulation);
            log_events(&events);
        }
    }

    fn start_game(&mut self, sender: &Sender) {
        match Simulation::initialize(&self.config) {
            Ok(simulation) => {
                self.ai_clock = Cadence::primed(simulation.ai().ai_delay());
                self.simulation = Some(simulation);
                self.state = ServerState::Playing;
            },

            Err(error) => {
                error!("Cannot start game: {}", error);

                if let Err(send_error) = sender.send(json::format_error(&error.to_string())) {
                    warn!("Cannot report setup error to connection {}: {}", sender.connection_id(), send_error);
                }
            }
        }
    }

    fn update(&mut self, dt: f64) {
        if self.state != ServerState::Playing {
            return;
        }

        let simulation = match self.simulation.as_mut() {
            Some(simulation) => simulation,
            None => return
        };

        let mut events = simulation.tick(dt);

        for _ in 0..self.ai_clock.advance(dt) {
            events.extend(simulation.plan_ai_move());
        }

        log_events(&events);

        if simulation.outcome().is_some() {
            self.state = ServerState::Finished;
        }
    }

    fn render(&self) {
        if self.connections.is_empty() {
            return;
        }

        let (planets_json, ships_json, winner) = match self.simulation {
            Some(ref simulation) => (
                json::format_planets(&simulation.planet_views()),
                json::format_ships(&simulation.ship_views()),
                simulation.outcome().map(|outcome| outcome.name())
            ),
            None => ("[]".to_string(), "[]".to_string(), None)
        };

        let state_json = json::format_state(self.state.name(), winner, &planets_json, &ships_json);

        for (connection_id, sender) in &self.connections {
            if let Err(error) = sender.send(state_json.clone()) {
                warn!("Cannot send state to connection {}: {}", connection_id, error);
            }
        }
    }

    fn add_connection(&mut self, sender: Sender) {
        let connection_id = sender.connection_id();

        if self.controller.is_none() {
            info!("Connection {} controls the player", connection_id);
            self.controller = Some(connection_id);
        }

        self.connections.insert(connection_id, sender);
    }

    fn remove_connection(&mut self, connection_id: u32) {
        self.connections.remove(&connection_id);

        if self.controller == Some(connection_id) {
            info!("Controller {} left, game abandoned", connection_id);

            self.controller = None;
            self.simulation = None;
            self.state = ServerState::Waiting;
        }
    }
}

fn log_events(events: &[GameEvent]) {
    for event in events.iter().filter(|event| !event.is_terminal()) {
        trace!("{:?}", event);
    }
}
