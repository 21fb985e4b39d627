use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::common::color::Color;
use crate::common::position::heading_degrees;
use crate::common::{Id, PlanetId, PlayerId, Position, SetupError};
use crate::game::ai::{self, DispatchOrder};
use crate::game::config::GameConfig;
use crate::game::event::GameEvent;
use crate::game::layout::{self, Bounds};
use crate::game::planet::{Arrival, Planet};
use crate::game::player::PlayerProfile;
use crate::game::ship::Ship;
use crate::game::victory::{self, Outcome};
use crate::game::wave::{self, Wave};
use crate::game::{AI_ID, PLAYER_ID};

/// Render-facing snapshot of a planet.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetView {
    pub id: PlanetId,
    pub position: Position,
    pub radius: f64,
    pub owner: Option<PlayerId>,
    pub score: u32,
    pub selected: bool,
    pub color: Color
}

/// Render-facing snapshot of a ship.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipView {
    pub id: Id,
    pub origin: PlanetId,
    pub target: PlanetId,
    pub position: Position,
    pub heading: f64,
    pub owner: PlayerId,
    pub color: Color
}

pub struct SimulationBuilder {
    config: GameConfig,
    player: Option<PlayerProfile>,
    ai: Option<PlayerProfile>,
    planets: Option<Vec<Planet>>
}

impl SimulationBuilder {
    pub fn new(config: GameConfig) -> SimulationBuilder {
        SimulationBuilder {
            config,
            player: None,
            ai: None,
            planets: None
        }
    }

    pub fn player(mut self, player: PlayerProfile) -> SimulationBuilder {
        self.player = Some(player);
        self
    }

    pub fn ai(mut self, ai: PlayerProfile) -> SimulationBuilder {
        self.ai = Some(ai);
        self
    }

    /// Uses a fixed board instead of procedural placement. Planet ids must
    /// match their index; owners and scores are taken as given.
    pub fn planets(mut self, planets: Vec<Planet>) -> SimulationBuilder {
        self.planets = Some(planets);
        self
    }

    pub fn build(self) -> Result<Simulation, SetupError> {
        let player = self.player.ok_or(SetupError::MissingProfile("player"))?;
        let ai = self.ai.ok_or(SetupError::MissingProfile("AI"))?;

        if player.id() == ai.id() {
            return Err(SetupError::InvalidConfig(format!("player and AI share id {}", player.id())));
        }

        let config = self.config;
        config.validate().map_err(SetupError::InvalidConfig)?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy()
        };

        let planets = match self.planets {
            Some(planets) => {
                if let Some(planet) = planets.iter().enumerate().find(|&(index, planet)| planet.id() != index) {
                    return Err(SetupError::InvalidConfig(format!(
                        "planet id {} does not match its position {}",
                        planet.1.id(),
                        planet.0
                    )));
                }

                let known = [player.id(), ai.id()];
                if let Some(planet) = planets.iter().find(|planet| planet.owner().map_or(false, |owner| !known.contains(&owner))) {
                    return Err(SetupError::InvalidConfig(format!(
                        "planet {} is owned by unknown player {:?}",
                        planet.id(),
                        planet.owner()
                    )));
                }

                planets
            },

            None => {
                let mut planets = layout::generate(
                    config.planet_count,
                    &config.bounds,
                    &config.planet_template,
                    config.neutral_scores(),
                    config.max_placement_attempts,
                    &mut rng
                )?;

                planets[0].change_owner(player.id());
                planets[0].set_score(config.starting_score);
                planets[1].change_owner(ai.id());
                planets[1].set_score(config.starting_score);

                planets
            }
        };

        info!(
            "New game: {} planets, {} vs {}, seed {:?}",
            planets.len(),
            player.name(),
            ai.name(),
            config.seed
        );

        Ok(Simulation {
            bounds: config.bounds,
            player,
            ai,
            planets,
            ships: BTreeMap::new(),
            waves: vec![],
            next_ship_id: 0,
            outcome: None,
            rng
        })
    }
}

pub struct Simulation {
    bounds: Bounds,
    player: PlayerProfile,
    ai: PlayerProfile,
    planets: Vec<Planet>,
    ships: BTreeMap<Id, Ship>,
    waves: Vec<Wave>,
    next_ship_id: Id,
    outcome: Option<Outcome>,
    rng: StdRng
}

impl Simulation {
    /// Sets up a procedurally generated game with both profiles built from
    /// `config`.
    pub fn initialize(config: &GameConfig) -> Result<Simulation, SetupError> {
        SimulationBuilder::new(config.clone())
            .player(config.player_profile(PLAYER_ID))
            .ai(config.ai_profile(AI_ID))
            .build()
    }

    pub fn builder(config: GameConfig) -> SimulationBuilder {
        SimulationBuilder::new(config)
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn player(&self) -> &PlayerProfile {
        &self.player
    }

    pub fn ai(&self) -> &PlayerProfile {
        &self.ai
    }

    pub fn profile(&self, player_id: PlayerId) -> Option<&PlayerProfile> {
        if self.player.id() == player_id {
            Some(&self.player)
        } else if self.ai.id() == player_id {
            Some(&self.ai)
        } else {
            None
        }
    }

    fn profile_mut(&mut self, player_id: PlayerId) -> Option<&mut PlayerProfile> {
        if self.player.id() == player_id {
            Some(&mut self.player)
        } else if self.ai.id() == player_id {
            Some(&mut self.ai)
        } else {
            None
        }
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn planet(&self, planet_id: PlanetId) -> Option<&Planet> {
        self.planets.get(planet_id)
    }

    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.values()
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    /// First win observed by `tick`, if any.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn planet_views(&self) -> Vec<PlanetView> {
        self.planets
            .iter()
            .map(|planet| PlanetView {
                id: planet.id(),
                position: planet.position(),
                radius: planet.radius(),
                owner: planet.owner(),
                score: planet.score(),
                selected: planet.is_selected(),
                color: self.planet_color(planet)
            })
            .collect()
    }

    pub fn ship_views(&self) -> Vec<ShipView> {
        self.ships
            .values()
            .map(|ship| ShipView {
                id: ship.id(),
                origin: ship.origin(),
                target: ship.target(),
                position: ship.position(),
                heading: heading_degrees(ship.heading()),
                owner: ship.owner(),
                color: self.owner_color(Some(ship.owner()))
            })
            .collect()
    }

    pub fn owner_color(&self, owner: Option<PlayerId>) -> Color {
        owner
            .and_then(|owner| self.profile(owner))
            .map_or(Color::NEUTRAL, |profile| profile.main_color())
    }

    fn planet_color(&self, planet: &Planet) -> Color {
        match planet.owner().and_then(|owner| self.profile(owner)) {
            Some(profile) if planet.is_selected() => profile.highlight_color(),
            Some(profile) => profile.main_color(),
            None => Color::NEUTRAL
        }
    }

    /// Arms or disarms one of `player_id`'s planets. Planets owned by anyone
    /// else are left alone.
    pub fn select_planet(&mut self, player_id: PlayerId, planet_id: PlanetId, selected: bool) -> Vec<GameEvent> {
        let owned = self.planets.get(planet_id).map_or(false, |planet| planet.is_owned_by(player_id));
        if !owned || self.profile(player_id).is_none() {
            return vec![];
        }

        if self.planets[planet_id].is_selected() == selected {
            return vec![];
        }

        self.planets[planet_id].set_selected(selected);

        if let Some(profile) = self.profile_mut(player_id) {
            if selected {
                profile.add_selected(planet_id);
            } else {
                profile.remove_selected(planet_id);
            }
        }

        vec![GameEvent::SelectionChanged { planet: planet_id, selected }]
    }

    /// Sends a wave from every origin to `target`, then clears each origin's
    /// selection.
    pub fn command_dispatch(&mut self, origins: &[PlanetId], target: PlanetId) -> Vec<GameEvent> {
        let mut events = vec![];

        for &origin in origins {
            events.extend(self.spawn_ships(origin, target));

            if let Some(owner) = self.planets.get(origin).and_then(|planet| planet.owner()) {
                events.extend(self.select_planet(owner, origin, false));
            }
        }

        events
    }

    pub fn dispatch_selected(&mut self, player_id: PlayerId, target: PlanetId) -> Vec<GameEvent> {
        let origins = match self.profile(player_id) {
            Some(profile) => profile.selected_planets().to_vec(),
            None => return vec![]
        };

        self.command_dispatch(&origins, target)
    }

    /// A click on one of the player's own planets toggles its selection; a
    /// click anywhere else sends every selected planet there.
    pub fn click_planet(&mut self, player_id: PlayerId, planet_id: PlanetId) -> Vec<GameEvent> {
        let (owned, selected) = match self.planets.get(planet_id) {
            Some(planet) => (planet.is_owned_by(player_id), planet.is_selected()),
            None => return vec![]
        };

        if owned {
            self.select_planet(player_id, planet_id, !selected)
        } else {
            self.dispatch_selected(player_id, planet_id)
        }
    }

    /// Starts a wave from `origin` to `target` carrying
    /// `floor(score * spawn_rate)` ships. No-op while a wave from `origin` is
    /// still launching, for neutral origins and for empty waves.
    pub fn spawn_ships(&mut self, origin: PlanetId, target: PlanetId) -> Vec<GameEvent> {
        if origin == target || target >= self.planets.len() {
            return vec![];
        }

        let (owner, count) = match self.planets.get(origin) {
            Some(planet) if !planet.is_spawn_in_progress() => match planet.owner() {
                Some(owner) => (owner, planet.dispatch_count()),
                None => return vec![]
            },
            _ => return vec![]
        };

        if count == 0 {
            return vec![];
        }

        debug!("Planet {} sends {} ships of player {} to planet {}", origin, count, owner, target);

        self.planets[origin].set_spawn_in_progress(true);

        let mut wave = Wave::new(origin, target, owner, count);
        let mut events = vec![];

        if let Some(event) = self.launch_from(&mut wave) {
            events.push(event);
        }

        if wave.is_exhausted() {
            self.planets[origin].set_spawn_in_progress(false);
        } else {
            self.waves.push(wave);
        }

        events
    }

    /// Runs one AI planning cycle for the AI profile.
    pub fn plan_ai_move(&mut self) -> Vec<GameEvent> {
        let ai_id = self.ai.id();
        self.plan_move_for(ai_id)
    }

    /// Runs one planning cycle on behalf of any side.
    pub fn plan_move_for(&mut self, player_id: PlayerId) -> Vec<GameEvent> {
        match ai::plan(player_id, &self.planets) {
            Some(DispatchOrder { origin, target }) => {
                debug!("Planner for player {} picks {} -> {}", player_id, origin, target);
                self.spawn_ships(origin, target)
            },
            None => vec![]
        }
    }

    /// Advances the world by `dt` seconds: production, pending wave launches,
    /// ship travel and arrivals, then the win check.
    pub fn tick(&mut self, dt: f64) -> Vec<GameEvent> {
        let mut events = vec![];

        for planet in self.planets.iter_mut() {
            planet.advance_production(dt);
        }

        self.advance_waves(&mut events);
        self.advance_ships(dt, &mut events);

        if let Some(outcome) = victory::evaluate(&self.planets, self.player.id(), self.ai.id()) {
            if self.outcome.is_none() {
                info!("Game over, {} wins", outcome.name());
                self.outcome = Some(outcome);
            }

            events.push(outcome.event());
        }

        events
    }

    fn advance_waves(&mut self, events: &mut Vec<GameEvent>) {
        let mut waves = ::std::mem::replace(&mut self.waves, vec![]);

        for wave in waves.iter_mut() {
            if let Some(event) = self.launch_from(wave) {
                events.push(event);
            }
        }

        for wave in waves.iter().filter(|wave| wave.is_exhausted()) {
            self.planets[wave.origin()].set_spawn_in_progress(false);
        }

        waves.retain(|wave| !wave.is_exhausted());
        self.waves = waves;
    }

    fn launch_from(&mut self, wave: &mut Wave) -> Option<GameEvent> {
        let origin = wave.origin();
        let target = wave.target();

        if !wave.launch_one(&mut self.planets[origin]) {
            return None;
        }

        let template = *self.profile(wave.owner())?.ship_template();
        let destination = self.planets[target].position();
        let position = wave::spawn_position(&self.planets[origin], destination, template.radius(), &mut self.rng);

        let id = self.next_ship_id;
        self.next_ship_id += 1;

        let mut ship = Ship::new(id, wave.owner(), origin, target, position, &template);
        ship.rotate_to(destination);
        self.ships.insert(id, ship);

        Some(GameEvent::ShipCreated {
            ship: id,
            origin,
            target,
            owner: wave.owner()
        })
    }

    fn advance_ships(&mut self, dt: f64, events: &mut Vec<GameEvent>) {
        let mut arrived = vec![];

        for ship in self.ships.values_mut() {
            let target = &self.planets[ship.target()];

            ship.move_towards(target.position(), dt);

            if ship.has_arrived(target.position(), target.radius()) {
                arrived.push(ship.id());
            }
        }

        for ship_id in arrived {
            if let Some(ship) = self.ships.remove(&ship_id) {
                self.resolve_arrival(&ship, events);
            }
        }
    }

    fn resolve_arrival(&mut self, ship: &Ship, events: &mut Vec<GameEvent>) {
        let planet_id = ship.target();
        let arrival = self.planets[planet_id].swallow_ship(ship.owner());

        if let Arrival::Captured { previous_owner } = arrival {
            info!("Planet {} captured by player {}", planet_id, ship.owner());

            if let Some(previous) = previous_owner.and_then(|previous| self.profile_mut(previous)) {
                previous.remove_selected(planet_id);
            }

            events.push(GameEvent::OwnerChanged {
                planet: planet_id,
                previous: previous_owner,
                owner: ship.owner()
            });
        }

        events.push(GameEvent::ShipSwallowed { planet: planet_id, ship: ship.id() });
        events.push(GameEvent::ShipDestroyed { ship: ship.id() });
    }
}
