use crate::common::{PlanetId, PlayerId, Position};
use crate::game::cadence::Cadence;

/// What an arriving ship did to the planet it reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arrival {
    /// Same owner: the ship joined the garrison.
    Reinforced,
    /// Hostile ship absorbed, garrison lost one unit.
    Attrited,
    /// Hostile ship landed on an empty planet and took it.
    Captured { previous_owner: Option<PlayerId> }
}

#[derive(Clone, Debug)]
pub struct Planet {
    id: PlanetId,
    position: Position,
    radius: f64,
    score: u32,
    owner: Option<PlayerId>,
    ships_per_tick: u32,
    production: Cadence,
    spawn_rate: f64,
    selected: bool,
    spawn_in_progress: bool
}

impl Planet {
    pub fn new(id: PlanetId, position: Position, radius: f64) -> Planet {
        Planet {
            id,
            position,
            radius,
            score: 0,
            owner: None,
            ships_per_tick: 5,
            production: Cadence::primed(1.0),
            spawn_rate: 0.5,
            selected: false,
            spawn_in_progress: false
        }
    }

    pub fn with_production(mut self, ships_per_tick: u32, tick_interval: f64) -> Planet {
        self.ships_per_tick = ships_per_tick;
        self.production = Cadence::primed(tick_interval);
        self
    }

    pub fn with_spawn_rate(mut self, spawn_rate: f64) -> Planet {
        self.spawn_rate = spawn_rate;
        self
    }

    pub fn with_score(mut self, score: u32) -> Planet {
        self.score = score;
        self
    }

    pub fn with_owner(mut self, owner: PlayerId) -> Planet {
        self.owner = Some(owner);
        self
    }

    pub fn id(&self) -> PlanetId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    pub fn is_owned_by(&self, player_id: PlayerId) -> bool {
        self.owner == Some(player_id)
    }

    pub fn is_neutral(&self) -> bool {
        self.owner.is_none()
    }

    pub fn spawn_rate(&self) -> f64 {
        self.spawn_rate
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn is_spawn_in_progress(&self) -> bool {
        self.spawn_in_progress
    }

    pub fn set_spawn_in_progress(&mut self, in_progress: bool) {
        self.spawn_in_progress = in_progress;
    }

    /// Adds `ships_per_tick` for every elapsed production tick. Neutral
    /// planets never produce.
    pub fn accrue_production(&mut self, elapsed_ticks: u32) -> u32 {
        if self.owner.is_none() {
            return 0;
        }

        let produced = self.ships_per_tick.saturating_mul(elapsed_ticks);
        self.score = self.score.saturating_add(produced);
        produced
    }

    /// Runs the planet's own production clock for `dt` seconds.
    pub fn advance_production(&mut self, dt: f64) -> u32 {
        let ticks = self.production.advance(dt);
        self.accrue_production(ticks)
    }

    /// Unconditional reassignment; the garrison is kept as is.
    pub fn change_owner(&mut self, owner: PlayerId) -> Option<PlayerId> {
        let previous = self.owner;
        self.owner = Some(owner);
        self.selected = false;
        previous
    }

    /// Score weighted by spawn rate, the strength a dispatch could commit.
    pub fn dispatch_strength(&self) -> f64 {
        self.score as f64 * self.spawn_rate
    }

    pub fn dispatch_count(&self) -> u32 {
        self.dispatch_strength().floor() as u32
    }

    pub fn take_ship(&mut self) -> bool {
        if self.score == 0 {
            return false;
        }

        self.score -= 1;
        true
    }

    /// Resolves a single ship of `ship_owner` reaching this planet.
    pub fn swallow_ship(&mut self, ship_owner: PlayerId) -> Arrival {
        if self.owner == Some(ship_owner) {
            self.score = self.score.saturating_add(1);
            return Arrival::Reinforced;
        }

        if self.score == 0 {
            let previous_owner = self.change_owner(ship_owner);
            self.score = 1;
            Arrival::Captured { previous_owner }
        } else {
            self.score -= 1;
            Arrival::Attrited
        }
    }
}
