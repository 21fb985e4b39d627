use rand::Rng;

use crate::common::{PlanetId, PlayerId, Position};
use crate::game::planet::Planet;

/// Ships of one dispatch still waiting to leave their origin. One unit
/// launches per simulation step.
#[derive(Clone, Debug)]
pub struct Wave {
    origin: PlanetId,
    target: PlanetId,
    owner: PlayerId,
    remaining: u32
}

impl Wave {
    pub fn new(origin: PlanetId, target: PlanetId, owner: PlayerId, count: u32) -> Wave {
        Wave { origin, target, owner, remaining: count }
    }

    pub fn origin(&self) -> PlanetId {
        self.origin
    }

    pub fn target(&self) -> PlanetId {
        self.target
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Takes one unit off the origin for launch. Returns `false` and empties
    /// the wave when the origin can no longer supply it.
    pub fn launch_one(&mut self, origin: &mut Planet) -> bool {
        if self.remaining == 0 {
            return false;
        }

        if !origin.is_owned_by(self.owner) || !origin.take_ship() {
            self.remaining = 0;
            return false;
        }

        self.remaining -= 1;
        true
    }
}

/// Launch point for a ship leaving `origin` towards `destination`: just
/// outside the origin's edge, on the side facing the destination, jittered by
/// up to one origin radius so consecutive ships do not stack.
pub fn spawn_position<R: Rng>(origin: &Planet, destination: Position, ship_radius: f64, rng: &mut R) -> Position {
    let side = if origin.position().x() - destination.x() > 0.0 { -1.5 } else { 1.5 };

    let offset = if origin.radius() > 0.0 {
        rng.gen_range(0.0..origin.radius())
    } else {
        0.0
    };

    Position(
        origin.position().x() + (origin.radius() + ship_radius - offset) * side,
        origin.position().y() + (ship_radius + offset) * side
    )
}
