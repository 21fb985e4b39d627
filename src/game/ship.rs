use vecmath::Vector2;

use crate::common::{Id, PlanetId, PlayerId, Position};

/// Physical prototype a player's ships are stamped from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShipTemplate {
    radius: f64,
    speed: f64
}

impl ShipTemplate {
    pub fn new(radius: f64, speed: f64) -> ShipTemplate {
        ShipTemplate { radius, speed }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Units travelled per second.
    pub fn speed(&self) -> f64 {
        self.speed
    }
}

#[derive(Clone, Debug)]
pub struct Ship {
    id: Id,
    owner: PlayerId,
    origin: PlanetId,
    target: PlanetId,
    position: Position,
    heading: Vector2<f64>,
    speed: f64,
    radius: f64
}

impl Ship {
    pub fn new(
        id: Id,
        owner: PlayerId,
        origin: PlanetId,
        target: PlanetId,
        position: Position,
        template: &ShipTemplate
    ) -> Ship {
        Ship {
            id,
            owner,
            origin,
            target,
            position,
            heading: [0.0, 1.0],
            speed: template.speed(),
            radius: template.radius()
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn origin(&self) -> PlanetId {
        self.origin
    }

    pub fn target(&self) -> PlanetId {
        self.target
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Vector2<f64> {
        self.heading
    }

    pub fn rotate_to(&mut self, destination: Position) {
        if let Some(direction) = self.position.direction_to(destination) {
            self.heading = direction;
        }
    }

    /// Advances the ship towards `destination` by `speed * dt`, never past it.
    pub fn move_towards(&mut self, destination: Position, dt: f64) {
        self.rotate_to(destination);

        let distance = self.position.distance_to(destination);
        let max_step_distance = self.speed * dt.max(0.0);

        if distance < max_step_distance {
            self.position = destination;
        } else {
            self.position = self.position.offset(self.heading, max_step_distance);
        }
    }

    /// True once the ship's collision circle touches the target's.
    pub fn has_arrived(&self, destination: Position, destination_radius: f64) -> bool {
        self.position.distance_to(destination) <= self.radius + destination_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::position::heading_degrees;

    fn ship_at(position: Position) -> Ship {
        Ship::new(1, 0, 0, 1, position, &ShipTemplate::new(0.1, 2.0))
    }

    #[test]
    fn moves_speed_times_dt_along_heading() {
        let mut ship = ship_at(Position(0.0, 0.0));
        ship.move_towards(Position(10.0, 0.0), 0.5);

        assert!((ship.position().x() - 1.0).abs() < 1e-9);
        assert!(ship.position().y().abs() < 1e-9);
        assert!(heading_degrees(ship.heading()).abs() < 1e-9);
    }

    #[test]
    fn never_overshoots_destination() {
        let mut ship = ship_at(Position(0.0, 0.0));
        ship.move_towards(Position(0.5, 0.0), 10.0);

        assert_eq!(ship.position(), Position(0.5, 0.0));
    }

    #[test]
    fn arrival_uses_sum_of_radii() {
        let ship = ship_at(Position(0.0, 0.0));

        assert!(ship.has_arrived(Position(0.59, 0.0), 0.5));
        assert!(!ship.has_arrived(Position(0.61, 0.0), 0.5));
    }
}
