//! Greedy single-move planner.
//!
//! Every call picks at most one dispatch. Origins are the planner's own
//! planets in list order; for each origin, neutral planets are tried first
//! (list order), then every planet the planner does not own (list order,
//! neutrals included again). The first origin/target pair where the origin's
//! `score * spawn_rate` is strictly greater than the target's score wins.
//! Changing either iteration order changes how the opponent plays.

use crate::common::{PlanetId, PlayerId};
use crate::game::planet::Planet;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DispatchOrder {
    pub origin: PlanetId,
    pub target: PlanetId
}

pub fn plan(owner: PlayerId, planets: &[Planet]) -> Option<DispatchOrder> {
    let own_planets = planets.iter().filter(|planet| planet.is_owned_by(owner));
    let foreign_planets = planets.iter().filter(|planet| !planet.is_owned_by(owner)).collect::<Vec<_>>();
    let neutral_planets = planets.iter().filter(|planet| planet.is_neutral()).collect::<Vec<_>>();

    for origin in own_planets {
        let strength = origin.dispatch_strength();

        let target = neutral_planets
            .iter()
            .chain(foreign_planets.iter())
            .find(|target| strength > target.score() as f64);

        if let Some(target) = target {
            return Some(DispatchOrder {
                origin: origin.id(),
                target: target.id()
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Position;

    const PLAYER: PlayerId = 0;
    const AI: PlayerId = 1;

    fn planet(id: usize, owner: Option<PlayerId>, score: u32) -> Planet {
        let planet = Planet::new(id, Position(id as f64 * 3.0, 0.0), 0.5)
            .with_score(score)
            .with_spawn_rate(0.5);

        match owner {
            Some(owner) => planet.with_owner(owner),
            None => planet
        }
    }

    #[test]
    fn prefers_first_qualifying_neutral() {
        let planets = vec![
            planet(0, Some(PLAYER), 1),
            planet(1, Some(AI), 20),
            planet(2, None, 15),
            planet(3, None, 9),
            planet(4, None, 2)
        ];

        assert_eq!(plan(AI, &planets), Some(DispatchOrder { origin: 1, target: 3 }));
    }

    #[test]
    fn falls_back_to_hostile_target() {
        let planets = vec![
            planet(0, None, 50),
            planet(1, Some(AI), 20),
            planet(2, Some(PLAYER), 7)
        ];

        assert_eq!(plan(AI, &planets), Some(DispatchOrder { origin: 1, target: 2 }));
    }

    #[test]
    fn comparison_is_strict() {
        let planets = vec![
            planet(0, Some(AI), 20),
            planet(1, None, 10),
            planet(2, Some(PLAYER), 10)
        ];

        assert_eq!(plan(AI, &planets), None);
    }

    #[test]
    fn first_origin_in_list_order_wins() {
        let planets = vec![
            planet(0, Some(PLAYER), 5),
            planet(1, Some(AI), 4),
            planet(2, Some(AI), 100),
            planet(3, None, 3),
            planet(4, Some(AI), 100)
        ];

        // planet 1 commits 2.0, too weak for anything; planet 2 takes the neutral
        assert_eq!(plan(AI, &planets), Some(DispatchOrder { origin: 2, target: 3 }));
    }

    #[test]
    fn planning_is_deterministic() {
        let planets = vec![
            planet(0, Some(PLAYER), 30),
            planet(1, Some(AI), 30),
            planet(2, None, 14),
            planet(3, None, 5)
        ];

        let first = plan(AI, &planets);
        for _ in 0..10 {
            assert_eq!(plan(AI, &planets), first);
        }
        assert_eq!(first, Some(DispatchOrder { origin: 1, target: 2 }));
    }

    #[test]
    fn works_for_either_side() {
        let planets = vec![
            planet(0, Some(PLAYER), 30),
            planet(1, Some(AI), 10),
            planet(2, None, 100)
        ];

        assert_eq!(plan(PLAYER, &planets), Some(DispatchOrder { origin: 0, target: 1 }));
    }

    #[test]
    fn no_own_planets_no_move() {
        let planets = vec![planet(0, Some(PLAYER), 30), planet(1, None, 0)];
        assert_eq!(plan(AI, &planets), None);
    }
}
