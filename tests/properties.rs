use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use conquest::common::Position;
use conquest::game::layout::{self, min_separation, Bounds, PlanetTemplate};
use conquest::game::planet::{Arrival, Planet};
use conquest::game::{GameConfig, Simulation, AI_ID, PLAYER_ID};

#[derive(Clone, Debug)]
enum Op {
    Tick(f64),
    Spawn(usize, usize),
    PlanPlayer,
    PlanAi,
    Click(usize)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0.0..0.5f64).prop_map(Op::Tick),
        (0..8usize, 0..8usize).prop_map(|(origin, target)| Op::Spawn(origin, target)),
        Just(Op::PlanPlayer),
        Just(Op::PlanAi),
        (0..8usize).prop_map(Op::Click)
    ]
}

proptest! {
    #[test]
    fn prop_layout_places_every_planet_apart(seed in any::<u64>(), count in 2..12usize) {
        let bounds = Bounds::new(Position(-12.0, -7.0), Position(12.0, 7.0));
        let mut rng = StdRng::seed_from_u64(seed);

        let planets = layout::generate(count, &bounds, &PlanetTemplate::default(), 5..=100, 1000, &mut rng).unwrap();

        prop_assert_eq!(planets.len(), count);
        for (i, a) in planets.iter().enumerate() {
            prop_assert!(bounds.contains_circle(a.position(), a.radius()));
            for b in &planets[i + 1..] {
                prop_assert!(a.position().distance_to(b.position()) >= min_separation(a.radius(), b.radius()));
            }
        }
    }

    #[test]
    fn prop_arrival_changes_garrison_by_one(score in 0..50u32, owner in prop::option::of(0..2usize), ship_owner in 0..2usize) {
        let mut planet = Planet::new(0, Position(0.0, 0.0), 0.5).with_score(score);
        if let Some(owner) = owner {
            planet = planet.with_owner(owner);
        }

        let arrival = planet.swallow_ship(ship_owner);

        if owner == Some(ship_owner) {
            prop_assert_eq!(arrival, Arrival::Reinforced);
            prop_assert_eq!(planet.score(), score + 1);
        } else if score == 0 {
            prop_assert_eq!(arrival, Arrival::Captured { previous_owner: owner });
            prop_assert_eq!(planet.score(), 1);
            prop_assert_eq!(planet.owner(), Some(ship_owner));
        } else {
            prop_assert_eq!(arrival, Arrival::Attrited);
            prop_assert_eq!(planet.score(), score - 1);
            prop_assert_eq!(planet.owner(), owner);
        }
    }

    #[test]
    fn prop_random_play_keeps_world_consistent(seed in any::<u64>(), ops in prop::collection::vec(op(), 1..120)) {
        let mut config = GameConfig::default();
        config.planet_count = 8;
        config.seed = Some(seed);

        let mut simulation = Simulation::initialize(&config).unwrap();

        for op in ops {
            match op {
                Op::Tick(dt) => { simulation.tick(dt); },
                Op::Spawn(origin, target) => { simulation.spawn_ships(origin, target); },
                Op::PlanPlayer => { simulation.plan_move_for(PLAYER_ID); },
                Op::PlanAi => { simulation.plan_ai_move(); },
                Op::Click(planet) => { simulation.click_planet(PLAYER_ID, planet); }
            }

            prop_assert_eq!(simulation.planets().len(), 8);

            for planet in simulation.planets() {
                prop_assert!(planet.owner().map_or(true, |owner| owner == PLAYER_ID || owner == AI_ID));
                prop_assert!(!planet.is_neutral() || !planet.is_selected());
            }

            for wave in simulation.waves() {
                prop_assert!(simulation.planet(wave.origin()).unwrap().is_spawn_in_progress());
            }

            for &selected in simulation.player().selected_planets() {
                prop_assert!(simulation.planet(selected).unwrap().is_owned_by(PLAYER_ID));
            }

            for ship in simulation.ships() {
                prop_assert!(ship.owner() == PLAYER_ID || ship.owner() == AI_ID);
                prop_assert!(ship.target() < 8);
            }
        }
    }
}
