use std::ops::RangeInclusive;

use rand::Rng;

use crate::common::{Position, SetupError};
use crate::game::planet::Planet;

/// Rectangular playing field given by its lower-left and upper-right corners.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    lower_left: Position,
    upper_right: Position
}

impl Bounds {
    pub fn new(lower_left: Position, upper_right: Position) -> Bounds {
        Bounds { lower_left, upper_right }
    }

    pub fn lower_left(&self) -> Position {
        self.lower_left
    }

    pub fn upper_right(&self) -> Position {
        self.upper_right
    }

    pub fn width(&self) -> f64 {
        self.upper_right.x() - self.lower_left.x()
    }

    pub fn height(&self) -> f64 {
        self.upper_right.y() - self.lower_left.y()
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x() >= self.lower_left.x() && position.x() <= self.upper_right.x() &&
            position.y() >= self.lower_left.y() && position.y() <= self.upper_right.y()
    }

    /// Whether a circle of `radius` around `position` lies entirely inside.
    pub fn contains_circle(&self, position: Position, radius: f64) -> bool {
        self.inset(radius).map_or(false, |inner| inner.contains(position))
    }

    fn inset(&self, margin: f64) -> Option<Bounds> {
        let lower_left = Position(self.lower_left.x() + margin, self.lower_left.y() + margin);
        let upper_right = Position(self.upper_right.x() - margin, self.upper_right.y() - margin);

        if lower_left.x() > upper_right.x() || lower_left.y() > upper_right.y() {
            None
        } else {
            Some(Bounds { lower_left, upper_right })
        }
    }
}

/// Parameters every generated planet is stamped from.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetTemplate {
    pub radius: f64,
    pub radius_variance: f64,
    pub ships_per_tick: u32,
    pub tick_interval: f64,
    pub spawn_rate: f64
}

impl Default for PlanetTemplate {
    fn default() -> Self {
        PlanetTemplate {
            radius: 0.5,
            radius_variance: 0.2,
            ships_per_tick: 5,
            tick_interval: 1.0,
            spawn_rate: 0.5
        }
    }
}

/// Two planets are too close when their centres are nearer than twice the
/// sum of their radii.
pub fn min_separation(a_radius: f64, b_radius: f64) -> f64 {
    (a_radius + b_radius) * 2.0
}

/// Places `count` planets by rejection sampling. Each planet gets up to
/// `max_attempts` candidate positions before the whole layout is abandoned.
pub fn generate<R: Rng>(
    count: usize,
    bounds: &Bounds,
    template: &PlanetTemplate,
    scores: RangeInclusive<u32>,
    max_attempts: usize,
    rng: &mut R
) -> Result<Vec<Planet>, SetupError> {
    let mut planets: Vec<Planet> = Vec::with_capacity(count);
    let mut total_attempts = 0;

    for id in 0..count {
        let radius = varied_radius(template, rng);

        let area = bounds.inset(radius).ok_or(SetupError::LayoutInfeasible {
            requested: count,
            placed: planets.len(),
            attempts: total_attempts
        })?;

        let mut position = None;
        for _ in 0..max_attempts {
            total_attempts += 1;

            let candidate = Position(
                sample(rng, area.lower_left().x(), area.upper_right().x()),
                sample(rng, area.lower_left().y(), area.upper_right().y())
            );

            let fits = planets
                .iter()
                .all(|placed| candidate.distance_to(placed.position()) >= min_separation(radius, placed.radius()));

            if fits {
                position = Some(candidate);
                break;
            }
        }

        let position = match position {
            Some(position) => position,
            None => {
                warn!("No room for planet {} after {} attempts", id, max_attempts);

                return Err(SetupError::LayoutInfeasible {
                    requested: count,
                    placed: planets.len(),
                    attempts: total_attempts
                });
            }
        };

        let score = rng.gen_range(scores.clone());
        let planet = Planet::new(id, position, radius)
            .with_production(template.ships_per_tick, template.tick_interval)
            .with_spawn_rate(template.spawn_rate)
            .with_score(score);

        planets.push(planet);
    }

    debug!("Placed {} planets in {} attempts", planets.len(), total_attempts);

    Ok(planets)
}

fn varied_radius<R: Rng>(template: &PlanetTemplate, rng: &mut R) -> f64 {
    let variance = template.radius * template.radius_variance.abs();
    template.radius + sample(rng, -variance, variance)
}

fn sample<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn field() -> Bounds {
        Bounds::new(Position(-12.0, -7.0), Position(12.0, 7.0))
    }

    #[test]
    fn places_requested_number_without_overlap() {
        let mut rng = StdRng::seed_from_u64(42);
        let planets = generate(10, &field(), &PlanetTemplate::default(), 5..=100, 1000, &mut rng).unwrap();

        assert_eq!(planets.len(), 10);

        for (i, a) in planets.iter().enumerate() {
            assert_eq!(a.id(), i);
            assert!(field().contains_circle(a.position(), a.radius()));
            assert!(a.score() >= 5 && a.score() <= 100);
            assert!(a.is_neutral());

            for b in planets.iter().skip(i + 1) {
                assert!(a.position().distance_to(b.position()) >= min_separation(a.radius(), b.radius()));
            }
        }
    }

    #[test]
    fn radius_stays_within_variance() {
        let mut rng = StdRng::seed_from_u64(1);
        let planets = generate(8, &field(), &PlanetTemplate::default(), 5..=100, 1000, &mut rng).unwrap();

        for planet in &planets {
            assert!(planet.radius() >= 0.4 - 1e-9 && planet.radius() <= 0.6 + 1e-9);
        }
    }

    #[test]
    fn crowded_field_is_infeasible() {
        let mut rng = StdRng::seed_from_u64(3);
        let tiny = Bounds::new(Position(0.0, 0.0), Position(3.0, 3.0));

        match generate(10, &tiny, &PlanetTemplate::default(), 5..=100, 200, &mut rng) {
            Err(SetupError::LayoutInfeasible { requested, placed, .. }) => {
                assert_eq!(requested, 10);
                assert!(placed < 10);
            },
            other => panic!("expected infeasible layout, got {:?}", other.map(|planets| planets.len()))
        }
    }

    #[test]
    fn field_smaller_than_a_planet_is_infeasible() {
        let mut rng = StdRng::seed_from_u64(3);
        let speck = Bounds::new(Position(0.0, 0.0), Position(0.1, 0.1));

        assert!(generate(1, &speck, &PlanetTemplate::default(), 5..=100, 10, &mut rng).is_err());
    }
}
