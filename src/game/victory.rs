use crate::common::PlayerId;
use crate::game::event::GameEvent;
use crate::game::planet::Planet;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    PlayerWins,
    AiWins
}

impl Outcome {
    pub fn event(&self) -> GameEvent {
        match *self {
            Outcome::PlayerWins => GameEvent::PlayerWin,
            Outcome::AiWins => GameEvent::AiWin
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Outcome::PlayerWins => "player",
            Outcome::AiWins => "ai"
        }
    }
}

/// Counts planets held by each side. The player losing every planet is
/// checked first, so a board with neither side present reads as an AI win.
pub fn evaluate(planets: &[Planet], player: PlayerId, ai: PlayerId) -> Option<Outcome> {
    let player_planets = planets.iter().filter(|planet| planet.is_owned_by(player)).count();
    let ai_planets = planets.iter().filter(|planet| planet.is_owned_by(ai)).count();

    if player_planets == 0 {
        Some(Outcome::AiWins)
    } else if ai_planets == 0 {
        Some(Outcome::PlayerWins)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Position;

    const PLAYER: PlayerId = 0;
    const AI: PlayerId = 1;

    fn planet(id: usize, owner: Option<PlayerId>) -> Planet {
        let planet = Planet::new(id, Position(id as f64 * 3.0, 0.0), 0.5);
        match owner {
            Some(owner) => planet.with_owner(owner),
            None => planet
        }
    }

    #[test]
    fn both_sides_present_is_undecided() {
        let planets = vec![planet(0, Some(PLAYER)), planet(1, Some(AI)), planet(2, None)];
        assert_eq!(evaluate(&planets, PLAYER, AI), None);
    }

    #[test]
    fn player_without_planets_loses() {
        let planets = vec![planet(0, Some(AI)), planet(1, None)];
        assert_eq!(evaluate(&planets, PLAYER, AI), Some(Outcome::AiWins));
    }

    #[test]
    fn ai_without_planets_loses() {
        let planets = vec![planet(0, Some(PLAYER)), planet(1, None), planet(2, Some(PLAYER))];
        assert_eq!(evaluate(&planets, PLAYER, AI), Some(Outcome::PlayerWins));
    }

    #[test]
    fn neutral_only_board_fires_ai_win() {
        let planets = vec![planet(0, None)];
        assert_eq!(evaluate(&planets, PLAYER, AI), Some(Outcome::AiWins));
        assert!(Outcome::AiWins.event().is_terminal());
    }
}
