use crate::common::{Id, PlanetId, PlayerId};

/// Notifications raised by the simulation for the host to render or play.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    OwnerChanged {
        planet: PlanetId,
        previous: Option<PlayerId>,
        owner: PlayerId
    },

    SelectionChanged {
        planet: PlanetId,
        selected: bool
    },

    ShipSwallowed {
        planet: PlanetId,
        ship: Id
    },

    ShipCreated {
        ship: Id,
        origin: PlanetId,
        target: PlanetId,
        owner: PlayerId
    },

    ShipDestroyed {
        ship: Id
    },

    PlayerWin,

    AiWin
}

impl GameEvent {
    pub fn is_terminal(&self) -> bool {
        match *self {
            GameEvent::PlayerWin | GameEvent::AiWin => true,
            _ => false
        }
    }
}
