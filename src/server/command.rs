use ws::{Message, Sender};

use crate::common::to_command::ToCommand;
use crate::common::{ParseCommandError, ParseCommandResult, PlanetId};
use crate::server::json;

pub enum Command {
    Connect {
        sender: Sender
    },

    Ready {
        sender: Sender
    },

    Select {
        sender: Sender,
        planet_id: PlanetId,
        selected: bool
    },

    Dispatch {
        sender: Sender,
        target_id: PlanetId
    },

    Click {
        sender: Sender,
        planet_id: PlanetId
    },

    Disconnect {
        sender: Sender
    }
}

impl Command {
    pub fn sender(&self) -> &Sender {
        match *self {
            Command::Connect { ref sender } |
            Command::Ready { ref sender } |
            Command::Select { ref sender, .. } |
            Command::Dispatch { ref sender, .. } |
            Command::Click { ref sender, .. } |
            Command::Disconnect { ref sender } => sender
        }
    }
}

impl ToCommand for Command {
    fn connect(sender: Sender) -> Self {
        Command::Connect { sender }
    }

    fn process(sender: Sender, message: &Message) -> ParseCommandResult<Self> {
        let raw = message.as_text()
            .map_err(ParseCommandError::BrokenCommand)?;

        parse(sender, raw)
    }

    fn disconnect(sender: Sender) -> Self {
        Command::Disconnect { sender }
    }
}

fn parse(sender: Sender, raw: &str) -> ParseCommandResult<Command> {
    let (action, data) = json::parse_command(raw)?;

    let command = match action.as_ref() {
        "ready" => {
            Command::Ready { sender }
        },

        "select" => {
            let (planet_id, selected) = json::parse_select_command_data(&data)?;

            Command::Select {
                sender,
                planet_id,
                selected
            }
        },

        "dispatch" => {
            let target_id = json::parse_dispatch_command_data(&data)?;

            Command::Dispatch {
                sender,
                target_id
            }
        },

        "click" => {
            let planet_id = json::parse_click_command_data(&data)?;

            Command::Click {
                sender,
                planet_id
            }
        },

        _ => return Err(ParseCommandError::UnsupportedAction(action))
    };

    Ok(command)
}
