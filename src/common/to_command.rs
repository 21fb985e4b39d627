use ws::{Message, Sender};

use crate::common::ParseCommandResult;

pub trait ToCommand: Sized {
    fn connect(sender: Sender) -> Self;
    fn process(sender: Sender, message: &Message) -> ParseCommandResult<Self>;
    fn disconnect(sender: Sender) -> Self;
}
