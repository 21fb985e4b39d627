use std::sync::mpsc::Sender as ChannelSender;
use ws::{
    CloseCode,
    Handler,
    Handshake,
    Result,
    Sender,
    Message
};

use crate::common::to_command::ToCommand;

pub struct WebsocketHandler<C> {
    sender: Sender,
    tx: ChannelSender<C>
}

impl<C> WebsocketHandler<C> {
    pub fn new(sender: Sender, tx: ChannelSender<C>) -> Self {
        WebsocketHandler { sender, tx }
    }

    fn forward(&self, command: C) {
        if self.tx.send(command).is_err() {
            warn!("Game loop is gone, dropping command from connection {}", self.sender.connection_id());
        }
    }
}

impl<C: ToCommand> Handler for WebsocketHandler<C> {
    fn on_open(&mut self, shake: Handshake) -> Result<()> {
        match shake.peer_addr {
            Some(address) => info!("Connection {} opened from {}", self.sender.connection_id(), address),
            None => info!("Connection {} opened", self.sender.connection_id())
        }

        self.forward(C::connect(self.sender.clone()));

        Ok(())
    }

    fn on_message(&mut self, message: Message) -> Result<()> {
        match C::process(self.sender.clone(), &message) {
            Ok(command) => self.forward(command),
            Err(error) => warn!("Dropping command from connection {}: {}", self.sender.connection_id(), error)
        }

        Ok(())
    }

    fn on_close(&mut self, code: CloseCode, reason: &str) {
        info!("Connection {} closed, code = {:?}, reason = {}", self.sender.connection_id(), code, reason);

        self.forward(C::disconnect(self.sender.clone()));
    }
}
