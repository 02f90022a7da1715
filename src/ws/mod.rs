use async_trait::async_trait;
use bevy::utils::tracing;
use crossbeam_channel::Sender;
use ezsockets::Error;
use crate::chat::message::{ChatMessage, Inbound, Outbound};
use crate::chat::{MessageText, Username};

pub mod resources;
pub mod systems;

pub struct Client {
    pub handle: ezsockets::Client<Self>,
    pub tx: Sender<ChatMessage>,
}

#[async_trait]
impl ezsockets::ClientExt for Client {
    type Call = Call;

    async fn on_text(&mut self, text: String) -> Result<(), Error> {
        tracing::info!("received payload: {text}");
        let inbound = match serde_json::from_str::<Inbound>(&text) {
            Ok(inbound) => inbound,
            Err(e) => {
                tracing::warn!("dropping malformed payload: {e}");
                return Ok(());
            }
        };
        for message in inbound.into_messages() {
            self.tx.send(message).map_err(|e| Error::from(e.to_string()))?;
        }
        Ok(())
    }

    async fn on_binary(&mut self, bytes: Vec<u8>) -> Result<(), Error> {
        tracing::info!("received bytes: {bytes:?}");
        Ok(())
    }

    async fn on_call(&mut self, call: Self::Call) -> Result<(), Error> {
        match call {
            Call::Post(username, content) => {
                tracing::info!("sending message as {username}");
                let request = Outbound::SendMessage { username, content };
                self.handle.text(serde_json::to_string(&request)?);
            }
        };
        Ok(())
    }

    // Fires on every (re)connect, so history is refetched after a drop too.
    async fn on_connect(&mut self) -> Result<(), Error> {
        tracing::info!("socket open, requesting recent messages");
        self.handle.text(serde_json::to_string(&Outbound::GetRecentMessages)?);
        Ok(())
    }
}

#[derive(Debug)]
pub enum Call {
    Post(Username, MessageText),
}
