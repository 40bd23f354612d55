#![cfg(feature = "std")]

//! Server-side dispatcher: maps wire requests onto a `GameApi` and sends
//! the replies. Request failures become `Message::Error`; they end neither
//! the session nor the process.

use crate::api::GameApi;
use crate::protocol::Message;
use crate::transport::Transport;

pub struct Skeleton<A: GameApi, T: Transport> {
    api: A,
    transport: T,
}

impl<A: GameApi, T: Transport> Skeleton<A, T> {
    pub fn new(api: A, transport: T) -> Self {
        Self { api, transport }
    }

    /// Serve requests until the peer disconnects.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        while let Ok(msg) = self.transport.recv().await {
            let reply = match msg {
                Message::FireReq { position } => match self.api.fire(&position).await {
                    Ok(report) => Message::FireResp(report),
                    Err(e) => Message::Error {
                        message: e.to_string(),
                    },
                },
                Message::ShipsReq => match self.api.ships().await {
                    Ok(ships) => Message::ShipsResp(ships),
                    Err(e) => Message::Error {
                        message: e.to_string(),
                    },
                },
                Message::ResetReq => match self.api.reset().await {
                    Ok(message) => Message::ResetResp { message },
                    Err(e) => Message::Error {
                        message: e.to_string(),
                    },
                },
                other => Message::Error {
                    message: format!("Unexpected request: {:?}", other),
                },
            };
            self.transport.send(reply).await?;
        }
        Ok(())
    }
}
