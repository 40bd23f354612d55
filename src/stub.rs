#![cfg(feature = "std")]

//! Client-side proxy: speaks the wire protocol and presents it as a
//! `GameApi`, so front ends cannot tell a remote game from a local one.

use crate::api::GameApi;
use crate::protocol::{Message, ShipReport, ShotReport};
use crate::transport::Transport;

pub struct Stub<T: Transport> {
    transport: T,
}

impl<T: Transport> Stub<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

#[async_trait::async_trait]
impl<T: Transport> GameApi for Stub<T> {
    async fn reset(&mut self) -> anyhow::Result<String> {
        self.transport.send(Message::ResetReq).await?;
        match self.transport.recv().await? {
            Message::ResetResp { message } => Ok(message),
            Message::Error { message } => Err(anyhow::anyhow!(message)),
            other => Err(anyhow::anyhow!("Unexpected message: {:?}", other)),
        }
    }

    async fn fire(&mut self, position: &str) -> anyhow::Result<ShotReport> {
        self.transport
            .send(Message::FireReq {
                position: position.to_string(),
            })
            .await?;
        match self.transport.recv().await? {
            Message::FireResp(report) => Ok(report),
            Message::Error { message } => Err(anyhow::anyhow!(message)),
            other => Err(anyhow::anyhow!("Unexpected message: {:?}", other)),
        }
    }

    async fn ships(&mut self) -> anyhow::Result<Vec<ShipReport>> {
        self.transport.send(Message::ShipsReq).await?;
        match self.transport.recv().await? {
            Message::ShipsResp(ships) => Ok(ships),
            Message::Error { message } => Err(anyhow::anyhow!(message)),
            other => Err(anyhow::anyhow!("Unexpected message: {:?}", other)),
        }
    }
}
