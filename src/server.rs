#![cfg(feature = "std")]

//! TCP service: one shared game, served to any number of sequential or
//! concurrent client connections.

use tokio::net::TcpListener;

use crate::api::SharedGame;
use crate::skeleton::Skeleton;
use crate::transport::tcp::TcpTransport;

/// Bind `addr` and serve `game` until the process is stopped. Connection
/// failures are logged and never fatal.
pub async fn run_server(addr: &str, game: SharedGame) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    log::info!("listening on {}", listener.local_addr()?);
    loop {
        let (socket, peer) = listener.accept().await?;
        log::info!("client connected from {}", peer);
        let game = game.clone();
        tokio::spawn(async move {
            let transport = TcpTransport::new(socket);
            let mut skeleton = Skeleton::new(game, transport);
            match skeleton.run().await {
                Ok(()) => log::info!("client {} disconnected", peer),
                Err(e) => log::warn!("session with {} ended: {}", peer, e),
            }
        });
    }
}
