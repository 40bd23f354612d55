use broadside::{GameApi, LocalGame, SharedGame, Skeleton, Stub, TcpTransport};
use tokio::net::TcpListener;

fn position(cell: [u8; 2]) -> String {
    format!("{}{}", (b'A' + cell[1]) as char, cell[0] + 1)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_full_game_over_tcp() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let game = SharedGame::new(LocalGame::new(Some(42)));
        let mut skeleton = Skeleton::new(game, TcpTransport::new(socket));
        skeleton.run().await.unwrap();
    });

    let mut stub = Stub::new(TcpTransport::connect(addr).await?);
    assert_eq!(stub.reset().await?, "Game has been reset!");

    let ships = stub.ships().await?;
    assert_eq!(ships.len(), 3);

    let cells = ships[2].original_cells.clone();
    assert_eq!(ships[2].name, "Destroyer2");
    for (i, &cell) in cells.iter().enumerate() {
        let report = stub.fire(&position(cell)).await?;
        if i + 1 < cells.len() {
            assert_eq!(report.message, "Hit!");
        } else {
            assert_eq!(report.message, "Destroyer2 Sunk!");
            assert_eq!(report.sunk_cells.map(|c| c.len()), Some(4));
        }
    }

    drop(stub);
    server.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_game_state_is_shared_across_connections() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let game = SharedGame::new(LocalGame::new(Some(9)));
    let server = tokio::spawn(async move {
        for _ in 0..2 {
            let (socket, _) = listener.accept().await.unwrap();
            let mut skeleton = Skeleton::new(game.clone(), TcpTransport::new(socket));
            skeleton.run().await.unwrap();
        }
    });

    let mut first = Stub::new(TcpTransport::connect(addr).await?);
    first.reset().await?;
    let report = first.fire("A1").await?;
    assert_ne!(report.message, "Already fired here!");
    drop(first);

    let mut second = Stub::new(TcpTransport::connect(addr).await?);
    let report = second.fire("A1").await?;
    assert_eq!(report.message, "Already fired here!");
    drop(second);

    server.await?;
    Ok(())
}
