#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, run_console, run_server, GameApi, LocalGame, SharedGame, Stub, TcpTransport,
};

#[cfg(feature = "std")]
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Run the game service and wait for clients to connect.
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play in the console against a remote game service.
    Connect {
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: String,
    },
    /// Play in the console against an in-process game.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind, seed } => {
            let mut game = LocalGame::new(seed);
            game.reset().await?;
            run_server(&bind, SharedGame::new(game)).await?;
        }
        Commands::Connect { addr } => {
            println!("Connecting to {}...", addr);
            let transport = TcpTransport::connect(&addr).await?;
            let mut stub = Stub::new(transport);
            run_console(&mut stub).await?;
        }
        Commands::Local { seed } => {
            let mut game = LocalGame::new(seed);
            run_console(&mut game).await?;
        }
    }

    Ok(())
}
