#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
mod api;
mod common;
mod config;
#[cfg(feature = "std")]
mod console;
mod coord;
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
mod server;
mod ship;
#[cfg(feature = "std")]
mod skeleton;
#[cfg(feature = "std")]
mod stub;
#[cfg(feature = "std")]
pub mod transport;

#[cfg(feature = "std")]
pub use api::{GameApi, LocalGame, SharedGame};
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::run_console;
pub use coord::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use protocol::*;
#[cfg(feature = "std")]
pub use server::run_server;
pub use ship::*;
#[cfg(feature = "std")]
pub use skeleton::Skeleton;
#[cfg(feature = "std")]
pub use stub::Stub;
#[cfg(feature = "std")]
pub use transport::tcp::TcpTransport;
