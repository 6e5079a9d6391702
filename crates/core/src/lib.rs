// Queue Visualizer Core - FIFO store, scene layout, controller & ports
// NO GUI dependencies: the shell crate implements the ports

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
