// Domain Layer - Pure FIFO logic and diagram geometry

pub mod error;
pub mod queue;
pub mod scene;

// Re-exports
pub use error::DomainError;
pub use queue::Queue;
pub use scene::{Bounds, Endpoint, Layout, Point, Shape};
