// Port Layer - Interfaces the GUI shell implements

pub mod canvas;
pub mod notifier;

// Re-exports
pub use canvas::Canvas;
pub use notifier::{Notice, NoticeLevel, Notifier};
