// Drawing surface port

use crate::domain::Shape;

/// Drawing surface the controller repaints from scratch on every redraw
pub trait Canvas {
    /// Erase every previously drawn shape
    fn clear(&mut self);

    /// Draw one shape on top of what is already there
    fn draw(&mut self, shape: &Shape);
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;

    /// Canvas that keeps the current shapes and counts clears
    #[derive(Debug, Default)]
    pub struct RecordingCanvas {
        pub shapes: Vec<Shape>,
        pub clears: usize,
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self) {
            self.shapes.clear();
            self.clears += 1;
        }

        fn draw(&mut self, shape: &Shape) {
            self.shapes.push(shape.clone());
        }
    }
}
