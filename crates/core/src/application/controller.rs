// Visualizer Controller - the four user commands plus redraw

use tracing::{debug, info, warn};

use super::constants::{
    MSG_EMPTY, MSG_INPUT_REQUIRED, TITLE_DEQUEUED, TITLE_EMPTY, TITLE_FRONT, TITLE_INPUT_REQUIRED,
};
use crate::domain::{DomainError, Layout, Queue};
use crate::error::Result;
use crate::port::{Canvas, Notice, Notifier};

/// Trim surrounding whitespace and reject blank input
pub fn validate_input(raw: &str) -> crate::domain::error::Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(DomainError::BlankInput);
    }
    Ok(value.to_string())
}

/// Application context: owns the queue and the ports it reports through.
///
/// Built once at startup and handed to every command handler. Each mutating
/// command ends with a full redraw from the current snapshot.
pub struct VisualizerController<C: Canvas, N: Notifier> {
    queue: Queue<String>,
    layout: Layout,
    canvas: C,
    notifier: N,
}

impl<C: Canvas, N: Notifier> VisualizerController<C, N> {
    /// Create a controller with an empty queue.
    ///
    /// Nothing is drawn until the first `redraw`.
    pub fn new(layout: Layout, canvas: C, notifier: N) -> Self {
        Self {
            queue: Queue::new(),
            layout,
            canvas,
            notifier,
        }
    }

    /// Enqueue command
    ///
    /// Blank input raises a warning notice and leaves the queue and canvas
    /// untouched; the error is returned so the caller can keep the text field.
    pub fn enqueue(&mut self, raw_input: &str) -> Result<()> {
        let value = match validate_input(raw_input) {
            Ok(value) => value,
            Err(e) => {
                warn!("Rejected blank input");
                self.notifier
                    .notify(Notice::warning(TITLE_INPUT_REQUIRED, MSG_INPUT_REQUIRED));
                return Err(e.into());
            }
        };

        info!(value = %value, len = self.queue.len() + 1, "Enqueued value");
        self.queue.enqueue(value);
        self.redraw();
        Ok(())
    }

    /// Dequeue command: reports the removed value (or emptiness), then redraws
    pub fn dequeue(&mut self) -> Option<String> {
        let removed = self.queue.dequeue();

        match &removed {
            Some(value) => {
                info!(value = %value, len = self.queue.len(), "Dequeued value");
                self.notifier.notify(Notice::info(
                    TITLE_DEQUEUED,
                    format!("Dequeued value: {}", value),
                ));
            }
            None => {
                info!("Dequeue on empty queue");
                self.notifier.notify(Notice::info(TITLE_EMPTY, MSG_EMPTY));
            }
        }

        self.redraw();
        removed
    }

    /// Front command: reports the front value (or emptiness). Never redraws.
    pub fn front(&mut self) -> Option<String> {
        let front = self.queue.front().cloned();

        match &front {
            Some(value) => {
                debug!(value = %value, "Peeked front value");
                self.notifier
                    .notify(Notice::info(TITLE_FRONT, format!("Front value: {}", value)));
            }
            None => self.notifier.notify(Notice::info(TITLE_EMPTY, MSG_EMPTY)),
        }

        front
    }

    /// Clear command: replace the queue with a fresh one, then redraw
    pub fn clear(&mut self) {
        info!(discarded = self.queue.len(), "Cleared queue");
        self.queue = Queue::new();
        self.redraw();
    }

    /// Erase the canvas and draw the diagram for the current snapshot
    pub fn redraw(&mut self) {
        let snapshot = self.queue.snapshot();
        let shapes = self.layout.scene(&snapshot);
        debug!(len = snapshot.len(), shapes = shapes.len(), "Redrawing");

        self.canvas.clear();
        for shape in &shapes {
            self.canvas.draw(shape);
        }
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.queue.snapshot()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
