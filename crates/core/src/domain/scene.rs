// Scene Domain Model - diagram geometry for a queue snapshot

use serde::Deserialize;

use super::error::{DomainError, Result};

/// Point in canvas coordinates (origin top-left, y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Which end of the queue a label marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Front,
    Rear,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Front => "Front",
            Endpoint::Rear => "Rear",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One drawable element of the diagram
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Queue element: a box with the value centered inside
    Node { bounds: Bounds, text: String },
    /// Arrow from one box's right edge to the next box's left edge
    Connector { from: Point, to: Point },
    /// "Front"/"Rear" label centered at `center`
    Label { center: Point, endpoint: Endpoint },
}

/// Fixed diagram geometry.
///
/// Defaults reproduce the classic 760x330 canvas with 60x40 boxes spaced
/// 30px apart, starting 50px from the left and 150px from the top.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub start_x: f32,
    pub start_y: f32,
    pub node_width: f32,
    pub node_height: f32,
    pub gap: f32,
    /// Distance of the Front/Rear labels above the row
    pub label_offset: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            canvas_width: 760.0,
            canvas_height: 330.0,
            start_x: 50.0,
            start_y: 150.0,
            node_width: 60.0,
            node_height: 40.0,
            gap: 30.0,
            label_offset: 20.0,
        }
    }
}

impl Layout {
    /// Reject geometry that cannot produce a readable diagram
    pub fn validate(&self) -> Result<()> {
        // Written as negated comparisons so NaN is rejected too
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(DomainError::InvalidLayout(format!(
                "canvas must have a positive size, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !(self.node_width > 0.0 && self.node_height > 0.0) {
            return Err(DomainError::InvalidLayout(format!(
                "nodes must have a positive size, got {}x{}",
                self.node_width, self.node_height
            )));
        }
        if !(self.gap >= 0.0) {
            return Err(DomainError::InvalidLayout(format!(
                "gap must not be negative, got {}",
                self.gap
            )));
        }
        if !(self.start_x.is_finite() && self.start_y.is_finite() && self.label_offset.is_finite())
        {
            return Err(DomainError::InvalidLayout(
                "offsets must be finite numbers".to_string(),
            ));
        }
        Ok(())
    }

    /// Horizontal distance between the left edges of neighbouring boxes
    pub fn stride(&self) -> f32 {
        self.node_width + self.gap
    }

    /// Box of the element at `index` (0 = front)
    pub fn node_bounds(&self, index: usize) -> Bounds {
        Bounds {
            x: self.start_x + index as f32 * self.stride(),
            y: self.start_y,
            width: self.node_width,
            height: self.node_height,
        }
    }

    /// Anchor of an endpoint label above the box at `index`
    pub fn label_anchor(&self, index: usize) -> Point {
        let bounds = self.node_bounds(index);
        Point::new(bounds.center().x, self.start_y - self.label_offset)
    }

    /// Full diagram for `values` (front first).
    ///
    /// Emission order: each box followed by its outgoing connector, then the
    /// Front label, then the Rear label. Empty input yields an empty scene.
    pub fn scene<S: AsRef<str>>(&self, values: &[S]) -> Vec<Shape> {
        let count = values.len();
        let mut shapes = Vec::with_capacity(count * 2 + 1);

        for (index, value) in values.iter().enumerate() {
            let bounds = self.node_bounds(index);
            shapes.push(Shape::Node {
                bounds,
                text: value.as_ref().to_string(),
            });

            if index + 1 < count {
                let mid_y = bounds.center().y;
                shapes.push(Shape::Connector {
                    from: Point::new(bounds.right(), mid_y),
                    to: Point::new(bounds.right() + self.gap, mid_y),
                });
            }
        }

        if count > 0 {
            shapes.push(Shape::Label {
                center: self.label_anchor(0),
                endpoint: Endpoint::Front,
            });
            shapes.push(Shape::Label {
                center: self.label_anchor(count - 1),
                endpoint: Endpoint::Rear,
            });
        }

        shapes
    }
}
