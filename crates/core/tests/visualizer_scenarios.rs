//! End-to-end controller scenarios
//!
//! Drives the controller through the public API with recording ports and
//! checks both the queue contents and what ended up on the canvas.

use queue_visualizer_core::application::VisualizerController;
use queue_visualizer_core::domain::{Endpoint, Layout, Point, Shape};
use queue_visualizer_core::port::canvas::mocks::RecordingCanvas;
use queue_visualizer_core::port::notifier::mocks::RecordingNotifier;
use queue_visualizer_core::port::NoticeLevel;

type TestController = VisualizerController<RecordingCanvas, RecordingNotifier>;

fn setup() -> TestController {
    let mut controller = VisualizerController::new(
        Layout::default(),
        RecordingCanvas::default(),
        RecordingNotifier::default(),
    );
    controller.redraw();
    controller
}

fn box_texts(shapes: &[Shape]) -> Vec<String> {
    shapes
        .iter()
        .filter_map(|shape| match shape {
            Shape::Node { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

fn connector_count(shapes: &[Shape]) -> usize {
    shapes
        .iter()
        .filter(|shape| matches!(shape, Shape::Connector { .. }))
        .count()
}

fn label_at(shapes: &[Shape], wanted: Endpoint) -> Option<Point> {
    shapes.iter().find_map(|shape| match shape {
        Shape::Label { center, endpoint } if *endpoint == wanted => Some(*center),
        _ => None,
    })
}

fn scenario_a() -> TestController {
    let mut controller = setup();
    for value in ["1", "2", "3"] {
        controller.enqueue(value).unwrap();
    }
    controller
}

/// Scenario A: three enqueues draw three boxes, two connectors and both labels
#[test]
fn test_scenario_a_three_enqueues() {
    let controller = scenario_a();
    let layout = controller.layout().clone();
    let shapes = &controller.canvas().shapes;

    assert_eq!(controller.snapshot(), vec!["1", "2", "3"]);
    assert_eq!(box_texts(shapes), vec!["1", "2", "3"]);
    assert_eq!(connector_count(shapes), 2);

    let front = label_at(shapes, Endpoint::Front).unwrap();
    let rear = label_at(shapes, Endpoint::Rear).unwrap();
    assert_eq!(front.x, layout.node_bounds(0).center().x);
    assert_eq!(rear.x, layout.node_bounds(2).center().x);
    assert_eq!(front.y, layout.start_y - layout.label_offset);
    assert_eq!(rear.y, front.y);
}

/// Scenario B: dequeue after A returns "1" and moves the labels
#[test]
fn test_scenario_b_dequeue_moves_labels() {
    let mut controller = scenario_a();
    let layout = controller.layout().clone();

    assert_eq!(controller.dequeue().as_deref(), Some("1"));
    assert_eq!(controller.snapshot(), vec!["2", "3"]);

    let shapes = &controller.canvas().shapes;
    assert_eq!(box_texts(shapes), vec!["2", "3"]);
    assert_eq!(connector_count(shapes), 1);
    assert_eq!(
        label_at(shapes, Endpoint::Front).unwrap().x,
        layout.node_bounds(0).center().x
    );
    assert_eq!(
        label_at(shapes, Endpoint::Rear).unwrap().x,
        layout.node_bounds(1).center().x
    );
}

/// Scenario C: dequeue on an empty queue reports emptiness
#[test]
fn test_scenario_c_dequeue_empty() {
    let mut controller = setup();

    assert_eq!(controller.dequeue(), None);
    let notice = controller.notifier().last().unwrap();
    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.message, "Queue is empty.");
    assert!(controller.snapshot().is_empty());
    assert!(controller.canvas().shapes.is_empty());
}

/// Scenario D: blank and whitespace-only input are rejected
#[test]
fn test_scenario_d_blank_input_rejected() {
    let mut controller = scenario_a();
    let before = controller.canvas().shapes.clone();

    for raw in ["", "   "] {
        assert!(controller.enqueue(raw).is_err());
        let notice = controller.notifier().last().unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "Please enter a value.");
    }

    assert_eq!(controller.snapshot(), vec!["1", "2", "3"]);
    assert_eq!(controller.canvas().shapes, before);
}

/// Clear always ends with an empty queue and a blank canvas
#[test]
fn test_clear_from_any_state() {
    let mut controller = setup();
    controller.clear();
    assert!(controller.snapshot().is_empty());

    let mut controller = scenario_a();
    controller.dequeue();
    controller.clear();
    assert!(controller.snapshot().is_empty());
    assert!(controller.canvas().shapes.is_empty());

    // Usable again after clearing
    controller.enqueue("again").unwrap();
    assert_eq!(controller.snapshot(), vec!["again"]);
}

/// Draining the queue one value at a time follows FIFO order
#[test]
fn test_drain_in_fifo_order() {
    let mut controller = scenario_a();
    let mut drained = Vec::new();
    while let Some(value) = controller.dequeue() {
        drained.push(value);
    }
    assert_eq!(drained, vec!["1", "2", "3"]);
    assert_eq!(controller.notifier().last().unwrap().title, "Empty");
}
