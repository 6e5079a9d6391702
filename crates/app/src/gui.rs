//! egui shell: port adapters and the main window

use std::collections::VecDeque;

use eframe::egui::{
    self, Align2, Color32, FontId, Pos2, RichText, Sense, Stroke, TextEdit, Vec2,
};

use queue_visualizer_core::application::VisualizerController;
use queue_visualizer_core::domain::{Point, Shape};
use queue_visualizer_core::port::{Canvas, Notice, NoticeLevel, Notifier};

use crate::settings::VisualizerConfig;

const BUTTON_SIZE: [f32; 2] = [96.0, 24.0];
const INPUT_WIDTH: f32 = 160.0;

const NODE_FILL: Color32 = Color32::from_rgb(0xe6, 0xff, 0xe6);
const NODE_OUTLINE: Color32 = Color32::from_rgb(0x00, 0x99, 0x00);
const LABEL_COLOR: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
const WARNING_COLOR: Color32 = Color32::from_rgb(0xb3, 0x6b, 0x00);
const LINE_WIDTH: f32 = 2.0;

/// Canvas adapter: keeps the last drawn shapes, painted again every frame
#[derive(Debug, Default)]
pub struct RetainedCanvas {
    shapes: Vec<Shape>,
}

impl RetainedCanvas {
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl Canvas for RetainedCanvas {
    fn clear(&mut self) {
        self.shapes.clear();
    }

    fn draw(&mut self, shape: &Shape) {
        self.shapes.push(shape.clone());
    }
}

/// Notifier adapter: notices wait here and are shown one at a time
#[derive(Debug, Default)]
pub struct DialogQueue {
    pending: VecDeque<Notice>,
}

impl DialogQueue {
    /// Notice currently on screen
    pub fn current(&self) -> Option<&Notice> {
        self.pending.front()
    }

    /// Close the notice on screen, revealing the next one
    pub fn dismiss(&mut self) {
        self.pending.pop_front();
    }
}

impl Notifier for DialogQueue {
    fn notify(&mut self, notice: Notice) {
        self.pending.push_back(notice);
    }
}

pub type GuiController = VisualizerController<RetainedCanvas, DialogQueue>;

/// Main window
pub struct QueueApp {
    controller: GuiController,
    input: String,
    clear_input_on_enqueue: bool,
}

impl QueueApp {
    pub fn new(config: &VisualizerConfig) -> Self {
        let mut controller = VisualizerController::new(
            config.layout.clone(),
            RetainedCanvas::default(),
            DialogQueue::default(),
        );
        controller.redraw();

        Self {
            controller,
            input: String::new(),
            clear_input_on_enqueue: config.clear_input_on_enqueue,
        }
    }

    /// Enqueue whatever is in the text field
    fn submit(&mut self) {
        if self.controller.enqueue(&self.input).is_ok() && self.clear_input_on_enqueue {
            self.input.clear();
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Value:");
            let response = ui.add(TextEdit::singleline(&mut self.input).desired_width(INPUT_WIDTH));
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if ui.add_sized(BUTTON_SIZE, egui::Button::new("Enqueue")).clicked() || entered {
                self.submit();
            }
            if ui.add_sized(BUTTON_SIZE, egui::Button::new("Dequeue")).clicked() {
                self.controller.dequeue();
            }
            if ui.add_sized(BUTTON_SIZE, egui::Button::new("Front")).clicked() {
                self.controller.front();
            }
            if ui.add_sized(BUTTON_SIZE, egui::Button::new("Clear")).clicked() {
                self.controller.clear();
            }
        });
    }

    fn paint_canvas(&self, ui: &mut egui::Ui) {
        let layout = self.controller.layout();
        let size = Vec2::new(layout.canvas_width, layout.canvas_height);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::WHITE);
        for shape in self.controller.canvas().shapes() {
            paint_shape(&painter, origin, shape);
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.controller.notifier().current().cloned() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(notice.title.as_str())
            .id(egui::Id::new("notice"))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                let text = RichText::new(&notice.message);
                match notice.level {
                    NoticeLevel::Info => ui.label(text),
                    NoticeLevel::Warning => ui.label(text.color(WARNING_COLOR)),
                };
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.controller.notifier_mut().dismiss();
        }
    }
}

fn to_screen(origin: Pos2, point: Point) -> Pos2 {
    origin + Vec2::new(point.x, point.y)
}

fn paint_shape(painter: &egui::Painter, origin: Pos2, shape: &Shape) {
    match shape {
        Shape::Node { bounds, text } => {
            let rect = egui::Rect::from_min_size(
                to_screen(origin, Point::new(bounds.x, bounds.y)),
                Vec2::new(bounds.width, bounds.height),
            );
            painter.rect(rect, 0.0, NODE_FILL, Stroke::new(LINE_WIDTH, NODE_OUTLINE));
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                text,
                FontId::proportional(14.0),
                Color32::BLACK,
            );
        }
        Shape::Connector { from, to } => {
            let start = to_screen(origin, *from);
            let end = to_screen(origin, *to);
            painter.arrow(start, end - start, Stroke::new(LINE_WIDTH, Color32::BLACK));
        }
        Shape::Label { center, endpoint } => {
            painter.text(
                to_screen(origin, *center),
                Align2::CENTER_CENTER,
                endpoint.as_str(),
                FontId::proportional(13.0),
                LABEL_COLOR,
            );
        }
    }
}

impl eframe::App for QueueApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let modal_open = self.controller.notifier().current().is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("QUEUE VISUALIZER").size(20.0).strong());
            });
            ui.add_space(4.0);
            ui.add_enabled_ui(!modal_open, |ui| self.controls(ui));
            ui.add_space(10.0);
            ui.vertical_centered(|ui| self.paint_canvas(ui));
        });

        self.show_notice(ctx);
    }
}
