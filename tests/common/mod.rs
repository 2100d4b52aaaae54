//! Headless egui driver for widget tests.
//!
//! Runs frames on a bare `egui::Context`, finds painted text to aim at, and
//! feeds synthetic pointer events.

#![allow(dead_code)]

use egui::{Context, Event, Modifiers, PointerButton, Pos2, RawInput, Shape};

/// A context plus the shapes painted by the last frame.
pub struct Harness {
    ctx: Context,
    shapes: Vec<Shape>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            ctx: Context::default(),
            shapes: Vec::new(),
        }
    }

    /// Run one frame with `events`, drawing `ui_fn` in a central panel.
    pub fn frame(&mut self, events: Vec<Event>, mut ui_fn: impl FnMut(&mut egui::Ui)) {
        let input = RawInput {
            events,
            ..Default::default()
        };
        let output = self.ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| ui_fn(ui));
        });
        self.shapes = output.shapes.into_iter().map(|c| c.shape).collect();
    }

    /// Centers of every painted text equal to `text`, top to bottom.
    pub fn find_text(&self, text: &str) -> Vec<Pos2> {
        let mut found = Vec::new();
        collect_text(&self.shapes, text, &mut found);
        found.sort_by(|a, b| a.y.total_cmp(&b.y));
        found
    }

    /// Whether any painted text contains `needle`.
    pub fn shows_text_containing(&self, needle: &str) -> bool {
        let mut all = Vec::new();
        collect_all_text(&self.shapes, &mut all);
        all.iter().any(|t| t.contains(needle))
    }

    /// Press and release the primary button at `pos` over two frames.
    pub fn click(&mut self, pos: Pos2, mut ui_fn: impl FnMut(&mut egui::Ui)) {
        self.frame(
            vec![
                Event::PointerMoved(pos),
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: true,
                    modifiers: Modifiers::NONE,
                },
            ],
            &mut ui_fn,
        );
        self.frame(
            vec![Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: false,
                modifiers: Modifiers::NONE,
            }],
            &mut ui_fn,
        );
        // Settle so the applied edit is painted
        self.frame(Vec::new(), &mut ui_fn);
    }
}

fn collect_text(shapes: &[Shape], text: &str, found: &mut Vec<Pos2>) {
    for shape in shapes {
        match shape {
            Shape::Text(t) if t.galley.text() == text => {
                found.push(t.pos + t.galley.rect.center().to_vec2());
            }
            Shape::Vec(inner) => collect_text(inner, text, found),
            _ => {}
        }
    }
}

fn collect_all_text(shapes: &[Shape], all: &mut Vec<String>) {
    for shape in shapes {
        match shape {
            Shape::Text(t) => all.push(t.galley.text().to_string()),
            Shape::Vec(inner) => collect_all_text(inner, all),
            _ => {}
        }
    }
}
