//! Debug draw sink: collects advisory shapes for the renderer and advances
//! their lifetimes once per frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// RGB color for debug shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const CYAN: Color = Color {
        r: 0,
        g: 255,
        b: 255,
    };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
}

/// A debug primitive plus its remaining lifetime.
///
/// A remaining duration of zero means the shape is visible for exactly one
/// render: it survives until the next `tick` clears it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebugShape {
    pub kind: ShapeKind,
    pub color: Color,
    pub remaining: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    Line { start: Vec3, end: Vec3 },
    Point { position: Vec3, size: f32 },
}

/// Shape collector. One-frame shapes and timed shapes are kept apart so the
/// per-frame sweep stays trivial.
#[derive(Debug, Default)]
pub struct DebugDraw {
    persistent: Vec<DebugShape>,
    one_frame: Vec<DebugShape>,
}

impl DebugDraw {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_line(&mut self, start: Vec3, end: Vec3, color: Color, duration: f32) {
        self.push(
            DebugShape {
                kind: ShapeKind::Line { start, end },
                color,
                remaining: duration,
            },
            duration,
        );
    }

    pub fn draw_vector(&mut self, start: Vec3, vector: Vec3, color: Color, duration: f32) {
        self.draw_line(start, start + vector, color, duration);
    }

    /// Draw a polyline through `points` as individual segments.
    pub fn draw_path(&mut self, points: &[Vec3], color: Color, duration: f32) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], color, duration);
        }
    }

    pub fn draw_point(&mut self, position: Vec3, size: f32, color: Color, duration: f32) {
        self.push(
            DebugShape {
                kind: ShapeKind::Point { position, size },
                color,
                remaining: duration,
            },
            duration,
        );
    }

    fn push(&mut self, shape: DebugShape, duration: f32) {
        if duration > 0.0 {
            self.persistent.push(shape);
        } else {
            self.one_frame.push(shape);
        }
    }

    /// Advance lifetimes: drop the previous frame's one-shot shapes and
    /// expire timed shapes whose duration has run out.
    pub fn tick(&mut self, dt: f32) {
        self.one_frame.clear();
        for shape in &mut self.persistent {
            shape.remaining -= dt;
        }
        self.persistent.retain(|shape| shape.remaining > 0.0);
    }

    /// Every currently live shape, for the renderer.
    pub fn shapes(&self) -> impl Iterator<Item = &DebugShape> {
        self.persistent.iter().chain(self.one_frame.iter())
    }

    pub fn clear(&mut self) {
        self.persistent.clear();
        self.one_frame.clear();
    }
}
