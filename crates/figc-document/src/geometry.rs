//! Geometry primitives and gradient direction math.

use serde::Deserialize;

/// A 2D point or offset, used for gradient handles and shadow offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Vec2 {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// An axis-aligned bounding box in absolute canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Rect {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

/// CSS gradient angle for a direction running `from` → `to`.
///
/// Figma handles run along the gradient axis; CSS measures gradient
/// angles from "up" while `atan2` measures from "right", hence the
/// +90° shift. Result is normalized into `[0, 360)`.
pub fn gradient_angle(from: Vec2, to: Vec2) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    (dy.atan2(dx).to_degrees() + 90.0).rem_euclid(360.0)
}
