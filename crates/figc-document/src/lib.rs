//! Figma document model
//!
//! Typed representation of the node tree returned by the Figma REST API
//! (`GET /v1/files/{key}`). The tree is decoded once by the document
//! source and is read-only for the lifetime of a conversion run.
//!
//! Every enum carries a catch-all variant so that node kinds, paint
//! types, and effect types this converter does not understand decode
//! cleanly instead of failing the whole document.

pub mod color;
pub mod geometry;
pub mod node;
pub mod paint;

pub use color::Rgba;
pub use geometry::{gradient_angle, Rect, Vec2};
pub use node::{
    Constraints, DesignNode, HorizontalConstraint, LayoutMode, LayoutWrap, NodeKind,
    PrimaryAxisAlign, CounterAxisAlign, SizingMode, StrokeAlign, StrokeWeights, TextAlignHorizontal,
    TextAlignVertical, TextCase, TextDecoration, TypeStyle, VerticalConstraint,
};
pub use paint::{BlendMode, Effect, Gradient, GradientStop, Paint};

/// Format a scalar, removing `.0` for integers.
pub fn format_scalar(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
