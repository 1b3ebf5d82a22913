//! The design node tree.
//!
//! One `DesignNode` per layer in the Figma document, decoded from the
//! REST API's camelCase JSON. Optional attributes keep their API
//! defaults so resolvers can match on plain values instead of peppering
//! the conversion code with `Option` handling.

use serde::Deserialize;

use crate::geometry::Rect;
use crate::paint::{BlendMode, Effect, Paint};

/// A single node in the design document tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub children: Vec<DesignNode>,

    // Geometry
    #[serde(default)]
    pub absolute_bounding_box: Option<Rect>,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub constraints: Constraints,

    // Auto-layout
    #[serde(default)]
    pub layout_mode: LayoutMode,
    #[serde(default)]
    pub primary_axis_align_items: PrimaryAxisAlign,
    #[serde(default)]
    pub counter_axis_align_items: CounterAxisAlign,
    #[serde(default)]
    pub item_spacing: f64,
    #[serde(default)]
    pub padding_top: f64,
    #[serde(default)]
    pub padding_right: f64,
    #[serde(default)]
    pub padding_bottom: f64,
    #[serde(default)]
    pub padding_left: f64,
    #[serde(default)]
    pub layout_sizing_horizontal: Option<SizingMode>,
    #[serde(default)]
    pub layout_sizing_vertical: Option<SizingMode>,
    #[serde(default)]
    pub layout_wrap: LayoutWrap,
    #[serde(default)]
    pub clips_content: bool,

    // Paint
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    #[serde(default)]
    pub stroke_weight: f64,
    #[serde(default)]
    pub individual_stroke_weights: Option<StrokeWeights>,
    #[serde(default)]
    pub stroke_align: StrokeAlign,
    #[serde(default)]
    pub corner_radius: Option<f64>,
    #[serde(default)]
    pub rectangle_corner_radii: Option<[f64; 4]>,

    // Effects and compositing
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub blend_mode: BlendMode,

    // Text
    #[serde(default)]
    pub characters: Option<String>,
    #[serde(default)]
    pub style: Option<TypeStyle>,
}

impl DesignNode {
    /// Document and canvas nodes contribute no markup of their own;
    /// only their children are converted.
    pub fn is_structural(&self) -> bool {
        matches!(self.kind, NodeKind::Document | NodeKind::Canvas)
    }

    /// Whether this node lays its children out with auto-layout.
    pub fn is_auto_layout(&self) -> bool {
        matches!(self.layout_mode, LayoutMode::Horizontal | LayoutMode::Vertical)
    }
}

/// The closed set of node kinds this converter distinguishes.
/// Kinds the converter has no special handling for (sections, slices,
/// stickies, ...) decode as `Unsupported` and render as plain containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Document,
    Canvas,
    Frame,
    Group,
    Component,
    ComponentSet,
    Instance,
    Text,
    Rectangle,
    Ellipse,
    Vector,
    Star,
    Polygon,
    Line,
    BooleanOperation,
    #[serde(other)]
    Unsupported,
}

/// Auto-layout flow axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
    #[serde(other)]
    Unrecognized,
}

/// Alignment of children along the flow axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    #[default]
    Min,
    Center,
    Max,
    SpaceBetween,
    #[serde(other)]
    Unrecognized,
}

/// Alignment of children across the flow axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlign {
    #[default]
    Min,
    Center,
    Max,
    Baseline,
    #[serde(other)]
    Unrecognized,
}

/// Per-axis sizing rule for a node inside an auto-layout parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizingMode {
    Fixed,
    Hug,
    Fill,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutWrap {
    #[default]
    NoWrap,
    Wrap,
    #[serde(other)]
    Unrecognized,
}

/// Where the stroke sits relative to the node's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeAlign {
    #[default]
    Inside,
    Outside,
    Center,
    #[serde(other)]
    Unrecognized,
}

/// Independent stroke weight per edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct StrokeWeights {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
}

/// Constraint anchors for non-auto-layout children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    #[serde(default)]
    pub horizontal: HorizontalConstraint,
    #[serde(default)]
    pub vertical: VerticalConstraint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HorizontalConstraint {
    #[default]
    Left,
    Right,
    Center,
    LeftRight,
    Scale,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerticalConstraint {
    #[default]
    Top,
    Bottom,
    Center,
    TopBottom,
    Scale,
    #[serde(other)]
    Unrecognized,
}

/// The dominant text style of a text node.
///
/// Figma can vary style per character run; this model keeps only the
/// node-level style, so mixed-run text renders with its dominant style.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub font_weight: Option<f64>,
    #[serde(default)]
    pub line_height_px: Option<f64>,
    #[serde(default)]
    pub line_height_percent: Option<f64>,
    #[serde(default)]
    pub line_height_percent_font_size: Option<f64>,
    #[serde(default)]
    pub letter_spacing: Option<f64>,
    #[serde(default)]
    pub text_align_horizontal: Option<TextAlignHorizontal>,
    #[serde(default)]
    pub text_align_vertical: Option<TextAlignVertical>,
    #[serde(default)]
    pub text_decoration: Option<TextDecoration>,
    #[serde(default)]
    pub text_case: Option<TextCase>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignHorizontal {
    Left,
    Right,
    Center,
    Justified,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignVertical {
    Top,
    Center,
    Bottom,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    None,
    Underline,
    Strikethrough,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    Original,
    Upper,
    Lower,
    Title,
    #[serde(other)]
    Unrecognized,
}

fn default_visible() -> bool {
    true
}

fn default_opacity() -> f64 {
    1.0
}
