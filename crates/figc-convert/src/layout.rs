//! Layout resolver.
//!
//! Maps a node's positioning, sizing, auto-layout, and overflow
//! attributes onto CSS declarations. Auto-layout nodes become flex
//! containers; everything else is absolutely positioned against its
//! parent's content origin. The two models nest freely.

use figc_document::{
    format_scalar, CounterAxisAlign, DesignNode, HorizontalConstraint, LayoutMode, LayoutWrap,
    PrimaryAxisAlign, SizingMode, VerticalConstraint,
};
use log::warn;

use crate::{px, Declaration, StyleFragment};

/// Flex-container declarations for an auto-layout node.
pub fn auto_layout_fragment(node: &DesignNode) -> StyleFragment {
    let direction = match node.layout_mode {
        LayoutMode::None => return Vec::new(),
        LayoutMode::Horizontal => "row",
        LayoutMode::Vertical => "column",
        LayoutMode::Unrecognized => {
            warn!("node {}: unrecognized layout mode, treating as no auto-layout", node.id);
            return Vec::new();
        }
    };

    let mut fragment = vec![
        Declaration::new("display", "flex"),
        Declaration::new("flex-direction", direction),
        Declaration::new("justify-content", primary_align(node)),
        Declaration::new("align-items", counter_align(node)),
    ];

    if node.item_spacing > 0.0 {
        fragment.push(Declaration::new("gap", px(node.item_spacing)));
    }

    fragment.extend(padding(node));

    if node.layout_wrap == LayoutWrap::Wrap {
        fragment.push(Declaration::new("flex-wrap", "wrap"));
    }

    fragment
}

fn primary_align(node: &DesignNode) -> &'static str {
    match node.primary_axis_align_items {
        PrimaryAxisAlign::Min => "flex-start",
        PrimaryAxisAlign::Center => "center",
        PrimaryAxisAlign::Max => "flex-end",
        PrimaryAxisAlign::SpaceBetween => "space-between",
        PrimaryAxisAlign::Unrecognized => {
            warn!("node {}: unrecognized primary axis alignment, using flex-start", node.id);
            "flex-start"
        }
    }
}

fn counter_align(node: &DesignNode) -> &'static str {
    match node.counter_axis_align_items {
        CounterAxisAlign::Min => "flex-start",
        CounterAxisAlign::Center => "center",
        CounterAxisAlign::Max => "flex-end",
        CounterAxisAlign::Baseline => "baseline",
        CounterAxisAlign::Unrecognized => {
            warn!("node {}: unrecognized counter axis alignment, using flex-start", node.id);
            "flex-start"
        }
    }
}

fn padding(node: &DesignNode) -> StyleFragment {
    let (t, r, b, l) = (
        node.padding_top,
        node.padding_right,
        node.padding_bottom,
        node.padding_left,
    );
    if t == r && r == b && b == l {
        if t > 0.0 {
            return vec![Declaration::new("padding", px(t))];
        }
        return Vec::new();
    }
    vec![Declaration::new(
        "padding",
        format!("{} {} {} {}", px(t), px(r), px(b), px(l)),
    )]
}

/// Positioning declarations relative to the parent's content origin.
/// Children of an auto-layout parent are flow-positioned and get none.
pub fn position_fragment(node: &DesignNode, parent: Option<&DesignNode>) -> StyleFragment {
    if parent.is_some_and(DesignNode::is_auto_layout) {
        return Vec::new();
    }

    let node_box = match node.absolute_bounding_box {
        Some(b) => b,
        None => return Vec::new(),
    };
    let (mut left, mut top) = (node_box.x, node_box.y);
    if let Some(parent_box) = parent.and_then(|p| p.absolute_bounding_box) {
        left -= parent_box.x;
        top -= parent_box.y;
    }

    vec![
        Declaration::new("position", "absolute"),
        Declaration::new("left", px(left)),
        Declaration::new("top", px(top)),
    ]
}

/// Per-axis size declarations. A declared sizing mode wins over the
/// measured bounding box; unrecognized modes fall back to the fixed
/// pixel size.
pub fn size_fragment(node: &DesignNode) -> StyleFragment {
    let node_box = node.absolute_bounding_box.unwrap_or_default();
    let mut fragment = Vec::new();

    if let Some(value) = axis_size(node, node.layout_sizing_horizontal, node_box.width) {
        fragment.push(Declaration::new("width", value));
    }
    if let Some(value) = axis_size(node, node.layout_sizing_vertical, node_box.height) {
        fragment.push(Declaration::new("height", value));
    }

    fragment
}

fn axis_size(node: &DesignNode, mode: Option<SizingMode>, fixed: f64) -> Option<String> {
    match mode {
        Some(SizingMode::Fill) => Some("100%".to_string()),
        Some(SizingMode::Hug) => Some("fit-content".to_string()),
        Some(SizingMode::Unrecognized) => {
            warn!("node {}: unrecognized sizing mode, using fixed size", node.id);
            (fixed > 0.0).then(|| px(fixed))
        }
        Some(SizingMode::Fixed) | None => (fixed > 0.0).then(|| px(fixed)),
    }
}

/// `overflow: hidden` when the node clips its content.
pub fn overflow_fragment(node: &DesignNode) -> StyleFragment {
    if node.clips_content {
        vec![Declaration::new("overflow", "hidden")]
    } else {
        Vec::new()
    }
}

/// Constraint anchors for absolutely positioned children. Default
/// anchors (left/top) contribute nothing; the others pin or stretch the
/// node against its parent. Centering translates are composed with the
/// node's rotation into a single `transform` declaration, since a later
/// merge would otherwise keep only one of them.
pub fn constraint_fragment(node: &DesignNode, parent: Option<&DesignNode>) -> StyleFragment {
    if parent.is_some_and(DesignNode::is_auto_layout) {
        return Vec::new();
    }

    let mut fragment = Vec::new();
    let mut transforms = Vec::new();
    match node.constraints.horizontal {
        HorizontalConstraint::Left | HorizontalConstraint::Unrecognized => {}
        HorizontalConstraint::Right => fragment.push(Declaration::new("right", "0")),
        HorizontalConstraint::Center => {
            fragment.push(Declaration::new("left", "50%"));
            transforms.push("translateX(-50%)".to_string());
        }
        HorizontalConstraint::LeftRight => {
            fragment.push(Declaration::new("left", "0"));
            fragment.push(Declaration::new("right", "0"));
        }
        HorizontalConstraint::Scale => fragment.push(Declaration::new("width", "100%")),
    }
    match node.constraints.vertical {
        VerticalConstraint::Top | VerticalConstraint::Unrecognized => {}
        VerticalConstraint::Bottom => fragment.push(Declaration::new("bottom", "0")),
        VerticalConstraint::Center => {
            fragment.push(Declaration::new("top", "50%"));
            transforms.push("translateY(-50%)".to_string());
        }
        VerticalConstraint::TopBottom => {
            fragment.push(Declaration::new("top", "0"));
            fragment.push(Declaration::new("bottom", "0"));
        }
        VerticalConstraint::Scale => fragment.push(Declaration::new("height", "100%")),
    }

    if !transforms.is_empty() {
        if node.rotation != 0.0 {
            transforms.push(format!("rotate({}deg)", format_scalar(node.rotation)));
        }
        fragment.push(Declaration::new("transform", transforms.join(" ")));
    }

    fragment
}

/// Rotation transform, when present.
pub fn transform_fragment(node: &DesignNode) -> StyleFragment {
    if node.rotation != 0.0 {
        vec![Declaration::new(
            "transform",
            format!("rotate({}deg)", format_scalar(node.rotation)),
        )]
    } else {
        Vec::new()
    }
}
