//! Typography resolver.
//!
//! Produces font and text-alignment declarations for text nodes from
//! the node's dominant [`TypeStyle`]. Mixed-style character runs are
//! not supported; the whole node renders with its dominant style.

use figc_document::{
    format_scalar, DesignNode, TextAlignHorizontal, TextAlignVertical, TextCase, TextDecoration,
};
use log::warn;

use crate::{px, Declaration, StyleFragment};

/// Font and text declarations for a text node. Non-text nodes get none.
pub fn text_fragment(node: &DesignNode) -> StyleFragment {
    let style = match &node.style {
        Some(style) => style,
        None => return Vec::new(),
    };
    let mut fragment = Vec::new();

    if let Some(family) = &style.font_family {
        fragment.push(Declaration::new(
            "font-family",
            format!("'{family}', sans-serif"),
        ));
    }
    if let Some(size) = style.font_size {
        fragment.push(Declaration::new("font-size", px(size)));
    }
    if let Some(weight) = style.font_weight {
        fragment.push(Declaration::new("font-weight", format_scalar(weight)));
    }

    // Absolute line height wins over the percentage forms.
    if let Some(height) = style.line_height_px {
        fragment.push(Declaration::new("line-height", px(height)));
    } else if let Some(percent) = style
        .line_height_percent_font_size
        .or(style.line_height_percent)
    {
        fragment.push(Declaration::new(
            "line-height",
            format_scalar(percent / 100.0),
        ));
    }

    if let Some(spacing) = style.letter_spacing {
        if spacing != 0.0 {
            fragment.push(Declaration::new("letter-spacing", px(spacing)));
        }
    }

    if let Some(align) = style.text_align_horizontal {
        let value = match align {
            TextAlignHorizontal::Left => "left",
            TextAlignHorizontal::Right => "right",
            TextAlignHorizontal::Center => "center",
            TextAlignHorizontal::Justified => "justify",
            TextAlignHorizontal::Unrecognized => {
                warn!("node {}: unrecognized text alignment, using left", node.id);
                "left"
            }
        };
        fragment.push(Declaration::new("text-align", value));
    }

    // Decorations form a combinable set; the dominant style carries at
    // most one, but the emitted value supports both keywords.
    let mut decorations = Vec::new();
    match style.text_decoration {
        Some(TextDecoration::Underline) => decorations.push("underline"),
        Some(TextDecoration::Strikethrough) => decorations.push("line-through"),
        Some(TextDecoration::Unrecognized) => {
            warn!("node {}: unrecognized text decoration skipped", node.id);
        }
        Some(TextDecoration::None) | None => {}
    }
    if !decorations.is_empty() {
        fragment.push(Declaration::new("text-decoration", decorations.join(" ")));
    }

    match style.text_case {
        Some(TextCase::Upper) => {
            fragment.push(Declaration::new("text-transform", "uppercase"));
        }
        Some(TextCase::Lower) => {
            fragment.push(Declaration::new("text-transform", "lowercase"));
        }
        Some(TextCase::Title) => {
            fragment.push(Declaration::new("text-transform", "capitalize"));
        }
        Some(TextCase::Unrecognized) => {
            warn!("node {}: unrecognized text case skipped", node.id);
        }
        Some(TextCase::Original) | None => {}
    }

    // Vertical alignment needs the node to be a flex box of its own.
    fragment.push(Declaration::new("display", "flex"));
    let align_items = match style.text_align_vertical {
        Some(TextAlignVertical::Top) => "flex-start",
        Some(TextAlignVertical::Bottom) => "flex-end",
        Some(TextAlignVertical::Center) | None => "center",
        Some(TextAlignVertical::Unrecognized) => {
            warn!("node {}: unrecognized vertical alignment, centering", node.id);
            "center"
        }
    };
    fragment.push(Declaration::new("align-items", align_items));

    fragment
}
