//! Tree walker / orchestrator.
//!
//! Pre-order depth-first traversal of the design tree. Each visited
//! node gets its resolver fragments merged into one [`ResolvedStyle`],
//! a class name allocated in traversal order, and a [`MarkupNode`] in
//! the output tree; the (class, style) pair is appended to the
//! stylesheet in first-encounter order.

use figc_document::{DesignNode, NodeKind};
use log::warn;

use crate::{layout, style, text, ConversionContext, Declaration, ResolvedStyle, StyleRule};

/// One output markup element, mirroring a design node.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupNode {
    pub tag: &'static str,
    pub class: String,
    pub text: Option<String>,
    pub children: Vec<MarkupNode>,
}

/// Build the markup tree for a design subtree, accumulating stylesheet
/// rules into the context. Document and canvas nodes are structural:
/// they emit no markup of their own and only their children convert.
pub fn build_tree(root: &DesignNode, ctx: &mut ConversionContext) -> Vec<MarkupNode> {
    if !root.is_structural() {
        return build_node(root, None, ctx).into_iter().collect();
    }

    let mut nodes = Vec::new();
    for child in &root.children {
        if child.is_structural() {
            nodes.extend(build_tree(child, ctx));
        } else {
            nodes.extend(build_node(child, Some(root), ctx));
        }
    }
    nodes
}

fn build_node(
    node: &DesignNode,
    parent: Option<&DesignNode>,
    ctx: &mut ConversionContext,
) -> Option<MarkupNode> {
    if !node.visible {
        return None;
    }

    let class = ctx.allocate_class(&node.id);

    // A node without geometry cannot be placed; its whole subtree is
    // replaced by a zero-size placeholder.
    if node.absolute_bounding_box.is_none() {
        warn!(
            "node {} ({:?}): missing bounding box, emitting zero-size placeholder",
            node.id, node.kind
        );
        let mut placeholder = ResolvedStyle::new();
        placeholder.merge(vec![
            Declaration::new("width", "0px"),
            Declaration::new("height", "0px"),
        ]);
        ctx.rules.push(StyleRule { class: class.clone(), style: placeholder });
        return Some(MarkupNode {
            tag: tag_for(node),
            class,
            text: None,
            children: Vec::new(),
        });
    }

    ctx.rules.push(StyleRule {
        class: class.clone(),
        style: resolve_style(node, parent),
    });

    let children = node
        .children
        .iter()
        .filter_map(|child| build_node(child, Some(node), ctx))
        .collect();

    Some(MarkupNode {
        tag: tag_for(node),
        class,
        text: node.characters.clone(),
        children,
    })
}

/// Merge the three resolvers' fragments into one style, in the same
/// order the fragments are produced so later resolvers win on conflict.
fn resolve_style(node: &DesignNode, parent: Option<&DesignNode>) -> ResolvedStyle {
    let mut resolved = ResolvedStyle::new();

    resolved.merge(layout::auto_layout_fragment(node));
    resolved.merge(layout::position_fragment(node, parent));
    resolved.merge(layout::size_fragment(node));
    resolved.merge(layout::overflow_fragment(node));
    resolved.merge(layout::transform_fragment(node));
    // Constraints last: Scale stretching replaces the fixed size, and
    // the composed centering transform replaces the bare rotation.
    resolved.merge(layout::constraint_fragment(node, parent));

    resolved.merge(style::background_fragment(node));
    resolved.merge(style::border_fragment(node));
    resolved.merge(style::corner_fragment(node));
    resolved.merge(style::effect_fragment(node));
    resolved.merge(style::opacity_fragment(node));
    resolved.merge(style::blend_fragment(node));

    if node.kind == NodeKind::Text {
        resolved.merge(text::text_fragment(node));
    }

    resolved
}

fn tag_for(node: &DesignNode) -> &'static str {
    match node.kind {
        NodeKind::Text => "p",
        NodeKind::Frame
        | NodeKind::Group
        | NodeKind::Component
        | NodeKind::ComponentSet
        | NodeKind::Instance
        | NodeKind::Rectangle
        | NodeKind::Ellipse
        | NodeKind::Vector
        | NodeKind::Star
        | NodeKind::Polygon
        | NodeKind::Line
        | NodeKind::BooleanOperation
        | NodeKind::Document
        | NodeKind::Canvas => "div",
        NodeKind::Unsupported => {
            warn!("node {}: unsupported node kind, rendering as container", node.id);
            "div"
        }
    }
}
