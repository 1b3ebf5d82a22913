//! figc conversion engine
//!
//! Converts a Figma design node tree into two deterministic text
//! artifacts: an HTML document and a matching stylesheet.
//!
//! ```text
//! DesignNode tree → convert() → ConvertOutput { html, css }
//! ```
//!
//! The walk resolves each node's layout, paint, and typography into one
//! [`ResolvedStyle`], allocates a class name in traversal order, and
//! accumulates one stylesheet rule per node. The emitters then
//! serialize the markup tree and the rule list; identical input trees
//! produce byte-identical output.

pub mod css;
pub mod html;
pub mod layout;
pub mod style;
pub mod text;
pub mod walk;

use std::collections::HashMap;

use figc_document::{format_scalar, DesignNode};

/// The converted output for one document page.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOutput {
    pub html: String,
    pub css: String,
}

/// Conversion error.
///
/// Unsupported features and structurally broken nodes never surface
/// here; they resolve to documented fallbacks during the walk. This is
/// reserved for failures that invalidate the whole run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Conversion error: {message}")]
pub struct ConvertError {
    pub message: String,
}

/// One CSS declaration (`property: value`).
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// A list of declarations produced by one resolver.
/// Fragments from the layout, style, and typography resolvers are
/// merged into a node's [`ResolvedStyle`].
pub type StyleFragment = Vec<Declaration>;

/// The complete resolved style of one node.
///
/// Behaves as a property → value mapping: merging a fragment replaces
/// the value of an already-set property in place, so later resolvers
/// win without duplicating declarations. Declaration order is
/// first-set order, which keeps the emitted rules deterministic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedStyle {
    declarations: Vec<Declaration>,
}

impl ResolvedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, fragment: StyleFragment) {
        for decl in fragment {
            match self
                .declarations
                .iter_mut()
                .find(|d| d.property == decl.property)
            {
                Some(existing) => existing.value = decl.value,
                None => self.declarations.push(decl),
            }
        }
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// One stylesheet rule: a class selector and its resolved style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub class: String,
    pub style: ResolvedStyle,
}

/// Run-scoped class name allocator.
///
/// Names are minted from a traversal-order counter (`fig-0`, `fig-1`,
/// ...) and never derived from node content, so a run over an unchanged
/// tree reproduces the same names. Asking twice for the same node id
/// returns the name issued first.
#[derive(Debug, Default)]
pub struct ClassAllocator {
    next: usize,
    issued: HashMap<String, String>,
}

impl ClassAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, node_id: &str) -> String {
        if let Some(existing) = self.issued.get(node_id) {
            return existing.clone();
        }
        let class = format!("fig-{}", self.next);
        self.next += 1;
        self.issued.insert(node_id.to_string(), class.clone());
        class
    }
}

/// Mutable state threaded through one conversion run: the class
/// allocator and the stylesheet rules in first-encounter order.
#[derive(Debug, Default)]
pub struct ConversionContext {
    allocator: ClassAllocator,
    pub rules: Vec<StyleRule>,
}

impl ConversionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate_class(&mut self, node_id: &str) -> String {
        self.allocator.allocate(node_id)
    }
}

/// Convert a node tree (a page root or any subtree) into HTML + CSS.
pub fn convert(root: &DesignNode) -> Result<ConvertOutput, ConvertError> {
    let mut ctx = ConversionContext::new();
    let markup = walk::build_tree(root, &mut ctx);

    Ok(ConvertOutput {
        html: html::render_document(&markup),
        css: css::render(&ctx.rules),
    })
}

/// Format a pixel length (`12px`, `2.5px`).
pub(crate) fn px(n: f64) -> String {
    format!("{}px", format_scalar(n))
}
