//! CSS emitter.
//!
//! Serializes the accumulated stylesheet: a fixed base-reset block
//! followed by one rule per class, in first-encounter (pre-order)
//! order. Identical rule lists produce byte-identical output.

use crate::StyleRule;

const BASE_STYLES: &str = "\
/* Base styles */
* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Helvetica', 'Arial', sans-serif;
}

/* Node styles */
";

/// Render the stylesheet for a converted page.
pub fn render(rules: &[StyleRule]) -> String {
    let mut out = String::from(BASE_STYLES);

    for rule in rules {
        out.push_str(&format!("\n.{} {{\n", rule.class));
        for decl in rule.style.declarations() {
            out.push_str(&format!("  {}: {};\n", decl.property, decl.value));
        }
        out.push_str("}\n");
    }

    out
}
