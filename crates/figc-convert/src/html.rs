//! HTML emitter.
//!
//! Serializes the markup tree into a complete HTML document. Output is
//! a pure function of the tree: two-space indentation per depth, text
//! content escaped with line breaks preserved as `<br>`.

use crate::walk::MarkupNode;

/// Render the full HTML document for a converted page.
pub fn render_document(nodes: &[MarkupNode]) -> String {
    let mut body = String::new();
    for node in nodes {
        render_node(node, &mut body, 0);
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20 <meta charset=\"UTF-8\">\n\
         \x20 <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         \x20 <title>figc export</title>\n\
         \x20 <link rel=\"stylesheet\" href=\"styles.css\">\n\
         </head>\n\
         <body>\n\
         {body}\
         </body>\n\
         </html>\n"
    )
}

fn render_node(node: &MarkupNode, out: &mut String, depth: usize) {
    let indent = "  ".repeat(depth);

    out.push_str(&indent);
    out.push('<');
    out.push_str(node.tag);
    out.push_str(&format!(" class=\"{}\">", node.class));

    if node.children.is_empty() {
        if let Some(text) = &node.text {
            out.push_str(&escape_text(text));
        }
    } else {
        out.push('\n');
        if let Some(text) = &node.text {
            out.push_str(&indent);
            out.push_str("  ");
            out.push_str(&escape_text(text));
            out.push('\n');
        }
        for child in &node.children {
            render_node(child, out, depth + 1);
        }
        out.push_str(&indent);
    }

    out.push_str(&format!("</{}>\n", node.tag));
}

/// Escape markup-significant characters and turn line breaks into
/// `<br>`. Consecutive breaks are kept verbatim, never collapsed.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\n' => escaped.push_str("<br>"),
            other => escaped.push(other),
        }
    }
    escaped
}
