//! HTML serialisation of an [`ElementTree`].
//!
//! Output is compact (no indentation or newlines between elements). An
//! element's text is written before its children. Text and attribute values
//! are escaped. Void kinds (`img`, `input`) never get a closing tag.

use std::fmt::Write;

use indextree::NodeId;

use crate::element_tree::ElementTree;

/// Renders every root of `tree` in document order.
pub fn render_html(tree: &ElementTree) -> String {
    let mut out = String::with_capacity(tree.len() * 48);
    for root in tree.roots() {
        write_node(tree, *root, &mut out);
    }
    out
}

/// Renders the subtree rooted at `node_id`.
pub fn render_node(tree: &ElementTree, node_id: NodeId) -> String {
    let mut out = String::new();
    write_node(tree, node_id, &mut out);
    out
}

fn write_node(tree: &ElementTree, node_id: NodeId, out: &mut String) {
    let Some(element) = tree.get(node_id) else {
        return;
    };
    let tag = element.kind().tag();

    out.push('<');
    out.push_str(tag);
    if !element.classes().is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape(&element.classes().join(" ")));
        out.push('"');
    }
    for (name, value) in element.attributes() {
        // Boolean attributes are stored with an empty value.
        if value.is_empty() {
            let _ = write!(out, " {name}");
        } else {
            let _ = write!(out, " {name}=\"{}\"", escape(value));
        }
    }
    out.push('>');

    if element.kind().is_void() {
        return;
    }

    if let Some(text) = element.text_content() {
        out.push_str(&escape(text));
    }
    for child in tree.children(node_id) {
        write_node(tree, child, out);
    }
    let _ = write!(out, "</{tag}>");
}

/// Escapes `&`, `<`, `>`, `"` and `'` for use in text and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use crate::element_tree::{Element, ElementKind};

    use super::*;

    #[test]
    fn nested_elements_with_classes_and_text() {
        let mut tree = ElementTree::new();
        tree.with_node(Element::new(ElementKind::Div).class("glass-card hero-card"), |tree| {
            tree.leaf(Element::new(ElementKind::Heading(1)).class("hero-title").text("Abhay Korat"));
        });
        assert_eq!(
            render_html(&tree),
            r#"<div class="glass-card hero-card"><h1 class="hero-title">Abhay Korat</h1></div>"#
        );
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let mut tree = ElementTree::new();
        tree.leaf(
            Element::new(ElementKind::Anchor)
                .attr("href", "https://example.com/?a=1&b=\"2\"")
                .text("<Fintech & Enterprise>"),
        );
        assert_eq!(
            render_html(&tree),
            "<a href=\"https://example.com/?a=1&amp;b=&quot;2&quot;\">&lt;Fintech &amp; Enterprise&gt;</a>"
        );
    }

    #[test]
    fn void_elements_and_boolean_attributes() {
        let mut tree = ElementTree::new();
        tree.with_node(Element::new(ElementKind::Form), |tree| {
            tree.leaf(
                Element::new(ElementKind::Input)
                    .attr("name", "email")
                    .flag("required", true)
                    .flag("disabled", false),
            );
            tree.leaf(Element::new(ElementKind::Image).attr("src", "/nav-logo.png"));
        });
        assert_eq!(
            render_html(&tree),
            r#"<form><input name="email" required><img src="/nav-logo.png"></form>"#
        );
    }

    #[test]
    fn text_precedes_children_and_roots_are_concatenated() {
        let mut tree = ElementTree::new();
        let link = tree.with_node(Element::new(ElementKind::Anchor).text("View "), |tree| {
            tree.leaf(Element::new(ElementKind::Span).class("icon").text("↗"));
        });
        tree.leaf(Element::new(ElementKind::Paragraph));
        assert_eq!(
            render_html(&tree),
            r#"<a>View <span class="icon">↗</span></a><p></p>"#
        );
        assert_eq!(
            render_node(&tree, link),
            r#"<a>View <span class="icon">↗</span></a>"#
        );
    }
}
