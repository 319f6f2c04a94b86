//! Indented tree-to-XML writer

use std::io;

use crate::error::Result;
use crate::xml::model::{Content, Document, Element};

const INDENT: &str = "  ";

/// Render a document to the given sink.
///
/// The only failure source is the sink itself; a write error is surfaced
/// unchanged and the sink's contents are unspecified afterwards.
pub fn write_document<W: io::Write>(doc: &Document, mut sink: W) -> Result<()> {
    let text = render(doc);
    sink.write_all(text.as_bytes())?;
    Ok(())
}

/// Render a document to a string.
pub fn render(doc: &Document) -> String {
    let mut output = String::new();
    write_element(&doc.root, 0, &mut output);
    output
}

fn write_element(element: &Element, depth: usize, output: &mut String) {
    push_indent(depth, output);
    output.push('<');
    output.push_str(&element.name);
    for (name, value) in element.attributes.iter() {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        output.push_str(&escape(value));
        output.push('"');
    }
    output.push('>');

    // Text content sits directly after the opening tag. An element with no
    // child elements stays on one line; child elements each get their own
    // line, one level deeper, with the closing tag back at this depth.
    for child in &element.children {
        if let Content::Text(text) = child {
            output.push_str(&escape(text));
        }
    }

    let has_elements = element
        .children
        .iter()
        .any(|child| matches!(child, Content::Element(_)));
    if has_elements {
        for child in &element.children {
            if let Content::Element(child) = child {
                output.push('\n');
                write_element(child, depth + 1, output);
            }
        }
        output.push('\n');
        push_indent(depth, output);
    }

    output.push_str("</");
    output.push_str(&element.name);
    output.push('>');
}

fn push_indent(depth: usize, output: &mut String) {
    for _ in 0..depth {
        output.push_str(INDENT);
    }
}

fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
