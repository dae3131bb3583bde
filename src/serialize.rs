use std::io::Write;

use indextree::NodeEdge;

use crate::document::{Document, Node};
use crate::entity::{serialize_attribute, serialize_text};
use crate::error::Error;

pub(crate) const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Options controlling serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Start the output with an XML declaration.
    pub declaration: bool,
    /// Pretty-print element-only content with this many spaces per level.
    ///
    /// Elements with text or mixed content are written as they are.
    pub indent: Option<usize>,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        SerializeOptions {
            declaration: true,
            indent: None,
        }
    }
}

impl Document {
    /// Serialize the document with an XML declaration.
    ///
    /// ```rust
    /// let doc = xmledit::Document::new("catalog")?;
    /// assert_eq!(
    ///     doc.serialize(),
    ///     "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<catalog/>"
    /// );
    /// # Ok::<(), xmledit::Error>(())
    /// ```
    pub fn serialize(&self) -> String {
        self.serialize_with(&SerializeOptions::default())
    }

    pub fn serialize_with(&self, options: &SerializeOptions) -> String {
        let mut buf = Vec::new();
        // writing to a Vec cannot fail
        let _ = self.write(&mut buf, options);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Serialize a node and its descendants, without a declaration.
    pub fn serialize_node(&self, node: Node) -> String {
        let mut buf = Vec::new();
        let _ = self.write_node(node, &mut buf, None);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Write the serialized document to `w`.
    pub fn write(&self, w: &mut impl Write, options: &SerializeOptions) -> Result<(), Error> {
        if options.declaration {
            writeln!(w, "{}", XML_DECLARATION)?;
        }
        self.write_node(self.root, w, options.indent)
    }

    fn write_node(&self, node: Node, w: &mut impl Write, indent: Option<usize>) -> Result<(), Error> {
        let mut depth = 0;
        for edge in node.get().traverse(self.arena()) {
            match edge {
                NodeEdge::Start(node_id) => {
                    let current = Node::new(node_id);
                    if let Some(indent) = indent {
                        if current != node && self.is_element_only(self.parent(current)) {
                            write!(w, "\n{}", " ".repeat(indent * depth))?;
                        }
                    }
                    self.handle_edge_start(current, w)?;
                    depth += 1;
                }
                NodeEdge::End(node_id) => {
                    let current = Node::new(node_id);
                    depth -= 1;
                    if let Some(indent) = indent {
                        if self.last_child(current).is_some() && self.is_element_only(Some(current))
                        {
                            write!(w, "\n{}", " ".repeat(indent * depth))?;
                        }
                    }
                    self.handle_edge_end(current, w, current != node)?;
                }
            }
        }
        Ok(())
    }

    // Indentation only goes where it cannot change text content.
    fn is_element_only(&self, node: Option<Node>) -> bool {
        let Some(node) = node else {
            return false;
        };
        self.text(node).map_or(true, str::is_empty)
            && self
                .children(node)
                .all(|child| self.tail(child).map_or(true, str::is_empty))
    }

    fn handle_edge_start(&self, node: Node, w: &mut impl Write) -> Result<(), Error> {
        let element = self.element(node);
        write!(w, "<{}", element.name())?;
        for (name, value) in element.attributes().iter() {
            write!(w, " {}=\"{}\"", name, serialize_attribute(value))?;
        }
        match element.text() {
            None if self.last_child(node).is_none() => write!(w, "/>")?,
            None => write!(w, ">")?,
            Some(text) => write!(w, ">{}", serialize_text(text))?,
        }
        Ok(())
    }

    fn handle_edge_end(&self, node: Node, w: &mut impl Write, with_tail: bool) -> Result<(), Error> {
        let element = self.element(node);
        if element.text().is_some() || self.last_child(node).is_some() {
            write!(w, "</{}>", element.name())?;
        }
        if with_tail {
            if let Some(tail) = element.tail() {
                write!(w, "{}", serialize_text(tail))?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creation::NodeSpec;

    #[test]
    fn test_serialize_empty_root() {
        let doc = Document::new("root").unwrap();
        assert_eq!(
            doc.serialize(),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<root/>"
        );
    }

    #[test]
    fn test_serialize_without_declaration() {
        let doc = Document::parse("<a><b/></a>").unwrap();
        let options = SerializeOptions {
            declaration: false,
            ..Default::default()
        };
        assert_eq!(doc.serialize_with(&options), "<a><b/></a>");
    }

    #[test]
    fn test_serialize_empty_text() {
        let mut doc = Document::new("a").unwrap();
        let root = doc.root();
        doc.set_text(root, "");
        assert_eq!(doc.serialize_node(root), "<a></a>");
    }

    #[test]
    fn test_serialize_escapes() {
        let mut doc = Document::new("a").unwrap();
        doc.add_node(
            None,
            NodeSpec::new("b")
                .with_attribute("q", "\"x\" & <y>")
                .with_text("1 < 2 & 3 > 2"),
        )
        .unwrap();
        assert_eq!(
            doc.serialize_node(doc.root()),
            r#"<a><b q="&quot;x&quot; &amp; &lt;y>">1 &lt; 2 &amp; 3 &gt; 2</b></a>"#
        );
    }

    #[test]
    fn test_serialize_mixed_content() {
        let xml = "<p>a<b>x</b>c<i/>e</p>";
        let doc = Document::parse(xml).unwrap();
        assert_eq!(doc.serialize_node(doc.root()), xml);
    }

    #[test]
    fn test_serialize_node_skips_own_tail() {
        let doc = Document::parse("<p><b>x</b>tail</p>").unwrap();
        let b = doc.children(doc.root()).next().unwrap();
        assert_eq!(doc.serialize_node(b), "<b>x</b>");
    }

    #[test]
    fn test_serialize_indent() {
        let doc = Document::parse(r#"<a><b x="1"><c>text</c></b><d/></a>"#).unwrap();
        let options = SerializeOptions {
            declaration: true,
            indent: Some(2),
        };
        insta::assert_snapshot!(doc.serialize_with(&options), @r###"
        <?xml version="1.0" encoding="utf-8"?>
        <a>
          <b x="1">
            <c>text</c>
          </b>
          <d/>
        </a>
        "###);
    }

    #[test]
    fn test_serialize_indent_leaves_mixed_content() {
        let doc = Document::parse("<a><p>x<b/>y</p></a>").unwrap();
        let options = SerializeOptions {
            declaration: false,
            indent: Some(1),
        };
        assert_eq!(doc.serialize_with(&options), "<a>\n <p>x<b/>y</p>\n</a>");
    }

    #[test]
    fn test_display() {
        let doc = Document::new("r").unwrap();
        assert_eq!(doc.to_string(), doc.serialize());
    }
}
