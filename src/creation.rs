use crate::attributes::Attributes;
use crate::document::{Document, Node};
use crate::error::Error;
use crate::name::{validate_attribute_name, validate_tag};
use crate::xmlvalue::Element;

/// Description of a node to be created: tag, attributes and text.
///
/// ```rust
/// use xmledit::NodeSpec;
///
/// let spec = NodeSpec::new("item")
///     .with_attribute("id", "1")
///     .with_text("Widget");
/// assert_eq!(spec.tag(), "item");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeSpec {
    tag: String,
    attributes: Attributes,
    text: Option<String>,
}

impl NodeSpec {
    pub fn new<S: Into<String>>(tag: S) -> Self {
        NodeSpec {
            tag: tag.into(),
            attributes: Attributes::new(),
            text: None,
        }
    }

    pub fn with_attribute<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.attributes.insert(name, value);
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes.merge(&attributes);
        self
    }

    /// Text for the new node. An empty string is kept as text.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        validate_tag(&self.tag)?;
        for name in self.attributes.names() {
            validate_attribute_name(name)?;
        }
        Ok(())
    }

    pub(crate) fn into_element(self) -> Element {
        let mut element = Element::new(self.tag);
        element.attributes = self.attributes;
        element.text = self.text;
        element
    }
}

impl From<&str> for NodeSpec {
    fn from(tag: &str) -> Self {
        NodeSpec::new(tag)
    }
}

impl Document {
    pub(crate) fn new_node(&mut self, element: Element) -> Node {
        Node::new(self.arena_mut().new_node(element))
    }

    /// Describe an existing node so it can serve as a prototype for
    /// [`Document::add_node`] or [`Document::add_nodes`].
    ///
    /// Only tag, attributes and text are taken; children are not.
    pub fn node_spec(&self, node: Node) -> NodeSpec {
        let element = self.element(node);
        NodeSpec {
            tag: element.name.clone(),
            attributes: element.attributes.clone(),
            text: element.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_spec_builder() {
        let spec = NodeSpec::new("item")
            .with_attributes(Attributes::from([("a", "1")]))
            .with_attribute("b", "2")
            .with_text("");
        assert_eq!(spec.tag(), "item");
        assert_eq!(spec.attributes(), &Attributes::from([("a", "1"), ("b", "2")]));
        assert_eq!(spec.text(), Some(""));
    }

    #[test]
    fn test_node_spec_validate() {
        assert!(NodeSpec::new("ok").validate().is_ok());
        assert!(NodeSpec::new("").validate().is_err());
        assert!(NodeSpec::new("ok")
            .with_attribute("1bad", "x")
            .validate()
            .is_err());
    }

    #[test]
    fn test_node_spec_from_node() {
        let doc = Document::parse(r#"<r><item id="1">Widget<sub/></item></r>"#).unwrap();
        let item = doc.children(doc.root()).next().unwrap();
        let spec = doc.node_spec(item);
        assert_eq!(
            spec,
            NodeSpec::new("item")
                .with_attribute("id", "1")
                .with_text("Widget")
        );
    }
}
