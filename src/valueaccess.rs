use crate::attributes::Attributes;
use crate::document::{Document, Node};
use crate::error::Error;
use crate::name::validate_attribute_name;

/// Read and change the values of a node: tag, text and attributes.
///
/// These work the same on freshly created nodes and on nodes obtained
/// through a query.
impl Document {
    /// The tag name of a node.
    pub fn tag(&self, node: Node) -> &str {
        self.element(node).name()
    }

    /// The text directly inside a node, if any was set or parsed.
    ///
    /// ```rust
    /// let doc = xmledit::Document::parse("<p>Example</p>").unwrap();
    /// assert_eq!(doc.text(doc.root()), Some("Example"));
    /// ```
    pub fn text(&self, node: Node) -> Option<&str> {
        self.element(node).text()
    }

    /// Set the text directly inside a node, replacing what was there.
    ///
    /// An empty string is kept as such and serializes as `<tag></tag>`.
    /// On a node with children it serializes like no text at all, so
    /// parsing the output gives [`None`].
    pub fn set_text<S: Into<String>>(&mut self, node: Node, text: S) {
        self.element_mut(node).text = Some(text.into());
    }

    /// Remove the text directly inside a node.
    pub fn clear_text(&mut self, node: Node) {
        self.element_mut(node).text = None;
    }

    /// The text following the node's end tag within its parent.
    pub fn tail(&self, node: Node) -> Option<&str> {
        self.element(node).tail()
    }

    /// Set or clear the text following the node's end tag.
    pub fn set_tail<S: Into<String>>(&mut self, node: Node, tail: Option<S>) {
        self.element_mut(node).tail = tail.map(Into::into);
    }

    /// All attributes of a node, in insertion order.
    pub fn attributes(&self, node: Node) -> &Attributes {
        self.element(node).attributes()
    }

    /// The value of one attribute.
    pub fn attribute(&self, node: Node, name: &str) -> Option<&str> {
        self.element(node).get_attribute(name)
    }

    /// Merge `attributes` into the node's attributes.
    ///
    /// Colliding names are overwritten in place, new names are appended and
    /// all other attributes are kept.
    ///
    /// ```rust
    /// use xmledit::{Attributes, Document};
    ///
    /// let mut doc = Document::new("doc")?;
    /// let root = doc.root();
    /// doc.set_attributes(root, &Attributes::from([("a", "1")]))?;
    /// doc.set_attributes(root, &Attributes::from([("b", "2")]))?;
    /// doc.set_attributes(root, &Attributes::from([("a", "9")]))?;
    /// assert_eq!(doc.attributes(root), &Attributes::from([("a", "9"), ("b", "2")]));
    /// # Ok::<(), xmledit::Error>(())
    /// ```
    ///
    /// Fails with [`Error::InvalidArgument`] without changing anything if
    /// one of the names is not a valid XML name.
    pub fn set_attributes(&mut self, node: Node, attributes: &Attributes) -> Result<(), Error> {
        for name in attributes.names() {
            validate_attribute_name(name)?;
        }
        self.element_mut(node).attributes.merge(attributes);
        Ok(())
    }

    /// Set a single attribute.
    pub fn set_attribute<S: Into<String>>(
        &mut self,
        node: Node,
        name: &str,
        value: S,
    ) -> Result<(), Error> {
        validate_attribute_name(name)?;
        self.element_mut(node).attributes.insert(name, value);
        Ok(())
    }

    /// Remove a single attribute, returning its old value.
    pub fn remove_attribute(&mut self, node: Node, name: &str) -> Option<String> {
        self.element_mut(node).attributes.remove(name)
    }

    /// Remove the named attributes. Names that aren't present are ignored.
    pub fn remove_attributes<I, S>(&mut self, node: Node, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let attributes = &mut self.element_mut(node).attributes;
        for name in names {
            attributes.remove(name.as_ref());
        }
    }
}
