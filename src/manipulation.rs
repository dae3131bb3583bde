use tracing::trace;

use crate::creation::NodeSpec;
use crate::document::{Document, Node};
use crate::error::Error;

/// Manipulation of the tree structure.
///
/// Mutations apply immediately to the document; there is no undo. New
/// nodes are always appended as the last child of their parent, and the
/// root element can never be removed.
impl Document {
    /// Create a node from `spec` and append it as the last child of
    /// `parent`, or of the root element when `parent` is `None`.
    ///
    /// ```rust
    /// use xmledit::{Document, NodeSpec};
    ///
    /// let mut doc = Document::new("catalog")?;
    /// let item = doc.add_node(
    ///     None,
    ///     NodeSpec::new("item").with_attribute("id", "1").with_text("Widget"),
    /// )?;
    /// assert_eq!(doc.parent(item), Some(doc.root()));
    /// assert_eq!(
    ///     doc.serialize_node(doc.root()),
    ///     r#"<catalog><item id="1">Widget</item></catalog>"#
    /// );
    /// # Ok::<(), xmledit::Error>(())
    /// ```
    ///
    /// Fails with [`Error::InvalidArgument`] if the tag or an attribute
    /// name is not a valid XML name; the document is unchanged then.
    pub fn add_node(&mut self, parent: Option<Node>, spec: NodeSpec) -> Result<Node, Error> {
        spec.validate()?;
        let parent = parent.unwrap_or(self.root);
        trace!(tag = spec.tag(), "adding node");
        let node = self.new_node(spec.into_element());
        parent.get().append(node.get(), self.arena_mut());
        Ok(node)
    }

    /// Add several nodes under the same parent, in order.
    ///
    /// Returns the created nodes in the same order. This is not
    /// transactional: if one spec is rejected, the nodes created before it
    /// stay in the document and the error is returned.
    pub fn add_nodes<I>(&mut self, parent: Option<Node>, specs: I) -> Result<Vec<Node>, Error>
    where
        I: IntoIterator<Item = NodeSpec>,
    {
        specs
            .into_iter()
            .map(|spec| self.add_node(parent, spec))
            .collect()
    }

    /// Detach `child` (and its descendants) from `parent`.
    ///
    /// The detached subtree stays intact, so its nodes can still be read,
    /// but it can no longer be reached from the root. Text following
    /// `child` stays in `parent`.
    ///
    /// ```rust
    /// let mut doc = xmledit::Document::parse("<p>a<b/>c</p>")?;
    /// let p = doc.root();
    /// let b = doc.children(p).next().unwrap();
    /// doc.remove_node(p, b)?;
    /// assert_eq!(doc.serialize_node(p), "<p>ac</p>");
    /// # Ok::<(), xmledit::Error>(())
    /// ```
    ///
    /// Fails with [`Error::InvalidArgument`] if `child` is not currently a
    /// child of `parent`.
    pub fn remove_node(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        if self.parent(child) != Some(parent) {
            return Err(Error::InvalidArgument(format!(
                "<{}> is not a child of <{}>",
                self.tag(child),
                self.tag(parent)
            )));
        }
        trace!(tag = self.tag(child), "removing node");
        // the tail is the parent's content and stays behind
        if let Some(tail) = self.element_mut(child).tail.take() {
            match self.arena()[child.get()].previous_sibling() {
                Some(previous) => self.element_mut(Node::new(previous)).append_tail(&tail),
                None => self.element_mut(parent).append_text(&tail),
            }
        }
        child.get().detach(self.arena_mut());
        Ok(())
    }
}
