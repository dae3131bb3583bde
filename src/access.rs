use crate::document::{Document, Node};
use crate::error::Error;
use crate::xmlvalue::Element;

/// Attribute part of a [`Query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributePredicate {
    /// The element has the attribute, with any value.
    Present(String),
    /// The element has the attribute with exactly this value.
    Equals(String, String),
}

/// Select elements by tag, optionally narrowed by an attribute.
///
/// The query is evaluated directly against the tree; attribute values are
/// compared as exact, case-sensitive strings, so values containing quotes
/// or brackets need no escaping.
///
/// ```rust
/// use xmledit::{Document, Query};
///
/// let doc = Document::parse(r#"<r><x id="it's"/><x/></r>"#)?;
/// assert_eq!(doc.find(&Query::tag("x"))?.len(), 2);
/// assert_eq!(doc.find(&Query::tag("x").with_attribute("id"))?.len(), 1);
/// assert_eq!(doc.find(&Query::tag("x").with_attribute_value("id", "it's"))?.len(), 1);
/// # Ok::<(), xmledit::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    tag: String,
    attribute: Option<AttributePredicate>,
}

impl Query {
    /// Match elements by tag alone.
    pub fn tag<S: Into<String>>(tag: S) -> Self {
        Query {
            tag: tag.into(),
            attribute: None,
        }
    }

    /// Only match elements that have the named attribute.
    pub fn with_attribute<S: Into<String>>(mut self, name: S) -> Self {
        self.attribute = Some(AttributePredicate::Present(name.into()));
        self
    }

    /// Only match elements whose named attribute has exactly this value.
    pub fn with_attribute_value<N: Into<String>, V: Into<String>>(
        mut self,
        name: N,
        value: V,
    ) -> Self {
        self.attribute = Some(AttributePredicate::Equals(name.into(), value.into()));
        self
    }

    /// Build a query from optional attribute arguments.
    ///
    /// A value without a name is rejected, as is an empty tag.
    pub fn from_parts(
        tag: &str,
        attribute_name: Option<&str>,
        attribute_value: Option<&str>,
    ) -> Result<Self, Error> {
        let query = match (attribute_name, attribute_value) {
            (None, None) => Query::tag(tag),
            (Some(name), None) => Query::tag(tag).with_attribute(name),
            (Some(name), Some(value)) => Query::tag(tag).with_attribute_value(name, value),
            (None, Some(_)) => {
                return Err(Error::InvalidArgument(
                    "attribute value given without attribute name".into(),
                ))
            }
        };
        query.validate()?;
        Ok(query)
    }

    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self) -> Option<&AttributePredicate> {
        self.attribute.as_ref()
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.tag.is_empty() {
            return Err(Error::InvalidArgument("query tag must not be empty".into()));
        }
        match &self.attribute {
            Some(AttributePredicate::Present(name)) | Some(AttributePredicate::Equals(name, _))
                if name.is_empty() =>
            {
                Err(Error::InvalidArgument(
                    "query attribute name must not be empty".into(),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Whether an element satisfies this query.
    pub fn matches(&self, element: &Element) -> bool {
        if element.name() != self.tag {
            return false;
        }
        match &self.attribute {
            None => true,
            Some(AttributePredicate::Present(name)) => element.attributes().contains_key(name),
            Some(AttributePredicate::Equals(name, value)) => {
                element.get_attribute(name) == Some(value.as_str())
            }
        }
    }
}

/// ## Read-only access
impl Document {
    /// Get parent node.
    ///
    /// Returns [`None`] for the root and for the top of a removed subtree.
    ///
    /// ```rust
    /// let doc = xmledit::Document::parse("<p><a/></p>").unwrap();
    /// let p = doc.root();
    /// let a = doc.children(p).next().unwrap();
    /// assert_eq!(doc.parent(a), Some(p));
    /// assert_eq!(doc.parent(p), None);
    /// ```
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Iterator over the child nodes of this node, in document order.
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// Get last child.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].last_child().map(Node::new)
    }

    /// Iterator over the descendants of this node, including this one.
    /// In document order (pre-order depth-first).
    ///
    /// ```rust
    /// let doc = xmledit::Document::parse("<a><b><c/></b><d/></a>").unwrap();
    /// let tags = doc
    ///     .descendants(doc.root())
    ///     .map(|n| doc.tag(n))
    ///     .collect::<Vec<_>>();
    /// assert_eq!(tags, vec!["a", "b", "c", "d"]);
    /// ```
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(self.arena()).map(Node::new)
    }

    /// Check whether `node` is reachable from the document root.
    pub fn is_attached(&self, node: Node) -> bool {
        node.get()
            .ancestors(self.arena())
            .last()
            .map(|top| top == self.root.get())
            .unwrap_or(false)
    }

    /// All descendants of `from` (not `from` itself) that match `query`, in
    /// document order.
    ///
    /// Nothing matching gives an empty vector, not an error. An empty tag or
    /// attribute name in the query is an [`Error::InvalidArgument`].
    pub fn find_nodes(&self, from: Node, query: &Query) -> Result<Vec<Node>, Error> {
        query.validate()?;
        Ok(self
            .descendants(from)
            .skip(1)
            .filter(|node| query.matches(self.element(*node)))
            .collect())
    }

    /// Like [`Document::find_nodes`], searching below the root.
    pub fn find(&self, query: &Query) -> Result<Vec<Node>, Error> {
        self.find_nodes(self.root, query)
    }

    /// The first descendant of `from` matching `query`, if any.
    pub fn find_node(&self, from: Node, query: &Query) -> Result<Option<Node>, Error> {
        query.validate()?;
        Ok(self
            .descendants(from)
            .skip(1)
            .find(|node| query.matches(self.element(*node))))
    }
}
