use std::str::FromStr;

use indextree::{Arena, NodeId};

use crate::error::Error;
use crate::name::validate_tag;
use crate::xmlvalue::Element;

pub(crate) type XmlArena = Arena<Element>;

/// A node in a document tree.
///
/// This is a lightweight value and can be copied. It is only meaningful
/// together with the [`Document`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// An XML document: exactly one root element and everything under it.
///
/// The document owns all of its nodes. Nodes removed from the tree stay
/// alive (and intact) inside the document until it is dropped, but are no
/// longer reachable from the root.
///
/// Access and manipulation are implemented in several sections: see the
/// `access`, `valueaccess` and `manipulation` methods below.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) arena: XmlArena,
    pub(crate) root: Node,
}

impl Document {
    /// Create a new document with an empty root element.
    ///
    /// ```rust
    /// let doc = xmledit::Document::new("catalog")?;
    /// assert_eq!(doc.tag(doc.root()), "catalog");
    /// assert_eq!(doc.text(doc.root()), None);
    /// # Ok::<(), xmledit::Error>(())
    /// ```
    ///
    /// Returns [`Error::InvalidArgument`] if `root_tag` is not a valid
    /// element name.
    pub fn new(root_tag: &str) -> Result<Self, Error> {
        validate_tag(root_tag)?;
        Ok(Self::with_root(Element::new(root_tag.to_string())))
    }

    pub(crate) fn with_root(element: Element) -> Self {
        let mut arena = XmlArena::new();
        let root = Node::new(arena.new_node(element));
        Document { arena, root }
    }

    /// The root element of the document.
    #[inline]
    pub fn root(&self) -> Node {
        self.root
    }

    #[inline]
    pub(crate) fn arena(&self) -> &XmlArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut XmlArena {
        &mut self.arena
    }

    /// Access to the element stored for this node.
    #[inline]
    pub fn element(&self, node: Node) -> &Element {
        self.arena[node.get()].get()
    }

    #[inline]
    pub(crate) fn element_mut(&mut self, node: Node) -> &mut Element {
        self.arena[node.get()].get_mut()
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Document::parse(s)
    }
}
