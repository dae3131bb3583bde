#![forbid(unsafe_code)]

//! Construct, query, mutate and persist XML documents.
//!
//! A [`Document`] owns a tree of element nodes. Nodes are addressed by
//! lightweight [`Node`] handles, located with a [`Query`] and changed
//! through methods on the document.
//!
//! ```rust
//! use xmledit::{Document, NodeSpec, Query};
//!
//! let mut doc = Document::new("catalog")?;
//! doc.add_node(None, NodeSpec::new("item").with_attribute("id", "1").with_text("Widget"))?;
//!
//! let items = doc.find(&Query::tag("item").with_attribute_value("id", "1"))?;
//! assert_eq!(doc.text(items[0]), Some("Widget"));
//!
//! assert_eq!(
//!     doc.serialize(),
//!     "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<catalog><item id=\"1\">Widget</item></catalog>"
//! );
//! # Ok::<(), xmledit::Error>(())
//! ```
//!
//! Tree operations are synchronous. Only loading and saving files
//! ([`load_document`], [`save_document`]) are `async`.

mod access;
mod attributes;
mod creation;
mod document;
mod encoding;
mod entity;
mod error;
mod io;
mod manipulation;
mod name;
mod parse;
mod serialize;
mod valueaccess;
mod xmlvalue;

pub use access::{AttributePredicate, Query};
pub use attributes::Attributes;
pub use creation::NodeSpec;
pub use document::{Document, Node};
pub use error::{Error, ParseError, Position};
pub use io::{
    join_path, load_document, load_document_with, save_document, save_document_with,
    save_document_with_options, FileProvider, TokioFiles,
};
pub use serialize::SerializeOptions;
pub use xmlvalue::Element;
