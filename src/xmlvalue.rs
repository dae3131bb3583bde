use crate::attributes::Attributes;

/// XML element value, as stored in the document tree.
///
/// Example: `<item id="1">Widget</item>`.
///
/// Besides its own text, an element carries a *tail*: the text that follows
/// its end tag up to the next sibling or the end of its parent. This keeps
/// mixed content such as `<p>a<b/>c</p>` intact without separate text nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Attributes,
    pub(crate) text: Option<String>,
    pub(crate) tail: Option<String>,
}

impl Element {
    pub(crate) fn new(name: String) -> Self {
        Element {
            name,
            attributes: Attributes::new(),
            text: None,
            tail: None,
        }
    }

    /// The tag name of the element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attributes of the element.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get an attribute by name.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Text directly inside the element, before its first child.
    ///
    /// `None` means no text was ever set, which is distinct from an empty
    /// string.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Text following the element's end tag.
    pub fn tail(&self) -> Option<&str> {
        self.tail.as_deref()
    }

    pub(crate) fn append_text(&mut self, text: &str) {
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }

    pub(crate) fn append_tail(&mut self, text: &str) {
        match &mut self.tail {
            Some(existing) => existing.push_str(text),
            None => self.tail = Some(text.to_string()),
        }
    }
}
