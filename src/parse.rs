use std::borrow::Cow;

use xmlparser::{StrSpan, Token, Tokenizer};

use crate::document::{Document, Node, XmlArena};
use crate::entity::{parse_entities, EntityError};
use crate::error::{Error, ParseError, Position};
use crate::xmlvalue::Element;

fn full_name(prefix: StrSpan, local: StrSpan) -> String {
    if prefix.as_str().is_empty() {
        local.as_str().to_string()
    } else {
        format!("{}:{}", prefix.as_str(), local.as_str())
    }
}

// The XML end-of-line handling: `\r\n` and lone `\r` become `\n`.
fn normalize_newlines(text: &str) -> Cow<str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

// Attribute value normalization: every whitespace character becomes a space.
fn normalize_attribute_value(value: &str) -> Cow<str> {
    if !value.contains(['\n', '\t', '\r']) {
        return Cow::Borrowed(value);
    }
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                result.push(' ');
            }
            '\n' | '\t' => result.push(' '),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

// Map an offset into normalized text back to the raw input. Only `\r\n`
// changes length under either normalization.
fn raw_offset(raw: &str, normalized: usize) -> usize {
    let bytes = raw.as_bytes();
    let mut index = 0;
    for _ in 0..normalized {
        if index >= bytes.len() {
            break;
        }
        if bytes[index] == b'\r' && bytes.get(index + 1) == Some(&b'\n') {
            index += 2;
        } else {
            index += 1;
        }
    }
    index
}

struct PendingElement {
    element: Element,
    offset: usize,
}

struct DocumentBuilder<'a> {
    input: &'a str,
    arena: XmlArena,
    root: Option<Node>,
    // open elements with the offset of their start tag
    stack: Vec<(Node, usize)>,
    pending: Option<PendingElement>,
}

impl<'a> DocumentBuilder<'a> {
    fn new(input: &'a str) -> Self {
        DocumentBuilder {
            input,
            arena: XmlArena::new(),
            root: None,
            stack: Vec::new(),
            pending: None,
        }
    }

    fn position(&self, offset: usize) -> Position {
        Position::from_offset(self.input, offset)
    }

    // `raw` is the unnormalized input span starting at `base`
    fn entity_error(&self, error: EntityError, raw: &str, base: usize) -> ParseError {
        match error {
            EntityError::Unclosed { entity, offset } => ParseError::UnclosedEntity {
                entity,
                position: self.position(base + raw_offset(raw, offset)),
            },
            EntityError::Invalid { entity, offset } => ParseError::InvalidEntity {
                entity,
                position: self.position(base + raw_offset(raw, offset)),
            },
        }
    }

    fn current(&self) -> Option<Node> {
        self.stack.last().map(|(node, _)| *node)
    }

    fn element_start(&mut self, name: String, offset: usize) -> Result<(), ParseError> {
        if self.root.is_some() && self.stack.is_empty() {
            return Err(ParseError::ContentAfterRoot {
                position: self.position(offset),
            });
        }
        self.pending = Some(PendingElement {
            element: Element::new(name),
            offset,
        });
        Ok(())
    }

    fn attribute(&mut self, name: String, value: StrSpan, offset: usize) -> Result<(), ParseError> {
        let normalized = normalize_attribute_value(value.as_str());
        let parsed = parse_entities(&normalized)
            .map_err(|e| self.entity_error(e, value.as_str(), value.start()))?
            .into_owned();
        let position = self.position(offset);
        if let Some(pending) = &mut self.pending {
            if pending.element.attributes.contains_key(&name) {
                return Err(ParseError::DuplicateAttribute { name, position });
            }
            pending.element.attributes.insert(name, parsed);
        }
        Ok(())
    }

    fn text(&mut self, input: &str, offset: usize, raw: bool) -> Result<(), ParseError> {
        let text = normalize_newlines(input);
        let text = if raw {
            text
        } else {
            match parse_entities(&text) {
                Ok(parsed) => Cow::Owned(parsed.into_owned()),
                Err(e) => return Err(self.entity_error(e, input, offset)),
            }
        };
        let Some(parent) = self.current() else {
            if text.trim().is_empty() {
                return Ok(());
            }
            return Err(ParseError::ContentAfterRoot {
                position: self.position(offset),
            });
        };
        // text after a child element is that child's tail
        match self.arena[parent.get()].last_child() {
            Some(last_child) => self.arena[last_child].get_mut().append_tail(&text),
            None => self.arena[parent.get()].get_mut().append_text(&text),
        }
        Ok(())
    }

    fn open_element(&mut self, empty: bool) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let node = Node::new(self.arena.new_node(pending.element));
        match self.current() {
            Some(parent) => parent.get().append(node.get(), &mut self.arena),
            None => self.root = Some(node),
        }
        if !empty {
            self.stack.push((node, pending.offset));
        }
    }

    fn close_element(&mut self, name: String, offset: usize) -> Result<(), ParseError> {
        let position = self.position(offset);
        let Some((node, _)) = self.stack.pop() else {
            return Err(ParseError::ContentAfterRoot { position });
        };
        let expected = self.arena[node.get()].get().name();
        if expected != name {
            return Err(ParseError::InvalidCloseTag {
                expected: expected.to_string(),
                found: name,
                position,
            });
        }
        // `<a></a>` has empty text, unlike `<a/>`
        let is_leaf = self.arena[node.get()].first_child().is_none();
        let element = self.arena[node.get()].get_mut();
        if is_leaf && element.text.is_none() {
            element.text = Some(String::new());
        }
        Ok(())
    }

    fn build(self) -> Result<Document, ParseError> {
        if let Some((node, offset)) = self.stack.last() {
            return Err(ParseError::UnclosedElement {
                name: self.arena[node.get()].get().name().to_string(),
                position: self.position(*offset),
            });
        }
        let root = self.root.ok_or(ParseError::NoRootElement)?;
        Ok(Document {
            arena: self.arena,
            root,
        })
    }
}

fn parse_tokens(xml: &str) -> Result<Document, ParseError> {
    use Token::*;

    let mut builder = DocumentBuilder::new(xml);

    for token in Tokenizer::from(xml) {
        match token? {
            ElementStart { prefix, local, span } => {
                builder.element_start(full_name(prefix, local), span.start())?;
            }
            Attribute {
                prefix,
                local,
                value,
                span,
            } => {
                builder.attribute(full_name(prefix, local), value, span.start())?;
            }
            ElementEnd { end, span } => match end {
                xmlparser::ElementEnd::Open => builder.open_element(false),
                xmlparser::ElementEnd::Empty => builder.open_element(true),
                xmlparser::ElementEnd::Close(prefix, local) => {
                    builder.close_element(full_name(prefix, local), span.start())?;
                }
            },
            Text { text } => {
                builder.text(text.as_str(), text.start(), false)?;
            }
            Cdata { text, .. } => {
                builder.text(text.as_str(), text.start(), true)?;
            }
            DtdStart { span, .. } | EmptyDtd { span, .. } => {
                return Err(ParseError::DtdUnsupported {
                    position: builder.position(span.start()),
                });
            }
            // comments and processing instructions are not part of the tree
            Declaration { .. }
            | ProcessingInstruction { .. }
            | Comment { .. }
            | EntityDeclaration { .. }
            | DtdEnd { .. } => {}
        }
    }
    builder.build()
}

impl Document {
    /// Parse a string containing XML into a document.
    ///
    /// ```rust
    /// use xmledit::{Document, Query};
    ///
    /// let doc = Document::parse("<r><x id='5'/></r>")?;
    /// let found = doc.find(&Query::tag("x").with_attribute_value("id", "5"))?;
    /// assert_eq!(found.len(), 1);
    /// # Ok::<(), xmledit::Error>(())
    /// ```
    ///
    /// Comments and processing instructions are dropped. Malformed input
    /// gives an [`Error::Parse`] carrying the position of the problem.
    pub fn parse(xml: &str) -> Result<Document, Error> {
        let document = parse_tokens(xml)?;
        Ok(document)
    }
}
