use std::borrow::Cow;

// Entity errors are reported with the offset into `content` where the
// reference starts; the parser turns that into a position.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum EntityError {
    Unclosed { entity: String, offset: usize },
    Invalid { entity: String, offset: usize },
}

fn character_reference(entity: &str) -> Option<char> {
    let code = if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok()?
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok()?
    } else {
        return None;
    };
    char::from_u32(code)
}

pub(crate) fn parse_entities(content: &str) -> Result<Cow<str>, EntityError> {
    if !content.contains('&') {
        return Ok(Cow::Borrowed(content));
    }
    let mut result = String::with_capacity(content.len());
    let mut chars = content.char_indices();
    while let Some((start, c)) = chars.next() {
        if c != '&' {
            result.push(c);
            continue;
        }
        let mut entity = String::new();
        let mut is_complete = false;
        for (_, c) in chars.by_ref() {
            if c == ';' {
                is_complete = true;
                break;
            }
            entity.push(c);
        }
        if !is_complete {
            return Err(EntityError::Unclosed {
                entity,
                offset: start,
            });
        }
        match entity.as_str() {
            "amp" => result.push('&'),
            "apos" => result.push('\''),
            "gt" => result.push('>'),
            "lt" => result.push('<'),
            "quot" => result.push('"'),
            _ => match character_reference(&entity) {
                Some(c) => result.push(c),
                None => {
                    return Err(EntityError::Invalid {
                        entity,
                        offset: start,
                    })
                }
            },
        }
    }
    Ok(Cow::Owned(result))
}

pub(crate) fn serialize_text(content: &str) -> Cow<str> {
    if !content.contains(['&', '<', '>']) {
        return Cow::Borrowed(content);
    }
    let mut result = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

pub(crate) fn serialize_attribute(content: &str) -> Cow<str> {
    if !content.contains(['&', '<', '"', '\n', '\t', '\r']) {
        return Cow::Borrowed(content);
    }
    let mut result = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '"' => result.push_str("&quot;"),
            // whitespace would be normalized away by attribute value normalization
            '\n' => result.push_str("&#10;"),
            '\t' => result.push_str("&#9;"),
            '\r' => result.push_str("&#13;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
