use std::borrow::Cow;

use encoding_rs::Encoding;
use xhtmlchardet::detect;

pub(crate) fn encoding(data: &[u8], hint: Option<String>) -> Option<&'static Encoding> {
    let mut cursor = std::io::Cursor::new(data);
    let charsets = detect(&mut cursor, hint).ok()?;
    // no encoding detected
    let label = if charsets.is_empty() {
        "UTF-8"
    } else {
        &charsets[0]
    };
    Encoding::for_label(label.as_bytes())
}

/// Decode raw file content into a string, honoring a byte order mark or the
/// encoding named in the XML declaration. Falls back to UTF-8.
pub(crate) fn decode(data: &[u8]) -> (Cow<str>, &'static Encoding) {
    let encoding = encoding(data, None).unwrap_or(encoding_rs::UTF_8);
    let (text, used, _had_errors) = encoding.decode(data);
    (text, used)
}
