use crate::error::Error;

// Ranges of the XML `NameStartChar` production beyond ASCII.
fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}'
            | '\u{0300}'..='\u{036F}'
            | '\u{203F}'..='\u{2040}')
}

/// Check whether a string is a valid XML name.
pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if is_name_start_char(c) => chars.all(is_name_char),
        _ => false,
    }
}

pub(crate) fn validate_tag(tag: &str) -> Result<(), Error> {
    if tag.is_empty() {
        return Err(Error::InvalidArgument("tag must not be empty".into()));
    }
    if !is_valid_name(tag) {
        return Err(Error::InvalidArgument(format!("invalid tag name: {:?}", tag)));
    }
    Ok(())
}

pub(crate) fn validate_attribute_name(name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::InvalidArgument(
            "attribute name must not be empty".into(),
        ));
    }
    if !is_valid_name(name) {
        return Err(Error::InvalidArgument(format!(
            "invalid attribute name: {:?}",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a", true)]
    #[case("catalog", true)]
    #[case("_x", true)]
    #[case("ns:item", true)]
    #[case("item-2.b", true)]
    #[case("élément", true)]
    #[case("", false)]
    #[case("2item", false)]
    #[case("-a", false)]
    #[case("a b", false)]
    #[case("a<b", false)]
    #[case("a\"", false)]
    fn test_is_valid_name(#[case] name: &str, #[case] valid: bool) {
        assert_eq!(is_valid_name(name), valid);
    }

    #[test]
    fn test_validate_tag_empty() {
        assert!(matches!(validate_tag(""), Err(Error::InvalidArgument(_))));
    }
}
