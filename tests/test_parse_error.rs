use xmledit::{Document, Error, ParseError, Position};

fn parse_error(xml: &str) -> ParseError {
    match Document::parse(xml) {
        Err(Error::Parse(e)) => e,
        Err(other) => panic!("expected parse error, got {:?}", other),
        Ok(_) => panic!("expected parse error for {:?}", xml),
    }
}

#[test]
fn test_parse_invalid_close_tag() {
    let err = parse_error(r#"<doc></a></doc>"#);
    assert!(matches!(err, ParseError::InvalidCloseTag { .. }));
    assert_eq!(err.position(), Position { row: 1, col: 6 });
}

#[test]
fn test_parse_invalid_close_tag_prefix() {
    let err = parse_error(r#"<doc xmlns:a="http://example.com"></a:doc></doc>"#);
    assert!(matches!(err, ParseError::InvalidCloseTag { .. }));
    assert_eq!(err.position(), Position { row: 1, col: 35 });
}

#[test]
fn test_parse_position_on_later_line() {
    let err = parse_error("<doc>\n  <a>\n  </b>\n</doc>");
    assert!(matches!(err, ParseError::InvalidCloseTag { .. }));
    assert_eq!(err.position(), Position { row: 3, col: 3 });
}

#[test]
fn test_xmlparser_error() {
    let err = parse_error(r#"<doc><"#);
    assert!(matches!(err, ParseError::XmlParser(_)));
}

#[test]
fn test_duplicate_attribute() {
    let err = parse_error(r#"<doc a="1" a="2"/>"#);
    assert!(matches!(err, ParseError::DuplicateAttribute { .. }));
    assert_eq!(err.position(), Position { row: 1, col: 12 });
}

#[test]
fn test_unclosed_element() {
    let err = parse_error(r#"<doc><a>"#);
    assert!(matches!(
        err,
        ParseError::UnclosedElement { .. } | ParseError::XmlParser(_)
    ));
}

#[test]
fn test_second_root_element() {
    parse_error(r#"<a/><b/>"#);
}

#[test]
fn test_not_xml_at_all() {
    parse_error("just some text");
}

#[test]
fn test_invalid_entity() {
    let err = parse_error(r#"<doc>&bogus;</doc>"#);
    assert!(matches!(err, ParseError::InvalidEntity { .. }));
    assert_eq!(err.position(), Position { row: 1, col: 6 });
}

#[test]
fn test_dtd_unsupported() {
    let err = parse_error(r#"<!DOCTYPE note><note></note>"#);
    assert!(matches!(
        err,
        ParseError::DtdUnsupported { .. } | ParseError::XmlParser(_)
    ));
}

#[test]
fn test_error_display_carries_position() {
    let err = Document::parse(r#"<doc></a></doc>"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected close tag </doc>, found </a> at 1:6"
    );
}

#[test]
fn test_invalid_entity_after_crlf() {
    let err = parse_error("<doc>\r\na\r\n&bogus;</doc>");
    assert!(matches!(err, ParseError::InvalidEntity { .. }));
    assert_eq!(err.position(), Position { row: 3, col: 1 });
}
