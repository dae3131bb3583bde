use proptest::prelude::*;
use xmledit::{Document, Node, NodeSpec, Query, SerializeOptions};

#[derive(Debug, Clone)]
struct Entry {
    // index into the nodes created so far; 0 is the root
    parent: usize,
    tag: &'static str,
    id: Option<&'static str>,
    text: Option<String>,
}

fn entry() -> impl Strategy<Value = Entry> {
    (
        any::<usize>(),
        prop::sample::select(vec!["a", "b", "c"]),
        prop::option::of(prop::sample::select(vec!["1", "2", "it's \"3\""])),
        prop::option::of("[a-z<&> ]{0,6}"),
    )
        .prop_map(|(parent, tag, id, text)| Entry {
            parent,
            tag,
            id,
            text,
        })
}

fn build(entries: &[Entry]) -> Document {
    let mut doc = Document::new("root").unwrap();
    let mut nodes = vec![doc.root()];
    for entry in entries {
        let parent = nodes[entry.parent % nodes.len()];
        let mut spec = NodeSpec::new(entry.tag);
        if let Some(id) = entry.id {
            spec = spec.with_attribute("id", id);
        }
        if let Some(text) = &entry.text {
            spec = spec.with_text(text.clone());
        }
        nodes.push(doc.add_node(Some(parent), spec).unwrap());
    }
    doc
}

fn queries() -> Vec<Query> {
    let mut queries = Vec::new();
    for tag in ["a", "b", "c", "root", "d"] {
        queries.push(Query::tag(tag));
        queries.push(Query::tag(tag).with_attribute("id"));
        for value in ["1", "2", "it's \"3\"", "4"] {
            queries.push(Query::tag(tag).with_attribute_value("id", value));
        }
    }
    queries
}

fn expected(doc: &Document, query: &Query) -> Vec<Node> {
    doc.descendants(doc.root())
        .skip(1)
        .filter(|n| query.matches(doc.element(*n)))
        .collect()
}

proptest! {
    #[test]
    fn find_matches_filtered_descendants(entries in prop::collection::vec(entry(), 0..30)) {
        let doc = build(&entries);
        for query in queries() {
            prop_assert_eq!(doc.find(&query).unwrap(), expected(&doc, &query));
        }
    }

    #[test]
    fn serialize_parse_roundtrip(entries in prop::collection::vec(entry(), 0..30)) {
        let doc = build(&entries);
        let reparsed = Document::parse(&doc.serialize()).unwrap();
        prop_assert_eq!(reparsed.serialize(), doc.serialize());
        for query in queries() {
            prop_assert_eq!(
                reparsed.find(&query).unwrap().len(),
                doc.find(&query).unwrap().len()
            );
        }
    }

    #[test]
    fn indented_output_parses_to_same_elements(entries in prop::collection::vec(entry(), 0..30)) {
        let doc = build(&entries);
        let options = SerializeOptions { declaration: true, indent: Some(2) };
        let reparsed = Document::parse(&doc.serialize_with(&options)).unwrap();
        let tags = |d: &Document| d.descendants(d.root()).map(|n| d.tag(n).to_string()).collect::<Vec<_>>();
        prop_assert_eq!(tags(&reparsed), tags(&doc));
    }

    #[test]
    fn removed_subtree_is_not_found(entries in prop::collection::vec(entry(), 1..30), pick in any::<usize>()) {
        let mut doc = build(&entries);
        let candidates = doc.descendants(doc.root()).skip(1).collect::<Vec<_>>();
        let child = candidates[pick % candidates.len()];
        let parent = doc.parent(child).unwrap();
        let removed = doc.descendants(child).collect::<Vec<_>>();
        doc.remove_node(parent, child).unwrap();
        for query in queries() {
            let found = doc.find(&query).unwrap();
            prop_assert!(found.iter().all(|n| !removed.contains(n)));
        }
    }
}
