use super::*;
use crate::log::EventStore;
use crate::model::{DomainObject, Extensions, Layout, Link, NavigationSession};

const BASE: &str = "http://localhost:8080";
const EMPTY_DIAGRAM: &str = "@startmindmap\n@endmindmap\n";

fn url(path: &str) -> String {
    format!("{BASE}{path}")
}

fn config() -> DiagramConfig {
    DiagramConfig::default().with_base_url(BASE).unwrap()
}

fn object_entry(path: &str, links: Vec<Link>) -> LogEntry {
    LogEntry::new(url(path), "object").with_obj(Representation::DomainObject(DomainObject {
        links,
        ..Default::default()
    }))
}

fn property_description_entry(path: &str, name: &str, desc: &str) -> LogEntry {
    LogEntry::new(url(path), KIND_PROPERTY_DESCRIPTION).with_obj(Representation::Property(
        Property {
            extensions: Some(Extensions {
                friendly_name: Some(name.to_string()),
                description: Some(desc.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        },
    ))
}

fn depth_markers(markup: &str) -> Vec<usize> {
    markup
        .lines()
        .filter(|l| l.starts_with('*'))
        .map(|l| l.chars().take_while(|c| *c == '*').count())
        .collect()
}

#[test]
fn session_without_tree_is_empty_diagram() {
    let store = EventStore::new();
    let generator = DiagramGenerator::new(&store, &config());
    assert_eq!(
        generator.generate(&NavigationSession::default()),
        EMPTY_DIAGRAM
    );
}

#[test]
fn root_without_entry_is_empty_diagram() {
    let store: EventStore = [object_entry("/restful/objects/a/1/child", vec![])]
        .into_iter()
        .collect();
    let tree = Tree::new(
        Node::new(url("/restful/objects/a/1"))
            .with_child(Node::new(url("/restful/objects/a/1/child"))),
    );
    let generator = DiagramGenerator::new(&store, &config());
    assert_eq!(generator.generate_tree(&tree), EMPTY_DIAGRAM);
}

#[test]
fn self_links_are_suppressed() {
    let store: EventStore = [object_entry(
        "/restful/objects/a/1",
        vec![
            Link::new("urn:org.restfulobjects:rels/self", url("/restful/objects/a/1")),
            Link::new("other", url("/restful/objects/a/1/other")),
        ],
    )]
    .into_iter()
    .collect();
    let tree = Tree::new(Node::new(url("/restful/objects/a/1")));

    let out = DiagramGenerator::new(&store, &config()).generate_tree(&tree);
    assert_eq!(
        out,
        "@startmindmap\n\
         *:<<object>>\n\
         [[http://localhost:8080/restful/objects/a/1 /restful/objects/a/1]]\n\
         ----\n\
         (C) DomainObject\n\
         [[http://localhost:8080/restful/objects/a/1/other /restful/objects/a/1/other]]\n\
         ;\n\
         @endmindmap\n"
    );
    assert_eq!(
        out.matches("[[http://localhost:8080/restful/objects/a/1 ").count(),
        1
    );
}

#[test]
fn link_info_keeps_representation_order() {
    let store: EventStore = [object_entry(
        "/o",
        vec![
            Link::new("describedby", url("/d")),
            Link::new("self", url("/o")),
            Link::new("up", url("/u")),
            Link::new("urn:org.restfulobjects:rels/details;property=\"x\"", url("/x")),
        ],
    )]
    .into_iter()
    .collect();
    let out = DiagramGenerator::new(&store, &config()).render_body(&Tree::new(Node::new(url("/o"))));
    let d = out.find("[[http://localhost:8080/d /d]]").unwrap();
    let u = out.find("[[http://localhost:8080/u /u]]").unwrap();
    let x = out.find("[[http://localhost:8080/x /x]]").unwrap();
    assert!(d < u && u < x);
}

#[test]
fn property_description_appends_synthetic_block() {
    let store: EventStore = [property_description_entry("/p", "Name", "Desc")]
        .into_iter()
        .collect();
    let tree = Tree::new(Node::new(url("/p")));

    let out = DiagramGenerator::new(&store, &config()).render_body(&tree);
    assert_eq!(
        out,
        "*:<<property-description>>\n\
         [[http://localhost:8080/p /p]]\n\
         ----\n\
         (C) Property\n\
         ;\n\
         **:friendlyName: Name\n\
         descriptions: Desc\n\
         ;\n"
    );
}

#[test]
fn synthetic_block_follows_real_children() {
    let store: EventStore = [
        property_description_entry("/p", "Name", "Desc"),
        object_entry("/c", vec![]),
    ]
    .into_iter()
    .collect();
    let tree = Tree::new(Node::new(url("/p")).with_child(Node::new(url("/c"))));

    let out = DiagramGenerator::new(&store, &config()).render_body(&tree);
    let child = out.find("**:<<object>>").unwrap();
    let synthetic = out.find("**:friendlyName: Name").unwrap();
    assert!(child < synthetic);
    assert!(out.contains("\ndescriptions: Desc\n;\n"));
}

#[test]
fn depth_marker_matches_tree_depth() {
    let store: EventStore = [
        object_entry("/r", vec![]),
        object_entry("/a", vec![]),
        property_description_entry("/a/p", "N", "D"),
        object_entry("/b", vec![]),
    ]
    .into_iter()
    .collect();
    let tree = Tree::new(
        Node::new(url("/r"))
            .with_child(Node::new(url("/a")).with_child(Node::new(url("/a/p"))))
            .with_child(Node::new(url("/b"))),
    );

    let out = DiagramGenerator::new(&store, &config()).generate_tree(&tree);
    assert_eq!(depth_markers(&out), [1, 2, 3, 4, 2]);
}

#[test]
fn generation_is_deterministic() {
    let store: EventStore = [
        object_entry("/r", vec![Link::new("up", url("/u"))]),
        property_description_entry("/r/p", "N", "D"),
    ]
    .into_iter()
    .collect();
    let session = NavigationSession::new(Some(Tree::new(
        Node::new(url("/r")).with_child(Node::new(url("/r/p"))),
    )));
    let generator = DiagramGenerator::new(&store, &config());
    assert_eq!(generator.generate(&session), generator.generate(&session));
}

// A missing ancestor hides fetched descendants; keep this behavior.
#[test]
fn pruning_removes_fetched_descendants_of_unfetched_nodes() {
    let store: EventStore = [
        object_entry("/root", vec![]),
        object_entry("/missing/grandchild", vec![]),
        object_entry("/sibling", vec![]),
    ]
    .into_iter()
    .collect();
    let tree = Tree::new(
        Node::new(url("/root"))
            .with_child(
                Node::new(url("/missing"))
                    .with_child(Node::new(url("/missing/grandchild"))),
            )
            .with_child(Node::new(url("/sibling"))),
    );

    let out = DiagramGenerator::new(&store, &config()).generate_tree(&tree);
    assert!(out.contains("[[http://localhost:8080/root /root]]"));
    assert!(out.contains("[[http://localhost:8080/sibling /sibling]]"));
    assert!(!out.contains("/missing"));
    assert_eq!(depth_markers(&out), [1, 2]);
}

#[test]
fn mismatched_property_description_skips_block_only() {
    let store: EventStore = [
        object_entry("/root", vec![]),
        LogEntry::new(url("/pd-object"), KIND_PROPERTY_DESCRIPTION)
            .with_obj(Representation::DomainObject(DomainObject::default())),
        LogEntry::new(url("/pd-bare-property"), KIND_PROPERTY_DESCRIPTION)
            .with_obj(Representation::Property(Property::default())),
        LogEntry::new(url("/pd-empty"), KIND_PROPERTY_DESCRIPTION),
        object_entry("/after", vec![]),
    ]
    .into_iter()
    .collect();
    let tree = Tree::new(
        Node::new(url("/root"))
            .with_child(Node::new(url("/pd-object")))
            .with_child(Node::new(url("/pd-bare-property")))
            .with_child(Node::new(url("/pd-empty")))
            .with_child(Node::new(url("/after"))),
    );

    let out = DiagramGenerator::new(&store, &config()).generate_tree(&tree);
    assert!(!out.contains("friendlyName:"));
    assert!(out.contains("[[http://localhost:8080/after /after]]"));
    assert_eq!(depth_markers(&out), [1, 2, 2, 2, 2]);
}

#[test]
fn missing_extension_values_render_empty() {
    let store: EventStore = [LogEntry::new(url("/p"), KIND_PROPERTY_DESCRIPTION).with_obj(
        Representation::Property(Property {
            extensions: Some(Extensions {
                friendly_name: Some("Only name".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }),
    )]
    .into_iter()
    .collect();
    let out =
        DiagramGenerator::new(&store, &config()).render_body(&Tree::new(Node::new(url("/p"))));
    assert!(out.ends_with("**:friendlyName: Only name\ndescriptions: \n;\n"));
}

#[test]
fn entry_without_representation_has_no_class_tag() {
    let store: EventStore = [LogEntry::new(url("/x"), "object")].into_iter().collect();
    let out =
        DiagramGenerator::new(&store, &config()).render_body(&Tree::new(Node::new(url("/x"))));
    assert_eq!(out, "*:<<object>>\n[[http://localhost:8080/x /x]]\n----\n;\n");
}

#[test]
fn linkless_representation_gets_class_tag_only() {
    let store: EventStore = [LogEntry::new(url("/l"), "object-layout")
        .with_obj(Representation::Layout(Layout::default()))]
    .into_iter()
    .collect();
    let out =
        DiagramGenerator::new(&store, &config()).render_body(&Tree::new(Node::new(url("/l"))));
    assert_eq!(
        out,
        "*:<<object-layout>>\n[[http://localhost:8080/l /l]]\n----\n(C) Layout\n;\n"
    );
}

#[test]
fn stereotypes_can_be_disabled() {
    let store: EventStore = [LogEntry::new(url("/x"), "object")].into_iter().collect();
    let mut cfg = config();
    cfg.set_value("mindmap.stereotypes", serde_json::json!(false));
    let out = DiagramGenerator::new(&store, &cfg).render_body(&Tree::new(Node::new(url("/x"))));
    assert_eq!(out, "*:[[http://localhost:8080/x /x]]\n----\n;\n");
}

#[test]
fn labels_keep_full_url_without_base() {
    let store: EventStore = [LogEntry::new(url("/x"), "object")].into_iter().collect();
    let out = DiagramGenerator::new(&store, &DiagramConfig::default())
        .render_body(&Tree::new(Node::new(url("/x"))));
    assert!(out.contains("[[http://localhost:8080/x http://localhost:8080/x]]"));
}

#[test]
fn slice_backed_log_renders_like_store() {
    let entries = vec![object_entry("/r", vec![]), object_entry("/c", vec![])];
    let store: EventStore = entries.iter().cloned().collect();
    let tree = Tree::new(Node::new(url("/r")).with_child(Node::new(url("/c"))));
    let cfg = config();
    assert_eq!(
        DiagramGenerator::new(entries.as_slice(), &cfg).generate_tree(&tree),
        DiagramGenerator::new(&store, &cfg).generate_tree(&tree)
    );
}

#[test]
fn coverage_counts_pruned_subtrees() {
    let store: EventStore = [
        object_entry("/root", vec![]),
        object_entry("/missing/grandchild", vec![]),
        property_description_entry("/pd", "N", "D"),
    ]
    .into_iter()
    .collect();
    let tree = Tree::new(
        Node::new(url("/root"))
            .with_child(
                Node::new(url("/missing"))
                    .with_child(Node::new(url("/missing/grandchild"))),
            )
            .with_child(Node::new(url("/pd"))),
    );
    let generator = DiagramGenerator::new(&store, &config());
    assert_eq!(
        generator.coverage(&tree),
        Coverage {
            nodes: 4,
            matched: 2,
            pruned: 2,
        }
    );
    assert_eq!(
        generator.coverage(&NavigationSession::default()),
        Coverage::default()
    );
}
