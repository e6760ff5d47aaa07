//! Navigation tree -> PlantUML mindmap.
//!
//! Every tree node whose URL has a log entry becomes one block:
//!
//! ```text
//! **:<<object>>
//! [[http://host:8080/restful/objects/x/1 /restful/objects/x/1]]
//! ----
//! (C) DomainObject
//! [[http://host:8080/restful/objects/x/1/actions /restful/objects/x/1/actions]]
//! ;
//! ```
//!
//! Nodes without an entry are dropped together with their whole subtree, even when some
//! descendants were fetched.

use tracing::{debug, trace};

use crate::config::DiagramConfig;
use crate::log::{KIND_PROPERTY_DESCRIPTION, LogEntry, ResourceLog, ResourceSpecification};
use crate::markup::MarkupBuilder;
use crate::model::{Node, Property, Representation, Session, Tree};
use crate::utils::short_title;

#[cfg(test)]
mod tests;

/// How much of a navigation tree made it into the diagram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coverage {
    pub nodes: usize,
    pub matched: usize,
    pub pruned: usize,
}

pub struct DiagramGenerator<'a, L: ResourceLog + ?Sized> {
    log: &'a L,
    base_url: String,
    stereotypes: bool,
}

impl<'a, L: ResourceLog + ?Sized> DiagramGenerator<'a, L> {
    pub fn new(log: &'a L, config: &DiagramConfig) -> Self {
        Self {
            log,
            base_url: config.base_url().to_string(),
            stereotypes: config.stereotypes_enabled(),
        }
    }

    /// Full mindmap document for `session`. A session without a tree yields the bare
    /// start/end markers.
    pub fn generate(&self, session: &dyn Session) -> String {
        let mut pc = MarkupBuilder::new();
        if let Some(tree) = session.tree() {
            self.render_node(&tree.root, 1, &mut pc);
        }
        pc.wrap_as_diagram()
    }

    pub fn generate_tree(&self, tree: &Tree) -> String {
        self.generate(tree)
    }

    /// The blocks only, without start/end markers.
    pub fn render_body(&self, session: &dyn Session) -> String {
        let mut pc = MarkupBuilder::new();
        if let Some(tree) = session.tree() {
            self.render_node(&tree.root, 1, &mut pc);
        }
        pc.into_body()
    }

    pub fn coverage(&self, session: &dyn Session) -> Coverage {
        let Some(tree) = session.tree() else {
            return Coverage::default();
        };
        let nodes = tree.node_count();
        let matched = self.count_matched(&tree.root);
        Coverage {
            nodes,
            matched,
            pruned: nodes - matched,
        }
    }

    fn count_matched(&self, node: &Node) -> usize {
        if self.lookup(node).is_none() {
            return 0;
        }
        1 + node
            .children
            .iter()
            .map(|c| self.count_matched(c))
            .sum::<usize>()
    }

    fn lookup(&self, node: &Node) -> Option<&'a LogEntry> {
        let log: &'a L = self.log;
        log.find_by(&ResourceSpecification::from(node.name.as_str()))
    }

    fn render_node(&self, node: &Node, level: usize, pc: &mut MarkupBuilder) {
        let Some(entry) = self.lookup(node) else {
            trace!(url = %node.name, level, "no log entry, pruning subtree");
            return;
        };
        trace!(url = %node.name, level, kind = %entry.kind, "rendering node");

        pc.open_block(level);
        if self.stereotypes {
            pc.append_stereotype(&entry.kind);
        }
        pc.append_link(&node.name, &short_title(&node.name, &self.base_url));
        pc.append_separator();
        self.render_link_info(entry, pc);
        pc.close_block();

        for child in &node.children {
            self.render_node(child, level + 1, pc);
        }

        if let Some(desc) = property_description(entry) {
            desc.render(level + 1, pc);
        }
    }

    fn render_link_info(&self, entry: &LogEntry, pc: &mut MarkupBuilder) {
        let Some(obj) = &entry.obj else {
            return;
        };
        pc.append_class_tag(obj.class_name());
        let Some(links) = obj.links() else {
            return;
        };
        // Self links would only draw a loop back to the block itself.
        for link in links.iter().filter(|l| !l.is_self()) {
            pc.append_link(&link.href, &short_title(&link.href, &self.base_url));
        }
    }
}

/// Synthetic child block for `property-description` entries, built from the property's
/// extension metadata rather than from the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PropertyDescription<'e> {
    friendly_name: &'e str,
    description: &'e str,
}

impl PropertyDescription<'_> {
    fn render(&self, level: usize, pc: &mut MarkupBuilder) {
        pc.open_block(level)
            .append_line(&format!("friendlyName: {}", self.friendly_name))
            .append_line(&format!("descriptions: {}", self.description))
            .close_block();
    }
}

fn property_description(entry: &LogEntry) -> Option<PropertyDescription<'_>> {
    if entry.kind != KIND_PROPERTY_DESCRIPTION {
        return None;
    }
    match &entry.obj {
        Some(Representation::Property(Property {
            extensions: Some(ext),
            ..
        })) => Some(PropertyDescription {
            friendly_name: ext.friendly_name.as_deref().unwrap_or_default(),
            description: ext.description.as_deref().unwrap_or_default(),
        }),
        Some(other) => {
            debug!(
                url = %entry.url,
                class = other.class_name(),
                "property-description entry without property extensions, skipping description block"
            );
            None
        }
        None => {
            debug!(
                url = %entry.url,
                "property-description entry without a representation, skipping description block"
            );
            None
        }
    }
}
