use serde::{Deserialize, Serialize};

/// One visited resource. `name` is the resource URL; children keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn add_child(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Depth of the deepest node, counting `self` as 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Node::depth).max().unwrap_or(0)
    }

    /// Pre-order search by name.
    pub fn find(&self, name: &str) -> Option<&Node> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tree {
    pub root: Node,
}

impl Tree {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn find(&self, name: &str) -> Option<&Node> {
        self.root.find(name)
    }
}

/// Anything a diagram can be generated for. Sessions without a navigation tree are valid and
/// produce an empty diagram.
pub trait Session {
    fn tree(&self) -> Option<&Tree>;
}

impl Session for Tree {
    fn tree(&self) -> Option<&Tree> {
        Some(self)
    }
}

/// A recorded browsing session that may or may not have produced a navigation tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSession {
    #[serde(default)]
    pub tree: Option<Tree>,
}

impl NavigationSession {
    pub fn new(tree: Option<Tree>) -> Self {
        Self { tree }
    }
}

impl Session for NavigationSession {
    fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }
}
