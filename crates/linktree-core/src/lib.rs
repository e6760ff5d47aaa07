#![forbid(unsafe_code)]

//! Navigation-history mindmaps for Restful Objects APIs (headless).
//!
//! Given the tree of resources a user visited and the log of representations fetched along the
//! way, [`DiagramGenerator`] emits PlantUML mindmap markup: one block per fetched resource with
//! its kind, a link, and its outbound relations.
//!
//! Design goals:
//! - pure, read-only transformation (no I/O, no mutation of the tree or the log)
//! - deterministic output, byte-identical across calls
//! - configuration injected explicitly ([`DiagramConfig`])
//!
//! ```
//! use linktree_core::{DiagramConfig, DiagramGenerator, EventStore, LogEntry, Node, Tree};
//!
//! let mut log = EventStore::new();
//! log.add(LogEntry::new("http://localhost:8080/restful/", "homepage"));
//!
//! let config = DiagramConfig::default().with_base_url("http://localhost:8080")?;
//! let tree = Tree::new(Node::new("http://localhost:8080/restful/"));
//! let markup = DiagramGenerator::new(&log, &config).generate_tree(&tree);
//! assert!(markup.starts_with("@startmindmap\n*:<<homepage>>\n"));
//! # Ok::<(), linktree_core::Error>(())
//! ```

pub mod config;
pub mod diagram;
pub mod error;
pub mod log;
pub mod markup;
pub mod model;
pub mod utils;

pub use config::DiagramConfig;
pub use diagram::{Coverage, DiagramGenerator};
pub use error::{Error, Result};
pub use log::{EventStore, LogEntry, ResourceLog, ResourceSpecification};
pub use markup::MarkupBuilder;
pub use model::{
    HasLinks, Link, NavigationSession, Node, Relation, Representation, Session, Tree,
};

/// Everything needed to regenerate a diagram offline: the navigation tree (if the session
/// produced one) and the resource log in fetch order.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    #[serde(default)]
    pub tree: Option<Tree>,
    #[serde(default)]
    pub log: Vec<LogEntry>,
}

impl SessionSnapshot {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(Error::InvalidSnapshot {
                message: "expected a JSON object with `tree` and `log`".to_string(),
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn event_store(&self) -> EventStore {
        self.log.iter().cloned().collect()
    }
}

impl Session for SessionSnapshot {
    fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }
}
