mod link;
mod representation;
mod tree;


pub use link::{Link, Relation};
pub use representation::{
    Action, Collection, DomainObject, Extensions, HasLinks, Homepage, Layout, Property,
    Representation,
};
pub use tree::{NavigationSession, Node, Session, Tree};
