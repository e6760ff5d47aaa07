use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::link::{Link, Relation};

/// Capability of representations that carry outbound links.
pub trait HasLinks {
    fn links(&self) -> &[Link];
}

/// A parsed, already-typed resource body as recorded in the resource log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Representation {
    DomainObject(DomainObject),
    Property(Property),
    Action(Action),
    Collection(Collection),
    Homepage(Homepage),
    Layout(Layout),
}

impl Representation {
    /// Concrete kind name, shown as the class tag of a block.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::DomainObject(_) => "DomainObject",
            Self::Property(_) => "Property",
            Self::Action(_) => "Action",
            Self::Collection(_) => "Collection",
            Self::Homepage(_) => "Homepage",
            Self::Layout(_) => "Layout",
        }
    }

    pub fn as_has_links(&self) -> Option<&dyn HasLinks> {
        match self {
            Self::DomainObject(o) => Some(o),
            Self::Property(p) => Some(p),
            Self::Action(a) => Some(a),
            Self::Collection(c) => Some(c),
            Self::Homepage(h) => Some(h),
            Self::Layout(_) => None,
        }
    }

    /// Outbound links, or `None` for kinds without the capability.
    pub fn links(&self) -> Option<&[Link]> {
        self.as_has_links().map(|l| l.links())
    }
}

/// Restful Objects member/object metadata. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_service: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_persistent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_semantics: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainObject {
    #[serde(default)]
    pub domain_type: String,
    #[serde(default)]
    pub instance_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl HasLinks for DomainObject {
    fn links(&self) -> &[Link] {
        &self.links
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub member_type: String,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_reason: Option<String>,
    #[serde(default)]
    pub max_length: u32,
}

impl Property {
    /// The link to this property's description resource, if the payload carries one.
    pub fn description_link(&self) -> Option<&Link> {
        self.links
            .iter()
            .find(|l| l.relation() == Relation::DescribedBy)
    }
}

impl HasLinks for Property {
    fn links(&self) -> &[Link] {
        &self.links
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub member_type: String,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub parameters: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl HasLinks for Action {
    fn links(&self) -> &[Link] {
        &self.links
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub member_type: String,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub value: Vec<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl HasLinks for Collection {
    fn links(&self) -> &[Link] {
        &self.links
    }
}

/// The API entry point (`/restful/`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Homepage {
    #[serde(default)]
    pub links: Vec<Link>,
}

impl HasLinks for Homepage {
    fn links(&self) -> &[Link] {
        &self.links
    }
}

/// Object layout document. Layouts describe presentation only and expose no outbound links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(default)]
    pub rows: Vec<Value>,
}
