use serde::{Deserialize, Serialize};

const REL_SEPARATOR: char = '/';
const REL_PARAM_SEPARATOR: char = ';';

/// An outbound relation of a representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(default)]
    pub rel: String,
    #[serde(default = "default_method")]
    pub method: String,
    pub href: String,
    #[serde(default, rename = "type")]
    pub media_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

fn default_method() -> String {
    "GET".to_string()
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            method: default_method(),
            href: href.into(),
            media_type: String::new(),
            title: None,
        }
    }

    pub fn relation(&self) -> Relation {
        Relation::from_rel(&self.rel)
    }

    pub fn is_self(&self) -> bool {
        self.relation() == Relation::SelfRef
    }
}

/// Link relations as used by Restful Objects (`urn:org.restfulobjects:rels/...`) plus the plain
/// IANA names the same payloads carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Relation {
    SelfRef,
    Up,
    DescribedBy,
    Details,
    Invoke,
    Action,
    Property,
    Collection,
    Service,
    Services,
    User,
    Version,
    DomainTypes,
    DomainType,
    Element,
    ElementType,
    Value,
    ReturnType,
    Update,
    Clear,
    Modify,
    Layout,
    MenuBars,
    ObjectLayout,
    ObjectIcon,
    Icon,
    Help,
    Previous,
    Next,
    Other(String),
}

impl Relation {
    /// Decodes a raw `rel` value. Only the last `/` segment counts and any `;key="..."`
    /// parameters are dropped, so `urn:org.restfulobjects:rels/details;property="name"` is
    /// [`Relation::Details`].
    pub fn from_rel(rel: &str) -> Self {
        let name = rel.rsplit(REL_SEPARATOR).next().unwrap_or(rel);
        let name = name
            .split(REL_PARAM_SEPARATOR)
            .next()
            .unwrap_or(name)
            .trim();
        match name {
            "self" => Self::SelfRef,
            "up" => Self::Up,
            "describedby" => Self::DescribedBy,
            "details" => Self::Details,
            "invoke" => Self::Invoke,
            "action" => Self::Action,
            "property" => Self::Property,
            "collection" => Self::Collection,
            "service" => Self::Service,
            "services" => Self::Services,
            "user" => Self::User,
            "version" => Self::Version,
            "domain-types" => Self::DomainTypes,
            "domain-type" => Self::DomainType,
            "element" => Self::Element,
            "element-type" => Self::ElementType,
            "value" => Self::Value,
            "return-type" => Self::ReturnType,
            "update" => Self::Update,
            "clear" => Self::Clear,
            "modify" => Self::Modify,
            "layout" => Self::Layout,
            "menuBars" => Self::MenuBars,
            "object-layout" => Self::ObjectLayout,
            "object-icon" => Self::ObjectIcon,
            "icon" => Self::Icon,
            "help" => Self::Help,
            "previous" => Self::Previous,
            "next" => Self::Next,
            other => Self::Other(other.to_string()),
        }
    }
}
