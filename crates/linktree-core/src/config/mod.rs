use serde_json::{Map, Value};

use crate::{Error, Result};


const BASE_URL_KEY: &str = "baseUrl";
const STEREOTYPES_KEY: &str = "mindmap.stereotypes";

/// Diagram settings kept as a JSON object so that partial overrides (CLI flags, a config file)
/// can be layered with [`DiagramConfig::deep_merge`].
///
/// Known keys:
/// - `baseUrl`: the protocol/host/port prefix stripped from link labels
/// - `mindmap.stereotypes`: emit the `<<kind>>` line for each block (default `true`)
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramConfig(Value);

impl Default for DiagramConfig {
    fn default() -> Self {
        Self::empty_object()
    }
}

impl DiagramConfig {
    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Parses a JSON config document. The document must be an object, and `baseUrl` (when
    /// present) must be an absolute URL.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(Error::InvalidConfig {
                message: "expected a JSON object at the top level".to_string(),
            });
        }
        let cfg = Self(value);
        if let Some(base) = cfg.get_str(BASE_URL_KEY) {
            validate_base_url(base)?;
        }
        Ok(cfg)
    }

    /// Sets `baseUrl` after checking that it parses as an absolute URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        validate_base_url(base_url)?;
        self.set_value(BASE_URL_KEY, Value::String(base_url.to_string()));
        Ok(self)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn base_url(&self) -> &str {
        self.get_str(BASE_URL_KEY).unwrap_or_default()
    }

    pub fn stereotypes_enabled(&self) -> bool {
        self.get_bool(STEREOTYPES_KEY).unwrap_or(true)
    }

    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        self.lookup(dotted_path)?.as_str()
    }

    pub fn get_bool(&self, dotted_path: &str) -> Option<bool> {
        self.lookup(dotted_path)?.as_bool()
    }

    fn lookup(&self, dotted_path: &str) -> Option<&Value> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        Some(cur)
    }

    pub fn set_value(&mut self, dotted_path: &str, value: Value) {
        // `from_value` accepts any JSON value; coerce non-objects so this never panics.
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }

        let Value::Object(ref mut root) = self.0 else {
            return;
        };
        let mut cur: &mut Map<String, Value> = root;
        let mut segments = dotted_path.split('.').peekable();
        while let Some(seg) = segments.next() {
            if segments.peek().is_none() {
                cur.insert(seg.to_string(), value);
                return;
            }
            let slot = cur.entry(seg).or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Some(next) = slot.as_object_mut() else {
                return;
            };
            cur = next;
        }
    }

    pub fn deep_merge(&mut self, other: &Value) {
        deep_merge_value(&mut self.0, other);
    }
}

fn validate_base_url(base_url: &str) -> Result<()> {
    url::Url::parse(base_url)
        .map(|_| ())
        .map_err(|source| Error::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}
