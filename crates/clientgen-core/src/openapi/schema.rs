//! Schema nodes as a closed set of shapes.
//!
//! Schemas arrive as loosely typed JSON. They are classified once, on
//! deserialization, into a [`SchemaNode`]; anything that does not fit a known
//! shape becomes [`SchemaNode::Unknown`] instead of failing the document.

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Primitive JSON schema types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    String,
    Number,
    Integer,
    Boolean,
}

/// Properties and required names of an object schema
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    /// Properties in declaration order
    pub properties: IndexMap<String, SchemaNode>,
    /// Names listed under `required`; empty when the list is absent
    pub required: IndexSet<String>,
}

impl ObjectSchema {
    /// Whether `name` is listed as required
    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }
}

/// A single schema, classified by shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "JsonValue")]
pub enum SchemaNode {
    Primitive(PrimitiveType),
    /// Array with an optional item schema
    Array(Option<Box<SchemaNode>>),
    Object(ObjectSchema),
    /// String schema with a non-empty set of literal values
    Enum(Vec<String>),
    /// Pointer to another schema, e.g. `#/components/schemas/Pet`
    Reference(String),
    Unknown,
}

impl SchemaNode {
    /// Name a reference resolves to: the last segment of its pointer.
    ///
    /// Returns `None` for non-references and for pointers whose last segment
    /// is empty (e.g. `#/components/schemas/`).
    pub fn reference_name(&self) -> Option<&str> {
        match self {
            Self::Reference(pointer) => ref_name(pointer),
            _ => None,
        }
    }
}

/// Last `/`-separated segment of a reference pointer, if non-empty.
pub fn ref_name(pointer: &str) -> Option<&str> {
    pointer.rsplit('/').next().filter(|name| !name.is_empty())
}

impl From<JsonValue> for SchemaNode {
    fn from(value: JsonValue) -> Self {
        let JsonValue::Object(mut map) = value else {
            return Self::Unknown;
        };

        // A declared type wins over a sibling `$ref`.
        let declared = map.get("type").and_then(JsonValue::as_str).map(String::from);
        match declared.as_deref() {
            Some("string") => match map.remove("enum") {
                Some(JsonValue::Array(values)) if !values.is_empty() => {
                    Self::Enum(values.into_iter().map(literal_text).collect())
                }
                _ => Self::Primitive(PrimitiveType::String),
            },
            Some("number") => Self::Primitive(PrimitiveType::Number),
            Some("integer") => Self::Primitive(PrimitiveType::Integer),
            Some("boolean") => Self::Primitive(PrimitiveType::Boolean),
            Some("array") => Self::Array(
                map.remove("items")
                    .filter(|items| !items.is_null())
                    .map(|items| Box::new(Self::from(items))),
            ),
            Some("object") => Self::Object(object_schema(&mut map)),
            _ => match map.remove("$ref") {
                Some(JsonValue::String(pointer)) => Self::Reference(pointer),
                _ => Self::Unknown,
            },
        }
    }
}

fn object_schema(map: &mut serde_json::Map<String, JsonValue>) -> ObjectSchema {
    let properties = match map.remove("properties") {
        Some(JsonValue::Object(props)) => props
            .into_iter()
            .map(|(name, schema)| (name, SchemaNode::from(schema)))
            .collect(),
        _ => IndexMap::new(),
    };
    let required = match map.remove("required") {
        Some(JsonValue::Array(names)) => names
            .into_iter()
            .filter_map(|name| match name {
                JsonValue::String(name) => Some(name),
                _ => None,
            })
            .collect(),
        _ => IndexSet::new(),
    };
    ObjectSchema {
        properties,
        required,
    }
}

/// Text of an enum literal as it should appear in emitted source.
fn literal_text(value: JsonValue) -> String {
    match value {
        JsonValue::String(s) => s,
        other => other.to_string(),
    }
}
