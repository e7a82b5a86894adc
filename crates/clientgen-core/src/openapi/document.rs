//! Typed view of an OpenAPI document.
//!
//! Only the parts that drive client generation are modelled: `paths` with
//! their operations and `components.schemas`. Everything else is ignored, and
//! a modelled field of the wrong shape reads as absent rather than failing the
//! document. Every map keeps the order in which entries were declared in the
//! source document, since that order is the order of the emitted declarations.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use log::warn;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::schema::SchemaNode;

/// Media type whose schema determines request and response types.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Status code whose response determines an operation's return type.
pub const SUCCESS_STATUS: &str = "200";

/// Root of an OpenAPI document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "JsonValue")]
pub struct Document {
    /// Path templates mapped to their operations
    pub paths: IndexMap<String, PathItem>,
    pub components: Components,
}

impl Document {
    /// Named component schemas, empty when the document declares none.
    pub fn schemas(&self) -> &IndexMap<String, SchemaNode> {
        &self.components.schemas
    }
}

impl From<JsonValue> for Document {
    fn from(value: JsonValue) -> Self {
        let JsonValue::Object(mut map) = value else {
            return Self::default();
        };
        let paths = match map.remove("paths") {
            Some(JsonValue::Object(paths)) => paths
                .into_iter()
                .map(|(path, item)| (path, PathItem::from(item)))
                .collect(),
            None | Some(JsonValue::Null) => IndexMap::new(),
            Some(other) => {
                warn!("Ignoring 'paths' that is not a mapping: {}", other);
                IndexMap::new()
            }
        };
        let components = map
            .remove("components")
            .map(Components::from)
            .unwrap_or_default();
        Self { paths, components }
    }
}

/// Reusable definitions
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub schemas: IndexMap<String, SchemaNode>,
}

impl From<JsonValue> for Components {
    fn from(mut value: JsonValue) -> Self {
        let schemas = match value.get_mut("schemas").map(JsonValue::take) {
            Some(JsonValue::Object(schemas)) => schemas
                .into_iter()
                .map(|(name, schema)| (name, SchemaNode::from(schema)))
                .collect(),
            _ => IndexMap::new(),
        };
        Self { schemas }
    }
}

/// HTTP methods an OpenAPI path item can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    /// Lowercase key used for this method in a path item
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Put => "put",
            Self::Post => "post",
            Self::Delete => "delete",
            Self::Options => "options",
            Self::Head => "head",
            Self::Patch => "patch",
            Self::Trace => "trace",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    /// Path item keys are case-sensitive: `GET` is not a method key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Self::Get),
            "put" => Ok(Self::Put),
            "post" => Ok(Self::Post),
            "delete" => Ok(Self::Delete),
            "options" => Ok(Self::Options),
            "head" => Ok(Self::Head),
            "patch" => Ok(Self::Patch),
            "trace" => Ok(Self::Trace),
            other => Err(format!("unknown HTTP method '{other}'")),
        }
    }
}

impl fmt::Display for HttpMethod {
    /// Uppercase wire form, e.g. `GET`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

/// Operations declared under one path, in declaration order.
///
/// Keys that are not HTTP methods (`parameters`, `summary`, `x-*`, ...) are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "JsonValue")]
pub struct PathItem {
    pub operations: IndexMap<HttpMethod, Operation>,
}

impl From<JsonValue> for PathItem {
    fn from(value: JsonValue) -> Self {
        let JsonValue::Object(entries) = value else {
            return Self::default();
        };
        let operations = entries
            .into_iter()
            .filter_map(|(key, value)| {
                let method = key.parse::<HttpMethod>().ok()?;
                Some((method, Operation::from(value)))
            })
            .collect();
        Self { operations }
    }
}

/// One HTTP method entry under one path
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "JsonValue")]
pub struct Operation {
    /// Identifier used as the generated function name; operations without
    /// one produce no function.
    pub operation_id: Option<String>,
    pub parameters: Vec<ParameterEntry>,
    pub request_body: Option<RequestBody>,
    pub responses: IndexMap<String, Response>,
}

impl From<JsonValue> for Operation {
    fn from(value: JsonValue) -> Self {
        let JsonValue::Object(mut map) = value else {
            return Self::default();
        };
        let operation_id = match map.remove("operationId") {
            Some(JsonValue::String(id)) if !id.is_empty() => Some(id),
            None | Some(JsonValue::Null) | Some(JsonValue::String(_)) => None,
            Some(other) => {
                warn!("Ignoring operationId that is not a string: {}", other);
                None
            }
        };
        let parameters = match map.remove("parameters") {
            Some(JsonValue::Array(entries)) => {
                entries.into_iter().map(ParameterEntry::from).collect()
            }
            _ => Vec::new(),
        };
        let request_body = map
            .remove("requestBody")
            .filter(|body| !body.is_null())
            .map(RequestBody::from);
        let responses = match map.remove("responses") {
            Some(JsonValue::Object(responses)) => responses
                .into_iter()
                .map(|(status, response)| (status, Response::from(response)))
                .collect(),
            _ => IndexMap::new(),
        };
        Self {
            operation_id,
            parameters,
            request_body,
            responses,
        }
    }
}

impl Operation {
    /// `$ref` pointer of the JSON request body schema, if any.
    pub fn request_reference(&self) -> Option<&str> {
        self.request_body
            .as_ref()?
            .content
            .get(JSON_MEDIA_TYPE)?
            .schema_reference
            .as_deref()
    }

    /// `$ref` pointer of the schema of the "200" response's JSON body, if any.
    pub fn success_reference(&self) -> Option<&str> {
        self.responses
            .get(SUCCESS_STATUS)?
            .content
            .get(JSON_MEDIA_TYPE)?
            .schema_reference
            .as_deref()
    }

    /// Inline parameters; `$ref` parameters are not resolved.
    pub fn inline_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter_map(|entry| match entry {
            ParameterEntry::Inline(parameter) => Some(parameter),
            _ => None,
        })
    }

    /// Whether any inline parameter is passed in the query string.
    pub fn has_query_parameters(&self) -> bool {
        self.inline_parameters()
            .any(|p| p.location == ParameterLocation::Query)
    }
}

/// Entry of an operation's `parameters` list
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterEntry {
    /// `$ref` pointer to a shared parameter
    Reference(String),
    Inline(Parameter),
    /// Any other entry
    Unrecognized(JsonValue),
}

impl From<JsonValue> for ParameterEntry {
    fn from(value: JsonValue) -> Self {
        // A string `in` is all that makes an inline parameter.
        if let Some(location) = value.get("in").and_then(JsonValue::as_str) {
            return Self::Inline(Parameter {
                name: value
                    .get("name")
                    .and_then(JsonValue::as_str)
                    .map(String::from),
                location: ParameterLocation::from(location.to_string()),
            });
        }
        let reference = value
            .get("$ref")
            .and_then(JsonValue::as_str)
            .map(String::from);
        match reference {
            Some(pointer) => Self::Reference(pointer),
            None => Self::Unrecognized(value),
        }
    }
}

/// A parameter declared inline on an operation
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Option<String>,
    pub location: ParameterLocation,
}

/// Where a parameter is carried
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterLocation {
    Query,
    Path,
    Header,
    Cookie,
    Other(String),
}

impl From<String> for ParameterLocation {
    fn from(s: String) -> Self {
        match s.as_str() {
            "query" => Self::Query,
            "path" => Self::Path,
            "header" => Self::Header,
            "cookie" => Self::Cookie,
            _ => Self::Other(s),
        }
    }
}

/// Request body; a `$ref` body has no content and so no JSON schema
#[derive(Debug, Clone, Default)]
pub struct RequestBody {
    pub content: IndexMap<String, MediaType>,
}

impl From<JsonValue> for RequestBody {
    fn from(value: JsonValue) -> Self {
        Self {
            content: media_types(value),
        }
    }
}

/// Response; a `$ref` response has no content and so no JSON schema
#[derive(Debug, Clone, Default)]
pub struct Response {
    pub content: IndexMap<String, MediaType>,
}

impl From<JsonValue> for Response {
    fn from(value: JsonValue) -> Self {
        Self {
            content: media_types(value),
        }
    }
}

/// Payload description for one media type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaType {
    /// `$ref` of the payload schema, read whatever else the schema declares
    pub schema_reference: Option<String>,
}

impl From<JsonValue> for MediaType {
    fn from(value: JsonValue) -> Self {
        Self {
            schema_reference: value
                .get("schema")
                .and_then(|schema| schema.get("$ref"))
                .and_then(JsonValue::as_str)
                .map(String::from),
        }
    }
}

fn media_types(mut value: JsonValue) -> IndexMap<String, MediaType> {
    match value.get_mut("content").map(JsonValue::take) {
        Some(JsonValue::Object(content)) => content
            .into_iter()
            .map(|(media_type, media)| (media_type, MediaType::from(media)))
            .collect(),
        _ => IndexMap::new(),
    }
}
