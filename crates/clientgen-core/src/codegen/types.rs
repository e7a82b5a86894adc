//! Schema to TypeScript type expressions.

use crate::openapi::{schema::ref_name, PrimitiveType, SchemaNode};

/// Type used whenever a schema cannot be mapped to anything more precise.
pub const UNKNOWN_TYPE: &str = "any";

/// Type of an object schema that declares no properties.
pub const OPEN_OBJECT_TYPE: &str = "Record<string, any>";

/// Resolve a schema to a single TypeScript type expression.
///
/// References become the bare referenced name and are never inlined, so
/// self-referencing schemas resolve in one step. Shapes that cannot be
/// expressed degrade to [`UNKNOWN_TYPE`].
pub fn resolve_type(schema: &SchemaNode) -> String {
    match schema {
        SchemaNode::Primitive(primitive) => primitive_type(*primitive).to_string(),
        // Enum values only matter for named enums; inline they are strings
        SchemaNode::Enum(_) => primitive_type(PrimitiveType::String).to_string(),
        SchemaNode::Array(items) => {
            let item = items
                .as_deref()
                .map(resolve_type)
                .unwrap_or_else(|| UNKNOWN_TYPE.to_string());
            format!("{item}[]")
        }
        SchemaNode::Object(object) if object.properties.is_empty() => OPEN_OBJECT_TYPE.to_string(),
        SchemaNode::Object(object) => {
            let fields = object
                .properties
                .iter()
                .map(|(name, property)| format!("{}: {}", name, resolve_type(property)))
                .collect::<Vec<_>>()
                .join("; ");
            format!("{{ {fields} }}")
        }
        SchemaNode::Reference(_) => schema
            .reference_name()
            .unwrap_or(UNKNOWN_TYPE)
            .to_string(),
        SchemaNode::Unknown => UNKNOWN_TYPE.to_string(),
    }
}

/// Name a body schema's `$ref` contributes to a function signature.
///
/// Only references name a type here; inline body schemas are not given one.
pub fn reference_type(pointer: Option<&str>) -> Option<&str> {
    pointer.and_then(ref_name)
}

fn primitive_type(primitive: PrimitiveType) -> &'static str {
    match primitive {
        PrimitiveType::String => "string",
        PrimitiveType::Number | PrimitiveType::Integer => "number",
        PrimitiveType::Boolean => "boolean",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolve(value: serde_json::Value) -> String {
        resolve_type(&serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_primitives() {
        assert_eq!(resolve(json!({"type": "string"})), "string");
        assert_eq!(resolve(json!({"type": "integer"})), "number");
        assert_eq!(resolve(json!({"type": "number", "format": "double"})), "number");
        assert_eq!(resolve(json!({"type": "boolean"})), "boolean");
        assert_eq!(resolve(json!({"type": "string", "enum": ["A"]})), "string");
    }

    #[test]
    fn test_arrays() {
        assert_eq!(resolve(json!({"type": "array", "items": {"type": "integer"}})), "number[]");
        assert_eq!(resolve(json!({"type": "array"})), "any[]");
        assert_eq!(
            resolve(json!({
                "type": "array",
                "items": {"type": "array", "items": {"$ref": "#/components/schemas/Cell"}}
            })),
            "Cell[][]"
        );
    }

    #[test]
    fn test_inline_objects() {
        assert_eq!(
            resolve(json!({
                "type": "object",
                "properties": {
                    "id": {"type": "integer"},
                    "tags": {"type": "array", "items": {"type": "string"}},
                    "owner": {"type": "object", "properties": {"name": {"type": "string"}}}
                }
            })),
            "{ id: number; tags: string[]; owner: { name: string } }"
        );
        assert_eq!(resolve(json!({"type": "object"})), "Record<string, any>");
        assert_eq!(
            resolve(json!({"type": "object", "properties": {}})),
            "Record<string, any>"
        );
    }

    #[test]
    fn test_references() {
        assert_eq!(resolve(json!({"$ref": "#/components/schemas/Foo"})), "Foo");
        assert_eq!(resolve(json!({"$ref": "#/components/schemas/"})), "any");
    }

    #[test]
    fn test_unsupported_shapes() {
        assert_eq!(resolve(json!({})), "any");
        assert_eq!(resolve(json!({"type": "file"})), "any");
        assert_eq!(resolve(json!({"anyOf": [{"type": "string"}]})), "any");
    }

    #[test]
    fn test_reference_type() {
        assert_eq!(reference_type(Some("#/components/schemas/Pet")), Some("Pet"));
        assert_eq!(reference_type(Some("#/components/schemas/")), None);
        assert_eq!(reference_type(None), None);
    }
}
