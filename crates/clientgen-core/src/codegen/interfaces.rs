//! `export interface` declarations for named object schemas.

use std::fmt;

use indexmap::IndexMap;

use super::types::resolve_type;
use crate::openapi::SchemaNode;

/// One property line of an interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDeclaration {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl fmt::Display for PropertyDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.optional { "?" } else { "" };
        write!(f, "{}{}: {};", self.name, marker, self.ty)
    }
}

/// A named structural type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDeclaration {
    pub name: String,
    pub properties: Vec<PropertyDeclaration>,
}

impl fmt::Display for InterfaceDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "export interface {} {{", self.name)?;
        for property in &self.properties {
            writeln!(f, "  {property}")?;
        }
        writeln!(f, "}}")?;
        writeln!(f)
    }
}

/// One declaration per named object schema that has properties.
pub fn interface_declarations(
    schemas: &IndexMap<String, SchemaNode>,
) -> Vec<InterfaceDeclaration> {
    schemas
        .iter()
        .filter_map(|(name, schema)| match schema {
            SchemaNode::Object(object) if !object.properties.is_empty() => {
                let properties = object
                    .properties
                    .iter()
                    .map(|(property, property_schema)| PropertyDeclaration {
                        name: property.clone(),
                        ty: resolve_type(property_schema),
                        optional: !object.is_required(property),
                    })
                    .collect();
                Some(InterfaceDeclaration {
                    name: name.clone(),
                    properties,
                })
            }
            _ => None,
        })
        .collect()
}

/// Render the interface block for a set of named schemas.
pub fn generate_interfaces(schemas: &IndexMap<String, SchemaNode>) -> String {
    interface_declarations(schemas)
        .iter()
        .map(ToString::to_string)
        .collect()
}
