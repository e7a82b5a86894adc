//! `export enum` declarations for named string enumerations.

use std::fmt;

use indexmap::IndexMap;

use crate::openapi::SchemaNode;

/// A named string enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclaration {
    pub name: String,
    /// Literal values, each used as both member name and member value
    pub values: Vec<String>,
}

impl fmt::Display for EnumDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "export enum {} {{", self.name)?;
        for value in &self.values {
            writeln!(f, "  {value} = '{value}',")?;
        }
        writeln!(f, "}}")?;
        writeln!(f)
    }
}

/// One declaration per named schema that is a string with literal values.
pub fn enum_declarations(schemas: &IndexMap<String, SchemaNode>) -> Vec<EnumDeclaration> {
    schemas
        .iter()
        .filter_map(|(name, schema)| match schema {
            SchemaNode::Enum(values) => Some(EnumDeclaration {
                name: name.clone(),
                values: values.clone(),
            }),
            _ => None,
        })
        .collect()
}

/// Render the enum block for a set of named schemas.
pub fn generate_enums(schemas: &IndexMap<String, SchemaNode>) -> String {
    enum_declarations(schemas)
        .iter()
        .map(ToString::to_string)
        .collect()
}
