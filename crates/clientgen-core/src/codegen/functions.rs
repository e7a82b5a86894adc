//! Request functions, one per identified operation.
//!
//! Each function builds its URL as `host + '<path>'` and delegates to the
//! runtime helper's `genericJSONRequest`. The signature is derived from the
//! operation alone:
//!
//! - `data: <Req>` when the JSON request body is a reference to a named schema;
//! - `query?: Record<string, string>` when any inline parameter is `in: query`;
//! - `Promise<Resp>` where `Resp` names the referenced JSON schema of the
//!   `"200"` response, or `any`.
//!
//! Path placeholders such as `{petId}` are copied into the URL unchanged and
//! path parameters never become function parameters.

use std::fmt;

use indexmap::IndexMap;

use super::types::{reference_type, UNKNOWN_TYPE};
use crate::openapi::{HttpMethod, Operation, PathItem};

/// Type of the optional query parameter of generated functions.
pub const QUERY_TYPE: &str = "Record<string, string>";

/// Name of the request function provided by the runtime helper.
pub const REQUEST_HELPER: &str = "genericJSONRequest";

/// A generated request function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    /// Function name, taken verbatim from the operation identifier
    pub name: String,
    pub method: HttpMethod,
    /// Path template, copied into the URL unchanged
    pub path: String,
    /// Type of the `data` parameter; `None` leaves the parameter out
    pub request_type: Option<String>,
    pub response_type: String,
    /// Whether the function takes an optional `query` parameter
    pub has_query: bool,
}

impl FunctionDeclaration {
    /// Derive a declaration for an operation; `None` when it has no identifier.
    pub fn from_operation(path: &str, method: HttpMethod, operation: &Operation) -> Option<Self> {
        let name = operation.operation_id.as_ref()?;
        Some(Self {
            name: name.clone(),
            method,
            path: path.to_string(),
            request_type: reference_type(operation.request_reference()).map(String::from),
            response_type: reference_type(operation.success_reference())
                .unwrap_or(UNKNOWN_TYPE)
                .to_string(),
            has_query: operation.has_query_parameters(),
        })
    }

    /// Comma-separated parameter list, data before query.
    fn parameter_list(&self) -> String {
        let mut parameters = Vec::new();
        if let Some(request_type) = &self.request_type {
            parameters.push(format!("data: {request_type}"));
        }
        if self.has_query {
            parameters.push(format!("query?: {QUERY_TYPE}"));
        }
        parameters.join(", ")
    }

    /// Options object passed to the helper, naming exactly the parameters taken.
    fn request_options(&self) -> String {
        let mut keys = Vec::new();
        if self.request_type.is_some() {
            keys.push("data");
        }
        if self.has_query {
            keys.push("query");
        }
        if keys.is_empty() {
            "{}".to_string()
        } else {
            format!("{{ {} }}", keys.join(", "))
        }
    }
}

impl fmt::Display for FunctionDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "export const {} = async ({}): Promise<{}> => {{",
            self.name,
            self.parameter_list(),
            self.response_type
        )?;
        writeln!(f, "  const url = host + '{}';", self.path)?;
        writeln!(
            f,
            "  return {}(url, '{}', {});",
            REQUEST_HELPER,
            self.method,
            self.request_options()
        )?;
        writeln!(f, "}};")?;
        writeln!(f)
    }
}

/// Declarations for every identified operation, in path then method order.
pub fn function_declarations(paths: &IndexMap<String, PathItem>) -> Vec<FunctionDeclaration> {
    paths
        .iter()
        .flat_map(|(path, item)| {
            item.operations.iter().filter_map(move |(method, operation)| {
                FunctionDeclaration::from_operation(path, *method, operation)
            })
        })
        .collect()
}

/// Render the function block for a path map.
pub fn generate_client_functions(paths: &IndexMap<String, PathItem>) -> String {
    function_declarations(paths)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(value: serde_json::Value) -> IndexMap<String, PathItem> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_get_with_referenced_response() {
        let result = generate_client_functions(&paths(json!({
            "/test": {
                "get": {
                    "operationId": "getTest",
                    "responses": {
                        "200": {
                            "description": "Successful response",
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/TestResponse"}
                                }
                            }
                        }
                    }
                }
            }
        })));
        assert_eq!(
            result,
            "export const getTest = async (): Promise<TestResponse> => {\n  \
             const url = host + '/test';\n  \
             return genericJSONRequest(url, 'GET', {});\n\
             };\n\n"
        );
    }

    #[test]
    fn test_body_and_query() {
        let declarations = function_declarations(&paths(json!({
            "/pets": {
                "post": {
                    "operationId": "createPet",
                    "parameters": [{"name": "dryRun", "in": "query"}],
                    "requestBody": {
                        "content": {
                            "application/json": {"schema": {"$ref": "#/components/schemas/NewPet"}}
                        }
                    },
                    "responses": {}
                }
            }
        })));
        let rendered = declarations[0].to_string();
        assert!(rendered.contains(
            "export const createPet = async (data: NewPet, query?: Record<string, string>): Promise<any> => {"
        ));
        assert!(rendered.contains("return genericJSONRequest(url, 'POST', { data, query });"));
    }

    #[test]
    fn test_query_only() {
        let declarations = function_declarations(&paths(json!({
            "/pets": {
                "get": {
                    "operationId": "listPets",
                    "parameters": [
                        {"name": "X-Trace", "in": "header"},
                        {"name": "limit", "in": "query"}
                    ]
                }
            }
        })));
        let rendered = declarations[0].to_string();
        assert!(rendered.contains("async (query?: Record<string, string>): Promise<any>"));
        assert!(rendered.contains("'GET', { query });"));
    }

    #[test]
    fn test_no_query_parameter_without_query_location() {
        let declarations = function_declarations(&paths(json!({
            "/pets": {
                "get": {
                    "operationId": "listPets",
                    "parameters": [
                        {"name": "X-Trace", "in": "header"},
                        {"$ref": "#/components/parameters/limit"}
                    ]
                }
            }
        })));
        assert!(!declarations[0].has_query);
        let rendered = declarations[0].to_string();
        assert!(!rendered.contains("query"));
    }

    #[test]
    fn test_inline_body_schema_has_no_data_parameter() {
        let declarations = function_declarations(&paths(json!({
            "/echo": {
                "put": {
                    "operationId": "echo",
                    "requestBody": {
                        "content": {
                            "application/json": {"schema": {"type": "object"}}
                        }
                    },
                    "responses": {
                        "200": {
                            "content": {"application/json": {"schema": {"type": "string"}}}
                        }
                    }
                }
            }
        })));
        assert_eq!(declarations[0].request_type, None);
        assert_eq!(declarations[0].response_type, "any");
        assert!(declarations[0]
            .to_string()
            .starts_with("export const echo = async (): Promise<any> => {"));
    }

    #[test]
    fn test_operations_without_id_are_skipped() {
        let declarations = function_declarations(&paths(json!({
            "/a": {
                "get": {"summary": "anonymous"},
                "delete": {"operationId": "deleteA"}
            },
            "/b": {
                "patch": {"operationId": "patchB"}
            }
        })));
        let names: Vec<_> = declarations.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["deleteA", "patchB"]);
        assert_eq!(declarations[0].method, HttpMethod::Delete);
    }

    #[test]
    fn test_unread_operation_fields_do_not_drop_the_function() {
        let declarations = function_declarations(&paths(json!({
            "/a": {
                "get": {"operationId": "getA", "tags": [{"name": "x"}]},
                "put": {"operationId": "putA", "summary": 5, "deprecated": "no"}
            }
        })));
        let names: Vec<_> = declarations.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["getA", "putA"]);
    }

    #[test]
    fn test_query_flag_ignores_other_parameter_fields() {
        let declarations = function_declarations(&paths(json!({
            "/pets": {
                "get": {
                    "operationId": "listPets",
                    "parameters": [{"name": "limit", "in": "query", "required": "false"}]
                }
            }
        })));
        assert!(declarations[0].has_query);
        assert!(declarations[0]
            .to_string()
            .contains("async (query?: Record<string, string>): Promise<any>"));
    }

    #[test]
    fn test_body_types_follow_ref_despite_declared_type() {
        let declarations = function_declarations(&paths(json!({
            "/pets": {
                "post": {
                    "operationId": "createPet",
                    "requestBody": {
                        "content": {
                            "application/json": {
                                "schema": {"type": "object", "$ref": "#/components/schemas/NewPet"}
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "content": {
                                "application/json": {
                                    "schema": {"type": "object", "$ref": "#/components/schemas/Pet"}
                                }
                            }
                        }
                    }
                }
            }
        })));
        assert_eq!(declarations[0].request_type.as_deref(), Some("NewPet"));
        assert_eq!(declarations[0].response_type, "Pet");
    }

    // Path parameters are not substituted into the URL nor added to the
    // signature; the placeholder reaches the request verbatim.
    #[test]
    fn test_path_placeholders_are_passed_through() {
        let declarations = function_declarations(&paths(json!({
            "/pets/{petId}": {
                "get": {
                    "operationId": "getPet",
                    "parameters": [{"name": "petId", "in": "path", "required": true}]
                }
            }
        })));
        let rendered = declarations[0].to_string();
        assert!(rendered.contains("async (): Promise<any>"));
        assert!(rendered.contains("const url = host + '/pets/{petId}';"));
    }

    #[test]
    fn test_unresolvable_reference_degrades() {
        let declarations = function_declarations(&paths(json!({
            "/x": {
                "post": {
                    "operationId": "x",
                    "requestBody": {
                        "content": {
                            "application/json": {"schema": {"$ref": "#/components/schemas/"}}
                        }
                    }
                }
            }
        })));
        assert_eq!(declarations[0].request_type, None);
        assert!(declarations[0].to_string().contains("async (): Promise<any>"));
    }
}
