//! TypeScript client generation.
//!
//! A client is assembled from four parts, always in this order:
//!
//! 1. the runtime helper (`genericJSONRequest` and the `host` constant),
//! 2. one `export enum` per named string enumeration,
//! 3. one `export interface` per named object schema with properties,
//! 4. one `export const` request function per operation with an `operationId`.
//!
//! Generation is a pure function of the document: it never fails and never
//! reads anything outside its arguments. Schema shapes it cannot express
//! degrade to `any` or are left out.
//!
//! # Examples
//!
//! ```
//! use clientgen_core::codegen::generate_client_code;
//! use clientgen_core::openapi::Document;
//!
//! let document: Document = serde_json::from_str(r#"{
//!     "paths": {
//!         "/ping": { "get": { "operationId": "ping" } }
//!     }
//! }"#).unwrap();
//!
//! let code = generate_client_code(&document);
//! assert!(code.contains("export const ping = async (): Promise<any> => {"));
//! ```

pub mod enums;
pub mod functions;
pub mod interfaces;
pub mod runtime;
pub mod types;

use crate::openapi::Document;

pub use self::enums::{enum_declarations, generate_enums, EnumDeclaration};
pub use self::functions::{function_declarations, generate_client_functions, FunctionDeclaration};
pub use self::interfaces::{
    generate_interfaces, interface_declarations, InterfaceDeclaration, PropertyDeclaration,
};
pub use self::runtime::runtime_helper;
pub use self::types::{resolve_type, UNKNOWN_TYPE};

/// Settings that change the generated text without touching the document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// Value of the `host` constant request URLs are prefixed with
    pub host: String,
}

impl ClientOptions {
    /// Options with the given host
    pub fn with_host(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

/// Generate a complete client with an empty `host`.
pub fn generate_client_code(document: &Document) -> String {
    generate_client_code_with(document, &ClientOptions::default())
}

/// Generate a complete client.
pub fn generate_client_code_with(document: &Document, options: &ClientOptions) -> String {
    let schemas = document.schemas();
    let enums = generate_enums(schemas);
    let interfaces = generate_interfaces(schemas);
    let functions = generate_client_functions(&document.paths);

    format!(
        "{}\n\n{}{}{}",
        runtime_helper(&options.host),
        enums,
        interfaces,
        functions
    )
}
