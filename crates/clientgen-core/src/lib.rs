//! clientgen Core Library
//!
//! This library turns an OpenAPI document into a typed TypeScript client:
//! enums and interfaces for the component schemas, and one request function
//! per identified operation.

pub mod codegen;
pub mod config;
pub mod error;
pub mod generate;
pub mod openapi;

pub use crate::{
    codegen::{
        generate_client_code, generate_client_code_with, generate_client_functions,
        generate_enums, generate_interfaces, ClientOptions,
    },
    config::Config,
    error::{Error, Result},
    generate::{generate, write_client},
    openapi::{Document, OpenApiContext},
};
