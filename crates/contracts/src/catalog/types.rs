//! Descriptor types for the endpoint catalog
//!
//! Names, paths and descriptions are `'static`; only the example payloads
//! are built at runtime because they are JSON trees.

use crate::enums::{EndpointKind, HttpMethod, ParamType};
use serde_json::Value;

/// One input of an endpoint form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Query key (or path placeholder), unique within an endpoint
    pub name: &'static str,
    pub param_type: ParamType,
    pub required: bool,
    pub description: &'static str,
}

impl ParamSpec {
    pub const fn optional(
        name: &'static str,
        param_type: ParamType,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            param_type,
            required: false,
            description,
        }
    }

    pub const fn required(
        name: &'static str,
        param_type: ParamType,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            param_type,
            required: true,
            description,
        }
    }
}

/// Example request parameters and the matching response body
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointExample {
    pub request: Value,
    pub response: Value,
}

/// Static documentation of a single backend operation
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointDescriptor {
    pub kind: EndpointKind,
    pub method: HttpMethod,
    pub path: &'static str,
    pub description: &'static str,
    pub parameters: &'static [ParamSpec],
    pub example: EndpointExample,
}

impl EndpointDescriptor {
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// `"GET /products/search"`
    pub fn title(&self) -> String {
        format!("{} {}", self.method.as_str(), self.path)
    }
}
