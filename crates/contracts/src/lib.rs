//! Shared contracts for the OzGroceries API console
//!
//! Everything in this crate is plain Rust with no browser dependencies, so the
//! frontend can build on it and the test suite can run it natively.
//!
//! - [`catalog`]: the static endpoint table rendered by the console
//! - [`enums`]: closed enumerations (endpoint kinds, parameter types)
//! - [`products`]: request parameters and response DTOs of the products API
//! - [`request`]: the typed request union dispatched by the console
//! - [`query`]: ordered query-string building
//! - [`http`]: plain-data HTTP request/response and the transport seam
//! - [`error`]: the normalized error type

pub mod catalog;
pub mod enums;
pub mod error;
pub mod http;
pub mod products;
pub mod query;
pub mod request;

pub use catalog::{endpoints, EndpointDescriptor, EndpointExample, ParamSpec};
pub use enums::{EndpointKind, HttpMethod, ParamType};
pub use error::{ApiError, ApiResult};
pub use http::{HttpRequest, HttpResponse, HttpTransport};
pub use query::QueryParams;
pub use request::{ApiRequest, FormValues};
