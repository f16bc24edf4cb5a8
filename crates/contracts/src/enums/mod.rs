mod endpoint_kind;
mod param_type;

pub use endpoint_kind::{EndpointKind, HttpMethod};
pub use param_type::ParamType;
