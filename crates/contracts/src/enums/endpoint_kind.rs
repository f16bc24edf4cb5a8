use serde::{Deserialize, Serialize};

/// HTTP methods used by the products API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// Endpoints exposed by the OzGroceries products API
///
/// The set is closed: every console dispatch is an exhaustive match over
/// these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndpointKind {
    Search,
    BarcodeLookup,
    PriceHistory,
    Recommendations,
}

impl EndpointKind {
    /// Route template as shown in the documentation
    pub fn path(&self) -> &'static str {
        match self {
            EndpointKind::Search => "/products/search",
            EndpointKind::BarcodeLookup => "/products/barcode/:barcode",
            EndpointKind::PriceHistory => "/products/price-history",
            EndpointKind::Recommendations => "/products/recommendations",
        }
    }

    pub fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    /// Short human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            EndpointKind::Search => "Product Search",
            EndpointKind::BarcodeLookup => "Barcode Lookup",
            EndpointKind::PriceHistory => "Price History",
            EndpointKind::Recommendations => "Recommendations",
        }
    }

    /// All kinds in catalog order
    pub fn all() -> [EndpointKind; 4] {
        [
            EndpointKind::Search,
            EndpointKind::BarcodeLookup,
            EndpointKind::PriceHistory,
            EndpointKind::Recommendations,
        ]
    }

    /// Resolve a route template back to its kind
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/products/search" => Some(EndpointKind::Search),
            "/products/barcode/:barcode" => Some(EndpointKind::BarcodeLookup),
            "/products/price-history" => Some(EndpointKind::PriceHistory),
            "/products/recommendations" => Some(EndpointKind::Recommendations),
            _ => None,
        }
    }
}

impl std::fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method().as_str(), self.path())
    }
}
