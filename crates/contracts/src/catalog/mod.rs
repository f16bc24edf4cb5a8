//! Endpoint catalog of the OzGroceries products API
//!
//! The table is built once on first access and never mutated. Order is the
//! order the console lists the endpoints in.
//!
//! ```rust,ignore
//! use contracts::catalog::{descriptor, endpoints};
//!
//! for endpoint in endpoints() {
//!     println!("{}: {}", endpoint.title(), endpoint.description);
//! }
//! let search = descriptor(EndpointKind::Search);
//! ```

mod types;

pub use types::{EndpointDescriptor, EndpointExample, ParamSpec};

use crate::enums::{EndpointKind, ParamType};
use once_cell::sync::Lazy;
use serde_json::json;

const SEARCH_PARAMS: &[ParamSpec] = &[
    ParamSpec::optional("q", ParamType::String, "Search query string"),
    ParamSpec::optional("supermarket", ParamType::String, "Filter by supermarket"),
    ParamSpec::optional("brand", ParamType::String, "Filter by brand"),
    ParamSpec::optional("category", ParamType::String, "Filter by category"),
    ParamSpec::optional("min_price", ParamType::Number, "Minimum price filter"),
    ParamSpec::optional("max_price", ParamType::Number, "Maximum price filter"),
    ParamSpec::optional("in_stock", ParamType::Boolean, "Filter by stock status"),
    ParamSpec::optional("on_special", ParamType::Boolean, "Filter by special offers"),
    ParamSpec::optional("limit", ParamType::Number, "Results per page"),
    ParamSpec::optional("offset", ParamType::Number, "Pagination offset"),
    ParamSpec::optional("sort_by", ParamType::String, "Sort order"),
];

const BARCODE_PARAMS: &[ParamSpec] = &[ParamSpec::required(
    "barcode",
    ParamType::String,
    "The product barcode",
)];

const PRICE_HISTORY_PARAMS: &[ParamSpec] = &[
    ParamSpec::optional("product_id", ParamType::Number, "Product ID"),
    ParamSpec::optional("gtin", ParamType::String, "Product GTIN"),
    ParamSpec::optional("sku", ParamType::String, "Product SKU"),
    ParamSpec::optional("supermarket", ParamType::String, "Supermarket name"),
    ParamSpec::optional("days", ParamType::Number, "Limit to last N days"),
];

const RECOMMENDATION_PARAMS: &[ParamSpec] = &[
    ParamSpec::optional("product_id", ParamType::Number, "Product ID"),
    ParamSpec::optional("gtin", ParamType::String, "Product GTIN"),
    ParamSpec::optional("sku", ParamType::String, "Product SKU"),
    ParamSpec::optional("supermarket", ParamType::String, "Supermarket name"),
    ParamSpec::optional("limit", ParamType::Number, "Number of recommendations"),
    ParamSpec::optional("strategy", ParamType::String, "Recommendation strategy"),
];

static CATALOG: Lazy<Vec<EndpointDescriptor>> = Lazy::new(|| {
    EndpointKind::all().into_iter().map(build_descriptor).collect()
});

/// All endpoints in display order
pub fn endpoints() -> &'static [EndpointDescriptor] {
    &CATALOG
}

/// Descriptor of a single endpoint kind
pub fn descriptor(kind: EndpointKind) -> &'static EndpointDescriptor {
    // CATALOG is built from EndpointKind::all(), so the index always matches
    let index = EndpointKind::all()
        .iter()
        .position(|k| *k == kind)
        .unwrap_or_default();
    &CATALOG[index]
}

/// Look an endpoint up by its documented route template
pub fn find_by_path(path: &str) -> Option<&'static EndpointDescriptor> {
    EndpointKind::from_path(path).map(descriptor)
}

fn build_descriptor(kind: EndpointKind) -> EndpointDescriptor {
    let (description, parameters, example) = match kind {
        EndpointKind::Search => (
            "Search for products with advanced filtering, pagination, and sorting",
            SEARCH_PARAMS,
            EndpointExample {
                request: json!({ "q": "milk", "limit": 5 }),
                response: json!({
                    "products": [
                        {
                            "id": 1,
                            "sku": "1234567",
                            "supermarket": "woolworths",
                            "name": "Example Milk 2L",
                            "brand": "OzGroceries",
                            "price": "3.50",
                            "was_price": "4.00",
                            "is_on_special": true,
                            "is_in_stock": true,
                            "price_change_amount": -0.5,
                            "price_change_direction": "down",
                            "price_lowest_30d": 3.25,
                            "price_highest_30d": 4.2,
                            "cup_price_display": "$1.75/L",
                            "first_seen_at": "2024-05-01T10:00:00.000Z",
                            "scraped_at": "2024-05-15T10:00:00.000Z"
                        }
                    ],
                    "total": 1,
                    "page": 1,
                    "limit": 5,
                    "has_next": false,
                    "has_prev": false,
                    "filters": {
                        "supermarkets": ["woolworths"],
                        "brands": ["OzGroceries"],
                        "categories": ["Dairy"],
                        "price_range": { "min": 3.5, "max": 3.5 }
                    }
                }),
            },
        ),
        EndpointKind::BarcodeLookup => (
            "Lookup a product by its barcode or GTIN",
            BARCODE_PARAMS,
            EndpointExample {
                request: json!({ "barcode": "9300633000034" }),
                response: json!({ "product": {}, "alternatives": [] }),
            },
        ),
        EndpointKind::PriceHistory => (
            "Get historical price data for a specific product",
            PRICE_HISTORY_PARAMS,
            EndpointExample {
                request: json!({ "product_id": 123, "days": 30 }),
                response: json!({ "product": {}, "price_history": [], "summary": {} }),
            },
        ),
        EndpointKind::Recommendations => (
            "Get product recommendations based on a source product",
            RECOMMENDATION_PARAMS,
            EndpointExample {
                request: json!({ "product_id": 123, "limit": 5 }),
                response: json!({
                    "product": {},
                    "recommendations": [],
                    "strategy": "similar",
                    "total_recommendations": 5
                }),
            },
        ),
    };

    EndpointDescriptor {
        kind,
        method: kind.method(),
        path: kind.path(),
        description,
        parameters,
        example,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_order_and_paths() {
        let paths: Vec<&str> = endpoints().iter().map(|e| e.path).collect();
        assert_eq!(
            paths,
            vec![
                "/products/search",
                "/products/barcode/:barcode",
                "/products/price-history",
                "/products/recommendations",
            ]
        );
    }

    #[test]
    fn test_descriptor_matches_kind() {
        for kind in EndpointKind::all() {
            let d = descriptor(kind);
            assert_eq!(d.kind, kind);
            assert_eq!(d.path, kind.path());
            assert_eq!(d.method.as_str(), "GET");
        }
    }

    #[test]
    fn test_parameter_names_unique_per_endpoint() {
        for endpoint in endpoints() {
            let names: HashSet<&str> = endpoint.parameters.iter().map(|p| p.name).collect();
            assert_eq!(names.len(), endpoint.parameters.len(), "{}", endpoint.path);
        }
    }

    #[test]
    fn test_barcode_is_the_only_required_parameter() {
        let required: Vec<(&str, &str)> = endpoints()
            .iter()
            .flat_map(|e| {
                e.parameters
                    .iter()
                    .filter(|p| p.required)
                    .map(move |p| (e.path, p.name))
            })
            .collect();
        assert_eq!(required, vec![("/products/barcode/:barcode", "barcode")]);
    }

    #[test]
    fn test_example_requests_only_use_declared_parameters() {
        for endpoint in endpoints() {
            let request = endpoint.example.request.as_object().unwrap();
            for key in request.keys() {
                assert!(endpoint.param(key).is_some(), "{} has no {}", endpoint.path, key);
            }
        }
    }

    #[test]
    fn test_find_by_path() {
        let found = find_by_path("/products/price-history").unwrap();
        assert_eq!(found.kind, EndpointKind::PriceHistory);
        assert!(find_by_path("/products/unknown").is_none());
    }

    #[test]
    fn test_search_param_types() {
        let search = descriptor(EndpointKind::Search);
        assert_eq!(search.param("min_price").unwrap().param_type, ParamType::Number);
        assert_eq!(search.param("in_stock").unwrap().param_type, ParamType::Boolean);
        assert_eq!(search.param("q").unwrap().param_type, ParamType::String);
        assert_eq!(search.title(), "GET /products/search");
    }

    #[test]
    fn test_example_response_keeps_field_order() {
        let response = descriptor(EndpointKind::Search).example.response.as_object().unwrap();
        let keys: Vec<&str> = response.keys().map(String::as_str).collect();
        assert_eq!(keys[..3], ["products", "total", "page"]);
    }
}
