use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Product as returned by every products endpoint
///
/// Prices are decimal strings (`"3.50"`) exactly as the backend sends them.
/// Fields missing from a payload fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: i64,
    pub sku: String,
    pub supermarket: String,
    pub name: String,
    pub brand: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub was_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_special: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
}

/// One recorded price point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryEntry {
    pub id: i64,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub was_price: Option<String>,
    pub is_on_special: bool,
    pub recorded_at: DateTime<Utc>,
}

/// `GET /products/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub has_next: bool,
    pub has_prev: bool,
    /// Facets (supermarkets, brands, categories, price_range); shape owned by the backend
    #[serde(default)]
    pub filters: Value,
}

/// `GET /products/barcode/{barcode}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarcodeLookupResponse {
    pub product: Product,
    #[serde(default)]
    pub alternatives: Vec<Product>,
}

/// `GET /products/price-history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryResponse {
    pub product: Product,
    pub price_history: Vec<PriceHistoryEntry>,
    #[serde(default)]
    pub summary: Value,
}

/// `GET /products/recommendations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub product: Product,
    pub recommendations: Vec<Product>,
    pub strategy: String,
    pub total_recommendations: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::descriptor;
    use crate::enums::EndpointKind;

    #[test]
    fn test_catalog_examples_deserialize() {
        let search: SearchResponse =
            serde_json::from_value(descriptor(EndpointKind::Search).example.response.clone())
                .unwrap();
        assert_eq!(search.products.len(), 1);
        assert_eq!(search.products[0].price, "3.50");
        assert_eq!(search.products[0].was_price.as_deref(), Some("4.00"));
        assert_eq!(search.limit, 5);

        let barcode: BarcodeLookupResponse = serde_json::from_value(
            descriptor(EndpointKind::BarcodeLookup).example.response.clone(),
        )
        .unwrap();
        assert_eq!(barcode.product, Product::default());
        assert!(barcode.alternatives.is_empty());

        let recs: RecommendationsResponse = serde_json::from_value(
            descriptor(EndpointKind::Recommendations).example.response.clone(),
        )
        .unwrap();
        assert_eq!(recs.strategy, "similar");
        assert_eq!(recs.total_recommendations, 5);
    }

    #[test]
    fn test_price_history_entry_timestamp() {
        let entry: PriceHistoryEntry = serde_json::from_str(
            r#"{"id":7,"price":"3.25","is_on_special":true,"recorded_at":"2024-05-15T10:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(entry.recorded_at.to_rfc3339(), "2024-05-15T10:00:00+00:00");
        assert!(entry.was_price.is_none());
    }
}
