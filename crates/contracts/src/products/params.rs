use crate::query::QueryParams;
use serde::{Deserialize, Serialize};

/// Filters for `GET /products/search`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub supermarket: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub in_stock: Option<bool>,
    pub on_special: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort_by: Option<String>,
}

/// Product selector shared by price history and recommendations.
/// The backend expects one of `product_id`, `gtin` or `sku`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub product_id: Option<i64>,
    pub gtin: Option<String>,
    pub sku: Option<String>,
}

impl ProductRef {
    pub fn by_id(product_id: i64) -> Self {
        Self {
            product_id: Some(product_id),
            ..Self::default()
        }
    }

    pub fn by_gtin(gtin: impl Into<String>) -> Self {
        Self {
            gtin: Some(gtin.into()),
            ..Self::default()
        }
    }

    fn append_to(&self, query: &mut QueryParams) {
        query.push_opt("product_id", self.product_id);
        query.push_opt("gtin", self.gtin.as_deref());
        query.push_opt("sku", self.sku.as_deref());
    }
}

/// Filters for `GET /products/price-history`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryParams {
    #[serde(flatten)]
    pub product: ProductRef,
    pub supermarket: Option<String>,
    pub days: Option<u32>,
    /// `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`
    pub end_date: Option<String>,
}

/// Filters for `GET /products/recommendations`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationParams {
    #[serde(flatten)]
    pub product: ProductRef,
    pub supermarket: Option<String>,
    pub limit: Option<u32>,
    pub strategy: Option<String>,
}

impl From<&SearchParams> for QueryParams {
    fn from(p: &SearchParams) -> Self {
        let mut query = QueryParams::new();
        query.push_opt("q", p.q.as_deref());
        query.push_opt("supermarket", p.supermarket.as_deref());
        query.push_opt("brand", p.brand.as_deref());
        query.push_opt("category", p.category.as_deref());
        query.push_opt("min_price", p.min_price);
        query.push_opt("max_price", p.max_price);
        query.push_opt("in_stock", p.in_stock);
        query.push_opt("on_special", p.on_special);
        query.push_opt("limit", p.limit);
        query.push_opt("offset", p.offset);
        query.push_opt("sort_by", p.sort_by.as_deref());
        query
    }
}

impl From<&PriceHistoryParams> for QueryParams {
    fn from(p: &PriceHistoryParams) -> Self {
        let mut query = QueryParams::new();
        p.product.append_to(&mut query);
        query.push_opt("supermarket", p.supermarket.as_deref());
        query.push_opt("days", p.days);
        query.push_opt("start_date", p.start_date.as_deref());
        query.push_opt("end_date", p.end_date.as_deref());
        query
    }
}

impl From<&RecommendationParams> for QueryParams {
    fn from(p: &RecommendationParams) -> Self {
        let mut query = QueryParams::new();
        p.product.append_to(&mut query);
        query.push_opt("supermarket", p.supermarket.as_deref());
        query.push_opt("limit", p.limit);
        query.push_opt("strategy", p.strategy.as_deref());
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params_skip_absent_fields() {
        let params = SearchParams {
            q: Some("milk".into()),
            in_stock: Some(true),
            min_price: Some(1.5),
            limit: Some(5),
            ..SearchParams::default()
        };
        let query = QueryParams::from(&params);
        assert_eq!(
            query.to_query_string(),
            "q=milk&min_price=1.5&in_stock=true&limit=5"
        );
    }

    #[test]
    fn test_price_history_params_with_date_range() {
        let params = PriceHistoryParams {
            product: ProductRef::by_gtin("9300633000034"),
            start_date: Some("2024-05-01".into()),
            end_date: Some("2024-05-31".into()),
            ..PriceHistoryParams::default()
        };
        assert_eq!(
            QueryParams::from(&params).to_query_string(),
            "gtin=9300633000034&start_date=2024-05-01&end_date=2024-05-31"
        );
    }

    #[test]
    fn test_recommendation_params() {
        let params = RecommendationParams {
            product: ProductRef::by_id(123),
            limit: Some(5),
            strategy: Some("similar".into()),
            ..RecommendationParams::default()
        };
        assert_eq!(
            QueryParams::from(&params).to_query_string(),
            "product_id=123&limit=5&strategy=similar"
        );
    }

    #[test]
    fn test_default_params_produce_empty_query() {
        assert!(QueryParams::from(&SearchParams::default()).is_empty());
        assert!(QueryParams::from(&RecommendationParams::default()).is_empty());
    }
}
