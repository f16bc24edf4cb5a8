//! Typed requests of the products API
//!
//! [`ApiRequest`] is the closed union the console dispatches on. Each variant
//! knows its route and query; [`Endpoint`] pairs every kind with its typed
//! parameters and response body for programmatic callers.

use crate::catalog::descriptor;
use crate::enums::EndpointKind;
use crate::products::{
    BarcodeLookupResponse, PriceHistoryParams, PriceHistoryResponse, RecommendationParams,
    RecommendationsResponse, SearchParams, SearchResponse,
};
use crate::query::QueryParams;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Raw form input: parameter name -> text typed by the user
pub type FormValues = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Search(QueryParams),
    BarcodeLookup { barcode: String },
    PriceHistory(QueryParams),
    Recommendations(QueryParams),
}

impl ApiRequest {
    /// Build the request for `kind` from form input
    ///
    /// Values are taken in catalog order and sent as typed, without
    /// validation. Empty values and names the endpoint does not declare are
    /// dropped.
    pub fn from_form(kind: EndpointKind, values: &FormValues) -> Self {
        let declared_query = || {
            let mut query = QueryParams::new();
            for spec in descriptor(kind).parameters {
                if let Some(value) = values.get(spec.name) {
                    query.push(spec.name, value.as_str());
                }
            }
            query
        };

        match kind {
            EndpointKind::Search => ApiRequest::Search(declared_query()),
            EndpointKind::BarcodeLookup => ApiRequest::BarcodeLookup {
                barcode: values.get("barcode").cloned().unwrap_or_default(),
            },
            EndpointKind::PriceHistory => ApiRequest::PriceHistory(declared_query()),
            EndpointKind::Recommendations => ApiRequest::Recommendations(declared_query()),
        }
    }

    pub fn kind(&self) -> EndpointKind {
        match self {
            ApiRequest::Search(_) => EndpointKind::Search,
            ApiRequest::BarcodeLookup { .. } => EndpointKind::BarcodeLookup,
            ApiRequest::PriceHistory(_) => EndpointKind::PriceHistory,
            ApiRequest::Recommendations(_) => EndpointKind::Recommendations,
        }
    }

    /// Concrete path with placeholders filled in
    pub fn path(&self) -> String {
        match self {
            ApiRequest::BarcodeLookup { barcode } => {
                format!("/products/barcode/{}", urlencoding::encode(barcode))
            }
            other => other.kind().path().to_string(),
        }
    }

    pub fn query(&self) -> Option<&QueryParams> {
        match self {
            ApiRequest::Search(q) | ApiRequest::PriceHistory(q) | ApiRequest::Recommendations(q) => {
                Some(q)
            }
            ApiRequest::BarcodeLookup { .. } => None,
        }
    }

    /// Absolute URL against `base_url` (no trailing slash expected)
    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!("{}{}", base_url, self.path());
        if let Some(query) = self.query().filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(&query.to_query_string());
        }
        url
    }
}

/// Static pairing of an endpoint kind with its typed parameters and response
pub trait Endpoint {
    const KIND: EndpointKind;
    type Params;
    type Response: DeserializeOwned;

    fn request(params: &Self::Params) -> ApiRequest;
}

pub struct SearchEndpoint;
pub struct BarcodeLookupEndpoint;
pub struct PriceHistoryEndpoint;
pub struct RecommendationsEndpoint;

impl Endpoint for SearchEndpoint {
    const KIND: EndpointKind = EndpointKind::Search;
    type Params = SearchParams;
    type Response = SearchResponse;

    fn request(params: &SearchParams) -> ApiRequest {
        ApiRequest::Search(params.into())
    }
}

impl Endpoint for BarcodeLookupEndpoint {
    const KIND: EndpointKind = EndpointKind::BarcodeLookup;
    type Params = String;
    type Response = BarcodeLookupResponse;

    fn request(barcode: &String) -> ApiRequest {
        ApiRequest::BarcodeLookup {
            barcode: barcode.clone(),
        }
    }
}

impl Endpoint for PriceHistoryEndpoint {
    const KIND: EndpointKind = EndpointKind::PriceHistory;
    type Params = PriceHistoryParams;
    type Response = PriceHistoryResponse;

    fn request(params: &PriceHistoryParams) -> ApiRequest {
        ApiRequest::PriceHistory(params.into())
    }
}

impl Endpoint for RecommendationsEndpoint {
    const KIND: EndpointKind = EndpointKind::Recommendations;
    type Params = RecommendationParams;
    type Response = RecommendationsResponse;

    fn request(params: &RecommendationParams) -> ApiRequest {
        ApiRequest::Recommendations(params.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:3000";

    fn form(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_search_from_form_uses_catalog_order() {
        let req = ApiRequest::from_form(EndpointKind::Search, &form(&[("limit", "5"), ("q", "milk")]));
        assert_eq!(req.url(BASE), "http://localhost:3000/products/search?q=milk&limit=5");
    }

    #[test]
    fn test_empty_and_undeclared_values_are_dropped() {
        let req = ApiRequest::from_form(
            EndpointKind::PriceHistory,
            &form(&[("gtin", ""), ("sku", "ABC-1"), ("strategy", "similar")]),
        );
        assert_eq!(req.url(BASE), "http://localhost:3000/products/price-history?sku=ABC-1");
    }

    #[test]
    fn test_no_parameters_means_no_question_mark() {
        let req = ApiRequest::from_form(EndpointKind::Recommendations, &FormValues::new());
        assert_eq!(req.url(BASE), "http://localhost:3000/products/recommendations");
    }

    #[test]
    fn test_barcode_goes_into_path() {
        let req = ApiRequest::from_form(
            EndpointKind::BarcodeLookup,
            &form(&[("barcode", "9300633000034")]),
        );
        assert_eq!(req.kind(), EndpointKind::BarcodeLookup);
        assert!(req.query().is_none());
        assert_eq!(req.url(BASE), "http://localhost:3000/products/barcode/9300633000034");
    }

    #[test]
    fn test_barcode_is_path_encoded() {
        let req = ApiRequest::BarcodeLookup {
            barcode: "93 00/1".into(),
        };
        assert_eq!(req.path(), "/products/barcode/93%2000%2F1");
    }

    #[test]
    fn test_missing_barcode_is_sent_unvalidated() {
        let req = ApiRequest::from_form(EndpointKind::BarcodeLookup, &FormValues::new());
        assert_eq!(req.url(BASE), "http://localhost:3000/products/barcode/");
    }

    #[test]
    fn test_typed_endpoints_build_matching_requests() {
        let search = SearchEndpoint::request(&SearchParams {
            q: Some("milk".into()),
            limit: Some(5),
            ..SearchParams::default()
        });
        assert_eq!(search.kind(), SearchEndpoint::KIND);
        assert_eq!(search.query().unwrap().to_query_string(), "q=milk&limit=5");

        let barcode = BarcodeLookupEndpoint::request(&"9300633000034".to_string());
        assert_eq!(barcode.kind(), BarcodeLookupEndpoint::KIND);

        let history = PriceHistoryEndpoint::request(&PriceHistoryParams::default());
        assert_eq!(history.kind(), PriceHistoryEndpoint::KIND);

        let recs = RecommendationsEndpoint::request(&RecommendationParams::default());
        assert_eq!(recs.kind(), RecommendationsEndpoint::KIND);
    }
}
