//! HTTP client for the OzGroceries products API
//!
//! One method per backend operation plus [`GroceryApiClient::execute`] for the
//! console, which only needs the raw JSON. Every call performs exactly one
//! round-trip through the transport; failures come back as [`ApiError`]
//! values, never as panics.

use async_trait::async_trait;
use contracts::products::{
    BarcodeLookupResponse, PriceHistoryParams, PriceHistoryResponse, RecommendationParams,
    RecommendationsResponse, SearchParams, SearchResponse,
};
use contracts::request::{
    BarcodeLookupEndpoint, Endpoint, PriceHistoryEndpoint, RecommendationsEndpoint,
    SearchEndpoint,
};
use contracts::{ApiError, ApiRequest, ApiResult, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Browser `fetch` transport
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, String> {
        let builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        let status = response.status();
        let body = if response.ok() {
            response
                .text()
                .await
                .map_err(|e| format!("Failed to read response: {}", e))?
        } else {
            // Only the status matters for error responses
            response.text().await.unwrap_or_default()
        };

        Ok(HttpResponse { status, body })
    }
}

/// Client used by the console in the browser
pub type ConsoleClient = GroceryApiClient<FetchTransport>;

#[derive(Debug, Clone)]
pub struct GroceryApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: HttpTransport> GroceryApiClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn build_request(&self, request: &ApiRequest) -> HttpRequest {
        HttpRequest {
            method: request.kind().method(),
            url: request.url(&self.base_url),
        }
    }

    /// Dispatch a console request and return the body as untyped JSON
    pub async fn execute(&self, request: &ApiRequest) -> ApiResult<Value> {
        self.fetch(request).await
    }

    /// Call an endpoint with typed parameters and response
    pub async fn call<E: Endpoint>(&self, params: &E::Params) -> ApiResult<E::Response> {
        self.fetch(&E::request(params)).await
    }

    pub async fn search_products(&self, params: &SearchParams) -> ApiResult<SearchResponse> {
        self.call::<SearchEndpoint>(params).await
    }

    pub async fn barcode_lookup(&self, barcode: &str) -> ApiResult<BarcodeLookupResponse> {
        self.call::<BarcodeLookupEndpoint>(&barcode.to_string()).await
    }

    pub async fn price_history(
        &self,
        params: &PriceHistoryParams,
    ) -> ApiResult<PriceHistoryResponse> {
        self.call::<PriceHistoryEndpoint>(params).await
    }

    pub async fn recommendations(
        &self,
        params: &RecommendationParams,
    ) -> ApiResult<RecommendationsResponse> {
        self.call::<RecommendationsEndpoint>(params).await
    }

    async fn fetch<R: DeserializeOwned>(&self, request: &ApiRequest) -> ApiResult<R> {
        let http_request = self.build_request(request);
        log::debug!("{} {}", http_request.method.as_str(), http_request.url);

        let response = self.transport.send(&http_request).await.map_err(|e| {
            log::warn!("{} failed: {}", http_request.url, e);
            ApiError::Network(e)
        })?;

        log::debug!("{} -> {}", http_request.url, response.status);
        parse_json(response)
    }
}

/// Map a response to its JSON body or a normalized error
pub fn parse_json<R: DeserializeOwned>(response: HttpResponse) -> ApiResult<R> {
    if !response.is_success() {
        return Err(ApiError::Transport {
            status: response.status,
        });
    }
    serde_json::from_str(&response.body)
        .map_err(|e| ApiError::Network(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use contracts::products::ProductRef;
    use contracts::EndpointKind;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-memory transport answering every call with the same canned reply
    #[derive(Clone)]
    pub(crate) struct MockTransport {
        reply: Result<HttpResponse, String>,
        pub calls: Rc<RefCell<Vec<HttpRequest>>>,
    }

    impl MockTransport {
        pub fn json(status: u16, body: Value) -> Self {
            Self::reply(Ok(HttpResponse::new(status, body.to_string())))
        }

        pub fn failing(message: &str) -> Self {
            Self::reply(Err(message.to_string()))
        }

        pub fn reply(reply: Result<HttpResponse, String>) -> Self {
            Self {
                reply,
                calls: Rc::new(RefCell::new(Vec::new())),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }

        pub fn last_url(&self) -> Option<String> {
            self.calls.borrow().last().map(|r| r.url.clone())
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for MockTransport {
        async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, String> {
            self.calls.borrow_mut().push(request.clone());
            self.reply.clone()
        }
    }

    fn client(transport: &MockTransport) -> GroceryApiClient<MockTransport> {
        GroceryApiClient::new("http://localhost:3000/", transport.clone())
    }

    #[test]
    fn test_build_request_strips_trailing_slash() {
        let transport = MockTransport::failing("unused");
        let request = client(&transport).build_request(&ApiRequest::BarcodeLookup {
            barcode: "9300633000034".into(),
        });
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "http://localhost:3000/products/barcode/9300633000034");
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn test_parse_json_maps_status_and_body() {
        let ok: Value = parse_json(HttpResponse::new(200, r#"{"total":0}"#)).unwrap();
        assert_eq!(ok, json!({"total": 0}));

        let err = parse_json::<Value>(HttpResponse::new(404, "not found")).unwrap_err();
        assert_eq!(err, ApiError::Transport { status: 404 });

        let err = parse_json::<Value>(HttpResponse::new(200, "<html>")).unwrap_err();
        assert!(matches!(err, ApiError::Network(ref m) if m.starts_with("Failed to parse response")));
    }

    #[tokio::test]
    async fn test_search_products_sends_one_request() {
        let payload = json!({
            "products": [],
            "total": 0,
            "page": 1,
            "limit": 5,
            "has_next": false,
            "has_prev": false,
            "filters": {}
        });
        let transport = MockTransport::json(200, payload);
        let params = SearchParams {
            q: Some("milk".into()),
            limit: Some(5),
            ..SearchParams::default()
        };

        let response = client(&transport).search_products(&params).await.unwrap();

        assert_eq!(response.limit, 5);
        assert_eq!(transport.call_count(), 1);
        assert_eq!(
            transport.last_url().unwrap(),
            "http://localhost:3000/products/search?q=milk&limit=5"
        );
    }

    #[tokio::test]
    async fn test_barcode_lookup_status_error() {
        let transport = MockTransport::json(500, json!({"error": "boom"}));
        let err = client(&transport)
            .barcode_lookup("9300633000034")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_price_history_network_failure() {
        let transport = MockTransport::failing("connection refused");
        let params = PriceHistoryParams {
            product: ProductRef::by_id(123),
            days: Some(30),
            ..PriceHistoryParams::default()
        };
        let err = client(&transport).price_history(&params).await.unwrap_err();
        assert_eq!(err, ApiError::Network("connection refused".into()));
        assert_eq!(
            transport.last_url().unwrap(),
            "http://localhost:3000/products/price-history?product_id=123&days=30"
        );
    }

    #[tokio::test]
    async fn test_recommendations_typed_response() {
        let transport = MockTransport::json(
            200,
            json!({
                "product": {"id": 123, "name": "Example Milk 2L"},
                "recommendations": [{"id": 124, "name": "Other Milk 2L", "price": "3.10"}],
                "strategy": "similar",
                "total_recommendations": 1
            }),
        );
        let params = RecommendationParams {
            product: ProductRef::by_id(123),
            ..RecommendationParams::default()
        };
        let response = client(&transport).recommendations(&params).await.unwrap();
        assert_eq!(response.product.id, 123);
        assert_eq!(response.recommendations[0].price, "3.10");
    }

    #[tokio::test]
    async fn test_execute_returns_raw_json_for_every_kind() {
        for kind in EndpointKind::all() {
            let transport = MockTransport::json(200, json!({"kind": kind.path()}));
            let request = ApiRequest::from_form(kind, &Default::default());
            let value = client(&transport).execute(&request).await.unwrap();
            assert_eq!(value["kind"], kind.path());
            assert_eq!(transport.call_count(), 1);
        }
    }
}
