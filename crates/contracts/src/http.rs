//! HTTP request/response as plain data, and the transport seam
//!
//! Request building and response parsing never touch the network; an
//! [`HttpTransport`] performs the single round-trip in between. The browser
//! build implements it over `fetch`, tests implement it in memory.

use crate::enums::HttpMethod;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL including the query string
    pub url: String,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
        }
    }

    /// Raw query part after `?`, if any
    pub fn query(&self) -> Option<&str> {
        self.url.split_once('?').map(|(_, q)| q)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes exactly one HTTP round-trip per call
///
/// `Err` carries the message of a request that produced no response at all
/// (DNS, refused connection, CORS rejection). Non-2xx responses are `Ok`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_part() {
        let req = HttpRequest::get("http://localhost:3000/products/search?q=milk&limit=5");
        assert_eq!(req.query(), Some("q=milk&limit=5"));
        assert_eq!(HttpRequest::get("http://localhost:3000/x").query(), None);
    }

    #[test]
    fn test_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(304, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }
}
