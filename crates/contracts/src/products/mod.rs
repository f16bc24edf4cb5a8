//! Parameters and response bodies of the `/products` API

pub mod dto;
pub mod params;

pub use dto::{
    BarcodeLookupResponse, PriceHistoryEntry, PriceHistoryResponse, Product,
    RecommendationsResponse, SearchResponse,
};
pub use params::{PriceHistoryParams, ProductRef, RecommendationParams, SearchParams};
