pub mod auth;
pub mod cache;
pub mod client;
pub mod portfolio;
pub mod transport;

pub use client::{ApiClient, RequestOptions};
pub use portfolio::search_endpoint;
pub use transport::{GlooTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
