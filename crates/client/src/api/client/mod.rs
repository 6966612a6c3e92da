mod client;
mod error;
mod response;
mod scope;

use reqwest::{Client, RequestBuilder};

pub use client::ApiClient;
pub use error::ApiError;
pub use response::{ApiResponse, ContentReader};
pub use scope::Scope;

/// A single request/response exchange with the API.
///
/// Each operation builds its own request against the client's scope; the
/// client sends it, maps failures and decodes the body as `Response`.
pub trait ApiRequest {
    type Response: ApiResponse;

    fn build_request(self, scope: &Scope, client: &Client) -> Result<RequestBuilder, ApiError>;
}
