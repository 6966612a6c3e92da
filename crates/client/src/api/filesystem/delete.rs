use reqwest::{Client, RequestBuilder};

use crate::api::client::{ApiError, ApiRequest, Scope};

/// Delete a node. A non-empty directory needs `recursive`.
#[derive(Debug, Clone)]
pub struct DeleteRequest {
    pub path: String,
    pub recursive: bool,
}

impl ApiRequest for DeleteRequest {
    type Response = ();

    fn build_request(self, scope: &Scope, client: &Client) -> Result<RequestBuilder, ApiError> {
        let full_url = scope.filesystem_url(&self.path)?;
        let mut request = client.delete(full_url);
        // Never sent as `false`
        if self.recursive {
            request = request.query(&[("recursive", "true")]);
        }
        Ok(request)
    }
}
