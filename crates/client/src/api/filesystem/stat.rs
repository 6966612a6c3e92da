use common::filesystem::FilesystemPath;
use reqwest::{Client, RequestBuilder};

use crate::api::client::{ApiError, ApiRequest, Scope};

/// Fetch node metadata, ancestors and children of a path.
///
/// Without the `stat` query the same URL returns file contents, so the flag
/// is always sent (its value is irrelevant).
#[derive(Debug, Clone)]
pub struct StatRequest {
    pub path: String,
}

impl ApiRequest for StatRequest {
    type Response = FilesystemPath;

    fn build_request(self, scope: &Scope, client: &Client) -> Result<RequestBuilder, ApiError> {
        let full_url = scope.filesystem_url(&self.path)?;
        Ok(client.get(full_url).query(&[("stat", "")]))
    }
}
