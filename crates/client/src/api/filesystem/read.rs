use reqwest::{Client, RequestBuilder};

use super::options::{apply_options, OpenOption};
use crate::api::client::{ApiError, ApiRequest, ContentReader, Scope};

/// Fetch the content of a file. Closing the returned stream is up to the
/// caller.
#[derive(Debug, Clone)]
pub struct ReadRequest {
    pub path: String,
    pub options: Vec<OpenOption>,
}

impl ApiRequest for ReadRequest {
    type Response = ContentReader;

    fn build_request(self, scope: &Scope, client: &Client) -> Result<RequestBuilder, ApiError> {
        let full_url = scope.filesystem_url(&self.path)?;
        Ok(apply_options(client.get(full_url), &self.options))
    }
}
