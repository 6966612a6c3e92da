use common::filesystem::FilesystemNode;
use reqwest::{Body, Client, RequestBuilder};

use super::options::{apply_options, OpenOption};
use crate::api::client::{ApiError, ApiRequest, Scope};

/// Write content to a path.
///
/// The server is always told to create missing parent directories.
#[derive(Debug)]
pub struct PutRequest {
    pub path: String,
    pub body: Body,
    pub options: Vec<OpenOption>,
}

impl ApiRequest for PutRequest {
    type Response = FilesystemNode;

    fn build_request(self, scope: &Scope, client: &Client) -> Result<RequestBuilder, ApiError> {
        let full_url = scope.filesystem_url(&self.path)?;
        let request = client
            .put(full_url)
            .query(&[("make_parents", "true")])
            .body(self.body);
        Ok(apply_options(request, &self.options))
    }
}
