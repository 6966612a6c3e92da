use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder};

use crate::api::client::{ApiError, ApiRequest, Scope};

/// Move a node.
///
/// `from` is a full remote path and is sent as-is in the URL. `to` is a
/// scoped path; the scope prefix is added to it here.
#[derive(Debug, Clone)]
pub struct RenameRequest {
    pub from: String,
    pub to: String,
}

impl ApiRequest for RenameRequest {
    type Response = ();

    fn build_request(self, scope: &Scope, client: &Client) -> Result<RequestBuilder, ApiError> {
        let full_url = scope.filesystem_url(&self.from)?;
        let form = Form::new()
            .text("action", "rename")
            .text("target", scope.prefixed(&self.to));
        Ok(client.post(full_url).multipart(form))
    }
}
