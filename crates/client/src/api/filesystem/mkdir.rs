use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder};

use crate::api::client::{ApiError, ApiRequest, Scope};

/// Create a directory along with any missing ancestors. Succeeds when the
/// directory already exists.
#[derive(Debug, Clone)]
pub struct MkdirRequest {
    pub path: String,
}

impl ApiRequest for MkdirRequest {
    type Response = ();

    fn build_request(self, scope: &Scope, client: &Client) -> Result<RequestBuilder, ApiError> {
        let full_url = scope.filesystem_url(&self.path)?;
        let form = Form::new().text("action", "mkdirall");
        Ok(client.post(full_url).multipart(form))
    }
}
