use chrono::{DateTime, Timelike, Utc};
use common::filesystem::FilesystemNode;
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder};

use crate::api::client::{ApiError, ApiRequest, Scope};

/// Change node metadata. Unset fields are left out of the form entirely.
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub path: String,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

/// RFC 3339 in UTC with up to nanosecond precision. Trailing zeros of the
/// fraction are dropped, and so is the dot on whole seconds.
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    let mut out = time.format("%Y-%m-%dT%H:%M:%S").to_string();
    let nanos = time.nanosecond();
    if nanos > 0 {
        let fraction = format!("{nanos:09}");
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out.push('Z');
    out
}

impl UpdateRequest {
    /// Form fields in the order they are sent
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("action", "update".to_string())];
        if let Some(created) = &self.created {
            fields.push(("created", format_timestamp(created)));
        }
        if let Some(modified) = &self.modified {
            fields.push(("modified", format_timestamp(modified)));
        }
        fields
    }
}

impl ApiRequest for UpdateRequest {
    type Response = FilesystemNode;

    fn build_request(self, scope: &Scope, client: &Client) -> Result<RequestBuilder, ApiError> {
        let full_url = scope.filesystem_url(&self.path)?;
        let form = self
            .fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));
        Ok(client.post(full_url).multipart(form))
    }
}
