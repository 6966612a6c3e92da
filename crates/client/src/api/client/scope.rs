use url::Url;

use super::ApiError;

/// Read-only addressing state shared by every request of one client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    api_url: Url,
    user_endpoint: String,
    path_prefix: String,
}

impl Scope {
    pub fn new(api_url: Url, user_endpoint: impl Into<String>, path_prefix: impl Into<String>) -> Self {
        Self {
            api_url,
            user_endpoint: user_endpoint.into(),
            path_prefix: path_prefix.into(),
        }
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Remote path every scoped path lives under, e.g. `/me/photos`
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// Same scope rooted at a different prefix
    pub fn with_path_prefix(&self, path_prefix: impl Into<String>) -> Self {
        Self {
            api_url: self.api_url.clone(),
            user_endpoint: self.user_endpoint.clone(),
            path_prefix: path_prefix.into(),
        }
    }

    /// Prepend the scope prefix to a scoped path
    pub fn prefixed(&self, path: &str) -> String {
        format!("{}{}", self.path_prefix, path)
    }

    /// URL of a filesystem node. The whole path is escaped as one segment,
    /// slashes included.
    pub fn filesystem_url(&self, path: &str) -> Result<Url, ApiError> {
        let url = format!(
            "{}/filesystem/{}",
            self.base(),
            urlencoding::encode(path)
        );
        Ok(Url::parse(&url)?)
    }

    /// URL of the account endpoint
    pub fn user_url(&self) -> Result<Url, ApiError> {
        Ok(Url::parse(&format!("{}{}", self.base(), self.user_endpoint))?)
    }

    fn base(&self) -> &str {
        self.api_url.as_str().trim_end_matches('/')
    }
}
