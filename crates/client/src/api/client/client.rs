use chrono::{DateTime, Utc};
use common::error::RemoteError;
use common::filesystem::{scope_prefix, FilesystemNode, FilesystemPath};
use common::user::UserInfo;
use reqwest::{Body, Client, Response};
use tracing::{debug, warn};

use super::error::ApiError;
use super::response::{ApiResponse, ContentReader};
use super::scope::Scope;
use super::ApiRequest;
use crate::api::filesystem::{
    DeleteRequest, MkdirRequest, OpenOption, PutRequest, ReadRequest, RenameRequest, StatRequest,
    UpdateRequest,
};
use crate::api::user::UserInfoRequest;
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct ApiClient {
    scope: Scope,
    api_key: Option<String>,
    client: Client,
}

impl ApiClient {
    /// Create a client scoped to the configured root folder
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let api_url = config.api_url()?;
        let client = Client::builder()
            .user_agent(concat!("pixelfs/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            scope: Scope::new(
                api_url,
                config.user_endpoint.clone(),
                scope_prefix(&config.root_folder_id, ""),
            ),
            api_key: config.api_key.clone(),
            client,
        })
    }

    /// A client sharing this one's connection pool and credentials, rooted at
    /// another path prefix
    pub fn with_path_prefix(&self, path_prefix: impl Into<String>) -> Self {
        Self {
            scope: self.scope.with_path_prefix(path_prefix),
            api_key: self.api_key.clone(),
            client: self.client.clone(),
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn path_prefix(&self) -> &str {
        self.scope.path_prefix()
    }

    /// Get the underlying HTTP client for custom requests
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    pub async fn call<T: ApiRequest>(&self, request: T) -> Result<T::Response, ApiError> {
        let mut request_builder = request.build_request(&self.scope, &self.client)?;
        if let Some(api_key) = &self.api_key {
            request_builder = request_builder.basic_auth("", Some(api_key));
        }

        let request = request_builder.build()?;
        debug!(method = %request.method(), url = %request.url(), "api request");

        let response = self.client.execute(request).await?;
        let response = Self::check_status(response).await?;
        <T::Response as ApiResponse>::from_response(response).await
    }

    /// Map a non-success response to an error. The body is read to the end
    /// either way it goes.
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await?;
        match RemoteError::from_json(&body) {
            Ok(err) => {
                debug!(status = %status, code = err.code(), "api error");
                Err(ApiError::Remote(err))
            }
            Err(source) => {
                warn!(status = %status, error = %source, "unparseable api error body");
                Err(ApiError::MalformedErrorBody { status, source })
            }
        }
    }

    // ==================== Filesystem operations ====================
    //
    // Paths are full remote paths; adding the scope prefix is up to the
    // caller, except for the rename target.

    /// Upload content, creating missing parent directories
    pub async fn put(
        &self,
        path: &str,
        body: impl Into<Body>,
        options: &[OpenOption],
    ) -> Result<FilesystemNode, ApiError> {
        self.call(PutRequest {
            path: path.to_string(),
            body: body.into(),
            options: options.to_vec(),
        })
        .await
    }

    /// Open the content of a file
    pub async fn read(&self, path: &str, options: &[OpenOption]) -> Result<ContentReader, ApiError> {
        self.call(ReadRequest {
            path: path.to_string(),
            options: options.to_vec(),
        })
        .await
    }

    pub async fn stat(&self, path: &str) -> Result<FilesystemPath, ApiError> {
        self.call(StatRequest {
            path: path.to_string(),
        })
        .await
    }

    pub async fn update(
        &self,
        path: &str,
        created: Option<DateTime<Utc>>,
        modified: Option<DateTime<Utc>>,
    ) -> Result<FilesystemNode, ApiError> {
        self.call(UpdateRequest {
            path: path.to_string(),
            created,
            modified,
        })
        .await
    }

    /// Create a directory and all missing ancestors
    pub async fn mkdir(&self, path: &str) -> Result<(), ApiError> {
        self.call(MkdirRequest {
            path: path.to_string(),
        })
        .await
    }

    /// Rename `from` to the scoped path `to`
    pub async fn rename(&self, from: &str, to: &str) -> Result<(), ApiError> {
        self.call(RenameRequest {
            from: from.to_string(),
            to: to.to_string(),
        })
        .await
    }

    pub async fn delete(&self, path: &str, recursive: bool) -> Result<(), ApiError> {
        self.call(DeleteRequest {
            path: path.to_string(),
            recursive,
        })
        .await
    }

    pub async fn user_info(&self) -> Result<UserInfo, ApiError> {
        self.call(UserInfoRequest).await
    }
}
