use bytes::Bytes;
use common::filesystem::{FilesystemNode, FilesystemPath};
use common::user::UserInfo;
use futures::{Stream, TryStreamExt};
use reqwest::{Response, StatusCode};

use super::ApiError;

/// Decoding of a successful response.
///
/// Implementations consume the body completely, except [`ContentReader`]
/// which hands the open body to the caller.
#[async_trait::async_trait]
pub trait ApiResponse: Sized + Send {
    async fn from_response(response: Response) -> Result<Self, ApiError>;
}

macro_rules! json_response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl ApiResponse for $ty {
                async fn from_response(response: Response) -> Result<Self, ApiError> {
                    Ok(response.json::<$ty>().await?)
                }
            }
        )*
    };
}

json_response!(FilesystemNode, FilesystemPath, UserInfo);

/// No body expected; whatever the server sent is drained.
#[async_trait::async_trait]
impl ApiResponse for () {
    async fn from_response(response: Response) -> Result<Self, ApiError> {
        response.bytes().await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ApiResponse for ContentReader {
    async fn from_response(response: Response) -> Result<Self, ApiError> {
        Ok(ContentReader { response })
    }
}

/// Open content stream of a file.
///
/// Owns the underlying connection until it is read to the end or dropped.
#[derive(Debug)]
pub struct ContentReader {
    response: Response,
}

impl ContentReader {
    /// `206 Partial Content` when a range was honored
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    pub fn content_length(&self) -> Option<u64> {
        self.response.content_length()
    }

    /// Next chunk of content, `None` at the end
    pub async fn chunk(&mut self) -> Result<Option<Bytes>, ApiError> {
        Ok(self.response.chunk().await?)
    }

    /// Read the remaining content into memory
    pub async fn bytes(self) -> Result<Bytes, ApiError> {
        Ok(self.response.bytes().await?)
    }

    pub fn into_stream(self) -> impl Stream<Item = Result<Bytes, ApiError>> + Send {
        self.response.bytes_stream().map_err(ApiError::from)
    }
}
