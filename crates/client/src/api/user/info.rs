use common::user::UserInfo;
use reqwest::{Client, RequestBuilder};

use crate::api::client::{ApiError, ApiRequest, Scope};

/// Fetch the account the client authenticates as
#[derive(Debug, Clone, Copy)]
pub struct UserInfoRequest;

impl ApiRequest for UserInfoRequest {
    type Response = UserInfo;

    fn build_request(self, scope: &Scope, client: &Client) -> Result<RequestBuilder, ApiError> {
        Ok(client.get(scope.user_url()?))
    }
}
