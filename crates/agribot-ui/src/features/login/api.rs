use agribot_api_models::{LoginRequest, LoginResponse};

use crate::core::gateway::Failure;
use crate::services::api::ApiClient;

/// Exchange credentials for a token and profile.
pub(crate) async fn login(client: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, Failure> {
    client.post_json("admin/login", request).await
}
