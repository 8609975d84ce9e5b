//! Account endpoints.

use agribot_api_models::{Ack, MessageRequest, User, UsersEnvelope};

use crate::core::gateway::Failure;
use crate::services::api::ApiClient;

pub(crate) async fn fetch_users(client: &ApiClient) -> Result<Vec<User>, Failure> {
    let envelope: UsersEnvelope = client.get("get-all-users").await?;
    Ok(envelope.users)
}

pub(crate) async fn send_message(client: &ApiClient, request: &MessageRequest) -> Result<Ack, Failure> {
    client.post_json("feedback/send-message", request).await
}
