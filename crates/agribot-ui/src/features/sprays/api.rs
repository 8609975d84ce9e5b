//! Spray endpoints.

use agribot_api_models::{Ack, EntityId, Spray, SprayDraft, SpraysEnvelope};

use crate::core::gateway::Failure;
use crate::features::sprays::logic::{delete_path, update_path};
use crate::services::api::ApiClient;

pub(crate) async fn fetch_sprays(client: &ApiClient) -> Result<Vec<Spray>, Failure> {
    let envelope: SpraysEnvelope = client.get("spray/get-all").await?;
    Ok(envelope.sprays)
}

/// Create when `id` is `None`, update otherwise.
pub(crate) async fn save_spray(
    client: &ApiClient,
    id: Option<EntityId>,
    draft: &SprayDraft,
) -> Result<Ack, Failure> {
    match id {
        Some(id) => client.post_json(&update_path(id), draft).await,
        None => client.post_json("spray/create", draft).await,
    }
}

pub(crate) async fn delete_spray(client: &ApiClient, id: EntityId) -> Result<Ack, Failure> {
    client.delete(&delete_path(id)).await
}
