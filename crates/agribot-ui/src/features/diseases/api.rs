//! Disease endpoints.

use agribot_api_models::{
    Ack, Disease, DiseaseSpraysUpdate, DiseasesEnvelope, EntityId, Spray, SpraysEnvelope,
};

use crate::core::gateway::Failure;
use crate::features::diseases::logic::update_sprays_path;
use crate::services::api::ApiClient;

pub(crate) async fn fetch_diseases(client: &ApiClient) -> Result<Vec<Disease>, Failure> {
    let envelope: DiseasesEnvelope = client.get("disease/get-all").await?;
    Ok(envelope.diseases)
}

pub(crate) async fn fetch_sprays(client: &ApiClient) -> Result<Vec<Spray>, Failure> {
    let envelope: SpraysEnvelope = client.get("spray/get-all").await?;
    Ok(envelope.sprays)
}

pub(crate) async fn update_sprays(
    client: &ApiClient,
    id: EntityId,
    sprays: Vec<EntityId>,
) -> Result<Ack, Failure> {
    client
        .post_json(&update_sprays_path(id), &DiseaseSpraysUpdate { sprays })
        .await
}
