//! Model collection endpoints.

use agribot_api_models::{Ack, EntityId, ModelDraft, ModelVersion, ModelsEnvelope, Plant, PlantsEnvelope};

use crate::core::gateway::Failure;
use crate::features::model::logic::{ModelCategory, sort_newest_first};
use crate::services::api::ApiClient;

const PLANT_SUMMARY_PATH: &str = "plant/get-all-only?fields=id,image,name,latest_precision";

/// Everything the model page renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Catalogue {
    pub plants: Vec<Plant>,
    pub object_detection: Vec<ModelVersion>,
    pub stage_classification: Vec<ModelVersion>,
    pub segmentation: Vec<ModelVersion>,
}

impl Catalogue {
    pub(crate) fn models(&self, category: ModelCategory) -> &[ModelVersion] {
        match category {
            ModelCategory::ObjectDetection => &self.object_detection,
            ModelCategory::StageClassification => &self.stage_classification,
            ModelCategory::Segmentation => &self.segmentation,
        }
    }
}

async fn fetch_models(client: &ApiClient, category: ModelCategory) -> Result<Vec<ModelVersion>, Failure> {
    let envelope: ModelsEnvelope = client.get(&category.list_path()).await?;
    Ok(sort_newest_first(envelope.models))
}

/// Load plant summaries and every model collection concurrently.
pub(crate) async fn fetch_catalogue(client: &ApiClient) -> Result<Catalogue, Failure> {
    let (plants, object_detection, stage_classification, segmentation) = futures::try_join!(
        client.get::<PlantsEnvelope>(PLANT_SUMMARY_PATH),
        fetch_models(client, ModelCategory::ObjectDetection),
        fetch_models(client, ModelCategory::StageClassification),
        fetch_models(client, ModelCategory::Segmentation),
    )?;
    Ok(Catalogue {
        plants: plants.plants,
        object_detection,
        stage_classification,
        segmentation,
    })
}

pub(crate) async fn create_model(
    client: &ApiClient,
    category: ModelCategory,
    draft: &ModelDraft,
) -> Result<Ack, Failure> {
    client.post_json(&category.create_path(), draft).await
}

pub(crate) async fn delete_model(
    client: &ApiClient,
    category: ModelCategory,
    id: EntityId,
) -> Result<Ack, Failure> {
    client.delete(&category.delete_path(id)).await
}
