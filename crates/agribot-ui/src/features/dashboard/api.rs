//! Dashboard data loading.

use agribot_api_models::{ActivitiesEnvelope, CountEnvelope, ModelsEnvelope};

use crate::core::gateway::Failure;
use crate::features::dashboard::logic::DashboardData;
use crate::features::model::logic::ModelCategory;
use crate::services::api::ApiClient;

/// Fetch every dashboard source concurrently; the first failure wins.
pub(crate) async fn fetch_dashboard(client: &ApiClient) -> Result<DashboardData, Failure> {
    let detection_path = format!("{}?count=5", ModelCategory::ObjectDetection.list_path());
    let stage_path = ModelCategory::StageClassification.list_path();
    let segmentation_path = ModelCategory::Segmentation.list_path();
    let (plants, diseases, detection, stage, segmentation, activities) = futures::try_join!(
        client.get::<CountEnvelope>("plant/count"),
        client.get::<CountEnvelope>("disease/count"),
        client.get::<ModelsEnvelope>(&detection_path),
        client.get::<ModelsEnvelope>(&stage_path),
        client.get::<ModelsEnvelope>(&segmentation_path),
        client.get::<ActivitiesEnvelope>("activity/get-all"),
    )?;
    Ok(DashboardData {
        plant_count: plants.count,
        disease_count: diseases.count,
        object_detection: detection.models,
        stage_classification: stage.models,
        segmentation: segmentation.models,
        activities: activities.activities,
    })
}
