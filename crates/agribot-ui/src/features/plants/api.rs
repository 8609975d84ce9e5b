//! Plant endpoints.

use agribot_api_models::{
    Ack, DiseaseNamesEnvelope, EntityId, Plant, PlantDiseasesUpdate, PlantsEnvelope,
};
use web_sys::File;

use crate::core::gateway::Failure;
use crate::features::plants::logic::{PlantForm, update_diseases_path, update_path};
use crate::services::api::{ApiClient, Multipart};

/// Plants plus every known disease name, fetched together.
pub(crate) async fn fetch_plants(client: &ApiClient) -> Result<(Vec<Plant>, Vec<String>), Failure> {
    let (plants, names) = futures::try_join!(
        client.get::<PlantsEnvelope>("plant/get-all"),
        client.get::<DiseaseNamesEnvelope>("disease/get-all-names"),
    )?;
    Ok((plants.plants, names.diseases))
}

/// Multipart update: kept URLs as `existingImages`, new files as `images`.
pub(crate) async fn update_plant(
    client: &ApiClient,
    id: EntityId,
    form: &PlantForm<File>,
) -> Result<Ack, Failure> {
    let mut body = Multipart::new()?
        .text("name", form.name.trim())?
        .text("description", form.description.trim())?;
    for url in form.existing_images() {
        body = body.text("existingImages", url)?;
    }
    for file in form.added_files() {
        body = body.file("images", file)?;
    }
    client.post_form(&update_path(id), body.finish()).await
}

pub(crate) async fn update_diseases(
    client: &ApiClient,
    id: EntityId,
    diseases: Vec<String>,
) -> Result<Ack, Failure> {
    client
        .post_json(&update_diseases_path(id), &PlantDiseasesUpdate { diseases })
        .await
}
