//! Plant list filtering and edit-form state.
//!
//! # Design
//! - The edit form is generic over the file handle so image bookkeeping can
//!   be exercised without a browser; the page instantiates it with
//!   `web_sys::File`.
//! - Submitting sends kept URLs as `existingImages` and new uploads as
//!   `images`, preserving the on-screen order within each group.

use agribot_api_models::{EntityId, Plant};

use crate::core::metrics::{VersionMetrics, version_metrics};
use crate::core::search::matches_term;

/// Plant rows per page.
pub const PAGE_SIZE: usize = 10;

/// Plants whose name contains `term`.
#[must_use]
pub fn filter_plants(plants: &[Plant], term: &str) -> Vec<Plant> {
    plants
        .iter()
        .filter(|plant| matches_term(&plant.name, term))
        .cloned()
        .collect()
}

/// Per-version metrics for the detail row.
#[must_use]
pub fn plant_metrics(plant: &Plant) -> Vec<VersionMetrics> {
    version_metrics(
        &plant.all_version,
        &plant.all_precision,
        &plant.all_recall,
        &plant.all_f1_score,
    )
}

/// Link from a plant's disease chip to the filtered disease list.
#[must_use]
pub fn disease_link(name: &str) -> String {
    format!("/diseases?search={}", urlencoding::encode(name))
}

/// `POST` path for the multipart plant update.
#[must_use]
pub fn update_path(id: EntityId) -> String {
    format!("plant/update/{id}")
}

/// `POST` path replacing a plant's disease list.
#[must_use]
pub fn update_diseases_path(id: EntityId) -> String {
    format!("plant/update-diseases/{id}")
}

/// Whether an upload with this MIME type is accepted as a plant image.
#[must_use]
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// One image tile in the edit dialog.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageSlot<F> {
    /// Already stored on the server.
    Existing(String),
    /// Picked locally, not yet uploaded.
    Added(F),
}

/// Edit dialog state.
#[derive(Clone, Debug, PartialEq)]
pub struct PlantForm<F> {
    /// Plant name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Images in display order.
    pub images: Vec<ImageSlot<F>>,
}

impl<F> PlantForm<F> {
    /// Prefill from a stored plant.
    #[must_use]
    pub fn from_plant(plant: &Plant) -> Self {
        Self {
            name: plant.name.clone(),
            description: plant.description.clone(),
            images: plant
                .all_images
                .iter()
                .cloned()
                .map(ImageSlot::Existing)
                .collect(),
        }
    }

    /// Queue an upload when its MIME type is an image; returns whether it
    /// was accepted.
    pub fn add_image(&mut self, file: F, mime: &str) -> bool {
        if !is_image(mime) {
            return false;
        }
        self.images.push(ImageSlot::Added(file));
        true
    }

    /// Drop the tile at `index`; out-of-range indices are ignored.
    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    /// URLs of stored images the user kept.
    #[must_use]
    pub fn existing_images(&self) -> Vec<&str> {
        self.images
            .iter()
            .filter_map(|slot| match slot {
                ImageSlot::Existing(url) => Some(url.as_str()),
                ImageSlot::Added(_) => None,
            })
            .collect()
    }

    /// Files waiting to be uploaded.
    #[must_use]
    pub fn added_files(&self) -> Vec<&F> {
        self.images
            .iter()
            .filter_map(|slot| match slot {
                ImageSlot::Added(file) => Some(file),
                ImageSlot::Existing(_) => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant() -> Plant {
        Plant {
            id: 4,
            name: "Tomato".to_string(),
            description: "Solanum".to_string(),
            all_images: vec!["a.png".to_string(), "b.png".to_string()],
            all_version: vec!["v1".to_string()],
            all_precision: vec![0.91],
            ..Plant::default()
        }
    }

    #[test]
    fn form_tracks_kept_and_added_images() {
        let mut form: PlantForm<&str> = PlantForm::from_plant(&plant());
        assert!(form.add_image("leaf.jpg", "image/jpeg"));
        assert!(!form.add_image("notes.pdf", "application/pdf"));
        form.remove_image(0);
        form.remove_image(42);
        assert_eq!(form.existing_images(), vec!["b.png"]);
        assert_eq!(form.added_files(), vec![&"leaf.jpg"]);
        assert_eq!(form.name, "Tomato");
    }

    #[test]
    fn links_and_paths() {
        assert_eq!(disease_link("Early Blight"), "/diseases?search=Early%20Blight");
        assert_eq!(update_path(4), "plant/update/4");
        assert_eq!(update_diseases_path(4), "plant/update-diseases/4");
    }

    #[test]
    fn filter_and_metrics() {
        let plants = vec![
            plant(),
            Plant {
                id: 5,
                name: "Lettuce".to_string(),
                ..Plant::default()
            },
        ];
        let ids: Vec<_> = filter_plants(&plants, "tom").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4]);
        let metrics = plant_metrics(&plants[0]);
        assert_eq!(metrics.len(), 1);
        assert!((metrics[0].precision - 0.91).abs() < f64::EPSILON);
    }
}
