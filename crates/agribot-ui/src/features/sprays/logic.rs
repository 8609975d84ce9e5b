//! Spray form validation and list filtering.
//!
//! # Design
//! - Keep form inputs as raw strings; trim and validate only on submit.
//! - The same form backs the create and edit dialogs.

use agribot_api_models::{Spray, SprayDraft};

use crate::core::search::matches_term;

/// Spray rows per page.
pub const PAGE_SIZE: usize = 10;

/// Editable spray fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SprayForm {
    /// Product name.
    pub name: String,
    /// Usage notes.
    pub description: String,
    /// Active ingredients.
    pub active_ingredients: String,
}

/// Validation failures for [`SprayForm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SprayFormError {
    /// At least one field is blank.
    #[error("Please fill in all fields.")]
    MissingFields,
}

impl SprayForm {
    /// Prefill the edit dialog.
    #[must_use]
    pub fn from_spray(spray: &Spray) -> Self {
        Self {
            name: spray.name.clone(),
            description: spray.description.clone(),
            active_ingredients: spray.active_ingredients.clone(),
        }
    }

    /// Validate and build the request body.
    ///
    /// # Errors
    ///
    /// Returns [`SprayFormError::MissingFields`] when any field is blank.
    pub fn to_draft(&self) -> Result<SprayDraft, SprayFormError> {
        let fields = [&self.name, &self.description, &self.active_ingredients];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(SprayFormError::MissingFields);
        }
        Ok(SprayDraft {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            active_ingredients: self.active_ingredients.trim().to_string(),
        })
    }
}

/// Sprays whose name contains `term`.
#[must_use]
pub fn filter_sprays(sprays: &[Spray], term: &str) -> Vec<Spray> {
    sprays
        .iter()
        .filter(|spray| matches_term(&spray.name, term))
        .cloned()
        .collect()
}

/// `POST` path updating a spray.
#[must_use]
pub fn update_path(id: i64) -> String {
    format!("spray/update/{id}")
}

/// `DELETE` path removing a spray.
#[must_use]
pub fn delete_path(id: i64) -> String {
    format!("spray/delete/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_requires_every_field() {
        let mut form = SprayForm {
            name: " Copper ".to_string(),
            description: "Broad spectrum".to_string(),
            active_ingredients: String::new(),
        };
        assert_eq!(form.to_draft(), Err(SprayFormError::MissingFields));
        form.active_ingredients = "Copper hydroxide".to_string();
        let draft = form.to_draft().unwrap_or_else(|err| panic!("{err}"));
        assert_eq!(draft.name, "Copper");
    }

    #[test]
    fn edit_form_round_trips_existing_values() {
        let spray = Spray {
            id: 3,
            name: "Neem".to_string(),
            description: "Organic".to_string(),
            active_ingredients: "Azadirachtin".to_string(),
            ..Spray::default()
        };
        let form = SprayForm::from_spray(&spray);
        assert_eq!(form.active_ingredients, "Azadirachtin");
        assert_eq!(update_path(spray.id), "spray/update/3");
        assert_eq!(delete_path(spray.id), "spray/delete/3");
    }

    #[test]
    fn filter_matches_names_only() {
        let sprays = vec![
            Spray {
                id: 1,
                name: "Copper Guard".to_string(),
                ..Spray::default()
            },
            Spray {
                id: 2,
                name: "Neem Oil".to_string(),
                description: "copper free".to_string(),
                ..Spray::default()
            },
        ];
        let ids: Vec<_> = filter_sprays(&sprays, "COPPER").iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
