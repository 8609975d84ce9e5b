//! Disease list filtering and spray lookups.

use agribot_api_models::{Disease, EntityId, Spray};

use crate::core::metrics::{VersionMetrics, version_metrics};
use crate::core::search::matches_term;

/// Disease rows per page.
pub const PAGE_SIZE: usize = 10;

/// Diseases whose name contains `term`.
#[must_use]
pub fn filter_diseases(diseases: &[Disease], term: &str) -> Vec<Disease> {
    diseases
        .iter()
        .filter(|disease| matches_term(&disease.name, term))
        .cloned()
        .collect()
}

/// Per-version metrics for the detail row.
#[must_use]
pub fn disease_metrics(disease: &Disease) -> Vec<VersionMetrics> {
    version_metrics(
        &disease.all_version,
        &disease.all_precision,
        &disease.all_recall,
        &disease.all_f1_score,
    )
}

/// Names of the sprays recommended for `disease`, in its order. Unknown ids
/// are skipped.
#[must_use]
pub fn spray_names<'a>(disease: &Disease, sprays: &'a [Spray]) -> Vec<&'a str> {
    disease
        .all_spray_ids
        .iter()
        .filter_map(|id| sprays.iter().find(|spray| spray.id == *id))
        .map(|spray| spray.name.as_str())
        .collect()
}

/// `POST` path replacing a disease's spray list.
#[must_use]
pub fn update_sprays_path(id: EntityId) -> String {
    format!("disease/update-sprays/{id}")
}

/// Value of the `search` parameter in a location query string such as
/// `?search=Early%20Blight`. Empty when absent or undecodable.
#[must_use]
pub fn search_param(query: &str) -> String {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "search")
        .and_then(|(_, value)| {
            urlencoding::decode(&value.replace('+', " "))
                .ok()
                .map(std::borrow::Cow::into_owned)
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spray(id: EntityId, name: &str) -> Spray {
        Spray {
            id,
            name: name.to_string(),
            ..Spray::default()
        }
    }

    #[test]
    fn spray_names_follow_disease_order_and_skip_unknown() {
        let disease = Disease {
            id: 1,
            all_spray_ids: vec![3, 9, 1],
            ..Disease::default()
        };
        let sprays = vec![spray(1, "Copper"), spray(3, "Neem")];
        assert_eq!(spray_names(&disease, &sprays), vec!["Neem", "Copper"]);
        assert_eq!(update_sprays_path(1), "disease/update-sprays/1");
    }

    #[test]
    fn search_param_is_decoded() {
        assert_eq!(search_param("?search=Early%20Blight"), "Early Blight");
        assert_eq!(search_param("?page=2&search=leaf+spot"), "leaf spot");
        assert_eq!(search_param(""), "");
        assert_eq!(search_param("?other=1"), "");
    }

    #[test]
    fn filter_matches_names() {
        let diseases = vec![
            Disease {
                id: 1,
                name: "Early Blight".to_string(),
                ..Disease::default()
            },
            Disease {
                id: 2,
                name: "Leaf Mold".to_string(),
                ..Disease::default()
            },
        ];
        let ids: Vec<_> = filter_diseases(&diseases, "blight").iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1]);
        assert!(disease_metrics(&diseases[0]).is_empty());
    }
}
