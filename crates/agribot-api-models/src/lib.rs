#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the AGRIBOT admin API.
//!
//! The remote API owns every schema; these types only describe the fields the
//! admin UI reads. Every field is lenient: a missing key or an explicit `null`
//! falls back to the field's default, extra keys are ignored, and numeric
//! metrics accept either JSON numbers or numeric strings since the server
//! emits both.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identifier type used by every server-side record.
pub type EntityId = i64;

/// Role string the API assigns to administrator accounts.
pub const ADMIN_ROLE: &str = "Admin";

/// Social profile links attached to a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SocialLinks {
    /// Facebook profile URL.
    #[serde(deserialize_with = "null_default")]
    pub facebook: String,
    /// `LinkedIn` profile URL.
    #[serde(deserialize_with = "null_default")]
    pub linkedin: String,
    /// GitHub profile URL.
    #[serde(deserialize_with = "null_default")]
    pub github: String,
    /// Contact e-mail shown next to the links.
    #[serde(deserialize_with = "null_default", skip_serializing_if = "String::is_empty")]
    pub email: String,
}

/// Account record returned by `get-all-users`, `admin/login` and `admin/get-user`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    /// Server identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: EntityId,
    /// Display name used by the accounts table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Full legal name used in messages and feedback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Login handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Contact e-mail.
    #[serde(deserialize_with = "null_default")]
    pub email: String,
    /// Role label (`Admin` for administrators).
    #[serde(deserialize_with = "null_default")]
    pub role: String,
    /// Avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Free-form biography.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Social links.
    #[serde(deserialize_with = "null_default")]
    pub social_links: SocialLinks,
    /// Robot prototype identifier bound to the account.
    #[serde(rename = "prototypeID", skip_serializing_if = "Option::is_none")]
    pub prototype_id: Option<String>,
    /// Robot configuration report (opaque JSON).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Whether the account carries the administrator role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    /// Best available human-readable name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.name.as_deref())
            .or(self.username.as_deref())
            .unwrap_or(self.email.as_str())
    }
}

/// Plant record returned by `plant/get-all`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Plant {
    /// Server identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: EntityId,
    /// Plant name.
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Description text.
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    /// Cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Every image URL stored for the plant.
    #[serde(deserialize_with = "null_default")]
    pub all_images: Vec<String>,
    /// Names of diseases linked to the plant.
    #[serde(deserialize_with = "null_default")]
    pub all_disease: Vec<String>,
    /// Model versions the metrics below belong to.
    #[serde(deserialize_with = "null_default")]
    pub all_version: Vec<String>,
    /// Precision per model version.
    #[serde(deserialize_with = "lenient_f64_list")]
    pub all_precision: Vec<f64>,
    /// Recall per model version.
    #[serde(deserialize_with = "lenient_f64_list")]
    pub all_recall: Vec<f64>,
    /// F1 score per model version.
    #[serde(deserialize_with = "lenient_f64_list")]
    pub all_f1_score: Vec<f64>,
    /// Precision of the latest model version.
    #[serde(deserialize_with = "lenient_f64_opt")]
    pub latest_precision: Option<f64>,
    /// Creation timestamp.
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Update timestamp.
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Disease record returned by `disease/get-all`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Disease {
    /// Server identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: EntityId,
    /// Disease name.
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Description text.
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    /// Every image URL stored for the disease.
    #[serde(deserialize_with = "null_default")]
    pub all_images: Vec<String>,
    /// Spray identifiers recommended for the disease.
    #[serde(deserialize_with = "null_default")]
    pub all_spray_ids: Vec<EntityId>,
    /// Model versions the metrics below belong to.
    #[serde(deserialize_with = "null_default")]
    pub all_version: Vec<String>,
    /// Precision per model version.
    #[serde(deserialize_with = "lenient_f64_list")]
    pub all_precision: Vec<f64>,
    /// Recall per model version.
    #[serde(deserialize_with = "lenient_f64_list")]
    pub all_recall: Vec<f64>,
    /// F1 score per model version.
    #[serde(deserialize_with = "lenient_f64_list")]
    pub all_f1_score: Vec<f64>,
}

/// Spray formulation record returned by `spray/get-all`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Spray {
    /// Server identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: EntityId,
    /// Spray name.
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Description text.
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    /// Active ingredient list as free text.
    #[serde(deserialize_with = "null_default")]
    pub active_ingredients: String,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Update timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Author block embedded in feedback entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedbackAuthor {
    /// Author identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: EntityId,
    /// Author full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Author e-mail.
    #[serde(deserialize_with = "null_default")]
    pub email: String,
}

/// User feedback record returned by `feedback/get-all`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Feedback {
    /// Server identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: EntityId,
    /// Short title.
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    /// Body text.
    #[serde(deserialize_with = "null_default")]
    pub message: String,
    /// Rating per category (1-5).
    #[serde(deserialize_with = "null_default")]
    pub ratings: BTreeMap<String, f64>,
    /// Author of the feedback.
    #[serde(deserialize_with = "null_default", rename = "User")]
    pub user: FeedbackAuthor,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Update timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// System log record returned by `log/get-all`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogEntry {
    /// Server identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: EntityId,
    /// Severity label (`info`, `warn`, `error`, ...).
    #[serde(deserialize_with = "null_default")]
    pub level: String,
    /// Log message.
    #[serde(deserialize_with = "null_default")]
    pub message: String,
    /// Emitting component, if recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Structured context attached to the entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Trained model version returned by the three model collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelVersion {
    /// Server identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: EntityId,
    /// Version label.
    #[serde(deserialize_with = "null_default")]
    pub version: String,
    /// Release notes.
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    /// Download URL for the weights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_link: Option<String>,
    /// Precision (0-1).
    #[serde(deserialize_with = "lenient_f64_opt")]
    pub precision: Option<f64>,
    /// Recall (0-1).
    #[serde(deserialize_with = "lenient_f64_opt")]
    pub recall: Option<f64>,
    /// F1 score (0-1).
    #[serde(deserialize_with = "lenient_f64_opt")]
    pub f1: Option<f64>,
    /// mAP at `IoU` 0.5 (0-1).
    #[serde(rename = "mAP50", deserialize_with = "lenient_f64_opt")]
    pub map50: Option<f64>,
    /// mAP averaged over `IoU` 0.5-0.95 (0-1).
    #[serde(rename = "mAP50_95", deserialize_with = "lenient_f64_opt")]
    pub map50_95: Option<f64>,
    /// Top-1 accuracy for classification models (0-1).
    #[serde(deserialize_with = "lenient_f64_opt")]
    pub accuracy_top1: Option<f64>,
    /// Top-5 accuracy for classification models (0-1).
    #[serde(deserialize_with = "lenient_f64_opt")]
    pub accuracy_top5: Option<f64>,
    /// Creation timestamp.
    #[serde(rename = "createdAt", alias = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Repository activity entry returned by `activity/get-all`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Activity {
    /// Activity kind (`robot-update`, `object-detection-model`, ...).
    #[serde(deserialize_with = "null_default", rename = "type")]
    pub kind: String,
    /// Repository the activity came from.
    #[serde(deserialize_with = "null_default")]
    pub repo: String,
    /// Description of the change.
    #[serde(deserialize_with = "null_default")]
    pub details: String,
    /// Raw ISO-8601 creation timestamp.
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
}

/// Notification record returned by `notification/user/<id>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Notification {
    /// Server identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: EntityId,
    /// Notification title.
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    /// Notification body.
    #[serde(deserialize_with = "null_default")]
    pub message: String,
    /// Category (`info`, `warning`, `alert`, ...).
    #[serde(deserialize_with = "null_default", rename = "type")]
    pub kind: String,
    /// Whether the notification was already read.
    #[serde(deserialize_with = "null_default")]
    pub is_read: bool,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// `{ count }` envelope returned by the count endpoints.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CountEnvelope {
    /// Number of records.
    #[serde(deserialize_with = "null_default")]
    pub count: u64,
}

/// `{ plants }` envelope.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlantsEnvelope {
    /// Plant records.
    #[serde(deserialize_with = "null_default")]
    pub plants: Vec<Plant>,
}

/// `{ diseases }` envelope returned by `disease/get-all`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiseasesEnvelope {
    /// Disease records.
    #[serde(deserialize_with = "null_default")]
    pub diseases: Vec<Disease>,
}

/// `{ diseases }` envelope returned by `disease/get-all-names`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DiseaseNamesEnvelope {
    /// Disease names.
    #[serde(deserialize_with = "null_default")]
    pub diseases: Vec<String>,
}

/// `{ sprays }` envelope.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SpraysEnvelope {
    /// Spray records.
    #[serde(deserialize_with = "null_default")]
    pub sprays: Vec<Spray>,
}

/// `{ users }` envelope.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct UsersEnvelope {
    /// Account records.
    #[serde(deserialize_with = "null_default")]
    pub users: Vec<User>,
}

/// `{ user }` envelope returned by profile reads and updates.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserEnvelope {
    /// Account record.
    #[serde(deserialize_with = "null_default")]
    pub user: User,
    /// Optional server message.
    pub message: Option<String>,
}

/// `{ feedbacks }` envelope.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeedbackEnvelope {
    /// Feedback records.
    #[serde(deserialize_with = "null_default")]
    pub feedbacks: Vec<Feedback>,
}

/// `{ logs }` envelope.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogsEnvelope {
    /// Log records.
    #[serde(deserialize_with = "null_default")]
    pub logs: Vec<LogEntry>,
}

/// `{ models }` envelope shared by the three model collections.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelsEnvelope {
    /// Model versions, newest first.
    #[serde(deserialize_with = "null_default")]
    pub models: Vec<ModelVersion>,
}

/// `{ activities }` envelope.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ActivitiesEnvelope {
    /// Activity entries, newest first.
    #[serde(deserialize_with = "null_default")]
    pub activities: Vec<Activity>,
}

/// `{ notifications }` envelope.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationsEnvelope {
    /// Notifications for the user.
    #[serde(deserialize_with = "null_default")]
    pub notifications: Vec<Notification>,
}

/// Successful `admin/login` response.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: Option<String>,
    /// Authenticated account.
    #[serde(deserialize_with = "null_default")]
    pub user: User,
    /// Optional server message.
    pub message: Option<String>,
}

/// Generic `{ message }` acknowledgement returned by mutations.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Ack {
    /// Optional server message.
    pub message: Option<String>,
}

/// Body for `admin/login`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account e-mail.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Body for `spray/create`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SprayDraft {
    /// Spray name.
    pub name: String,
    /// Description text.
    pub description: String,
    /// Active ingredient list.
    pub active_ingredients: String,
}

/// Body for `plant/update-diseases/<id>`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlantDiseasesUpdate {
    /// Disease names linked to the plant.
    pub diseases: Vec<String>,
}

/// Body for `disease/update-sprays/<id>`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DiseaseSpraysUpdate {
    /// Spray identifiers linked to the disease.
    pub sprays: Vec<EntityId>,
}

/// Body for `feedback/send-message`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    /// Recipient account.
    pub user_id: EntityId,
    /// Raw message as typed by the admin.
    pub message: String,
    /// Rendered HTML e-mail.
    pub html: String,
}

/// Body for `admin/update-social/<id>`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinksUpdate {
    /// Updated links.
    pub social_links: SocialLinks,
}

/// Body for `<model-collection>/create`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelDraft {
    /// Version label.
    pub version: String,
    /// Release notes.
    pub description: String,
    /// Name of the uploaded weights file.
    pub file: String,
    /// Parsed metrics document.
    pub file_metrics: Value,
}

fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_f64_list<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .iter()
        .map(|value| value_to_f64(value).unwrap_or(0.0))
        .collect())
}

fn lenient_f64_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(value_to_f64))
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plant_metrics_accept_strings_and_numbers() {
        let plant: Plant = serde_json::from_value(json!({
            "id": 4,
            "name": "Lettuce",
            "all_precision": ["0.91", 0.88, null],
            "all_recall": [0.7],
            "latest_precision": "0.93",
        }))
        .expect("plant decodes");
        assert_eq!(plant.all_precision, vec![0.91, 0.88, 0.0]);
        assert_eq!(plant.all_recall, vec![0.7]);
        assert!(plant.all_f1_score.is_empty());
        assert_eq!(plant.latest_precision, Some(0.93));
        assert!(plant.all_images.is_empty());
    }

    #[test]
    fn user_reads_camel_case_fields() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "fullName": "Ana Cruz",
            "email": "ana@example.com",
            "role": "Admin",
            "socialLinks": { "github": "https://github.com/ana" },
            "prototypeID": "AGB-01",
        }))
        .expect("user decodes");
        assert!(user.is_admin());
        assert_eq!(user.display_name(), "Ana Cruz");
        assert_eq!(user.social_links.github, "https://github.com/ana");
        assert_eq!(user.prototype_id.as_deref(), Some("AGB-01"));
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let user = User {
            email: "ops@example.com".into(),
            ..User::default()
        };
        assert_eq!(user.display_name(), "ops@example.com");
        assert!(!user.is_admin());
    }

    #[test]
    fn feedback_reads_nested_author() {
        let feedback: Feedback = serde_json::from_value(json!({
            "id": 1,
            "ratings": { "accuracy": 4, "usability": 5 },
            "User": { "fullName": "Ben Reyes" },
            "updatedAt": "2025-03-01T08:00:00Z",
        }))
        .expect("feedback decodes");
        assert_eq!(feedback.user.full_name.as_deref(), Some("Ben Reyes"));
        assert_eq!(feedback.ratings.get("usability"), Some(&5.0));
        assert!(feedback.updated_at.is_some());
    }

    #[test]
    fn model_version_maps_map_fields() {
        let model: ModelVersion = serde_json::from_value(json!({
            "id": 3,
            "version": "v1.2",
            "mAP50": 0.81,
            "mAP50_95": "0.55",
        }))
        .expect("model decodes");
        assert_eq!(model.map50, Some(0.81));
        assert_eq!(model.map50_95, Some(0.55));
        assert_eq!(model.precision, None);
    }

    #[test]
    fn explicit_nulls_fall_back_to_defaults() {
        let models: ModelsEnvelope = serde_json::from_value(json!({
            "models": [{ "id": 1, "version": "v1", "description": null }],
        }))
        .expect("models decode");
        assert_eq!(models.models[0].version, "v1");
        assert_eq!(models.models[0].description, "");

        let sprays: SpraysEnvelope = serde_json::from_value(json!({
            "sprays": [{ "id": 2, "name": "Neem", "description": null, "activeIngredients": null }],
        }))
        .expect("sprays decode");
        assert_eq!(sprays.sprays[0].name, "Neem");
        assert!(sprays.sprays[0].active_ingredients.is_empty());

        let users: UsersEnvelope = serde_json::from_value(json!({
            "users": [{ "id": 3, "email": null, "role": null, "socialLinks": null }],
        }))
        .expect("users decode");
        assert_eq!(users.users[0].social_links, SocialLinks::default());
        assert_eq!(users.users[0].display_name(), "");

        let plants: PlantsEnvelope = serde_json::from_value(json!({
            "plants": [{ "id": 4, "name": null, "description": null, "all_images": null, "all_disease": null }],
        }))
        .expect("plants decode");
        assert!(plants.plants[0].all_images.is_empty());

        let diseases: DiseasesEnvelope = serde_json::from_value(json!({
            "diseases": [{ "id": 5, "name": null, "all_spray_ids": null }],
        }))
        .expect("diseases decode");
        assert!(diseases.diseases[0].all_spray_ids.is_empty());

        let feedback: FeedbackEnvelope = serde_json::from_value(json!({
            "feedbacks": [{ "id": 6, "title": null, "ratings": null, "User": null }],
        }))
        .expect("feedback decodes");
        assert!(feedback.feedbacks[0].ratings.is_empty());

        let activities: ActivitiesEnvelope = serde_json::from_value(json!({
            "activities": [{ "type": null, "repo": null, "details": null, "createdAt": null }],
        }))
        .expect("activities decode");
        assert!(activities.activities[0].created_at.is_empty());

        let notifications: NotificationsEnvelope = serde_json::from_value(json!({
            "notifications": [{ "id": 7, "title": null, "message": null, "isRead": null }],
        }))
        .expect("notifications decode");
        assert!(!notifications.notifications[0].is_read);

        let logs: LogsEnvelope = serde_json::from_value(json!({
            "logs": [{ "id": 8, "level": null, "message": null }],
        }))
        .expect("logs decode");
        assert!(logs.logs[0].level.is_empty());

        let empty: PlantsEnvelope = serde_json::from_value(json!({ "plants": null })).expect("null list decodes");
        assert!(empty.plants.is_empty());
        let count: CountEnvelope = serde_json::from_value(json!({ "count": null })).expect("null count decodes");
        assert_eq!(count.count, 0);
    }

    #[test]
    fn request_bodies_use_api_casing() {
        let draft = SprayDraft {
            name: "Copper".into(),
            description: "Fungicide".into(),
            active_ingredients: "Copper hydroxide".into(),
        };
        let value = serde_json::to_value(&draft).expect("serialize");
        assert_eq!(value["activeIngredients"], "Copper hydroxide");

        let message = MessageRequest {
            user_id: 9,
            message: "hi".into(),
            html: "<p>hi</p>".into(),
        };
        let value = serde_json::to_value(&message).expect("serialize");
        assert_eq!(value["userId"], 9);
    }
}
