//! Account filtering, message composition, and robot config reports.
//!
//! # Design
//! - Editor offsets are UTF-16 code units, matching `selectionStart` and
//!   `selectionEnd` on a `<textarea>`; edits convert them to byte offsets.
//! - The e-mail body escapes the recipient name; the message itself is the
//!   admin's HTML and is embedded as written.
//! - Robot configs are decoded leniently; missing sections render empty.

use std::collections::BTreeMap;

use agribot_api_models::{ADMIN_ROLE, User};
use serde::Deserialize;
use serde_json::Value;

use crate::core::search::matches_term;

/// Accounts per page.
pub const PAGE_SIZE: usize = 10;
/// File name offered when downloading a config report.
pub const REPORT_FILE_NAME: &str = "agribot-report.json";

/// Canned message templates: `(label, body)`.
pub const TEMPLATES: [(&str, &str); 4] = [
    (
        "Thank You",
        "Thank you for your valuable feedback! We truly appreciate your time and input.",
    ),
    (
        "Follow-Up",
        "We wanted to follow up regarding your recent feedback to ensure everything is going smoothly.",
    ),
    (
        "Apology",
        "We sincerely apologize for any inconvenience you may have experienced and appreciate your understanding.",
    ),
    (
        "Information Request",
        "We need a bit more information regarding your feedback to assist you effectively.",
    ),
];

/// Whether `user` holds the admin role.
#[must_use]
pub fn is_admin(user: &User) -> bool {
    user.role == ADMIN_ROLE
}

/// Users on the requested side of the admin toggle whose name or e-mail
/// contains `term`.
#[must_use]
pub fn filter_accounts(users: &[User], term: &str, admins: bool) -> Vec<User> {
    users
        .iter()
        .filter(|user| is_admin(user) == admins)
        .filter(|user| matches_term(user.display_name(), term) || matches_term(&user.email, term))
        .cloned()
        .collect()
}

/// Validation failures for the message dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    /// The editor is blank.
    #[error("Message cannot be empty")]
    Empty,
}

/// Reject blank messages.
///
/// # Errors
///
/// Returns [`MessageError::Empty`] when `message` is only whitespace.
pub fn validate_message(message: &str) -> Result<&str, MessageError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        Err(MessageError::Empty)
    } else {
        Ok(trimmed)
    }
}

/// Result of an editor operation: the new text and where the caret goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    /// Full editor text after the change.
    pub text: String,
    /// Caret position in UTF-16 units.
    pub caret: u32,
}

fn byte_offset(text: &str, utf16: u32) -> usize {
    let mut units = 0_u32;
    for (index, ch) in text.char_indices() {
        if units >= utf16 {
            return index;
        }
        units += u32::try_from(ch.len_utf16()).unwrap_or(2);
    }
    text.len()
}

fn utf16_len(text: &str) -> u32 {
    u32::try_from(text.encode_utf16().count()).unwrap_or(u32::MAX)
}

fn ordered(start: u32, end: u32) -> (u32, u32) {
    if start <= end { (start, end) } else { (end, start) }
}

/// Replace the selection `start..end` with `insertion`; the caret lands
/// after the inserted text.
#[must_use]
pub fn insert_at(text: &str, start: u32, end: u32, insertion: &str) -> Edit {
    let (start, end) = ordered(start, end);
    let from = byte_offset(text, start);
    let to = byte_offset(text, end);
    let mut out = String::with_capacity(text.len() + insertion.len());
    out.push_str(&text[..from]);
    out.push_str(insertion);
    out.push_str(&text[to..]);
    let caret = utf16_len(&text[..from]) + utf16_len(insertion);
    Edit { text: out, caret }
}

/// Wrap the selection in `<tag>`/`</tag>`. An empty selection inserts a
/// `text` placeholder inside the tags.
#[must_use]
pub fn wrap_selection(text: &str, start: u32, end: u32, tag: &str) -> Edit {
    let (start, end) = ordered(start, end);
    let from = byte_offset(text, start);
    let to = byte_offset(text, end);
    let selected = if from == to { "text" } else { &text[from..to] };
    insert_at(text, start, end, &format!("<{tag}>{selected}</{tag}>"))
}

/// Wrap the selection in a coloured `<span>`; nothing happens without a
/// selection.
#[must_use]
pub fn color_selection(text: &str, start: u32, end: u32, color: &str) -> Option<Edit> {
    let (start, end) = ordered(start, end);
    let from = byte_offset(text, start);
    let to = byte_offset(text, end);
    if from == to {
        return None;
    }
    let span = format!("<span style=\"color:{}\">{}</span>", escape_html(color), &text[from..to]);
    Some(insert_at(text, start, end, &span))
}

/// Escape text for inclusion in HTML.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// HTML e-mail sent alongside the plain message.
#[must_use]
pub fn build_email_html(full_name: &str, message: &str, sent_on: &str) -> String {
    format!(
        r#"<div style="font-family:Arial,sans-serif;background:#111827;color:#e5e7eb;padding:24px;border-radius:12px;max-width:600px;margin:auto">
<h2 style="color:#4ade80;text-align:center;margin:0 0 16px">ADMIN - AGRIBOT</h2>
<p>Good day <strong>{name}</strong>,</p>
<div style="background:#1f2937;padding:16px;border-radius:8px;margin:16px 0">{message}</div>
<p>Thank you for being part of the AGRIBOT community. If you have any questions, simply reply to this e-mail.</p>
<p>Best regards,<br/>The AGRIBOT Team</p>
<p style="font-size:12px;color:#9ca3af">Contact us: <a href="mailto:agribothydroteam@gmail.com" style="color:#4ade80">agribothydroteam@gmail.com</a></p>
<p style="font-size:11px;color:#6b7280;text-align:center">Email sent on {sent_on}</p>
</div>"#,
        name = escape_html(full_name),
        sent_on = escape_html(sent_on),
    )
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

fn lenient_texts<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values
        .into_iter()
        .map(|value| match value {
            Value::String(text) => text,
            other => other.to_string(),
        })
        .collect())
}

/// Robot configuration uploaded by a device owner.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RobotConfig {
    /// Plants the robot currently tracks.
    pub detected_plants: Vec<DetectedPlant>,
    /// Object detection model in use.
    #[serde(deserialize_with = "lenient_text")]
    pub object_detection: String,
    /// Its confidence threshold.
    #[serde(deserialize_with = "lenient_text")]
    pub object_detection_confidence: String,
    /// Stage classification model in use.
    #[serde(deserialize_with = "lenient_text")]
    pub stage_classification: String,
    /// Its confidence threshold.
    #[serde(deserialize_with = "lenient_text")]
    pub stage_classification_confidence: String,
    /// Segmentation model in use.
    #[serde(deserialize_with = "lenient_text")]
    pub disease_segmentation: String,
    /// Its confidence threshold.
    #[serde(deserialize_with = "lenient_text")]
    pub disease_segmentation_confidence: String,
    /// Sprayer channels.
    pub sprays: SprayChannels,
    /// Run schedule.
    pub schedule: Schedule,
}

/// One tracked plant.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectedPlant {
    /// Plant name.
    #[serde(deserialize_with = "lenient_text")]
    pub key: String,
    /// Thumbnail URL.
    #[serde(deserialize_with = "lenient_text")]
    pub image: String,
    /// Last detection time.
    #[serde(deserialize_with = "lenient_text")]
    pub timestamp: String,
    /// Spray before the scheduled run.
    pub will_spray_early: bool,
    /// Excluded from spraying.
    pub disabled: bool,
    /// Detection flags per disease.
    pub disease: BTreeMap<String, Vec<bool>>,
    /// Spray times per disease.
    #[serde(rename = "disease_time_spray")]
    pub disease_time_spray: BTreeMap<String, Vec<Value>>,
}

impl DetectedPlant {
    /// Diseases with at least one positive detection and their spray times.
    #[must_use]
    pub fn active_diseases(&self) -> Vec<(String, String)> {
        self.disease
            .iter()
            .filter(|(_, flags)| flags.iter().any(|flag| *flag))
            .map(|(name, _)| {
                let times = self
                    .disease_time_spray
                    .get(name)
                    .map(|times| {
                        times
                            .iter()
                            .map(|time| match time {
                                Value::String(text) => text.clone(),
                                other => other.to_string(),
                            })
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .unwrap_or_default();
                (name.clone(), times)
            })
            .collect()
    }
}

/// Parallel arrays describing each sprayer channel.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SprayChannels {
    /// Spray loaded in each channel.
    #[serde(deserialize_with = "lenient_texts")]
    pub spray: Vec<String>,
    /// Whether each channel is enabled.
    pub active: Vec<bool>,
    /// Spray duration per channel, in seconds.
    #[serde(deserialize_with = "lenient_texts")]
    pub duration: Vec<String>,
}

/// A sprayer channel with its parallel fields joined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Channel {
    /// Spray name.
    pub spray: String,
    /// Enabled flag; missing entries count as disabled.
    pub active: bool,
    /// Duration in seconds; empty when missing.
    pub duration: String,
}

impl SprayChannels {
    /// Zip the parallel arrays, driven by `spray`.
    #[must_use]
    pub fn channels(&self) -> Vec<Channel> {
        self.spray
            .iter()
            .enumerate()
            .map(|(index, spray)| Channel {
                spray: spray.clone(),
                active: self.active.get(index).copied().unwrap_or(false),
                duration: self.duration.get(index).cloned().unwrap_or_default(),
            })
            .collect()
    }
}

/// Run schedule.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Schedule {
    /// Frequency label.
    #[serde(deserialize_with = "lenient_text")]
    pub frequency: String,
    /// Days the robot runs.
    #[serde(deserialize_with = "lenient_texts")]
    pub days: Vec<String>,
    /// Run windows.
    pub runs: Vec<Run>,
}

/// One run window.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Run {
    /// Start time.
    #[serde(deserialize_with = "lenient_text")]
    pub time: String,
    /// End time.
    #[serde(deserialize_with = "lenient_text")]
    pub upto: String,
}

/// Decode a user's stored config. `None` when the user has none or it is
/// not an object.
#[must_use]
pub fn parse_config(config: Option<&Value>) -> Option<RobotConfig> {
    let value = config.filter(|value| value.is_object())?;
    RobotConfig::deserialize(value).ok()
}

/// Pretty JSON offered for download.
#[must_use]
pub fn config_json(config: &Value) -> String {
    serde_json::to_string_pretty(config).unwrap_or_else(|_| config.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(id: i64, name: &str, email: &str, role: &str) -> User {
        User {
            id,
            full_name: Some(name.to_string()),
            email: email.to_string(),
            role: role.to_string(),
            ..User::default()
        }
    }

    #[test]
    fn filter_splits_admins_and_matches_name_or_email() {
        let users = vec![
            user(1, "Ana Cruz", "ana@farm.ph", "User"),
            user(2, "Ben Soto", "ben@agri.ph", "Admin"),
            user(3, "Cy Lee", "cy@agri.ph", "User"),
        ];
        let ids: Vec<_> = filter_accounts(&users, "agri", false).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3]);
        let ids: Vec<_> = filter_accounts(&users, "", true).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2]);
        let ids: Vec<_> = filter_accounts(&users, "ANA", false).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn blank_messages_are_rejected() {
        assert_eq!(validate_message("  \n"), Err(MessageError::Empty));
        assert_eq!(MessageError::Empty.to_string(), "Message cannot be empty");
        assert_eq!(validate_message(" hi "), Ok("hi"));
    }

    #[test]
    fn wrapping_uses_selection_or_placeholder() {
        let edit = wrap_selection("make this bold", 5, 9, "b");
        assert_eq!(edit.text, "make <b>this</b> bold");
        assert_eq!(edit.caret, 16);
        let edit = wrap_selection("abc", 3, 3, "i");
        assert_eq!(edit.text, "abc<i>text</i>");
        assert_eq!(color_selection("abc", 1, 1, "red"), None);
        let edit = color_selection("abc", 0, 1, "red").map(|edit| edit.text);
        assert_eq!(edit.as_deref(), Some("<span style=\"color:red\">a</span>bc"));
    }

    #[test]
    fn offsets_count_utf16_units() {
        let edit = insert_at("🌱 ok", 2, 2, "!");
        assert_eq!(edit.text, "🌱! ok");
        assert_eq!(edit.caret, 3);
        let edit = insert_at("ab", 9, 1, "X");
        assert_eq!(edit.text, "aX");
    }

    #[test]
    fn email_escapes_the_name_and_keeps_the_message() {
        let html = build_email_html("<Ana>", "<b>Hi</b>", "1/2/2025");
        assert!(html.contains("Good day <strong>&lt;Ana&gt;</strong>,"));
        assert!(html.contains("<b>Hi</b>"));
        assert!(html.contains("ADMIN - AGRIBOT"));
        assert!(html.contains("Email sent on 1/2/2025"));
    }

    #[test]
    fn config_reports_decode_leniently() {
        let raw = json!({
            "objectDetection": "yolov8n",
            "objectDetectionConfidence": 0.5,
            "detectedPlants": [{
                "key": "Tomato",
                "disease": { "blight": [false, true], "rust": [false] },
                "disease_time_spray": { "blight": ["08:00", "16:00"] },
                "willSprayEarly": true
            }],
            "sprays": { "spray": ["A", "B"], "active": [true], "duration": [5] },
            "schedule": { "frequency": "daily", "days": ["Mon"], "runs": [{ "time": "06:00", "upto": "07:00" }] }
        });
        let config = parse_config(Some(&raw)).unwrap_or_default();
        assert_eq!(config.object_detection_confidence, "0.5");
        assert_eq!(
            config.detected_plants[0].active_diseases(),
            vec![("blight".to_string(), "08:00, 16:00".to_string())]
        );
        let channels = config.sprays.channels();
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].duration, "5");
        assert!(!channels[1].active);
        assert_eq!(config.schedule.runs[0].upto, "07:00");
        assert_eq!(parse_config(None), None);
        assert_eq!(parse_config(Some(&json!("nope"))), None);
        assert!(config_json(&raw).contains("\n  \"objectDetection\""));
    }
}
