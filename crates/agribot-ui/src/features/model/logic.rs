//! Model catalogue helpers.
//!
//! # Design
//! - One enum names the three model collections and owns their endpoints.
//! - Metric selection depends only on the category; values are rendered as
//!   percentages with two decimals.
//! - Metrics files are parsed client-side and sent as JSON objects.

use agribot_api_models::{ModelDraft, ModelVersion};
use serde_json::Value;

/// Trained model collections exposed by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelCategory {
    /// YOLOv8 object detection.
    ObjectDetection,
    /// YOLOv8 growth-stage classification.
    StageClassification,
    /// Mask R-CNN segmentation.
    Segmentation,
}

impl ModelCategory {
    /// Every category in selector order.
    pub const ALL: [Self; 3] = [
        Self::ObjectDetection,
        Self::StageClassification,
        Self::Segmentation,
    ];

    /// API resource name.
    #[must_use]
    pub const fn resource(self) -> &'static str {
        match self {
            Self::ObjectDetection => "yoloobjectdetection",
            Self::StageClassification => "yolostageclassification",
            Self::Segmentation => "maskrcnnsegmentation",
        }
    }

    /// Selector label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ObjectDetection => "YOLOv8 Object Detection",
            Self::StageClassification => "YOLOv8 Stage Classification",
            Self::Segmentation => "Mask-RCNN Segmentation",
        }
    }

    /// Stable key used by `<select>` values.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ObjectDetection => "objectDetection",
            Self::StageClassification => "stageclassification",
            Self::Segmentation => "segmentation",
        }
    }

    /// Parse a selector key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    /// Metrics reported for this category.
    #[must_use]
    pub const fn metrics(self) -> &'static [Metric] {
        match self {
            Self::StageClassification => &[Metric::AccuracyTop1, Metric::AccuracyTop5],
            Self::ObjectDetection | Self::Segmentation => &[
                Metric::Precision,
                Metric::Recall,
                Metric::F1,
                Metric::Map50,
                Metric::Map50To95,
            ],
        }
    }

    /// `GET` path listing the collection.
    #[must_use]
    pub fn list_path(self) -> String {
        format!("{}/get-all", self.resource())
    }

    /// `POST` path creating a model.
    #[must_use]
    pub fn create_path(self) -> String {
        format!("{}/create", self.resource())
    }

    /// `DELETE` path removing a model.
    #[must_use]
    pub fn delete_path(self, id: i64) -> String {
        format!("{}/delete/{id}", self.resource())
    }
}

/// A reported model metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// Precision.
    Precision,
    /// Recall.
    Recall,
    /// F1 score.
    F1,
    /// mAP at 0.5.
    Map50,
    /// mAP at 0.5-0.95.
    Map50To95,
    /// Top-1 accuracy.
    AccuracyTop1,
    /// Top-5 accuracy.
    AccuracyTop5,
}

impl Metric {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Precision => "Precision",
            Self::Recall => "Recall",
            Self::F1 => "F1 Score",
            Self::Map50 => "mAP 50",
            Self::Map50To95 => "mAP 50-95",
            Self::AccuracyTop1 => "Accuracy Top-1",
            Self::AccuracyTop5 => "Accuracy Top-5",
        }
    }

    /// Raw 0-1 value, if reported.
    #[must_use]
    pub const fn value(self, model: &ModelVersion) -> Option<f64> {
        match self {
            Self::Precision => model.precision,
            Self::Recall => model.recall,
            Self::F1 => model.f1,
            Self::Map50 => model.map50,
            Self::Map50To95 => model.map50_95,
            Self::AccuracyTop1 => model.accuracy_top1,
            Self::AccuracyTop5 => model.accuracy_top5,
        }
    }

    /// Percentage rounded to two decimals; missing values count as zero.
    #[must_use]
    pub fn percent(self, model: &ModelVersion) -> f64 {
        to_percent(self.value(model).unwrap_or(0.0))
    }
}

/// Convert a 0-1 ratio into a percentage with two decimals.
#[must_use]
pub fn to_percent(ratio: f64) -> f64 {
    (ratio * 10_000.0).round() / 100.0
}

/// Percentage label such as `91.25%`.
#[must_use]
pub fn format_percent(ratio: f64) -> String {
    format!("{:.2}%", to_percent(ratio))
}

/// One metric across several model versions.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    /// Metric on this row.
    pub metric: Metric,
    /// `(version, percent)` per model, in input order.
    pub values: Vec<(String, f64)>,
}

/// Tabulate every metric of `category` across `models`.
#[must_use]
pub fn comparison_rows(category: ModelCategory, models: &[ModelVersion]) -> Vec<ComparisonRow> {
    category
        .metrics()
        .iter()
        .map(|metric| ComparisonRow {
            metric: *metric,
            values: models
                .iter()
                .map(|model| (model.version.clone(), metric.percent(model)))
                .collect(),
        })
        .collect()
}

/// Newest first; undated models sink to the end.
#[must_use]
pub fn sort_newest_first(mut models: Vec<ModelVersion>) -> Vec<ModelVersion> {
    models.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    models
}

/// Turn a Google Drive share link into a direct download link; other links
/// pass through unchanged.
#[must_use]
pub fn download_link(link: &str) -> String {
    let Some(start) = link.find("/d/").map(|index| index + 3) else {
        return link.to_string();
    };
    let rest = &link[start..];
    let Some(end) = rest.find('/') else {
        return link.to_string();
    };
    let id = &rest[..end];
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
    if valid {
        format!("https://drive.google.com/uc?export=download&id={id}")
    } else {
        link.to_string()
    }
}

/// Raw inputs of the add-model dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelForm {
    /// Version label.
    pub version: String,
    /// Description.
    pub description: String,
    /// Link to the weights.
    pub file: String,
    /// Contents of the metrics JSON file, once read.
    pub metrics_json: Option<String>,
}

/// Reasons the add-model dialog cannot be submitted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModelFormError {
    /// A required field is blank.
    #[error("Please fill in all fields.")]
    MissingFields,
    /// The metrics file is not a JSON object.
    #[error("Error parsing JSON file.")]
    InvalidMetrics,
}

impl ModelForm {
    /// Validate the form and build the request body.
    ///
    /// # Errors
    ///
    /// Returns [`ModelFormError`] when a field is missing or the metrics file
    /// does not parse as a JSON object.
    pub fn to_draft(&self) -> Result<ModelDraft, ModelFormError> {
        let blank = |value: &str| value.trim().is_empty();
        let metrics = self
            .metrics_json
            .as_deref()
            .filter(|_| !blank(&self.version) && !blank(&self.description) && !blank(&self.file))
            .ok_or(ModelFormError::MissingFields)?;
        let parsed: Value =
            serde_json::from_str(metrics).map_err(|_| ModelFormError::InvalidMetrics)?;
        if !parsed.is_object() {
            return Err(ModelFormError::InvalidMetrics);
        }
        Ok(ModelDraft {
            version: self.version.trim().to_string(),
            description: self.description.trim().to_string(),
            file: self.file.trim().to_string(),
            file_metrics: parsed,
        })
    }
}

/// Component list shown in the materials dialog: `(name, description)`.
pub const MATERIALS: [(&str, &str); 24] = [
    ("Raspberry Pi 4", "A small single-board computer for robotics and IoT projects."),
    ("Raspberry Pi Camera Module 3", "High-quality camera module for Raspberry Pi with autofocus."),
    ("4 Module Relay", "Relay board for controlling high-voltage devices with low-voltage logic."),
    ("18650 Lithium Battery (5000mAH pack)", "Rechargeable lithium-ion battery pack for portable power."),
    ("Flex Cable CSI 15 Pin Ribbon", "Flexible ribbon cable used to connect Raspberry Pi cameras."),
    ("MG996R Servo (180 Rotation)", "High-torque metal gear servo motor, 180° rotation."),
    ("High Quality Soft Silicon Flexi Flexible Multicore Wire Cable", "Flexible silicon-coated wires for electronics and robotics."),
    ("Silicone Hose Tubing", "Flexible silicone hose used for fluid transfer or pneumatics."),
    ("Dupont Wire Female Terminal Connector", "Jumper wire connectors for breadboards and microcontrollers."),
    ("Extended Copper Hex Coupling Motor Shaft", "Copper coupling for connecting motor shafts."),
    ("Insulated Ferrule Crimp", "Ferrule terminals used for clean wire connections."),
    ("Sandisk Ultra MicroSDXC UHS-I card (32gb)", "High-speed microSD card for data storage."),
    ("Aluminum 25T Servo Arm Horn", "Aluminum horn attachment for servo motors."),
    ("Misting Nozzle (6mm)", "Nozzle used for spraying fine mist in cooling or irrigation."),
    ("JGA25-370 DC Geared Motor", "High-torque geared DC motor, widely used in robotics."),
    ("Double BTS7960 43A H-Bridge", "High-current motor driver module."),
    ("365 12V DC Pumping Motor", "DC motor used for pumping applications."),
    ("CP2102 USB to TTL/Serial Module UART", "USB to serial communication adapter."),
    ("PCF8574 IO Expansion GPIO Port Expander Module", "I2C GPIO expander for microcontrollers."),
    ("TCRT5000 infrared reflection sensor", "Infrared sensor used for object detection and line following."),
    ("XL4015 Constant Voltage Step Down Buck Converter", "Adjustable DC-DC step-down voltage regulator."),
    ("Bridge Design Zero Line Screw Brass Copper 12 Terminal Block", "Terminal block for wire connections."),
    ("TCS34725 RGB Sensor", "Color sensor for detecting RGB values."),
    ("Ultrasonic HC-SR04 sensor", "Ultrasonic sensor for distance measurement."),
];

/// Web search link for a material.
#[must_use]
pub fn material_search_link(name: &str) -> String {
    format!(
        "https://www.google.com/search?q={}",
        urlencoding::encode(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn model(version: &str, precision: f64) -> ModelVersion {
        ModelVersion {
            version: version.to_string(),
            precision: Some(precision),
            accuracy_top1: Some(0.5),
            ..ModelVersion::default()
        }
    }

    #[test]
    fn categories_map_to_resources_and_metrics() {
        assert_eq!(
            ModelCategory::Segmentation.delete_path(4),
            "maskrcnnsegmentation/delete/4"
        );
        assert_eq!(
            ModelCategory::from_key("stageclassification"),
            Some(ModelCategory::StageClassification)
        );
        assert_eq!(ModelCategory::StageClassification.metrics().len(), 2);
        assert_eq!(ModelCategory::ObjectDetection.metrics().len(), 5);
        assert_eq!(ModelCategory::from_key("other"), None);
    }

    #[test]
    fn comparison_rows_use_percentages_and_zero_for_missing() {
        let rows = comparison_rows(
            ModelCategory::ObjectDetection,
            &[model("v1", 0.912_345), model("v2", 0.5)],
        );
        assert_eq!(rows[0].metric, Metric::Precision);
        assert_eq!(
            rows[0].values,
            vec![("v1".to_string(), 91.23), ("v2".to_string(), 50.0)]
        );
        assert_eq!(rows[1].values[0].1, 0.0);
        assert_eq!(format_percent(0.5), "50.00%");
    }

    #[test]
    fn newest_models_come_first() {
        let mut old = model("old", 0.1);
        old.created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single();
        let mut new = model("new", 0.2);
        new.created_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single();
        let sorted = sort_newest_first(vec![old, model("undated", 0.3), new]);
        let versions: Vec<_> = sorted.iter().map(|m| m.version.as_str()).collect();
        assert_eq!(versions, vec!["new", "old", "undated"]);
    }

    #[test]
    fn drive_links_become_direct_downloads() {
        assert_eq!(
            download_link("https://drive.google.com/file/d/abc_12-3/view?usp=sharing"),
            "https://drive.google.com/uc?export=download&id=abc_12-3"
        );
        assert_eq!(
            download_link("https://example.com/model.pt"),
            "https://example.com/model.pt"
        );
    }

    #[test]
    fn model_form_requires_every_field_and_object_metrics() {
        let mut form = ModelForm {
            version: "v3".to_string(),
            description: "retrained".to_string(),
            file: "https://example.com/w.pt".to_string(),
            metrics_json: None,
        };
        assert_eq!(form.to_draft(), Err(ModelFormError::MissingFields));
        form.metrics_json = Some("[1,2]".to_string());
        assert_eq!(form.to_draft(), Err(ModelFormError::InvalidMetrics));
        form.metrics_json = Some(r#"{"precision":0.9}"#.to_string());
        let draft = form.to_draft().unwrap_or_else(|err| panic!("{err}"));
        assert_eq!(draft.file_metrics["precision"], 0.9);
        form.version = " ".to_string();
        assert_eq!(form.to_draft(), Err(ModelFormError::MissingFields));
    }

    #[test]
    fn material_links_are_encoded() {
        assert_eq!(
            material_search_link("Raspberry Pi 4"),
            "https://www.google.com/search?q=Raspberry%20Pi%204"
        );
    }
}
