//! Per-version detection metrics shared by plant and disease rows.

/// Versions shown in a detail row.
pub const VERSION_LIMIT: usize = 5;

/// Metrics of one model version for one class.
#[derive(Clone, Debug, PartialEq)]
pub struct VersionMetrics {
    /// Version label.
    pub version: String,
    /// Precision (0-1).
    pub precision: f64,
    /// Recall (0-1).
    pub recall: f64,
    /// F1 score (0-1).
    pub f1: f64,
}

/// Zip the parallel metric arrays for the first [`VERSION_LIMIT`] versions.
/// Missing metrics read as zero.
#[must_use]
pub fn version_metrics(
    versions: &[String],
    precision: &[f64],
    recall: &[f64],
    f1: &[f64],
) -> Vec<VersionMetrics> {
    let at = |values: &[f64], index: usize| values.get(index).copied().unwrap_or(0.0);
    versions
        .iter()
        .take(VERSION_LIMIT)
        .enumerate()
        .map(|(index, version)| VersionMetrics {
            version: version.clone(),
            precision: at(precision, index),
            recall: at(recall, index),
            f1: at(f1, index),
        })
        .collect()
}

/// Add `item` to `selection`, or remove it when already present.
pub fn toggle<T: PartialEq>(selection: &mut Vec<T>, item: T) {
    if let Some(index) = selection.iter().position(|existing| *existing == item) {
        selection.remove(index);
    } else {
        selection.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_cap_versions_and_default_missing_values() {
        let versions: Vec<String> = (1..=7).map(|v| format!("v{v}")).collect();
        let rows = version_metrics(&versions, &[0.9, 0.8], &[0.7], &[]);
        assert_eq!(rows.len(), VERSION_LIMIT);
        assert_eq!(rows[0].version, "v1");
        assert!((rows[1].precision - 0.8).abs() < f64::EPSILON);
        assert!(rows[1].recall.abs() < f64::EPSILON);
        assert!(rows[0].f1.abs() < f64::EPSILON);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut picked = vec![1, 2];
        toggle(&mut picked, 3);
        assert_eq!(picked, vec![1, 2, 3]);
        toggle(&mut picked, 1);
        assert_eq!(picked, vec![2, 3]);
    }
}
