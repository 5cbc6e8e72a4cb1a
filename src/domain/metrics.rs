// Metrics snapshot domain model
use serde::Deserialize;

/// One parsed metrics payload for a single poll tick.
///
/// Field names follow the doctor API wire format. A snapshot fully replaces
/// the previous one on every tick; nothing is merged or retained.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub status: String,
    pub patient_burning: bool,
    /// Mean observed healthcheck duration, in nanoseconds.
    #[serde(rename = "meanTimming")]
    pub mean_timing: i64,
    /// Most recent observed healthcheck duration, in nanoseconds.
    #[serde(rename = "lastTimming")]
    pub last_timing: i64,
    pub prognosis: String,
}

/// Format a nanosecond duration for display: nearest whole millisecond,
/// e.g. 15_000_000 -> "15ms".
pub fn format_millis(ns: i64) -> String {
    format!("{}ms", (ns as f64 / 1_000_000.0).round() as i64)
}

/// Display label for the burning indicator.
pub fn burning_label(burning: bool) -> &'static str {
    if burning { "ON" } else { "OFF" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_durations_as_whole_milliseconds() {
        assert_eq!(format_millis(15_000_000), "15ms");
        assert_eq!(format_millis(1_400_000), "1ms");
        assert_eq!(format_millis(1_500_000), "2ms");
        assert_eq!(format_millis(0), "0ms");
    }

    #[test]
    fn burning_labels() {
        assert_eq!(burning_label(true), "ON");
        assert_eq!(burning_label(false), "OFF");
    }

    #[test]
    fn deserializes_wire_field_names() {
        let snapshot: MetricsSnapshot = serde_json::from_str(
            r#"{"status":"ok","patientBurning":true,"meanTimming":2000000,"lastTimming":3000000,"prognosis":"looks good"}"#,
        )
        .unwrap();

        assert_eq!(snapshot.status, "ok");
        assert!(snapshot.patient_burning);
        assert_eq!(snapshot.mean_timing, 2_000_000);
        assert_eq!(snapshot.last_timing, 3_000_000);
        assert_eq!(snapshot.prognosis, "looks good");
    }

    #[test]
    fn rejects_the_empty_metrics_body() {
        // The backend serializes null until the first healthcheck exists.
        assert!(serde_json::from_str::<MetricsSnapshot>("null").is_err());
    }
}
