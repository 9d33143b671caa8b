#[cfg(test)]
mod tests {
    use super::super::scan::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn sample_result() -> ScanResult {
        serde_json::from_value(json!({
            "downloadUrl": "https://scan.example/report.pdf",
            "fileName": "prescription.pdf",
            "detectedConditions": [
                {"display_name": "Jwara", "namaste_code": "AYUR001"},
                "Kasa",
                {"name": "Amlapitta"}
            ],
            "processingTime": 1200
        }))
        .unwrap()
    }

    #[test]
    fn test_scan_result_keeps_unknown_fields() {
        let result = sample_result();

        assert_eq!(result.download_url, "https://scan.example/report.pdf");
        assert_eq!(result.file_name.as_deref(), Some("prescription.pdf"));
        assert_eq!(result.extra.get("processingTime"), Some(&json!(1200)));

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["processingTime"], json!(1200));
        assert_eq!(value["downloadUrl"], json!("https://scan.example/report.pdf"));
    }

    #[test]
    fn test_scan_result_requires_download_url() {
        let parsed: Result<ScanResult, _> = serde_json::from_value(json!({"fileName": "x.pdf"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_condition_labels() {
        let labels = sample_result().condition_labels();
        assert_eq!(labels, vec!["Jwara (AYUR001)", "Kasa", "Amlapitta"]);

        let mut result = sample_result();
        result.detected_conditions = None;
        assert!(result.condition_labels().is_empty());
    }

    #[test]
    fn test_history_entry_fields() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let entry = ScanHistoryEntry::at("prescription.pdf", sample_result(), now);

        assert_eq!(entry.id, format!("scan_{}", now.timestamp_millis()));
        assert_eq!(entry.file_name, "report_prescription.pdf");
        assert_eq!(entry.download_url, "https://scan.example/report.pdf");
        assert_eq!(entry.display_date(), "2024-03-01");

        let value = serde_json::to_value(&entry).unwrap();
        for key in ["id", "fileName", "timestamp", "downloadUrl", "result"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
