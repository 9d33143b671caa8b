use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload returned by the scan service for one uploaded document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub download_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_conditions: Option<Value>,
    /// Everything else the service sent, kept so history round-trips intact
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ScanResult {
    /// Human readable labels for the detected conditions, whatever shape the
    /// service used for them
    pub fn condition_labels(&self) -> Vec<String> {
        match &self.detected_conditions {
            Some(Value::Array(items)) => items.iter().filter_map(condition_label).collect(),
            Some(Value::String(text)) if !text.is_empty() => vec![text.clone()],
            Some(Value::Object(_)) => self
                .detected_conditions
                .as_ref()
                .and_then(condition_label)
                .into_iter()
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn condition_label(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Object(map) => {
            let name = ["display_name", "name", "condition", "term"]
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str))?;
            match map.get("namaste_code").and_then(Value::as_str) {
                Some(code) => Some(format!("{name} ({code})")),
                None => Some(name.to_string()),
            }
        }
        _ => None,
    }
}

/// One persisted record of a completed scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanHistoryEntry {
    pub id: String,
    pub file_name: String,
    pub timestamp: String,
    pub download_url: String,
    pub result: ScanResult,
}

impl ScanHistoryEntry {
    pub fn new(source_file_name: &str, result: ScanResult) -> Self {
        Self::at(source_file_name, result, Utc::now())
    }

    pub fn at(source_file_name: &str, result: ScanResult, now: DateTime<Utc>) -> Self {
        Self {
            id: format!("scan_{}", now.timestamp_millis()),
            file_name: format!("report_{source_file_name}"),
            timestamp: now.to_rfc3339(),
            download_url: result.download_url.clone(),
            result,
        }
    }

    /// Date portion of the timestamp for list display
    pub fn display_date(&self) -> String {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|_| self.timestamp.clone())
    }
}
