use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// A NAMASTE terminology record.
///
/// The same shape serves both as a lightweight search suggestion and as the
/// full detail record returned by a lookup; detail fields are simply absent on
/// suggestions produced by a text search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Terminology {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub namaste_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub english_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub hindi_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub medical_system: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub clinical_features: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub traditional_symptoms: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub dosha_involvement: Option<DoshaInvolvement>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub icd11_mappings: Option<Icd11Mappings>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub who_international_terminology: Option<WhoTerminology>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DoshaInvolvement {
    Text(String),
    Detailed {
        #[serde(
            default,
            deserialize_with = "lenient_string",
            skip_serializing_if = "Option::is_none"
        )]
        primary: Option<String>,
        #[serde(
            default,
            deserialize_with = "null_as_empty_list",
            skip_serializing_if = "Vec::is_empty"
        )]
        secondary: Vec<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Icd11Mappings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tm2_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tm2_display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biomedicine_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biomedicine_display: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhoTerminology {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl Terminology {
    /// The NAMASTE code, if present and not blank
    pub fn code(&self) -> Option<&str> {
        self.namaste_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }

    pub fn title(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.english_name.as_deref())
            .or(self.namaste_code.as_deref())
            .unwrap_or("No display name available")
    }

    /// True when the record already carries detail data, i.e. it came from a
    /// direct lookup rather than a text search
    pub fn has_detail(&self) -> bool {
        self.definition.as_deref().is_some_and(|d| !d.is_empty())
            || self.clinical_features.is_some()
            || self.icd11_mappings.is_some()
    }
}

impl DoshaInvolvement {
    pub fn describe(&self) -> String {
        match self {
            DoshaInvolvement::Text(text) => text.clone(),
            DoshaInvolvement::Detailed { primary, secondary } => {
                let mut parts = Vec::new();
                if let Some(primary) = primary.as_deref().filter(|p| !p.is_empty()) {
                    parts.push(format!("Primary: {primary}"));
                }
                if !secondary.is_empty() {
                    parts.push(format!("Secondary: {}", secondary.join(", ")));
                }
                if parts.is_empty() {
                    "Not specified".to_string()
                } else {
                    parts.join(", ")
                }
            }
        }
    }
}

/// Extract the suggestion list from a search response body.
///
/// Accepts `{"results": [...]}` or a bare array. When `results` is missing or
/// null the body itself is used; anything that is not an array yields an
/// empty list. Entries that are not records are skipped.
pub fn suggestions_from_body(body: Value) -> Vec<Terminology> {
    let candidate = match body {
        Value::Object(mut map) => match map.remove("results") {
            Some(results) if is_truthy(&results) => results,
            _ => Value::Object(map),
        },
        other => other,
    };

    let Value::Array(items) = candidate else {
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, "skipping malformed terminology record");
                None
            }
        })
        .collect()
}

/// Strings as-is, numbers and booleans as their text, anything else absent
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// A list of strings; a lone string is a one-element list and non-text items
/// are dropped
fn lenient_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(items.into_iter().filter_map(scalar_text).collect()),
        Value::String(text) if !text.trim().is_empty() => Some(vec![text]),
        _ => None,
    })
}

fn null_as_empty_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_list(deserializer)?.unwrap_or_default())
}

/// Nested structures that do not match their shape are treated as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).ok())
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
