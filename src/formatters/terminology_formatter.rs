use crate::schemas::scan::{ScanHistoryEntry, ScanResult};
use crate::schemas::terminology::Terminology;
use chrono::DateTime;
use colored::Colorize;

const NOT_SPECIFIED: &str = "Not specified";

/// A titled block of the detail card, shared by the CLI and the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSection {
    pub title: &'static str,
    pub lines: Vec<String>,
}

/// Single-line summary used by suggestion lists
pub fn format_suggestion_line(record: &Terminology) -> String {
    let mut line = record.title().to_string();

    let secondary: Vec<&str> = [record.english_name.as_deref(), record.hindi_name.as_deref()]
        .into_iter()
        .flatten()
        .filter(|name| !name.is_empty() && *name != record.title())
        .collect();
    if !secondary.is_empty() {
        line.push_str(&format!(" - {}", secondary.join(" / ")));
    }

    match (record.namaste_code.as_deref(), record.category.as_deref()) {
        (Some(code), Some(category)) => line.push_str(&format!(" [{code} · {category}]")),
        (Some(code), None) => line.push_str(&format!(" [{code}]")),
        (None, Some(category)) => line.push_str(&format!(" [{category}]")),
        (None, None) => {}
    }

    line
}

/// Sections of the detail card in display order; empty sections are omitted
pub fn detail_sections(record: &Terminology) -> Vec<DetailSection> {
    let mut sections = Vec::new();

    let mut names = Vec::new();
    if let Some(english) = &record.english_name {
        names.push(format!("English Name: {english}"));
    }
    if let Some(hindi) = &record.hindi_name {
        names.push(format!("Hindi Name: {hindi}"));
    }
    if let Some(code) = &record.namaste_code {
        names.push(format!("NAMASTE Code: {code}"));
    }
    push_section(&mut sections, "Identification", names);

    let mut classification = Vec::new();
    if let Some(system) = &record.medical_system {
        classification.push(format!("Medical System: {system}"));
    }
    if let Some(category) = &record.category {
        classification.push(format!("Category: {category}"));
    }
    if let Some(subcategory) = &record.subcategory {
        classification.push(format!("Subcategory: {subcategory}"));
    }
    push_section(&mut sections, "Medical Classification", classification);

    if let Some(definition) = record.definition.as_deref().filter(|d| !d.is_empty()) {
        push_section(&mut sections, "Clinical Definition", vec![definition.to_string()]);
    }

    if let Some(synonyms) = record.synonyms.as_ref().filter(|s| !s.is_empty()) {
        push_section(&mut sections, "Alternative Names", vec![synonyms.join(", ")]);
    }

    push_section(
        &mut sections,
        "Clinical Features",
        bullets(record.clinical_features.as_deref()),
    );
    push_section(
        &mut sections,
        "Traditional Symptoms",
        bullets(record.traditional_symptoms.as_deref()),
    );

    if let Some(dosha) = &record.dosha_involvement {
        push_section(&mut sections, "Ayurvedic Analysis", vec![dosha.describe()]);
    }

    if let Some(mappings) = &record.icd11_mappings {
        let mut lines = Vec::new();
        if let Some(code) = &mappings.tm2_code {
            lines.push(format!("TM2 Classification: {code}"));
            if let Some(display) = &mappings.tm2_display {
                lines.push(format!("  {display}"));
            }
        }
        if let Some(code) = &mappings.biomedicine_code {
            lines.push(format!("Biomedicine Mapping: {code}"));
            if let Some(display) = &mappings.biomedicine_display {
                lines.push(format!("  {display}"));
            }
        }
        push_section(&mut sections, "International Classification (ICD-11)", lines);
    }

    if let Some(who) = &record.who_international_terminology {
        let lines = [
            who.code.as_ref().map(|code| format!("Code: {code}")),
            who.display.clone(),
            who.definition.clone(),
        ]
        .into_iter()
        .flatten()
        .collect();
        push_section(&mut sections, "WHO International Terminology", lines);
    }

    sections.push(DetailSection {
        title: "Record",
        lines: vec![
            format!("Last Updated: {}", format_last_updated(record.last_updated.as_deref())),
            format!("Status: {}", format_status(record.status.as_deref())),
        ],
    });

    sections
}

fn push_section(sections: &mut Vec<DetailSection>, title: &'static str, lines: Vec<String>) {
    if !lines.is_empty() {
        sections.push(DetailSection { title, lines });
    }
}

/// Rows the detail card body takes before wrapping: a heading, the entries
/// and a blank separator for each section
pub fn detail_line_count(record: &Terminology) -> usize {
    detail_sections(record)
        .iter()
        .map(|section| section.lines.len() + 2)
        .sum()
}

fn bullets(items: Option<&[String]>) -> Vec<String> {
    items
        .unwrap_or_default()
        .iter()
        .map(|item| format!("• {item}"))
        .collect()
}

pub fn format_last_updated(value: Option<&str>) -> String {
    match value {
        Some(raw) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
                return dt.format("%Y-%m-%d").to_string();
            }
            // Epoch milliseconds
            raw.parse::<i64>()
                .ok()
                .and_then(DateTime::from_timestamp_millis)
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| raw.to_string())
        }
        None => NOT_SPECIFIED.to_string(),
    }
}

pub fn format_status(status: Option<&str>) -> String {
    match status {
        Some("active") => "✓ Active".to_string(),
        Some(other) if !other.is_empty() => other.to_string(),
        _ => "Unknown".to_string(),
    }
}

/// Full plain-text detail card for CLI output
pub fn format_detail(record: &Terminology, use_color: bool) -> String {
    let mut out = String::new();

    if use_color {
        out.push_str(&record.title().bright_yellow().bold().to_string());
    } else {
        out.push_str(record.title());
    }
    out.push('\n');

    for section in detail_sections(record) {
        out.push('\n');
        if use_color {
            out.push_str(&section.title.bright_cyan().to_string());
        } else {
            out.push_str(section.title);
        }
        out.push('\n');
        for line in section.lines {
            out.push_str("  ");
            out.push_str(&line);
            out.push('\n');
        }
    }

    out
}

pub fn format_scan_result(result: &ScanResult, use_color: bool) -> String {
    let mut lines = Vec::new();
    let heading = "Scan Complete!";
    lines.push(if use_color {
        heading.green().bold().to_string()
    } else {
        heading.to_string()
    });

    if let Some(file_name) = &result.file_name {
        lines.push(format!("  File: {file_name}"));
    }
    if let Some(summary) = &result.summary {
        lines.push(format!("  Summary: {summary}"));
    }

    let conditions = result.condition_labels();
    if !conditions.is_empty() {
        lines.push("  Detected conditions:".to_string());
        lines.extend(conditions.iter().map(|c| format!("    • {c}")));
    }

    let url = if use_color {
        result.download_url.cyan().to_string()
    } else {
        result.download_url.clone()
    };
    lines.push(format!("  Download: {url}"));

    lines.join("\n")
}

pub fn format_history_entry(entry: &ScanHistoryEntry, use_color: bool) -> String {
    if use_color {
        format!(
            "{} {} {}",
            entry.display_date().bright_blue(),
            entry.file_name.bright_green(),
            entry.id.dimmed()
        )
    } else {
        format!("{} {} {}", entry.display_date(), entry.file_name, entry.id)
    }
}
