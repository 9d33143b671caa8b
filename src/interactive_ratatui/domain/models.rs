use crate::schemas::scan::{ScanHistoryEntry, ScanResult};
use crate::schemas::terminology::Terminology;
use std::path::PathBuf;

/// The active view. Exactly one is shown at a time; `Help` overlays the
/// view it was opened from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Search,
    Details,
    Support,
    Scan,
    Help,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Search => "Search",
            Mode::Details => "Details",
            Mode::Support => "Support",
            Mode::Scan => "Scan Document",
            Mode::Help => "Help",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SelectionDirection {
    Next,
    Prev,
}

// Requests and responses exchanged with the worker threads. Every request
// carries the sequence id it was issued under so the UI can drop responses
// that were superseded while in flight.

#[derive(Clone, Debug, PartialEq)]
pub struct SearchRequest {
    pub id: u64,
    pub query: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchResponse {
    pub id: u64,
    pub results: Result<Vec<Terminology>, String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LookupRequest {
    pub id: u64,
    pub code: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LookupResponse {
    pub id: u64,
    pub detail: Result<Terminology, String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScanRequest {
    pub id: u64,
    pub path: PathBuf,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScanResponse {
    pub id: u64,
    pub outcome: Result<ScanHistoryEntry, String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DownloadRequest {
    pub url: String,
    pub destination: PathBuf,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DownloadResponse {
    pub outcome: Result<PathBuf, String>,
}

/// What the scan panel currently shows
#[derive(Clone, Debug, PartialEq)]
pub struct ScanView {
    pub file_name: String,
    pub result: ScanResult,
}
