use crate::schemas::scan::ScanHistoryEntry;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Maximum number of scans kept in history
pub const MAX_SCAN_HISTORY: usize = 10;

/// Past scan results, newest first, never longer than [`MAX_SCAN_HISTORY`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanHistory {
    entries: Vec<ScanHistoryEntry>,
}

impl ScanHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(mut entries: Vec<ScanHistoryEntry>) -> Self {
        entries.truncate(MAX_SCAN_HISTORY);
        Self { entries }
    }

    pub fn push(&mut self, entry: ScanHistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_SCAN_HISTORY);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[ScanHistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ScanHistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// JSON file persistence for [`ScanHistory`]
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored history. A missing, unreadable or malformed file reads
    /// as an empty history.
    pub fn load(&self) -> ScanHistory {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return ScanHistory::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read scan history");
                return ScanHistory::new();
            }
        };

        match serde_json::from_str::<Vec<ScanHistoryEntry>>(&content) {
            Ok(entries) => ScanHistory::from_entries(entries),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "discarding malformed scan history");
                ScanHistory::new()
            }
        }
    }

    pub fn save(&self, history: &ScanHistory) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(history.entries())?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", self.path.display())),
        }
    }
}
