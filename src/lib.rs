pub mod api;
pub mod config;
pub mod formatters;
pub mod history;
pub mod interactive_ratatui;
pub mod logging;
pub mod schemas;


pub use api::{
    ApiError, ApiResult, HttpScanClient, HttpTerminologyClient, ScanService, TerminologyService,
};
pub use config::ApiConfig;
pub use formatters::{format_detail, format_history_entry, format_scan_result};
pub use history::{HistoryStore, ScanHistory};
pub use interactive_ratatui::InteractiveSearch;
pub use schemas::{ScanHistoryEntry, ScanResult, Terminology};
