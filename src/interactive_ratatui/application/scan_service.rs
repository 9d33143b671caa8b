use crate::api::scan::{ScanService as ScanClient, display_file_name};
use crate::interactive_ratatui::domain::models::{
    DownloadRequest, DownloadResponse, ScanRequest, ScanResponse,
};
use crate::schemas::scan::ScanHistoryEntry;
use std::sync::Arc;
use tracing::{info, warn};

/// Uploads documents and downloads processed artifacts for the scan worker
pub struct ScanService {
    client: Arc<dyn ScanClient>,
}

impl ScanService {
    pub fn new(client: Arc<dyn ScanClient>) -> Self {
        Self { client }
    }

    pub fn scan(&self, request: ScanRequest) -> ScanResponse {
        let file_name = display_file_name(&request.path);

        let outcome = match self.client.upload(&request.path) {
            Ok(result) => {
                info!(id = request.id, file = %file_name, "scan completed");
                Ok(ScanHistoryEntry::new(&file_name, result))
            }
            Err(e) => {
                warn!(id = request.id, file = %file_name, error = %e, "scan failed");
                Err(e.to_string())
            }
        };

        ScanResponse {
            id: request.id,
            outcome,
        }
    }

    pub fn download(&self, request: DownloadRequest) -> DownloadResponse {
        let outcome = self
            .client
            .download(&request.url, &request.destination)
            .map_err(|e| {
                warn!(url = %request.url, error = %e, "download failed");
                format!("Failed to download file: {e}")
            });

        DownloadResponse { outcome }
    }
}
