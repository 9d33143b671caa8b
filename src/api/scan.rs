use crate::api::error::{ApiError, ApiResult};
use crate::config::ApiConfig;
use crate::schemas::scan::ScanResult;
use reqwest::blocking::{Client, multipart};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Extensions the scan service accepts
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "jpg", "jpeg", "png"];

/// Check that a document has a supported type before uploading it
pub fn validate_scan_file(path: &Path) -> ApiResult<()> {
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        });

    if supported {
        Ok(())
    } else {
        Err(ApiError::UnsupportedFileType {
            path: path.to_path_buf(),
        })
    }
}

/// File name component used to label history entries and downloads
pub fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// The remote document scan service
pub trait ScanService: Send + Sync {
    fn upload(&self, path: &Path) -> ApiResult<ScanResult>;

    /// Fetch a processed artifact and write it to `destination`
    fn download(&self, url: &str, destination: &Path) -> ApiResult<PathBuf>;
}

pub struct HttpScanClient {
    client: Client,
    base_url: String,
}

impl HttpScanClient {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::transport(&config.scan_base_url, e))?;

        Ok(Self {
            client,
            base_url: config.scan_base_url.clone(),
        })
    }

    pub fn upload_url(&self) -> String {
        format!("{}/scan/report", self.base_url)
    }
}

impl ScanService for HttpScanClient {
    fn upload(&self, path: &Path) -> ApiResult<ScanResult> {
        validate_scan_file(path)?;

        let url = self.upload_url();
        info!(file = %path.display(), "uploading document for scanning");

        let form = multipart::Form::new()
            .file("file", path)
            .map_err(|source| ApiError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| ApiError::transport(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "scan upload failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().map_err(|e| ApiError::decode(&url, e))?;
        parse_scan_result(body)
    }

    fn download(&self, url: &str, destination: &Path) -> ApiResult<PathBuf> {
        debug!(url, destination = %destination.display(), "downloading scan artifact");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ApiError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().map_err(|e| ApiError::transport(url, e))?;

        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ApiError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(destination, &bytes).map_err(|source| ApiError::Io {
            path: destination.to_path_buf(),
            source,
        })?;

        Ok(destination.to_path_buf())
    }
}

/// A scan response is only usable when it names a download URL
pub fn parse_scan_result(body: Value) -> ApiResult<ScanResult> {
    let has_download_url = body
        .get("downloadUrl")
        .and_then(Value::as_str)
        .is_some_and(|url| !url.is_empty());
    if !has_download_url {
        return Err(ApiError::InvalidResponse);
    }

    serde_json::from_value(body).map_err(|_| ApiError::InvalidResponse)
}
