pub mod error;
pub mod scan;
pub mod terminology;

#[cfg(test)]
mod scan_test;

pub use error::{ApiError, ApiResult};
pub use scan::{HttpScanClient, ScanService, validate_scan_file};
pub use terminology::{HttpTerminologyClient, TerminologyService};
