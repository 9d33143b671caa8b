pub mod scan;
pub mod terminology;

#[cfg(test)]
mod scan_test;

pub use scan::{ScanHistoryEntry, ScanResult};
pub use terminology::{DoshaInvolvement, Icd11Mappings, Terminology, WhoTerminology};
