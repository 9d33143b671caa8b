use crate::history::ScanHistory;
use crate::interactive_ratatui::domain::models::{
    DownloadRequest, LookupRequest, ScanRequest, SearchRequest,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ScheduleSearch(u64), // delay in milliseconds
    CancelScheduledSearch,
    ExecuteSearch(SearchRequest),
    ExecuteLookup(LookupRequest),
    UploadScan(ScanRequest),
    DownloadArtifact(DownloadRequest),
    SaveScanHistory(ScanHistory),
    ClearScanHistory,
    ScheduleClearMessage(u64), // delay in milliseconds
}
