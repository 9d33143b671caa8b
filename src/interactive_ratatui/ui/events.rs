use crate::interactive_ratatui::domain::models::{
    DownloadResponse, LookupResponse, Mode, ScanResponse, SearchResponse, SelectionDirection,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Search events
    QueryChanged(String),
    DebouncedQuery(String),
    SearchCompleted(SearchResponse),
    MoveSelection(SelectionDirection),
    ConfirmSelection,
    DismissSuggestions,
    FocusSuggestions,
    LookupCompleted(LookupResponse),

    // Mode changes
    Navigate(Mode),
    BackToSearch,
    ShowHelp,
    CloseHelp,

    // Detail view
    ScrollDetailUp,
    ScrollDetailDown,
    PageDetailUp,
    PageDetailDown,

    // Scan events
    ScanPathChanged(String),
    SubmitScan,
    ScanCompleted(ScanResponse),
    SelectHistory(SelectionDirection),
    ViewHistoryEntry,
    DownloadScanResult,
    DownloadCompleted(DownloadResponse),
    ClearScanHistory,

    // UI events
    ClearMessage,
}
