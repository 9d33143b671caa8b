use crate::api::scan::validate_scan_file;
use crate::formatters::terminology_formatter::detail_line_count;
use crate::history::ScanHistory;
use crate::interactive_ratatui::constants::*;
use crate::interactive_ratatui::domain::models::{
    DownloadRequest, LookupRequest, ScanRequest, ScanView, SelectionDirection,
};
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::events::Message;
use crate::interactive_ratatui::ui::search_coordinator::SearchState;
use crate::interactive_ratatui::ui::selection_resolver::{Resolution, resolve};
use crate::schemas::terminology::Terminology;
use std::path::PathBuf;
use tracing::{debug, info};

// Re-export Mode
pub use crate::interactive_ratatui::domain::models::Mode;

pub struct AppState {
    pub mode: Mode,
    /// View to return to when the help overlay closes
    pub previous_mode: Option<Mode>,
    pub search: SearchState,
    pub detail: DetailState,
    pub scan: ScanState,
    pub ui: UiState,
}

#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub current: Option<Terminology>,
    pub is_loading: bool,
    pub current_lookup_id: u64,
    pub scroll_offset: usize,
}

#[derive(Debug, Clone)]
pub struct ScanState {
    pub file_input: String,
    pub is_scanning: bool,
    pub is_downloading: bool,
    pub view: Option<ScanView>,
    pub error: Option<String>,
    pub history: ScanHistory,
    pub selected_history: Option<usize>,
    pub current_scan_id: u64,
    pub download_dir: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_history(ScanHistory::new())
    }

    pub fn with_history(history: ScanHistory) -> Self {
        Self {
            mode: Mode::Search,
            previous_mode: None,
            search: SearchState::new(),
            detail: DetailState::default(),
            scan: ScanState {
                file_input: String::new(),
                is_scanning: false,
                is_downloading: false,
                view: None,
                error: None,
                history,
                selected_history: None,
                current_scan_id: 0,
                download_dir: PathBuf::from("."),
            },
            ui: UiState::default(),
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                self.search.set_query(q);
                Command::ScheduleSearch(SEARCH_DEBOUNCE_MS)
            }
            Message::DebouncedQuery(q) => match self.search.on_debounced_query_change(&q) {
                Some(request) => Command::ExecuteSearch(request),
                None => Command::None,
            },
            Message::SearchCompleted(response) => {
                self.search.on_search_completed(response);
                Command::None
            }
            Message::MoveSelection(direction) => {
                self.search.move_selection(direction);
                Command::None
            }
            Message::ConfirmSelection => self.confirm_selection(),
            Message::DismissSuggestions => {
                self.search.dismiss();
                Command::None
            }
            Message::FocusSuggestions => {
                self.search.focus_with_existing_results();
                Command::None
            }
            Message::LookupCompleted(response) => {
                if response.id != self.detail.current_lookup_id {
                    debug!(
                        id = response.id,
                        current = self.detail.current_lookup_id,
                        "dropping stale lookup response"
                    );
                    return Command::None;
                }
                self.detail.is_loading = false;
                match response.detail {
                    Ok(record) => self.show_detail(record),
                    Err(_) => self.search.error = Some(LOOKUP_FAILED_ERROR.to_string()),
                }
                Command::None
            }
            Message::Navigate(mode) => match mode {
                Mode::Help => self.update(Message::ShowHelp),
                // Only reachable by resolving a suggestion
                Mode::Details => Command::None,
                target => self.navigate_to(target),
            },
            Message::BackToSearch => self.navigate_to(Mode::Search),
            Message::ShowHelp => {
                if self.mode != Mode::Help {
                    self.previous_mode = Some(self.mode);
                    self.mode = Mode::Help;
                }
                Command::None
            }
            Message::CloseHelp => {
                if self.mode == Mode::Help {
                    self.mode = self.previous_mode.take().unwrap_or(Mode::Search);
                }
                Command::None
            }
            Message::ScrollDetailUp => {
                self.detail.scroll_offset = self.detail.scroll_offset.saturating_sub(1);
                Command::None
            }
            Message::ScrollDetailDown => {
                self.detail.scroll_offset = self
                    .detail
                    .scroll_offset
                    .saturating_add(1)
                    .min(self.max_detail_scroll());
                Command::None
            }
            Message::PageDetailUp => {
                self.detail.scroll_offset = self.detail.scroll_offset.saturating_sub(PAGE_SIZE);
                Command::None
            }
            Message::PageDetailDown => {
                self.detail.scroll_offset = self
                    .detail
                    .scroll_offset
                    .saturating_add(PAGE_SIZE)
                    .min(self.max_detail_scroll());
                Command::None
            }
            Message::ScanPathChanged(path) => {
                self.scan.file_input = path;
                Command::None
            }
            Message::SubmitScan => self.submit_scan(),
            Message::ScanCompleted(response) => {
                if response.id != self.scan.current_scan_id {
                    debug!(id = response.id, "dropping stale scan response");
                    return Command::None;
                }
                self.scan.is_scanning = false;
                match response.outcome {
                    Ok(entry) => {
                        info!(file = %entry.file_name, "scan recorded in history");
                        self.scan.view = Some(ScanView {
                            file_name: entry.file_name.clone(),
                            result: entry.result.clone(),
                        });
                        self.scan.history.push(entry);
                        self.scan.selected_history = Some(0);
                        Command::SaveScanHistory(self.scan.history.clone())
                    }
                    Err(e) => {
                        self.scan.error = Some(e);
                        Command::None
                    }
                }
            }
            Message::SelectHistory(direction) => {
                let len = self.scan.history.len();
                if len > 0 {
                    let last = len - 1;
                    self.scan.selected_history = Some(match (direction, self.scan.selected_history)
                    {
                        (SelectionDirection::Next, Some(i)) if i < last => i + 1,
                        (SelectionDirection::Next, _) => 0,
                        (SelectionDirection::Prev, Some(i)) if i > 0 && i <= last => i - 1,
                        (SelectionDirection::Prev, _) => last,
                    });
                }
                Command::None
            }
            Message::ViewHistoryEntry => {
                if let Some(entry) = self
                    .scan
                    .selected_history
                    .and_then(|i| self.scan.history.get(i))
                {
                    self.scan.view = Some(ScanView {
                        file_name: entry.file_name.clone(),
                        result: entry.result.clone(),
                    });
                    self.scan.error = None;
                }
                Command::None
            }
            Message::DownloadScanResult => self.download_current(),
            Message::DownloadCompleted(response) => {
                self.scan.is_downloading = false;
                match response.outcome {
                    Ok(path) => {
                        self.ui.message = Some(format!("Saved {}", path.display()));
                        Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
                    }
                    Err(e) => {
                        self.scan.error = Some(e);
                        Command::None
                    }
                }
            }
            Message::ClearScanHistory => {
                self.scan.history.clear();
                self.scan.selected_history = None;
                self.ui.message = Some("Scan history cleared".to_string());
                Command::ClearScanHistory
            }
            Message::ClearMessage => {
                self.ui.message = None;
                Command::None
            }
        }
    }

    fn confirm_selection(&mut self) -> Command {
        let Some(suggestion) = self.search.confirm_selection() else {
            return Command::None;
        };

        match resolve(&suggestion) {
            Err(e) => {
                self.search.error = Some(e.to_string());
                Command::None
            }
            Ok(resolution) => {
                self.search.hide_panel();
                match resolution {
                    Resolution::Ready(record) => {
                        self.show_detail(record);
                        Command::None
                    }
                    Resolution::Fetch(code) => {
                        self.detail.current_lookup_id += 1;
                        self.detail.is_loading = true;
                        Command::ExecuteLookup(LookupRequest {
                            id: self.detail.current_lookup_id,
                            code,
                        })
                    }
                }
            }
        }
    }

    /// Last offset that still shows a line of the current record
    fn max_detail_scroll(&self) -> usize {
        self.detail
            .current
            .as_ref()
            .map_or(0, |record| detail_line_count(record).saturating_sub(1))
    }

    fn show_detail(&mut self, record: Terminology) {
        self.detail.current = Some(record);
        self.detail.scroll_offset = 0;
        self.mode = Mode::Details;
    }

    /// Explicit navigation between top-level views. Search and detail state
    /// are reset and in-flight searches and lookups are invalidated; scan
    /// state is kept.
    fn navigate_to(&mut self, target: Mode) -> Command {
        self.search.reset();
        let next_lookup = self.detail.current_lookup_id + 1;
        self.detail = DetailState {
            current_lookup_id: next_lookup,
            ..DetailState::default()
        };
        self.previous_mode = None;
        self.mode = target;
        Command::CancelScheduledSearch
    }

    fn submit_scan(&mut self) -> Command {
        if self.scan.is_scanning {
            return Command::None;
        }

        let input = self.scan.file_input.trim();
        if input.is_empty() {
            self.scan.error = Some("Please select a file first".to_string());
            return Command::None;
        }

        let path = PathBuf::from(input);
        if let Err(e) = validate_scan_file(&path) {
            self.scan.error = Some(e.to_string());
            return Command::None;
        }

        self.scan.is_scanning = true;
        self.scan.view = None;
        self.scan.error = None;
        self.scan.current_scan_id += 1;
        Command::UploadScan(ScanRequest {
            id: self.scan.current_scan_id,
            path,
        })
    }

    fn download_current(&mut self) -> Command {
        if self.scan.is_downloading {
            return Command::None;
        }

        let target = match &self.scan.view {
            Some(view) => Some((view.result.download_url.clone(), view.file_name.clone())),
            None => self
                .scan
                .selected_history
                .and_then(|i| self.scan.history.get(i))
                .map(|entry| (entry.download_url.clone(), entry.file_name.clone())),
        };

        let Some((url, file_name)) = target else {
            self.ui.message = Some("Nothing to download".to_string());
            return Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS);
        };

        self.scan.is_downloading = true;
        self.ui.message = Some(format!("Downloading {file_name}..."));
        Command::DownloadArtifact(DownloadRequest {
            url,
            destination: self.scan.download_dir.join(file_name),
        })
    }
}
