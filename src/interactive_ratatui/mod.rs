use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::api::scan::{HttpScanClient, ScanService as ScanClient};
use crate::api::terminology::{HttpTerminologyClient, TerminologyService};
use crate::config::ApiConfig;
use crate::history::HistoryStore;

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use self::application::{
    debouncer::Debouncer, scan_service::ScanService, search_service::SearchService,
};
use self::constants::*;
use self::domain::models::{DownloadRequest, LookupRequest, Mode, ScanRequest, SearchRequest};
use self::ui::{
    app_state::AppState,
    commands::Command,
    components::{Component, is_exit_prompt},
    events::Message,
    renderer::Renderer,
};

enum SearchJob {
    Search(SearchRequest),
    Lookup(LookupRequest),
}

enum ScanJob {
    Upload(ScanRequest),
    Download(DownloadRequest),
}

pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    history_store: HistoryStore,
    search_jobs: Sender<SearchJob>,
    scan_jobs: Sender<ScanJob>,
    responses: Receiver<Message>,
    search_debouncer: Debouncer<String>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
}

impl InteractiveSearch {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let terminology = HttpTerminologyClient::new(config)
            .context("Failed to create terminology client")?;
        let scan = HttpScanClient::new(config).context("Failed to create scan client")?;

        let mut app = Self::with_services(
            Arc::new(terminology),
            Arc::new(scan),
            HistoryStore::new(config.history_path.clone()),
            config,
        );
        if let Ok(cwd) = std::env::current_dir() {
            app.state.scan.download_dir = cwd;
        }
        Ok(app)
    }

    /// Build the app around arbitrary service implementations. Worker
    /// threads start immediately and exit when the app is dropped.
    pub fn with_services(
        terminology: Arc<dyn TerminologyService>,
        scan: Arc<dyn ScanClient>,
        history_store: HistoryStore,
        config: &ApiConfig,
    ) -> Self {
        let history = history_store.load();
        info!(entries = history.len(), "loaded scan history");

        let (response_tx, responses) = mpsc::channel();
        let search_jobs = start_search_worker(SearchService::new(terminology), response_tx.clone());
        let scan_jobs = start_scan_worker(ScanService::new(scan), response_tx);

        Self {
            state: AppState::with_history(history),
            renderer: Renderer::new(&config.terminology_base_url, &config.scan_base_url),
            history_store,
            search_jobs,
            scan_jobs,
            responses,
            search_debouncer: Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS)),
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;
        let result = self.run_app(&mut terminal);
        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            self.tick(Instant::now());

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_input(key) {
                        break;
                    }
                }
            }
        }
        info!("interactive session ended");
        Ok(())
    }

    /// Apply worker responses and fire any timers that are due
    fn tick(&mut self, now: Instant) {
        while let Ok(message) = self.responses.try_recv() {
            self.handle_message(message);
        }

        if let Some(query) = self.search_debouncer.poll(now) {
            self.handle_message(Message::DebouncedQuery(query));
        }

        if let Some(timer) = self.message_timer {
            if now.saturating_duration_since(timer)
                >= Duration::from_millis(self.message_clear_delay)
            {
                self.message_timer = None;
                self.handle_message(Message::ClearMessage);
            }
        }
    }

    /// Returns true when the app should exit
    fn handle_input(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.ui.message = Some(EXIT_PROMPT.to_string());
            self.message_timer = Some(Instant::now());
            self.message_clear_delay = DOUBLE_CTRL_C_TIMEOUT_SECS * 1000;
            return false;
        }

        if is_exit_prompt(&self.state.ui.message) {
            self.state.ui.message = None;
            self.message_timer = None;
        }

        // Function keys work from every view
        let global = match key.code {
            KeyCode::F(1) if self.state.mode != Mode::Help => Some(Message::ShowHelp),
            KeyCode::F(2) => Some(Message::Navigate(Mode::Search)),
            KeyCode::F(3) => Some(Message::Navigate(Mode::Scan)),
            KeyCode::F(4) => Some(Message::Navigate(Mode::Support)),
            _ => None,
        };
        if let Some(msg) = global {
            self.handle_message(msg);
            return false;
        }

        let message = match self.state.mode {
            Mode::Search => self.handle_search_mode_input(key),
            Mode::Details => self.renderer.get_terminology_card_mut().handle_key(key),
            Mode::Scan => self.renderer.get_scan_panel_mut().handle_key(key),
            Mode::Support => self.renderer.get_support_page_mut().handle_key(key),
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }

        false
    }

    fn handle_search_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => {
                self.renderer.get_suggestion_list_mut().handle_key(key)
            }
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ScheduleSearch(delay) => {
                self.search_debouncer
                    .set_delay(Duration::from_millis(delay));
                self.search_debouncer
                    .schedule(self.state.search.query.clone(), Instant::now());
            }
            Command::CancelScheduledSearch => self.search_debouncer.cancel(),
            Command::ExecuteSearch(request) => {
                self.submit_search_job(SearchJob::Search(request));
            }
            Command::ExecuteLookup(request) => {
                self.submit_search_job(SearchJob::Lookup(request));
            }
            Command::UploadScan(request) => self.submit_scan_job(ScanJob::Upload(request)),
            Command::DownloadArtifact(request) => {
                self.submit_scan_job(ScanJob::Download(request));
            }
            Command::SaveScanHistory(history) => {
                if let Err(e) = self.history_store.save(&history) {
                    warn!(error = %e, "failed to persist scan history");
                    self.show_message(format!("Failed to save scan history: {e}"));
                }
            }
            Command::ClearScanHistory => {
                if let Err(e) = self.history_store.clear() {
                    warn!(error = %e, "failed to remove scan history");
                    self.show_message(format!("Failed to clear scan history: {e}"));
                } else {
                    self.message_timer = Some(Instant::now());
                    self.message_clear_delay = MESSAGE_CLEAR_DELAY_MS;
                }
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
            }
        }
    }

    fn show_message(&mut self, message: String) {
        self.state.ui.message = Some(message);
        self.message_timer = Some(Instant::now());
        self.message_clear_delay = MESSAGE_CLEAR_DELAY_MS;
    }

    fn submit_search_job(&mut self, job: SearchJob) {
        if self.search_jobs.send(job).is_err() {
            warn!("search worker is gone");
            self.state.search.is_loading = false;
            self.state.detail.is_loading = false;
            self.state.search.error = Some(SEARCH_CONNECTION_ERROR.to_string());
        }
    }

    fn submit_scan_job(&mut self, job: ScanJob) {
        if self.scan_jobs.send(job).is_err() {
            warn!("scan worker is gone");
            self.state.scan.is_scanning = false;
            self.state.scan.is_downloading = false;
            self.state.scan.error = Some("Scan service unavailable".to_string());
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn set_download_dir(&mut self, dir: std::path::PathBuf) {
        self.state.scan.download_dir = dir;
    }
}

fn start_search_worker(service: SearchService, responses: Sender<Message>) -> Sender<SearchJob> {
    let (job_tx, job_rx) = mpsc::channel::<SearchJob>();

    thread::spawn(move || {
        while let Ok(job) = job_rx.recv() {
            let message = match job {
                SearchJob::Search(request) => Message::SearchCompleted(service.search(request)),
                SearchJob::Lookup(request) => Message::LookupCompleted(service.lookup(request)),
            };
            if responses.send(message).is_err() {
                break;
            }
        }
    });

    job_tx
}

fn start_scan_worker(service: ScanService, responses: Sender<Message>) -> Sender<ScanJob> {
    let (job_tx, job_rx) = mpsc::channel::<ScanJob>();

    thread::spawn(move || {
        while let Ok(job) = job_rx.recv() {
            let message = match job {
                ScanJob::Upload(request) => Message::ScanCompleted(service.scan(request)),
                ScanJob::Download(request) => Message::DownloadCompleted(service.download(request)),
            };
            if responses.send(message).is_err() {
                break;
            }
        }
    });

    job_tx
}
