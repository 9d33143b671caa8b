use crate::interactive_ratatui::constants::{MIN_QUERY_CHARS, SEARCH_CONNECTION_ERROR};
use crate::interactive_ratatui::domain::models::{
    SearchRequest, SearchResponse, SelectionDirection,
};
use crate::schemas::terminology::Terminology;
use tracing::debug;

/// Query text, suggestion list and selection for the search view.
///
/// Only the newest issued request id is accepted back; anything older is
/// dropped in [`SearchState::on_search_completed`].
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub suggestions: Vec<Terminology>,
    pub selected_index: Option<usize>,
    pub panel_visible: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    pub current_search_id: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, text: String) {
        self.query = text;
    }

    /// Returns the request to send, or `None` when the query is too short to
    /// search.
    pub fn on_debounced_query_change(&mut self, value: &str) -> Option<SearchRequest> {
        let trimmed = value.trim();
        self.current_search_id += 1;

        if trimmed.chars().count() < MIN_QUERY_CHARS {
            self.suggestions.clear();
            self.panel_visible = false;
            self.selected_index = None;
            self.is_loading = false;
            return None;
        }

        self.is_loading = true;
        self.error = None;
        debug!(id = self.current_search_id, query = trimmed, "search issued");

        Some(SearchRequest {
            id: self.current_search_id,
            query: trimmed.to_string(),
        })
    }

    /// Applies a worker response. Returns false when the response was stale.
    pub fn on_search_completed(&mut self, response: SearchResponse) -> bool {
        if response.id != self.current_search_id {
            debug!(
                id = response.id,
                current = self.current_search_id,
                "dropping stale search response"
            );
            return false;
        }

        self.is_loading = false;
        match response.results {
            Ok(results) => {
                self.panel_visible = !results.is_empty();
                self.selected_index = if results.is_empty() { None } else { Some(0) };
                self.suggestions = results;
            }
            Err(_) => {
                self.suggestions.clear();
                self.panel_visible = false;
                self.selected_index = None;
                self.error = Some(SEARCH_CONNECTION_ERROR.to_string());
            }
        }
        true
    }

    pub fn move_selection(&mut self, direction: SelectionDirection) {
        if !self.panel_visible || self.suggestions.is_empty() {
            return;
        }

        let last = self.suggestions.len() - 1;
        self.selected_index = Some(match (direction, self.selected_index) {
            (SelectionDirection::Next, Some(i)) if i < last => i + 1,
            (SelectionDirection::Next, _) => 0,
            (SelectionDirection::Prev, Some(i)) if i > 0 && i <= last => i - 1,
            (SelectionDirection::Prev, _) => last,
        });
    }

    /// The suggestion under the cursor, if the selection points at one
    pub fn confirm_selection(&self) -> Option<Terminology> {
        self.selected_index
            .and_then(|i| self.suggestions.get(i))
            .cloned()
    }

    pub fn dismiss(&mut self) {
        self.panel_visible = false;
        self.selected_index = None;
    }

    pub fn hide_panel(&mut self) {
        self.panel_visible = false;
    }

    pub fn focus_with_existing_results(&mut self) {
        if !self.suggestions.is_empty() {
            self.panel_visible = true;
            self.selected_index = Some(0);
        }
    }

    /// Clears everything and invalidates any search still in flight.
    pub fn reset(&mut self) {
        let next_id = self.current_search_id + 1;
        *self = Self {
            current_search_id: next_id,
            ..Self::default()
        };
    }
}
