use crate::api::terminology::TerminologyService;
use crate::interactive_ratatui::domain::models::{
    LookupRequest, LookupResponse, SearchRequest, SearchResponse,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Runs search and lookup requests against the terminology service on behalf
/// of the worker thread
pub struct SearchService {
    terminology: Arc<dyn TerminologyService>,
}

impl SearchService {
    pub fn new(terminology: Arc<dyn TerminologyService>) -> Self {
        Self { terminology }
    }

    pub fn search(&self, request: SearchRequest) -> SearchResponse {
        debug!(id = request.id, query = %request.query, "executing search");

        let results = self
            .terminology
            .enhanced_search(&request.query)
            .map_err(|e| {
                warn!(id = request.id, error = %e, "search failed");
                e.to_string()
            });

        SearchResponse {
            id: request.id,
            results,
        }
    }

    pub fn lookup(&self, request: LookupRequest) -> LookupResponse {
        debug!(id = request.id, code = %request.code, "executing lookup");

        let detail = self.terminology.lookup(&request.code).map_err(|e| {
            warn!(id = request.id, error = %e, "lookup failed");
            e.to_string()
        });

        LookupResponse {
            id: request.id,
            detail,
        }
    }
}
