#[cfg(test)]
mod tests {
    use super::super::search_service::*;
    use crate::api::error::{ApiError, ApiResult};
    use crate::api::terminology::TerminologyService;
    use crate::interactive_ratatui::domain::models::{LookupRequest, SearchRequest};
    use crate::schemas::Terminology;
    use std::sync::{Arc, Mutex};

    struct RecordingService {
        fail: bool,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingService {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                fail,
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    impl TerminologyService for RecordingService {
        fn search(&self, query: &str) -> ApiResult<Vec<Terminology>> {
            self.calls.lock().unwrap().push(format!("search:{query}"));
            if self.fail {
                return Err(ApiError::Status { status: 502 });
            }
            Ok(vec![Terminology {
                namaste_code: Some("AYUR001".to_string()),
                ..Default::default()
            }])
        }

        fn lookup(&self, code: &str) -> ApiResult<Terminology> {
            self.calls.lock().unwrap().push(format!("lookup:{code}"));
            if self.fail {
                return Err(ApiError::Status { status: 404 });
            }
            Ok(Terminology {
                namaste_code: Some(code.to_string()),
                definition: Some("detail".to_string()),
                ..Default::default()
            })
        }
    }

    #[test]
    fn test_search_propagates_request_id() {
        let backend = RecordingService::new(false);
        let service = SearchService::new(backend.clone());

        for id in [1, 42, 999] {
            let response = service.search(SearchRequest {
                id,
                query: "jwara".to_string(),
            });
            assert_eq!(response.id, id);
            assert_eq!(response.results.unwrap().len(), 1);
        }
        assert_eq!(backend.calls.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_search_failure_becomes_message() {
        let service = SearchService::new(RecordingService::new(true));

        let response = service.search(SearchRequest {
            id: 7,
            query: "jwara".to_string(),
        });

        assert_eq!(response.id, 7);
        assert_eq!(response.results, Err("HTTP error! status: 502".to_string()));
    }

    #[test]
    fn test_lookup_uses_code() {
        let backend = RecordingService::new(false);
        let service = SearchService::new(backend.clone());

        let response = service.lookup(LookupRequest {
            id: 3,
            code: "AYUR777".to_string(),
        });

        assert_eq!(response.id, 3);
        assert_eq!(response.detail.unwrap().code(), Some("AYUR777"));
        assert_eq!(*backend.calls.lock().unwrap(), vec!["lookup:AYUR777"]);
    }

    #[test]
    fn test_lookup_failure_becomes_message() {
        let service = SearchService::new(RecordingService::new(true));

        let response = service.lookup(LookupRequest {
            id: 4,
            code: "AYUR404".to_string(),
        });

        assert!(response.detail.is_err());
    }
}
