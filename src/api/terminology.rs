use crate::api::error::{ApiError, ApiResult};
use crate::config::ApiConfig;
use crate::schemas::terminology::{Terminology, suggestions_from_body};
use reqwest::blocking::{Client, Response};
use serde_json::Value;
use tracing::{debug, warn};

/// The remote terminology service as consumed by the search coordinator
pub trait TerminologyService: Send + Sync {
    /// Text search; fails on transport errors and non-success statuses
    fn search(&self, query: &str) -> ApiResult<Vec<Terminology>>;

    /// Direct lookup of one record by NAMASTE code
    fn lookup(&self, code: &str) -> ApiResult<Terminology>;

    /// Search, falling back to a direct lookup that treats the query as a
    /// code when the search comes back empty.
    ///
    /// A failing search propagates; a failing fallback lookup yields an empty
    /// list.
    fn enhanced_search(&self, query: &str) -> ApiResult<Vec<Terminology>> {
        let results = self.search(query)?;
        if !results.is_empty() {
            return Ok(results);
        }

        match self.lookup(query) {
            Ok(record) => Ok(vec![record]),
            Err(e) => {
                debug!(query, error = %e, "direct lookup fallback found nothing");
                Ok(Vec::new())
            }
        }
    }
}

pub struct HttpTerminologyClient {
    client: Client,
    base_url: String,
}

impl HttpTerminologyClient {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::transport(&config.terminology_base_url, e))?;

        Ok(Self {
            client,
            base_url: config.terminology_base_url.clone(),
        })
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }

    pub fn lookup_url(&self, code: &str) -> String {
        format!("{}/lookup/{}", self.base_url, urlencoding::encode(code))
    }

    fn read_json(url: &str, response: Response) -> ApiResult<Value> {
        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "terminology service returned an error");
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .map_err(|e| ApiError::decode(url, e))
    }
}

impl TerminologyService for HttpTerminologyClient {
    fn search(&self, query: &str) -> ApiResult<Vec<Terminology>> {
        let url = self.search_url();
        debug!(query, "searching terminology");

        let response = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .map_err(|e| ApiError::transport(&url, e))?;

        let body = Self::read_json(&url, response)?;
        Ok(suggestions_from_body(body))
    }

    fn lookup(&self, code: &str) -> ApiResult<Terminology> {
        let url = self.lookup_url(code);
        debug!(code, "looking up terminology");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ApiError::transport(&url, e))?;

        let body = Self::read_json(&url, response)?;
        serde_json::from_value(body).map_err(|e| ApiError::decode(&url, e))
    }
}
