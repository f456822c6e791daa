pub mod endpoints;
mod error;
mod macros;
pub mod repositories;

pub use crate::error::{ContasApiError, ErrorResponse};
use endpoints::EntryKind;
use repositories::*;
use tower_api_client::{Client as ApiClient, Request as ApiRequest};

/// Address of the backend when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

pub struct Client {
    inner: ApiClient,
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: ApiClient::new(base_url.trim_end_matches('/')),
        }
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, ContasApiError>
    where
        R: ApiRequest,
    {
        self.inner.send(request).await.map_err(From::from)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

pub struct Request;

impl Request {
    pub fn new() -> Self {
        Self {}
    }

    pub fn entries(kind: EntryKind) -> EntryRepository {
        EntryRepository::new(kind)
    }

    pub fn purchases() -> EntryRepository {
        EntryRepository::new(EntryKind::Purchase)
    }

    pub fn bills() -> EntryRepository {
        EntryRepository::new(EntryKind::Bill)
    }

    pub fn reports() -> ReportRepository {
        ReportRepository::new()
    }

    pub fn categories() -> CategoryRepository {
        CategoryRepository::new()
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::new()
    }
}
