use async_trait::async_trait;

use crate::api::errors::ApiResult;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// One page of a remote listing, already normalized out of the wire envelope.
///
/// `status_ok == false` carries a business-level failure; transport failures
/// surface as `Err` from the lister instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub status_ok: bool,
    pub message: Option<String>,
}

impl<T> ListPage<T> {
    #[must_use]
    pub fn ok(items: Vec<T>, total_count: usize) -> Self {
        Self {
            items,
            total_count,
            status_ok: true,
            message: None,
        }
    }

    #[must_use]
    pub fn failed(message: Option<String>) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            status_ok: false,
            message,
        }
    }
}

/// Query accepted by the entity listing endpoint.
#[derive(Debug, Clone)]
pub struct EntityListQuery {
    pub entity_type_id: i64,
    pub search: String,
    pub pagination: Option<Pagination>,
}

impl EntityListQuery {
    pub fn new(entity_type_id: i64) -> Self {
        Self {
            entity_type_id,
            search: String::new(),
            pagination: None,
        }
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// The fetch seam the list controller depends on.
///
/// Implementations must be idempotent and side-effect-free on server state.
#[async_trait]
pub trait RemoteLister<T> {
    async fn list(&self, page: usize, page_size: usize) -> ApiResult<ListPage<T>>;
}
