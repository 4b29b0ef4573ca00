//! Client-side paginated list controller.
//!
//! Owns the list view state and mediates between renderer intents and a
//! [`RemoteLister`]: fetch one page, expose loading/error/empty states,
//! filter the loaded page locally, and reset pagination on page-size
//! changes. Every refresh carries a sequence number so a completion that
//! is no longer the latest issued request is discarded instead of
//! overwriting newer state.

use std::time::Duration;

use crate::api::errors::ApiResult;
use crate::api::{ListPage, RemoteLister};
use crate::domain::Searchable;

pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Short smoothing delay between fetch completion and the loading flag
/// dropping, so fast responses do not flash the loading indicator.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);
const FETCH_FALLBACK_ERROR: &str = "Failed to fetch records";

/// Snapshot of the list view: the current page of items plus pagination,
/// search, and fetch-cycle flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub search_term: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> ListState<T> {
    fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            page_size,
            total_pages: 1,
            search_term: String::new(),
            is_loading: false,
            error: None,
        }
    }
}

/// Handle for one in-flight fetch. A ticket older than the latest issued
/// one is stale and its completion gets dropped.
#[derive(Debug, Clone, Copy)]
pub struct FetchTicket {
    seq: u64,
    pub page: usize,
    pub page_size: usize,
}

/// Callback invoked after every state transition.
pub type Observer<T> = Box<dyn FnMut(&ListState<T>) + Send>;

pub struct ListController<T, L> {
    lister: L,
    state: ListState<T>,
    latest_seq: u64,
    settle_delay: Duration,
    observers: Vec<Observer<T>>,
}

impl<T, L> ListController<T, L>
where
    T: Searchable + PartialEq,
    L: RemoteLister<T>,
{
    pub fn new(lister: L) -> Self {
        Self {
            lister,
            state: ListState::new(DEFAULT_PAGE_SIZE),
            latest_seq: 0,
            settle_delay: DEFAULT_SETTLE_DELAY,
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        if page_size > 0 {
            self.state.page_size = page_size;
        }
        self
    }

    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn subscribe(&mut self, observer: Observer<T>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    /// The view became visible: start over from the first page.
    pub async fn open(&mut self) {
        self.state.current_page = 1;
        self.refresh().await;
    }

    /// Fetches the current page. Exactly one lister call per invocation.
    pub async fn refresh(&mut self) {
        let ticket = self.begin_refresh();
        let outcome = self.lister.list(ticket.page, ticket.page_size).await;
        if !self.settle_delay.is_zero() {
            tokio::time::sleep(self.settle_delay).await;
        }
        self.complete_refresh(ticket, outcome);
    }

    /// Marks a fetch as started and returns its ticket. Drivers that
    /// pipeline requests call this and [`Self::complete_refresh`] directly;
    /// [`Self::refresh`] composes the two.
    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.state.is_loading = true;
        self.state.error = None;
        self.notify();
        FetchTicket {
            seq: self.latest_seq,
            page: self.state.current_page,
            page_size: self.state.page_size,
        }
    }

    /// Applies a fetch outcome. Returns `false` without touching state when
    /// the ticket is stale, i.e. a newer refresh was issued meanwhile.
    pub fn complete_refresh(
        &mut self,
        ticket: FetchTicket,
        outcome: ApiResult<ListPage<T>>,
    ) -> bool {
        if ticket.seq != self.latest_seq {
            return false;
        }

        match outcome {
            Ok(page) if page.status_ok => {
                // Skip the replacement when nothing changed so observers
                // comparing snapshots see a stable value.
                if self.state.items != page.items {
                    self.state.items = page.items;
                }
                self.state.total_pages = total_pages(page.total_count, ticket.page_size);
                if self.state.current_page > self.state.total_pages {
                    self.state.current_page = self.state.total_pages;
                }
            }
            Ok(page) => {
                let message = page
                    .message
                    .unwrap_or_else(|| FETCH_FALLBACK_ERROR.to_string());
                self.fail(message);
            }
            Err(err) => self.fail(err.to_string()),
        }

        self.state.is_loading = false;
        self.notify();
        true
    }

    /// Invalidates every in-flight ticket and drops the loading flag.
    pub fn cancel(&mut self) {
        self.latest_seq += 1;
        if self.state.is_loading {
            self.state.is_loading = false;
            self.notify();
        }
    }

    /// Moves to page `page` and refreshes; out-of-range values are ignored.
    pub async fn set_page(&mut self, page: usize) {
        if page == 0 || page > self.state.total_pages {
            return;
        }
        self.state.current_page = page;
        self.refresh().await;
    }

    /// Changes the page size, resets to the first page, and refreshes.
    pub async fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            return;
        }
        self.state.page_size = page_size;
        self.state.current_page = 1;
        self.refresh().await;
    }

    /// Local-only filtering; never triggers a network call.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
        self.notify();
    }

    /// The loaded items that match the search term, case-insensitively,
    /// as a substring of name, code, or description.
    pub fn visible_items(&self) -> Vec<&T> {
        let term = self.state.search_term.to_lowercase();
        self.state
            .items
            .iter()
            .filter(|item| {
                term.is_empty()
                    || item.name().to_lowercase().contains(&term)
                    || item.code().to_lowercase().contains(&term)
                    || item
                        .description()
                        .is_some_and(|d| d.to_lowercase().contains(&term))
            })
            .collect()
    }

    fn fail(&mut self, message: String) {
        self.state.error = Some(message);
        self.state.items.clear();
    }

    fn notify(&mut self) {
        let state = &self.state;
        for observer in self.observers.iter_mut() {
            observer(state);
        }
    }
}

fn total_pages(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size).max(1)
}
