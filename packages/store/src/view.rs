//! Per-page state of one collection.

use crate::error::BackendError;
use crate::filter::filter_records;
use crate::modal::ModalState;
use crate::models::{Filterable, Record};

/// Severity of a [`Notice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A dismissable message shown above the table.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Error notice for a failed `action` ("load products", "delete user 3").
    pub fn from_error(action: &str, error: &BackendError) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: error.title().to_string(),
            message: format!("Could not {action}: {error}"),
        }
    }
}

/// Identifies one fetch; only the newest ticket may replace the snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Everything a collection page owns: the last fetched snapshot, the search
/// query, the add/edit modal and the current notice.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionView<R> {
    snapshot: Vec<R>,
    pub query: String,
    pub modal: ModalState<R>,
    notice: Option<Notice>,
    generation: u64,
    loading: bool,
    loaded: bool,
}

impl<R> Default for CollectionView<R> {
    fn default() -> Self {
        Self {
            snapshot: Vec::new(),
            query: String::new(),
            modal: ModalState::Closed,
            notice: None,
            generation: 0,
            loading: false,
            loaded: false,
        }
    }
}

impl<R: Record> CollectionView<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &[R] {
        &self.snapshot
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.snapshot.iter().find(|r| r.id() == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether at least one fetch has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Start a fetch. Any ticket issued earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket(self.generation)
    }

    /// Apply a fetch result if `ticket` is still the newest.
    ///
    /// On success the snapshot is replaced in full. On failure the previous
    /// snapshot stays and an error notice is raised. Returns whether the
    /// result was applied.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<R>, BackendError>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(records) => {
                self.snapshot = records;
                self.loaded = true;
            }
            Err(err) => {
                self.notify(Notice::from_error(&format!("load {}", R::COLLECTION), &err));
            }
        }
        true
    }
}

impl<R: Record + Filterable> CollectionView<R> {
    /// Snapshot narrowed by the current query.
    pub fn filtered(&self) -> Vec<R> {
        filter_records(&self.snapshot, &self.query)
    }
}
