//! # Mutation modal: the add/edit form lifecycle
//!
//! A page has at most one form open at a time. [`ModalState`] tracks which
//! one, the working copy bound to it, and whether a submission is in
//! flight:
//!
//! ```text
//!            open_draft()              begin_submit()
//!   Closed ───────────────▶ Draft ──────────────────▶ Draft (submitting)
//!     ▲  │   open_edit(r)                                 │        │
//!     │  └──────────────▶ Edit  ── … same as Draft … ─────┤        │
//!     │                                                   │        │
//!     ├──── cancel() ◀── Draft / Edit (idle)              │        │
//!     ├──── submit_succeeded() ◀──────────────────────────┘        │
//!     │                                                            │
//!     └ (stays open, error kept) ◀──── submit_failed(err) ◀────────┘
//! ```
//!
//! The working copy is never merged back into the page's snapshot; after a
//! successful submit the page refetches instead.

use crate::error::BackendError;
use crate::models::Record;

/// Which form is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Draft,
    Edit,
}

/// The form bound to an open modal.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenModal<R> {
    pub kind: ModalKind,
    pub working: R,
    pub submitting: bool,
    pub error: Option<BackendError>,
}

/// Add/edit modal of one collection page.
#[derive(Clone, Debug, PartialEq)]
pub enum ModalState<R> {
    Closed,
    Open(OpenModal<R>),
}

impl<R> Default for ModalState<R> {
    fn default() -> Self {
        Self::Closed
    }
}

/// The backend call a submitted form turns into.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation<R> {
    Create(R),
    Update { id: String, record: R },
}

impl<R: Record> Mutation<R> {
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Update { .. } => "update",
        }
    }
}

impl<R: Record> ModalState<R> {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn kind(&self) -> Option<ModalKind> {
        self.open().map(|m| m.kind)
    }

    pub fn open(&self) -> Option<&OpenModal<R>> {
        match self {
            Self::Open(modal) => Some(modal),
            Self::Closed => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.open().is_some_and(|m| m.submitting)
    }

    /// Open the "Add" form with an empty working copy.
    ///
    /// Refused while another form is open.
    pub fn open_draft(&mut self) -> bool {
        self.open_with(ModalKind::Draft, R::draft())
    }

    /// Open the "Edit" form on a copy of `record`, identifier included.
    ///
    /// Refused while another form is open.
    pub fn open_edit(&mut self, record: &R) -> bool {
        self.open_with(ModalKind::Edit, record.clone())
    }

    fn open_with(&mut self, kind: ModalKind, working: R) -> bool {
        if self.is_open() {
            return false;
        }
        *self = Self::Open(OpenModal {
            kind,
            working,
            submitting: false,
            error: None,
        });
        true
    }

    /// Working copy for form bindings. `None` while closed or submitting.
    pub fn working_mut(&mut self) -> Option<&mut R> {
        match self {
            Self::Open(modal) if !modal.submitting => Some(&mut modal.working),
            _ => None,
        }
    }

    /// Discard the working copy. Refused while a submission is in flight.
    pub fn cancel(&mut self) -> bool {
        if !self.is_open() || self.is_submitting() {
            return false;
        }
        *self = Self::Closed;
        true
    }

    /// Turn the open form into a backend call and mark it in flight.
    ///
    /// Returns `None` when closed or already submitting.
    pub fn begin_submit(&mut self) -> Option<Mutation<R>> {
        let Self::Open(modal) = self else {
            return None;
        };
        if modal.submitting {
            return None;
        }
        modal.submitting = true;
        modal.error = None;
        let record = modal.working.clone();
        Some(match modal.kind {
            ModalKind::Draft => Mutation::Create(record),
            ModalKind::Edit => Mutation::Update {
                id: record.id().to_string(),
                record,
            },
        })
    }

    pub fn submit_succeeded(&mut self) {
        *self = Self::Closed;
    }

    /// Keep the form open with the attempted data and remember why it failed.
    pub fn submit_failed(&mut self, error: BackendError) {
        if let Self::Open(modal) = self {
            modal.submitting = false;
            modal.error = Some(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn widget() -> Product {
        Product {
            id: "1".to_string(),
            title: "Widget".to_string(),
            price: 9.99,
        }
    }

    #[test]
    fn test_draft_opens_with_empty_template() {
        let mut modal = ModalState::<Product>::default();
        assert!(modal.open_draft());
        assert_eq!(modal.kind(), Some(ModalKind::Draft));
        assert_eq!(modal.open().unwrap().working, Product::default());
    }

    #[test]
    fn test_edit_copies_record_including_id() {
        let mut modal = ModalState::default();
        assert!(modal.open_edit(&widget()));
        assert_eq!(modal.kind(), Some(ModalKind::Edit));
        assert_eq!(modal.open().unwrap().working, widget());
    }

    #[test]
    fn test_only_one_modal_at_a_time() {
        let mut modal = ModalState::default();
        modal.open_edit(&widget());
        modal.working_mut().unwrap().title = "Half typed".to_string();

        assert!(!modal.open_draft());
        assert!(!modal.open_edit(&widget()));
        assert_eq!(modal.open().unwrap().working.title, "Half typed");
    }

    #[test]
    fn test_cancel_discards_working_copy() {
        let mut modal = ModalState::<Product>::default();
        modal.open_draft();
        modal.working_mut().unwrap().title = "Scratch".to_string();

        assert!(modal.cancel());
        assert!(!modal.is_open());
        assert!(!modal.cancel());

        modal.open_draft();
        assert_eq!(modal.open().unwrap().working.title, "");
    }

    #[test]
    fn test_submit_draft_is_create() {
        let mut modal = ModalState::<Product>::default();
        modal.open_draft();
        *modal.working_mut().unwrap() = Product::new("New", 5.0);

        let mutation = modal.begin_submit().unwrap();
        assert_eq!(mutation, Mutation::Create(Product::new("New", 5.0)));
        assert_eq!(mutation.verb(), "create");
        assert!(modal.is_submitting());
    }

    #[test]
    fn test_submit_edit_is_update_with_record_id() {
        let mut modal = ModalState::default();
        modal.open_edit(&widget());
        modal.working_mut().unwrap().price = 12.0;

        match modal.begin_submit().unwrap() {
            Mutation::Update { id, record } => {
                assert_eq!(id, "1");
                assert_eq!(record.price, 12.0);
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_in_flight_submit_locks_the_form() {
        let mut modal = ModalState::default();
        modal.open_edit(&widget());
        assert!(modal.begin_submit().is_some());

        assert!(modal.begin_submit().is_none());
        assert!(modal.working_mut().is_none());
        assert!(!modal.cancel());
    }

    #[test]
    fn test_failure_keeps_form_open_with_data() {
        let mut modal = ModalState::default();
        modal.open_edit(&widget());
        modal.working_mut().unwrap().title = "Renamed".to_string();
        modal.begin_submit();

        modal.submit_failed(BackendError::server(500, "boom"));

        let open = modal.open().unwrap();
        assert_eq!(open.working.title, "Renamed");
        assert!(!open.submitting);
        assert_eq!(open.error, Some(BackendError::server(500, "boom")));

        // Retrying clears the error.
        assert!(modal.begin_submit().is_some());
        assert_eq!(modal.open().unwrap().error, None);
    }

    #[test]
    fn test_success_closes() {
        let mut modal = ModalState::<Product>::default();
        modal.open_draft();
        modal.begin_submit();
        modal.submit_succeeded();
        assert_eq!(modal, ModalState::Closed);
    }
}
