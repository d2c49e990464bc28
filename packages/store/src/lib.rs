//! # Store: client-side state for the admin dashboard
//!
//! Everything a collection page needs that is not markup: the records, the
//! backend contract, the filter engine, the add/edit modal state machine,
//! and the async operations that keep a page's snapshot in step with the
//! backend. Nothing here depends on a UI framework, so it is tested natively.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | [`Product`], [`User`] and the [`Record`] / [`Filterable`] traits |
//! | [`error`] | [`BackendError`]: network, validation (4xx) and server (5xx) failures |
//! | [`config`] | [`DashboardConfig`]: where the backend lives |
//! | [`backend`] | The [`Backend`] trait (list/create/update/delete per collection) |
//! | [`filter`] | Case-insensitive title search over a snapshot |
//! | [`modal`] | [`ModalState`]: closed / draft / edit |
//! | [`view`] | [`CollectionView`]: snapshot, query, modal and notice of one page |
//! | [`sync`] | `load`, `submit` and `delete` against a [`Backend`] |

pub mod backend;
pub mod config;
pub mod error;
pub mod filter;
pub mod modal;
pub mod models;
pub mod sync;
pub mod view;

mod memory;
pub use memory::MemoryBackend;

pub use backend::Backend;
pub use config::{ApiConfig, DashboardConfig};
pub use error::BackendError;
pub use filter::filter_records;
pub use modal::{ModalKind, ModalState, Mutation, OpenModal};
pub use models::{format_price, Filterable, Product, Record, User};
pub use sync::{SyncError, ViewAccess};
pub use view::{CollectionView, FetchTicket, Notice, NoticeLevel};
