//! # API crate: the dashboard's REST backend
//!
//! Connects the platform-independent [`store`] crate to the real backend.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`RestBackend`]: `store::Backend` over `reqwest`, mapping HTTP failures onto `store::BackendError` |
//! | [`config`] | Resolves the backend address from `dashboard.toml` and `DASHBOARD_API_URL` |

pub mod client;
pub mod config;

pub use client::RestBackend;
pub use config::load_config;

pub use store::{BackendError, DashboardConfig, Product, User};
