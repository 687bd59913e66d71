//! Billfold is the storage-backed core of a personal finance app.
//!
//! It keeps track of the signed-in user and turns locally persisted
//! transaction lists into the view models the app renders: the dashboard's
//! highlight cards and transaction list, and the monthly per-category
//! expense breakdown.
//!
//! Everything hangs off two collaborators, both injected explicitly:
//!
//! - a [KeyValueStore]: an async get/set/remove store of serialized text
//!   blobs, one key per logical entity ([MemoryStore] and
//!   [stores::JsonFileStore] ship with the crate);
//! - an [auth::IdentityProvider]: the external OAuth SDK that produces a
//!   [auth::ProviderIdentity], normalized into a [User] at the boundary.
//!
//! A [Session] persists the active [User] across restarts; the aggregation
//! functions ([dashboard::load_dashboard], [summary::summarize_by_category],
//! [transaction::load_transactions]) recompute their view models from the
//! store on every call. Storage read failures degrade to empty view models
//! so a screen always has something renderable; amounts are summed as
//! [rust_decimal::Decimal] so totals stay exact.

#![warn(missing_docs)]

pub mod auth;
pub mod category;
pub mod dashboard;
pub mod format;
pub mod keys;
pub mod logging;
pub mod stores;
pub mod summary;
pub mod transaction;
pub mod user;

pub use auth::{AuthError, Session, SessionState};
pub use format::FormatConfig;
pub use stores::{KeyValueStore, MemoryStore, StoreError};
pub use user::{User, UserID};
