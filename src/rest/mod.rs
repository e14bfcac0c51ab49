//! REST resource infrastructure.
//!
//! This module is the core of the crate:
//!
//! - **[`Resource`] trait**: generic `show`/`create`/`update`/`delete`/`list`
//!   operations, parameterized by a path segment and per-resource parameter
//!   mappings
//! - **[`ParamList`] / [`QueryParams`] / [`CreateParams`]**: static wire
//!   parameter declarations replacing runtime field introspection
//! - **[`validate`]**: fail-fast argument validation, run before any I/O
//! - **[`envelope`]**: uniform `{data}`/`{error}` response unwrapping and the
//!   [`ResourceList`] collection wrapper
//! - **[`ResourceError`]**: the error taxonomy (validation / API / transport)
//! - **[`resources`]**: the per-resource model implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use paymill_api::rest::{Page, Resource};
//! use paymill_api::rest::resources::{CreateTransaction, Transaction};
//!
//! let transaction = Transaction::create(
//!     &client,
//!     CreateTransaction::with_token("tok_123", 4200, "EUR").description("order 42"),
//! )
//! .await?
//! .expect("create returns the new transaction");
//!
//! let same = Transaction::show(&client, &transaction).await?;
//! ```

pub mod envelope;
mod errors;
mod params;
mod resource;
pub mod validate;

pub mod resources;

// Public exports
pub use envelope::ResourceList;
pub use errors::ResourceError;
pub use params::{date_range, CreateParams, ParamList, QueryParams, SortOrder};
pub use resource::{Operation, Page, Resource};
pub use validate::ValidationError;
