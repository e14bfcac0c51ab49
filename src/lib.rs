//! # Paymill API Rust Client
//!
//! A Rust client for the Paymill payment-processing REST API, providing
//! typed resource models, validated request building, and generic CRUD
//! operations over an authenticated HTTP client.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`PaymillConfig`] and [`PaymillConfigBuilder`]
//! - Validated newtypes for the API key and endpoint
//! - Typed resource models (transactions, clients, payments, offers,
//!   subscriptions, refunds, preauthorizations) with closed status
//!   enumerations
//! - Generic `show`/`create`/`update`/`delete`/`list` operations via the
//!   [`Resource`](rest::Resource) trait
//! - Fluent filter and order builders translating typed query intents into
//!   wire parameters
//! - Fail-fast argument validation before any network I/O
//!
//! ## Quick Start
//!
//! ```rust
//! use paymill_api::{ApiKey, HttpClient, PaymillConfig};
//!
//! // Create configuration using the builder pattern
//! let config = PaymillConfig::builder()
//!     .api_key(ApiKey::new("sk_test_1234").unwrap())
//!     .build()
//!     .unwrap();
//!
//! // One client instance, passed by reference into every operation
//! let client = HttpClient::new(&config);
//! ```
//!
//! ## Creating and Charging
//!
//! ```rust,ignore
//! use paymill_api::rest::Resource;
//! use paymill_api::rest::resources::{CreateTransaction, Fee, Transaction};
//!
//! let transaction = Transaction::create(
//!     &client,
//!     CreateTransaction::with_token("098f6bcd4621d373cade4e832627b4f6", 4200, "EUR")
//!         .description("order 42")
//!         .fee(Fee::new(420, "pay_3af44644dd6d25c820a8")),
//! )
//! .await?
//! .expect("transaction envelope");
//!
//! println!("charged: {:?}", transaction.status);
//! ```
//!
//! ## Listing with Filters
//!
//! ```rust,ignore
//! use paymill_api::rest::{Page, Resource};
//! use paymill_api::rest::resources::{Transaction, TransactionStatus};
//!
//! let list = Transaction::list(
//!     &client,
//!     Some(Transaction::filter()
//!         .by_amount_greater_than(1000)
//!         .by_status(TransactionStatus::Closed)),
//!     Some(Transaction::order().by_created_at().desc()),
//!     Some(Page::new().count(20)),
//! )
//! .await?;
//!
//! println!("{} of {} transactions", list.len(), list.total_count());
//! ```
//!
//! ## Partial Updates
//!
//! Each resource declares its updateable fields; `update` sends exactly the
//! declared fields that hold a value, addressed by the instance's id.
//!
//! ```rust,ignore
//! let mut transaction = Transaction::show(&client, &Transaction::with_id("tran_123"))
//!     .await?
//!     .expect("transaction envelope");
//! transaction.description = Some("paid in full".to_string());
//! let updated = transaction.update(&client).await?;
//! ```
//!
//! ## Error Handling
//!
//! Three failure classes, kept strictly apart (see
//! [`ResourceError`](rest::ResourceError)): invalid arguments fail locally
//! before any request is made; API rejections carry the server's error
//! payload verbatim; transport and parse failures are internal errors and
//! never masked as domain errors.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Arguments are checked before any network call
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **One request per call**: No retries, batching, or caching

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use clients::{HttpClient, HttpError, HttpResponse};
pub use config::{ApiEndpoint, ApiKey, PaymillConfig, PaymillConfigBuilder};
pub use error::ConfigError;

// Re-export the resource infrastructure
pub use rest::{
    Operation, Page, ParamList, QueryParams, Resource, ResourceError, ResourceList,
    ValidationError,
};
