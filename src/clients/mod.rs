//! HTTP client infrastructure.
//!
//! This module provides the transport layer used by every resource
//! operation:
//!
//! - [`HttpClient`]: authenticated reqwest wrapper (basic auth, form bodies,
//!   query strings, JSON parsing)
//! - [`HttpResponse`]: status code plus raw JSON body
//! - [`HttpError`]: transport/parse failures, kept apart from API-level
//!   errors

mod errors;
mod http_client;
mod http_response;

pub use errors::HttpError;
pub use http_client::{HttpClient, WireParams, CLIENT_VERSION};
pub use http_response::HttpResponse;
