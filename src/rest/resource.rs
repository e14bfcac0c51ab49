//! The `Resource` trait and generic CRUD operations.
//!
//! Every API resource family (transactions, clients, payments, ...) gets the
//! same five operations by implementing [`Resource`]: declare the resource's
//! path segment, its supported operations, its id accessor, and its
//! updateable-field table, and the trait supplies `show`, `create`,
//! `update`, `delete`, and `list`.
//!
//! Each operation performs at most one network round trip. Argument
//! validation and operation-support checks run first, so invalid calls fail
//! before any I/O.
//!
//! # Example
//!
//! ```rust,ignore
//! use paymill_api::rest::{Page, Resource};
//! use paymill_api::rest::resources::{CreateTransaction, Transaction, TransactionFilter};
//!
//! // Create
//! let transaction = Transaction::create(
//!     &client,
//!     CreateTransaction::with_token("tok_123", 4200, "EUR"),
//! )
//! .await?;
//!
//! // Show
//! let transaction = Transaction::show(&client, &Transaction::with_id("tran_123")).await?;
//!
//! // List the most recent closed transactions
//! let list = Transaction::list(
//!     &client,
//!     Some(TransactionFilter::new().by_amount_greater_than(1000)),
//!     Some(TransactionOrder::new().by_created_at().desc()),
//!     Some(Page::new().count(20)),
//! )
//! .await?;
//! ```

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::clients::HttpClient;
use crate::rest::envelope::{self, ResourceList};
use crate::rest::errors::ResourceError;
use crate::rest::params::{CreateParams, ParamList, QueryParams};
use crate::rest::validate;

/// The operations a resource family can support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Fetch a single resource by id.
    Show,
    /// Create a new resource.
    Create,
    /// Partially update an existing resource.
    Update,
    /// Remove an existing resource.
    Delete,
    /// List resources with filter, order, and pagination.
    List,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Show => "show",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::List => "list",
        };
        f.write_str(name)
    }
}

/// Pagination controls for `list` operations.
///
/// # Example
///
/// ```rust
/// use paymill_api::rest::{Page, QueryParams};
///
/// let page = Page::new().count(20).offset(40);
/// let params = page.query_params();
/// assert_eq!(params.get("count"), Some("20"));
/// assert_eq!(params.get("offset"), Some("40"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    count: Option<u32>,
    offset: Option<u32>,
}

impl Page {
    /// Creates pagination controls with neither limit nor offset set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: None,
            offset: None,
        }
    }

    /// Sets the maximum number of items to return.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the number of items to skip.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl QueryParams for Page {
    fn query_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("count", self.count);
        params.push_opt("offset", self.offset);
        params
    }
}

/// A server-managed API resource with generic CRUD operations.
///
/// Implementors declare the resource's identity and parameter mappings;
/// the trait provides the operations. All operations return `Ok(None)` when
/// the response envelope carries no single object (absent `data`, or an
/// array payload on the single-object path).
///
/// # Associated Types
///
/// - `Create`: validated create-parameter builder (use `()` when the
///   resource has no generic create)
/// - `Filter`: query filter builder for `list`
/// - `Order`: sort order builder for `list`
#[allow(async_fn_in_trait)]
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// Create-parameter builder for this resource.
    type Create: CreateParams;

    /// Filter builder for `list` operations.
    type Filter: QueryParams + Send + Sync;

    /// Sort order builder for `list` operations.
    type Order: QueryParams + Send + Sync;

    /// The resource type name, used in error messages (e.g., "Transaction").
    const NAME: &'static str;

    /// The path segment for this resource family (e.g., "transactions").
    const PATH: &'static str;

    /// The operations this resource supports. Calls outside this set fail
    /// with [`ResourceError::OperationNotSupported`] before any I/O.
    const OPERATIONS: &'static [Operation];

    /// Returns the server-assigned id, if the instance has one.
    fn id(&self) -> Option<&str>;

    /// Returns the updateable-field table for partial updates: wire key and
    /// current value for every updateable field that holds a value. The id
    /// is never part of the table; it goes into the URL path.
    fn update_params(&self) -> ParamList {
        ParamList::new()
    }

    /// Fetches the resource identified by `instance`'s id.
    ///
    /// # Errors
    ///
    /// Fails with a validation error before any network call when the id is
    /// missing or blank; otherwise propagates API and transport errors.
    async fn show(client: &HttpClient, instance: &Self) -> Result<Option<Self>, ResourceError> {
        ensure_supported::<Self>(Operation::Show)?;
        let id = instance.id().unwrap_or_default();
        validate::id(id)?;

        let response = client.get(&item_path(Self::PATH, id), None).await?;
        envelope::single(response.body)
    }

    /// Creates a new resource from validated parameters.
    ///
    /// # Errors
    ///
    /// Fails with a validation error before any network call when the
    /// parameters violate a local rule; otherwise propagates API and
    /// transport errors.
    async fn create(
        client: &HttpClient,
        params: Self::Create,
    ) -> Result<Option<Self>, ResourceError> {
        ensure_supported::<Self>(Operation::Create)?;
        params.validate()?;
        let form = params.into_params();

        let response = client.post(Self::PATH, form.as_pairs()).await?;
        envelope::single(response.body)
    }

    /// Sends the instance's updateable fields as a partial update.
    ///
    /// # Errors
    ///
    /// Fails with a validation error before any network call when the id is
    /// missing or blank; otherwise propagates API and transport errors.
    async fn update(&self, client: &HttpClient) -> Result<Option<Self>, ResourceError> {
        ensure_supported::<Self>(Operation::Update)?;
        let params = self.update_params();
        let id = self.id().unwrap_or_default();
        validate::id(id)?;

        let response = client
            .put(&item_path(Self::PATH, id), params.as_pairs())
            .await?;
        envelope::single(response.body)
    }

    /// Removes the resource identified by `self`'s id.
    ///
    /// Returns the server's representation of the removed resource, if any.
    ///
    /// # Errors
    ///
    /// Fails with a validation error before any network call when the id is
    /// missing or blank; otherwise propagates API and transport errors.
    async fn delete(&self, client: &HttpClient) -> Result<Option<Self>, ResourceError> {
        ensure_supported::<Self>(Operation::Delete)?;
        let id = self.id().unwrap_or_default();
        validate::id(id)?;

        let response = client.delete(&item_path(Self::PATH, id)).await?;
        envelope::single(response.body)
    }

    /// Lists resources matching the given filter, in the given order, within
    /// the given page.
    ///
    /// # Errors
    ///
    /// Propagates API and transport errors.
    async fn list(
        client: &HttpClient,
        filter: Option<Self::Filter>,
        order: Option<Self::Order>,
        page: Option<Page>,
    ) -> Result<ResourceList<Self>, ResourceError> {
        ensure_supported::<Self>(Operation::List)?;

        let mut query = ParamList::new();
        if let Some(filter) = filter {
            query.extend(filter.query_params());
        }
        if let Some(order) = order {
            query.extend(order.query_params());
        }
        if let Some(page) = page {
            query.extend(page.query_params());
        }

        let query = (!query.is_empty()).then_some(query);
        let response = client.get(Self::PATH, query.as_ref().map(ParamList::as_pairs)).await?;
        envelope::collection(response.body)
    }
}

/// Builds the item path `{path}/{id}`.
fn item_path(path: &str, id: &str) -> String {
    format!("{path}/{id}")
}

/// Checks the resource's operation table.
fn ensure_supported<R: Resource>(operation: Operation) -> Result<(), ResourceError> {
    if R::OPERATIONS.contains(&operation) {
        return Ok(());
    }
    Err(ResourceError::OperationNotSupported {
        resource: R::NAME,
        operation,
    })
}
