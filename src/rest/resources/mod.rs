//! Resource implementations.
//!
//! One module per resource family, each providing the model struct, its
//! status enumeration where the API defines one, the create-parameter
//! builder, and the filter/order builders for list queries.

mod client;
mod fee;
mod offer;
mod payment;
mod preauthorization;
mod refund;
mod subscription;
mod transaction;

pub use client::{Client, ClientFilter, ClientOrder, CreateClient};
pub use fee::Fee;
pub use offer::{CreateOffer, Offer, OfferFilter, OfferOrder, SubscriptionCount};
pub use payment::{CreatePayment, Payment, PaymentFilter, PaymentOrder, PaymentType};
pub use preauthorization::{
    CreatePreauthorization, Preauthorization, PreauthorizationFilter, PreauthorizationOrder,
    PreauthorizationStatus,
};
pub use refund::{Refund, RefundFilter, RefundOrder, RefundStatus};
pub use subscription::{
    CreateSubscription, Subscription, SubscriptionFilter, SubscriptionOrder,
};
pub use transaction::{
    CreateTransaction, Transaction, TransactionFilter, TransactionOrder, TransactionStatus,
};
