//! Data models for the lexoffice API.
//!
//! All models use camelCase field names on the wire and millisecond
//! timestamps (see [`timestamp`]). Models are organized by resource:
//!
//! - [`primitives`] - `Timestamp` and its codec
//! - [`enums`] - statuses, voucher types, tax types, event types
//! - [`contact`] - contacts and their addresses
//! - [`voucher`] - invoices, quotations, credit notes, the voucher list
//! - [`payment`] - payment state of a voucher
//! - [`file`] - rendered documents and uploads
//! - [`event_subscription`] - webhooks
//! - [`country`], [`payment_condition`] - reference data
//! - [`resource`] - generic create response

pub mod primitives;
pub mod enums;
pub mod contact;
pub mod voucher;
pub mod payment;
pub mod file;
pub mod event_subscription;
pub mod country;
pub mod payment_condition;
pub mod resource;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use contact::*;
pub use voucher::*;
pub use payment::*;
pub use file::*;
pub use event_subscription::*;
pub use country::*;
pub use payment_condition::*;
pub use resource::*;
