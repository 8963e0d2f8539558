//! # lexoffice-rs
//!
//! An async Rust client for the lexoffice accounting API.
//!
//! This crate wraps the lexoffice REST API with typed models and services
//! for contacts, invoices, quotations, credit notes, payments, files,
//! webhooks, and reference data.
//!
//! ## Features
//!
//! - **Authentication**: bearer API key with a local format check
//! - **Vouchers**: list, fetch, create, and render invoices, quotations, and credit notes
//! - **Pagination**: list endpoints are paged transparently, as a `Vec` or a lazy `Stream`
//! - **Rate limiting**: optional client-side token bucket
//! - **Connectivity**: `check_online` probe with an error hook
//! - **Type Safety**: strongly-typed models with exact `Decimal` amounts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lexoffice_rs::LexofficeClient;
//! use lexoffice_rs::client::ListOptions;
//! use lexoffice_rs::models::{ContactType, VoucherStatus};
//!
//! #[tokio::main]
//! async fn main() -> lexoffice_rs::Result<()> {
//!     let client = LexofficeClient::from_env()?;
//!
//!     let customers = client
//!         .contacts()
//!         .list(ContactType::Customer, ListOptions::default())
//!         .await?;
//!     println!("Found {} customers", customers.len());
//!
//!     let open = client
//!         .invoices()
//!         .list(VoucherStatus::Open, false, ListOptions::default())
//!         .await?;
//!     for entry in &open {
//!         println!("{:?}: {:?} open", entry.voucher_number, entry.open_amount);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Creating an Invoice
//!
//! ```rust,no_run
//! use lexoffice_rs::LexofficeClient;
//! use lexoffice_rs::models::{LineItem, UnitPrice, Voucher, VoucherAddress};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> lexoffice_rs::Result<()> {
//!     let client = LexofficeClient::from_env()?;
//!
//!     let invoice = Voucher::builder()
//!         .address(VoucherAddress {
//!             name: Some("Bike & Ride GmbH & Co. KG".into()),
//!             country_code: Some("DE".into()),
//!             ..Default::default()
//!         })
//!         .line_item(LineItem::custom(
//!             "Abus Kabelschloss Primo 590",
//!             dec!(2),
//!             "Stück",
//!             UnitPrice::net_eur(dec!(13.10), dec!(19)),
//!         ))
//!         .voucher_date(chrono::Utc::now().fixed_offset())
//!         .build()?;
//!
//!     let created = client.invoices().create(&invoice, true).await?;
//!     let pdf = client.invoices().download_document(created.id).await?;
//!     println!("Invoice {} rendered, {} bytes", created.id, pdf.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::AccessToken;
pub use client::{ClientBuilder, ClientConfig, LexofficeClient, ListOptions, ProxyConfig, RateLimitPolicy};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```rust
/// use lexoffice_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::VoucherListQuery;
    pub use crate::auth::AccessToken;
    pub use crate::client::{
        ClientBuilder, ClientConfig, LexofficeClient, ListOptions, Page, PaginatedStream,
        ProxyConfig, RateLimitPolicy,
    };
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Enums
        ContactType, EventType, TaxType, VoucherStatus, VoucherType,
        // Contacts
        Contact,
        // Vouchers
        CreditNote, Invoice, LineItem, Quotation, UnitPrice, Voucher, VoucherAddress,
        VoucherBuilder, VoucherListEntry,
        // Everything else
        Country, DocumentFileId, EventSubscription, FileKind, NewEventSubscription,
        PaymentCondition, Payments, ResourceResponse, Timestamp,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ClientConfig::default();
        assert_eq!(
            config.api_base_url().unwrap().as_str(),
            "https://api.lexoffice.io/v1/"
        );
    }

    #[test]
    fn test_token_format() {
        assert!(AccessToken::new("a".repeat(48)).is_well_formed());
        assert!(!AccessToken::new("a".repeat(47)).is_well_formed());
        assert!(!AccessToken::new(format!("{}!", "a".repeat(47))).is_well_formed());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<LexofficeClient>();
    }
}
