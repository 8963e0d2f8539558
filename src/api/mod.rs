//! API service modules for lexoffice endpoints.
//!
//! Each service provides methods for interacting with one resource family
//! of the lexoffice API. Services are obtained from
//! [`LexofficeClient`](crate::LexofficeClient) and are cheap to create.

mod contacts;
mod countries;
mod credit_notes;
mod event_subscriptions;
mod files;
mod invoices;
mod payment_conditions;
mod payments;
mod quotations;
mod voucher_list;
mod vouchers;

pub use contacts::ContactsService;
pub use countries::CountriesService;
pub use credit_notes::CreditNotesService;
pub use event_subscriptions::EventSubscriptionsService;
pub use files::FilesService;
pub use invoices::InvoicesService;
pub use payment_conditions::PaymentConditionsService;
pub use payments::PaymentsService;
pub use quotations::QuotationsService;
pub use voucher_list::{VoucherListQuery, VoucherListService};
