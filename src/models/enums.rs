//! Enumeration types for the lexoffice API.
//!
//! Variants that lexoffice may extend carry a `#[serde(other)]` fallback
//! so that a new value on the wire does not break deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the contact list to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactType {
    /// Contacts with the customer role
    Customer,
    /// Contacts with the vendor role
    Vendor,
}

impl ContactType {
    /// Query parameter name used by `GET /contacts`.
    pub fn query_key(&self) -> &'static str {
        match self {
            ContactType::Customer => "customer",
            ContactType::Vendor => "vendor",
        }
    }
}

/// Kind of voucher as reported by the voucher list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoucherType {
    /// Invoice
    Invoice,
    /// Down payment invoice
    DownPaymentInvoice,
    /// Credit note
    CreditNote,
    /// Quotation
    Quotation,
    /// Order confirmation
    OrderConfirmation,
    /// Delivery note
    DeliveryNote,
    /// Bookkeeping sales invoice
    SalesInvoice,
    /// Bookkeeping sales credit note
    SalesCreditNote,
    /// Bookkeeping purchase invoice
    PurchaseInvoice,
    /// Bookkeeping purchase credit note
    PurchaseCreditNote,
    /// A type this crate does not know yet
    #[serde(other)]
    Unknown,
}

impl VoucherType {
    /// Value for the `voucherType` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoucherType::Invoice => "invoice",
            VoucherType::DownPaymentInvoice => "downpaymentinvoice",
            VoucherType::CreditNote => "creditnote",
            VoucherType::Quotation => "quotation",
            VoucherType::OrderConfirmation => "orderconfirmation",
            VoucherType::DeliveryNote => "deliverynote",
            VoucherType::SalesInvoice => "salesinvoice",
            VoucherType::SalesCreditNote => "salescreditnote",
            VoucherType::PurchaseInvoice => "purchaseinvoice",
            VoucherType::PurchaseCreditNote => "purchasecreditnote",
            VoucherType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for VoucherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a voucher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoucherStatus {
    /// Not yet finalized
    Draft,
    /// Finalized, awaiting payment
    Open,
    /// Past its due date
    Overdue,
    /// Fully paid
    Paid,
    /// Paid off through a credit note or similar
    PaidOff,
    /// Cancelled
    Voided,
    /// Handed over to a payment provider
    Transferred,
    /// Collected via SEPA direct debit
    SepaDebit,
    /// Quotation accepted by the customer
    Accepted,
    /// Quotation rejected by the customer
    Rejected,
    /// Bookkeeping voucher not yet checked
    Unchecked,
    /// A status this crate does not know yet
    #[serde(other)]
    Unknown,
}

impl VoucherStatus {
    /// Value for the `voucherStatus` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoucherStatus::Draft => "draft",
            VoucherStatus::Open => "open",
            VoucherStatus::Overdue => "overdue",
            VoucherStatus::Paid => "paid",
            VoucherStatus::PaidOff => "paidoff",
            VoucherStatus::Voided => "voided",
            VoucherStatus::Transferred => "transferred",
            VoucherStatus::SepaDebit => "sepadebit",
            VoucherStatus::Accepted => "accepted",
            VoucherStatus::Rejected => "rejected",
            VoucherStatus::Unchecked => "unchecked",
            VoucherStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for VoucherStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tax treatment of a voucher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TaxType {
    /// Prices are net amounts
    #[default]
    Net,
    /// Prices are gross amounts
    Gross,
    /// No VAT applies
    Vatfree,
    /// Intra-community supply within the EU
    IntraCommunitySupply,
    /// Construction service under §13b UStG
    ConstructionService13b,
    /// External service under §13b UStG
    ExternalService13b,
    /// Service to a third-party country
    ThirdPartyCountryService,
    /// Delivery to a third-party country
    ThirdPartyCountryDelivery,
    /// Zero-rated photovoltaic equipment
    PhotovoltaicEquipment,
    /// A tax type this crate does not know yet
    #[serde(other)]
    Unknown,
}

/// Kind of voucher line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineItemType {
    /// Free-form item not linked to an article
    #[default]
    Custom,
    /// Article of type material
    Material,
    /// Article of type service
    Service,
    /// Text-only line
    Text,
}

/// How goods or services were delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShippingType {
    /// Service rendered on a single date
    Service,
    /// Service rendered over a period
    ServicePeriod,
    /// Delivery on a single date
    Delivery,
    /// Delivery over a period
    DeliveryPeriod,
    /// No shipping information
    #[default]
    None,
}

/// Webhook event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// A contact was created
    #[serde(rename = "contact.created")]
    ContactCreated,
    /// A contact was changed
    #[serde(rename = "contact.changed")]
    ContactChanged,
    /// A contact was deleted
    #[serde(rename = "contact.deleted")]
    ContactDeleted,
    /// An invoice was created
    #[serde(rename = "invoice.created")]
    InvoiceCreated,
    /// An invoice was changed
    #[serde(rename = "invoice.changed")]
    InvoiceChanged,
    /// An invoice was deleted
    #[serde(rename = "invoice.deleted")]
    InvoiceDeleted,
    /// An invoice changed status
    #[serde(rename = "invoice.status.changed")]
    InvoiceStatusChanged,
    /// A quotation was created
    #[serde(rename = "quotation.created")]
    QuotationCreated,
    /// A quotation was changed
    #[serde(rename = "quotation.changed")]
    QuotationChanged,
    /// A quotation was deleted
    #[serde(rename = "quotation.deleted")]
    QuotationDeleted,
    /// A quotation changed status
    #[serde(rename = "quotation.status.changed")]
    QuotationStatusChanged,
    /// A credit note was created
    #[serde(rename = "credit-note.created")]
    CreditNoteCreated,
    /// A credit note was changed
    #[serde(rename = "credit-note.changed")]
    CreditNoteChanged,
    /// A credit note was deleted
    #[serde(rename = "credit-note.deleted")]
    CreditNoteDeleted,
    /// A credit note changed status
    #[serde(rename = "credit-note.status.changed")]
    CreditNoteStatusChanged,
    /// Payment state of a voucher changed
    #[serde(rename = "payment.changed")]
    PaymentChanged,
    /// The API token was revoked
    #[serde(rename = "token.revoked")]
    TokenRevoked,
    /// An event type this crate does not know yet
    #[serde(other)]
    Unknown,
}

/// Overall payment state of a voucher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentStatus {
    /// Nothing left to pay
    Balanced,
    /// Money is still owed to the organization
    OpenRevenue,
    /// The organization still owes money
    OpenExpense,
    /// A status this crate does not know yet
    #[serde(other)]
    Unknown,
}

/// Tax classification of a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaxClassification {
    /// Germany
    De,
    /// EU member state
    IntraCommunity,
    /// Outside the EU
    ThirdPartyCountry,
    /// A classification this crate does not know yet
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voucher_status_wire_names() {
        assert_eq!(serde_json::to_string(&VoucherStatus::PaidOff).unwrap(), "\"paidoff\"");
        assert_eq!(VoucherStatus::SepaDebit.to_string(), "sepadebit");
        let parsed: VoucherStatus = serde_json::from_str("\"somethingnew\"").unwrap();
        assert_eq!(parsed, VoucherStatus::Unknown);
    }

    #[test]
    fn test_voucher_type_matches_query_value() {
        for t in [
            VoucherType::Invoice,
            VoucherType::CreditNote,
            VoucherType::Quotation,
            VoucherType::PurchaseCreditNote,
        ] {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json.trim_matches('"'), t.as_str());
        }
    }

    #[test]
    fn test_tax_type_camel_case() {
        assert_eq!(
            serde_json::to_string(&TaxType::IntraCommunitySupply).unwrap(),
            "\"intraCommunitySupply\""
        );
        assert_eq!(
            serde_json::to_string(&TaxType::ConstructionService13b).unwrap(),
            "\"constructionService13b\""
        );
    }

    #[test]
    fn test_event_type_dotted_names() {
        assert_eq!(
            serde_json::to_string(&EventType::CreditNoteStatusChanged).unwrap(),
            "\"credit-note.status.changed\""
        );
        let parsed: EventType = serde_json::from_str("\"payment.changed\"").unwrap();
        assert_eq!(parsed, EventType::PaymentChanged);
    }

    #[test]
    fn test_contact_type_query_key() {
        assert_eq!(ContactType::Customer.query_key(), "customer");
        assert_eq!(ContactType::Vendor.query_key(), "vendor");
    }
}
