//! Voucher models: invoices, quotations, and credit notes.
//!
//! lexoffice uses one document shape for all three sales vouchers, so this
//! module defines a single [`Voucher`] and names it three ways.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{LineItemType, ShippingType, TaxType, VoucherStatus, VoucherType};
use super::file::DocumentFileId;
use super::primitives::{timestamp, Timestamp};

/// An invoice document.
pub type Invoice = Voucher;
/// A quotation document.
pub type Quotation = Voucher;
/// A credit note document.
pub type CreditNote = Voucher;

/// One row of `GET /voucherlist`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherListEntry {
    /// Voucher id, usable with the matching detail endpoint
    pub id: Uuid,
    /// Kind of voucher
    pub voucher_type: VoucherType,
    /// Current status
    pub voucher_status: VoucherStatus,
    /// Human-readable voucher number
    #[serde(default)]
    pub voucher_number: Option<String>,
    /// Voucher date
    #[serde(default, with = "timestamp::option")]
    pub voucher_date: Option<Timestamp>,
    /// Creation time
    #[serde(default, with = "timestamp::option")]
    pub created_date: Option<Timestamp>,
    /// Last update time
    #[serde(default, with = "timestamp::option")]
    pub updated_date: Option<Timestamp>,
    /// Payment due date
    #[serde(default, with = "timestamp::option")]
    pub due_date: Option<Timestamp>,
    /// Linked contact, if any
    #[serde(default)]
    pub contact_id: Option<Uuid>,
    /// Name of the recipient
    #[serde(default)]
    pub contact_name: Option<String>,
    /// Gross total
    #[serde(default)]
    pub total_amount: Option<Decimal>,
    /// Amount still open
    #[serde(default)]
    pub open_amount: Option<Decimal>,
    /// ISO 4217 currency code
    #[serde(default)]
    pub currency: Option<String>,
    /// Whether the voucher is archived
    #[serde(default)]
    pub archived: bool,
}

/// An invoice, quotation, or credit note.
///
/// Read-only fields (`id`, `organization_id`, dates set by lexoffice, ...)
/// are `None` when creating a voucher and are skipped on serialization.
/// Use [`VoucherBuilder`] to assemble a new voucher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    /// Voucher id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Owning organization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<Uuid>,
    /// Creation time
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub created_date: Option<Timestamp>,
    /// Last update time
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<Timestamp>,
    /// Optimistic locking version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// Document language (`de` or `en`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Whether the voucher is archived
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    /// Current status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voucher_status: Option<VoucherStatus>,
    /// Human-readable voucher number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voucher_number: Option<String>,
    /// Voucher date
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub voucher_date: Option<Timestamp>,
    /// Payment due date
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Timestamp>,
    /// Quotation expiry date
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<Timestamp>,
    /// Recipient address
    #[serde(default)]
    pub address: VoucherAddress,
    /// Line items
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// Totals
    #[serde(default)]
    pub total_price: TotalPrice,
    /// Tax amounts per rate
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tax_amounts: Vec<TaxAmount>,
    /// Tax treatment
    #[serde(default)]
    pub tax_conditions: TaxConditions,
    /// Payment terms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_conditions: Option<PaymentConditions>,
    /// Shipping information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_conditions: Option<ShippingConditions>,
    /// Vouchers linked to this one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_vouchers: Vec<RelatedVoucher>,
    /// Document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Text above the line items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    /// Text below the line items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    /// Rendered PDF, once available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<DocumentFileId>,
}

impl Voucher {
    /// Start building a new voucher.
    pub fn builder() -> VoucherBuilder {
        VoucherBuilder::new()
    }
}

/// Recipient address of a voucher.
///
/// Either `contact_id` references an existing contact, or the address is
/// given inline with at least `name` and `country_code`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherAddress {
    /// Existing contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<Uuid>,
    /// Recipient name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Address supplement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplement: Option<String>,
    /// Street and number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// ISO 3166 alpha-2 country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Contact person at the recipient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
}

/// A line of a voucher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Article id for material/service items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Item kind
    #[serde(rename = "type", default)]
    pub item_type: LineItemType,
    /// Item name
    pub name: String,
    /// Longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Quantity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    /// Unit of measure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    /// Price per unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<UnitPrice>,
    /// Discount in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<Decimal>,
    /// Computed line total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_item_amount: Option<Decimal>,
}

impl LineItem {
    /// A custom line item with a net unit price.
    pub fn custom(
        name: impl Into<String>,
        quantity: Decimal,
        unit_name: impl Into<String>,
        unit_price: UnitPrice,
    ) -> Self {
        Self {
            item_type: LineItemType::Custom,
            name: name.into(),
            quantity: Some(quantity),
            unit_name: Some(unit_name.into()),
            unit_price: Some(unit_price),
            ..Default::default()
        }
    }

    /// A text-only line.
    pub fn text(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            item_type: LineItemType::Text,
            name: name.into(),
            description: Some(description.into()),
            ..Default::default()
        }
    }
}

/// Price of one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitPrice {
    /// ISO 4217 currency code
    pub currency: String,
    /// Net amount (for net vouchers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<Decimal>,
    /// Gross amount (for gross vouchers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_amount: Option<Decimal>,
    /// VAT rate in percent
    pub tax_rate_percentage: Decimal,
}

impl UnitPrice {
    /// Net EUR price.
    pub fn net_eur(net_amount: Decimal, tax_rate_percentage: Decimal) -> Self {
        Self {
            currency: "EUR".to_string(),
            net_amount: Some(net_amount),
            gross_amount: None,
            tax_rate_percentage,
        }
    }
}

/// Voucher totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalPrice {
    /// ISO 4217 currency code
    pub currency: String,
    /// Net total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_net_amount: Option<Decimal>,
    /// Gross total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_gross_amount: Option<Decimal>,
    /// Tax total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tax_amount: Option<Decimal>,
    /// Absolute discount on the total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_discount_absolute: Option<Decimal>,
    /// Percentage discount on the total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_discount_percentage: Option<Decimal>,
}

impl Default for TotalPrice {
    fn default() -> Self {
        Self {
            currency: "EUR".to_string(),
            total_net_amount: None,
            total_gross_amount: None,
            total_tax_amount: None,
            total_discount_absolute: None,
            total_discount_percentage: None,
        }
    }
}

/// Tax amount for one rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxAmount {
    /// VAT rate in percent
    pub tax_rate_percentage: Decimal,
    /// Tax for this rate
    pub tax_amount: Decimal,
    /// Net amount taxed at this rate
    pub net_amount: Decimal,
}

/// Tax treatment of a voucher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxConditions {
    /// Tax type
    pub tax_type: TaxType,
    /// Note printed for special tax types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_type_note: Option<String>,
}

/// Payment terms of a voucher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConditions {
    /// Rendered payment term label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_term_label: Option<String>,
    /// Template the label was rendered from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_term_label_template: Option<String>,
    /// Days until payment is due
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_term_duration: Option<i32>,
    /// Early payment discount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_discount_conditions: Option<DiscountCondition>,
}

/// Early payment discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCondition {
    /// Discount in percent
    pub discount_percentage: Decimal,
    /// Days within which the discount applies
    pub discount_range: i32,
}

/// Shipping information of a voucher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingConditions {
    /// Shipping or service date
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub shipping_date: Option<Timestamp>,
    /// End of the shipping or service period
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub shipping_end_date: Option<Timestamp>,
    /// Shipping type
    pub shipping_type: ShippingType,
}

/// A voucher linked to another one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedVoucher {
    /// Linked voucher id
    pub id: Uuid,
    /// Linked voucher number
    #[serde(default)]
    pub voucher_number: Option<String>,
    /// Linked voucher kind
    pub voucher_type: VoucherType,
}

/// Builder for new vouchers.
///
/// # Example
///
/// ```
/// use lexoffice_rs::models::{LineItem, UnitPrice, Voucher, VoucherAddress};
/// use rust_decimal_macros::dec;
///
/// let invoice = Voucher::builder()
///     .address(VoucherAddress {
///         name: Some("Bike & Ride GmbH & Co. KG".into()),
///         country_code: Some("DE".into()),
///         ..Default::default()
///     })
///     .line_item(LineItem::custom(
///         "Energieriegel Testpaket",
///         dec!(1),
///         "Stück",
///         UnitPrice::net_eur(dec!(5), dec!(19)),
///     ))
///     .voucher_date(chrono::Utc::now().fixed_offset())
///     .build()
///     .unwrap();
/// assert_eq!(invoice.line_items.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VoucherBuilder {
    voucher: Voucher,
}

impl VoucherBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recipient address.
    pub fn address(mut self, address: VoucherAddress) -> Self {
        self.voucher.address = address;
        self
    }

    /// Append a line item.
    pub fn line_item(mut self, item: LineItem) -> Self {
        self.voucher.line_items.push(item);
        self
    }

    /// Replace all line items.
    pub fn line_items(mut self, items: Vec<LineItem>) -> Self {
        self.voucher.line_items = items;
        self
    }

    /// Set the voucher date.
    pub fn voucher_date(mut self, date: Timestamp) -> Self {
        self.voucher.voucher_date = Some(date);
        self
    }

    /// Set the expiry date (quotations).
    pub fn expiration_date(mut self, date: Timestamp) -> Self {
        self.voucher.expiration_date = Some(date);
        self
    }

    /// Set the currency used for totals.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.voucher.total_price.currency = currency.into();
        self
    }

    /// Set the tax type.
    pub fn tax_type(mut self, tax_type: TaxType) -> Self {
        self.voucher.tax_conditions.tax_type = tax_type;
        self
    }

    /// Set payment terms.
    pub fn payment_conditions(mut self, conditions: PaymentConditions) -> Self {
        self.voucher.payment_conditions = Some(conditions);
        self
    }

    /// Set shipping information.
    pub fn shipping_conditions(mut self, conditions: ShippingConditions) -> Self {
        self.voucher.shipping_conditions = Some(conditions);
        self
    }

    /// Set the document title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.voucher.title = Some(title.into());
        self
    }

    /// Set the introduction text.
    pub fn introduction(mut self, text: impl Into<String>) -> Self {
        self.voucher.introduction = Some(text.into());
        self
    }

    /// Set the closing remark.
    pub fn remark(mut self, text: impl Into<String>) -> Self {
        self.voucher.remark = Some(text.into());
        self
    }

    /// Set the document language.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.voucher.language = Some(language.into());
        self
    }

    /// Validate and build the voucher.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if the
    /// voucher has no recipient, no line items, or no voucher date.
    pub fn build(self) -> crate::Result<Voucher> {
        let address = &self.voucher.address;
        if address.contact_id.is_none() && address.name.is_none() {
            return Err(crate::Error::InvalidInput(
                "voucher address needs a contact id or a name".to_string(),
            ));
        }
        if self.voucher.line_items.is_empty() {
            return Err(crate::Error::InvalidInput(
                "voucher needs at least one line item".to_string(),
            ));
        }
        if self.voucher.voucher_date.is_none() {
            return Err(crate::Error::InvalidInput(
                "voucher date is required".to_string(),
            ));
        }
        Ok(self.voucher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use rust_decimal_macros::dec;

    fn at(day: u32) -> Timestamp {
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, day, 10, 30, 0)
            .unwrap()
    }

    fn full_invoice() -> Invoice {
        Invoice {
            id: Some(Uuid::parse_str("e9066f04-8cc7-4616-93f8-ac9ecc8479c8").unwrap()),
            organization_id: Some(Uuid::parse_str("aa93e8a8-2aa3-470b-b914-caad8a255dd8").unwrap()),
            created_date: Some(at(1)),
            updated_date: Some(at(2)),
            version: Some(3),
            language: Some("de".into()),
            archived: Some(false),
            voucher_status: Some(VoucherStatus::Open),
            voucher_number: Some("RE1019".into()),
            voucher_date: Some(at(1)),
            due_date: Some(at(31)),
            expiration_date: None,
            address: VoucherAddress {
                contact_id: None,
                name: Some("Bike & Ride GmbH & Co. KG".into()),
                supplement: Some("Gebäude 10".into()),
                street: Some("Musterstraße 42".into()),
                city: Some("Freiburg".into()),
                zip: Some("79112".into()),
                country_code: Some("DE".into()),
                contact_person: Some("Max Mustermann".into()),
            },
            line_items: vec![
                LineItem {
                    discount_percentage: Some(dec!(0)),
                    line_item_amount: Some(dec!(25)),
                    description: Some("Testpaket".into()),
                    ..LineItem::custom("Energieriegel", dec!(2), "Stück", UnitPrice::net_eur(dec!(12.5), dec!(19)))
                },
                LineItem::text("Hinweis", "Lieferung frei Haus"),
            ],
            total_price: TotalPrice {
                currency: "EUR".into(),
                total_net_amount: Some(dec!(25)),
                total_gross_amount: Some(dec!(29.75)),
                total_tax_amount: Some(dec!(4.75)),
                total_discount_absolute: None,
                total_discount_percentage: None,
            },
            tax_amounts: vec![TaxAmount {
                tax_rate_percentage: dec!(19),
                tax_amount: dec!(4.75),
                net_amount: dec!(25),
            }],
            tax_conditions: TaxConditions {
                tax_type: TaxType::Net,
                tax_type_note: None,
            },
            payment_conditions: Some(PaymentConditions {
                payment_term_label: Some("10 Tage - 3 %, 30 Tage netto".into()),
                payment_term_label_template: Some("10 Tage - 3 %, 30 Tage netto".into()),
                payment_term_duration: Some(30),
                payment_discount_conditions: Some(DiscountCondition {
                    discount_percentage: dec!(3),
                    discount_range: 10,
                }),
            }),
            shipping_conditions: Some(ShippingConditions {
                shipping_date: Some(at(4)),
                shipping_end_date: Some(at(5)),
                shipping_type: ShippingType::DeliveryPeriod,
            }),
            related_vouchers: vec![RelatedVoucher {
                id: Uuid::parse_str("313ac153-9f8e-4f4e-9b3e-3d8e1ad4fa4b").unwrap(),
                voucher_number: Some("AG0007".into()),
                voucher_type: VoucherType::Quotation,
            }],
            title: Some("Rechnung".into()),
            introduction: Some("Ihre bestellten Positionen stellen wir Ihnen hiermit in Rechnung".into()),
            remark: Some("Vielen Dank für Ihren Einkauf".into()),
            files: Some(DocumentFileId {
                document_file_id: Uuid::parse_str("b26e1d73-19ff-46b1-8929-09d8d73d4e65").unwrap(),
            }),
        }
    }

    #[test]
    fn test_invoice_round_trip() {
        let invoice = full_invoice();
        let json = serde_json::to_string(&invoice).unwrap();
        let back: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, invoice);
    }

    #[test]
    fn test_invoice_wire_shape() {
        let value = serde_json::to_value(full_invoice()).unwrap();
        assert_eq!(value["voucherDate"], "2024-03-01T10:30:00.000+01:00");
        assert_eq!(value["lineItems"][0]["type"], "custom");
        assert_eq!(value["lineItems"][0]["unitPrice"]["taxRatePercentage"], 19.0);
        assert_eq!(value["shippingConditions"]["shippingType"], "deliveryperiod");
        assert_eq!(value["files"]["documentFileId"], "b26e1d73-19ff-46b1-8929-09d8d73d4e65");
        assert!(value.get("expirationDate").is_none());
    }

    #[test]
    fn test_deserialize_voucher_list_entry() {
        let json = r#"{
            "id": "e9066f04-8cc7-4616-93f8-ac9ecc8479c8",
            "voucherType": "invoice",
            "voucherStatus": "paid",
            "voucherNumber": "RE1019",
            "voucherDate": "2023-02-22T00:00:00.000+01:00",
            "createdDate": "2023-02-22T12:00:00.000+01:00",
            "updatedDate": "2023-02-23T08:10:00.000+01:00",
            "dueDate": null,
            "contactName": "Bike & Ride GmbH & Co. KG",
            "totalAmount": 13.09,
            "openAmount": 0,
            "currency": "EUR",
            "archived": false
        }"#;
        let entry: VoucherListEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.voucher_type, VoucherType::Invoice);
        assert_eq!(entry.voucher_status, VoucherStatus::Paid);
        assert_eq!(entry.total_amount, Some(dec!(13.09)));
        assert_eq!(entry.open_amount, Some(dec!(0)));
        assert!(entry.due_date.is_none());
        assert!(entry.contact_id.is_none());
    }

    #[test]
    fn test_builder_requires_recipient_items_and_date() {
        let item = LineItem::custom("Item", dec!(1), "Stück", UnitPrice::net_eur(dec!(1), dec!(19)));
        let address = VoucherAddress {
            name: Some("ACME".into()),
            ..Default::default()
        };

        assert!(Voucher::builder().line_item(item.clone()).voucher_date(at(1)).build().is_err());
        assert!(Voucher::builder().address(address.clone()).voucher_date(at(1)).build().is_err());
        assert!(Voucher::builder().address(address.clone()).line_item(item.clone()).build().is_err());

        let voucher = Voucher::builder()
            .address(address)
            .line_item(item)
            .voucher_date(at(1))
            .tax_type(TaxType::Vatfree)
            .title("Rechnung")
            .build()
            .unwrap();
        assert_eq!(voucher.tax_conditions.tax_type, TaxType::Vatfree);
        assert_eq!(voucher.total_price.currency, "EUR");
        assert!(voucher.id.is_none());
    }
}
