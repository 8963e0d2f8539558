//! Payment models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{PaymentStatus, VoucherStatus};
use super::primitives::{timestamp, Timestamp};

/// Payment state of a voucher, from `GET /payments/{voucherId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payments {
    /// Amount still open
    pub open_amount: Decimal,
    /// ISO 4217 currency code
    pub currency: String,
    /// Overall payment state
    pub payment_status: PaymentStatus,
    /// Kind of voucher, as a raw string (includes bookkeeping types)
    pub voucher_type: String,
    /// Voucher status
    pub voucher_status: VoucherStatus,
    /// When the voucher was fully paid
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<Timestamp>,
    /// Individual payments
    #[serde(default)]
    pub payment_items: Vec<PaymentItem>,
}

impl Payments {
    /// Sum of all payment item amounts.
    pub fn total_paid(&self) -> Decimal {
        self.payment_items.iter().map(|i| i.amount).sum()
    }
}

/// A single payment booked against a voucher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentItem {
    /// Kind of payment, e.g. `manualPayment` or `cashDiscount`
    pub payment_item_type: String,
    /// Booking date
    #[serde(with = "timestamp")]
    pub posting_date: Timestamp,
    /// Amount
    pub amount: Decimal,
    /// ISO 4217 currency code
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_payments() {
        let json = r#"{
            "openAmount": 0.0,
            "currency": "EUR",
            "paymentStatus": "balanced",
            "voucherType": "invoice",
            "voucherStatus": "paid",
            "paidDate": "2024-01-26T14:06:19.000+01:00",
            "paymentItems": [
                { "paymentItemType": "manualPayment", "postingDate": "2024-01-20T00:00:00.000+01:00", "amount": 100.0, "currency": "EUR" },
                { "paymentItemType": "cashDiscount", "postingDate": "2024-01-26T00:00:00.000+01:00", "amount": 19.5, "currency": "EUR" }
            ]
        }"#;
        let payments: Payments = serde_json::from_str(json).unwrap();
        assert_eq!(payments.payment_status, PaymentStatus::Balanced);
        assert_eq!(payments.voucher_status, VoucherStatus::Paid);
        assert_eq!(payments.total_paid(), dec!(119.5));
        assert!(payments.paid_date.is_some());
    }
}
