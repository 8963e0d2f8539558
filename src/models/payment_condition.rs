//! Organization-wide payment condition templates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::voucher::DiscountCondition;

/// A payment condition template, from `GET /payment-conditions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCondition {
    /// Template id
    pub id: Uuid,
    /// Whether this is the organization default
    #[serde(default)]
    pub organization_default: bool,
    /// Label template, e.g. `Zahlbar in {paymentRange} Tagen`
    #[serde(default)]
    pub payment_term_label_template: Option<String>,
    /// Days until payment is due
    #[serde(default)]
    pub payment_term_duration: Option<i32>,
    /// Early payment discount
    #[serde(default)]
    pub payment_discount_conditions: Option<DiscountCondition>,
}
