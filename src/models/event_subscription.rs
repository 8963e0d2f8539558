//! Webhook event subscriptions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::EventType;
use super::primitives::{timestamp, Timestamp};

/// A registered webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSubscription {
    /// Subscription id
    pub subscription_id: Uuid,
    /// Owning organization
    #[serde(default)]
    pub organization_id: Option<Uuid>,
    /// Creation time
    #[serde(default, with = "timestamp::option")]
    pub created_date: Option<Timestamp>,
    /// Subscribed event
    pub event_type: EventType,
    /// Endpoint lexoffice posts events to
    pub callback_url: String,
}

/// Request body for `POST /event-subscriptions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEventSubscription {
    /// Event to subscribe to
    pub event_type: EventType,
    /// HTTPS endpoint to notify
    pub callback_url: String,
}

impl NewEventSubscription {
    /// Create a subscription request.
    pub fn new(event_type: EventType, callback_url: impl Into<String>) -> Self {
        Self {
            event_type,
            callback_url: callback_url.into(),
        }
    }
}
