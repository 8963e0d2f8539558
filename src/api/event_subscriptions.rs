//! Event subscriptions (webhooks) service.

use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use crate::client::ClientInner;
use crate::models::{EventSubscription, NewEventSubscription, ResourceResponse};
use crate::Result;

/// Service for webhook subscriptions.
///
/// # Example
///
/// ```no_run
/// use lexoffice_rs::models::{EventType, NewEventSubscription};
///
/// # async fn example(client: lexoffice_rs::LexofficeClient) -> lexoffice_rs::Result<()> {
/// let created = client
///     .event_subscriptions()
///     .create(&NewEventSubscription::new(
///         EventType::InvoiceStatusChanged,
///         "https://example.com/hooks/lexoffice",
///     ))
///     .await?;
///
/// client.event_subscriptions().delete(created.id).await?;
/// # Ok(())
/// # }
/// ```
pub struct EventSubscriptionsService {
    inner: Arc<ClientInner>,
}

impl EventSubscriptionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all subscriptions of the organization.
    pub async fn list(&self) -> Result<Vec<EventSubscription>> {
        #[derive(Deserialize)]
        struct Response {
            content: Vec<EventSubscription>,
        }
        let response: Response = self.inner.get("event-subscriptions").await?;
        Ok(response.content)
    }

    /// Get a subscription by id, `None` on 404.
    pub async fn get(&self, id: Uuid) -> Result<Option<EventSubscription>> {
        self.inner
            .get_optional(&format!("event-subscriptions/{}", id))
            .await
    }

    /// Register a webhook.
    pub async fn create(&self, subscription: &NewEventSubscription) -> Result<ResourceResponse> {
        self.inner.post("event-subscriptions", subscription).await
    }

    /// Remove a webhook.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.inner
            .delete(&format!("event-subscriptions/{}", id))
            .await
    }
}
