//! Contacts service.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::client::paginated::PaginatedStreamBuilder;
use crate::client::{ClientInner, ListOptions, PaginatedStream};
use crate::models::{Contact, ContactType};
use crate::Result;

/// Service for the contacts address book.
///
/// # Example
///
/// ```no_run
/// use lexoffice_rs::client::ListOptions;
/// use lexoffice_rs::models::ContactType;
///
/// # async fn example(client: lexoffice_rs::LexofficeClient) -> lexoffice_rs::Result<()> {
/// let vendors = client
///     .contacts()
///     .list(ContactType::Vendor, ListOptions::default().size(100))
///     .await?;
/// for vendor in &vendors {
///     println!("{}", vendor.display_name().unwrap_or_default());
/// }
/// # Ok(())
/// # }
/// ```
pub struct ContactsService {
    inner: Arc<ClientInner>,
}

/// `customer=true` or `vendor=true`.
#[derive(Debug, Clone, Serialize)]
struct RoleQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    customer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vendor: Option<bool>,
}

impl RoleQuery {
    fn for_type(contact_type: ContactType) -> Self {
        match contact_type {
            ContactType::Customer => Self {
                customer: Some(true),
                vendor: None,
            },
            ContactType::Vendor => Self {
                customer: None,
                vendor: Some(true),
            },
        }
    }
}

impl ContactsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch all contacts with the given role across all pages.
    pub async fn list(&self, contact_type: ContactType, options: ListOptions) -> Result<Vec<Contact>> {
        self.list_stream(contact_type, options).collect_all().await
    }

    /// Stream contacts with the given role, fetching pages lazily.
    pub fn list_stream(&self, contact_type: ContactType, options: ListOptions) -> PaginatedStream<Contact> {
        tracing::debug!(role = contact_type.query_key(), "listing contacts");
        PaginatedStreamBuilder::new(self.inner.clone(), "contacts", options)
            .build_with_query(RoleQuery::for_type(contact_type))
    }

    /// Get a contact by id. Returns `None` if lexoffice answers 404.
    pub async fn get(&self, id: Uuid) -> Result<Option<Contact>> {
        self.inner.get_optional(&format!("contacts/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_query() {
        assert_eq!(
            serde_json::to_value(RoleQuery::for_type(ContactType::Customer)).unwrap(),
            serde_json::json!({ "customer": true })
        );
        assert_eq!(
            serde_json::to_value(RoleQuery::for_type(ContactType::Vendor)).unwrap(),
            serde_json::json!({ "vendor": true })
        );
    }
}
