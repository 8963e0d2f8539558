//! Contact models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer and/or vendor in the lexoffice address book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique contact id
    pub id: Uuid,
    /// Owning organization
    #[serde(default)]
    pub organization_id: Option<Uuid>,
    /// Optimistic locking version
    #[serde(default)]
    pub version: i64,
    /// Customer/vendor roles
    #[serde(default)]
    pub roles: ContactRoles,
    /// Company details, for business contacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    /// Person details, for private contacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    /// Billing and shipping addresses
    #[serde(default)]
    pub addresses: ContactAddresses,
    /// Email addresses by category
    #[serde(default)]
    pub email_addresses: ContactChannels,
    /// Phone numbers by category
    #[serde(default)]
    pub phone_numbers: ContactChannels,
    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Whether the contact is archived
    #[serde(default)]
    pub archived: bool,
}

impl Contact {
    /// Display name: company name, or "first last" for persons.
    pub fn display_name(&self) -> Option<String> {
        if let Some(company) = &self.company {
            return Some(company.name.clone());
        }
        self.person.as_ref().map(|p| {
            match &p.first_name {
                Some(first) => format!("{} {}", first, p.last_name),
                None => p.last_name.clone(),
            }
        })
    }

    /// Returns `true` if the contact has the customer role.
    pub fn is_customer(&self) -> bool {
        self.roles.customer.is_some()
    }

    /// Returns `true` if the contact has the vendor role.
    pub fn is_vendor(&self) -> bool {
        self.roles.vendor.is_some()
    }
}

/// Role markers; presence of a role means the contact has it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRoles {
    /// Customer role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<RoleNumber>,
    /// Vendor role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<RoleNumber>,
}

/// Number assigned to a contact within a role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleNumber {
    /// Customer or vendor number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
}

/// Business contact details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Company name
    pub name: String,
    /// Tax number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    /// VAT registration id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_registration_id: Option<String>,
    /// Whether tax-free invoices may be issued
    #[serde(default)]
    pub allow_tax_free_invoices: bool,
    /// People at the company
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact_persons: Vec<ContactPerson>,
}

/// A person at a company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPerson {
    /// Salutation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    pub last_name: String,
    /// Whether this is the primary contact person
    #[serde(default)]
    pub primary: bool,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Private contact details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Salutation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    pub last_name: String,
}

/// Contact addresses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactAddresses {
    /// Billing addresses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub billing: Vec<ContactAddress>,
    /// Shipping addresses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shipping: Vec<ContactAddress>,
}

/// A postal address of a contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactAddress {
    /// Address supplement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplement: Option<String>,
    /// Street and number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// ISO 3166 alpha-2 country code
    pub country_code: String,
}

/// Email addresses or phone numbers, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactChannels {
    /// Business
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub business: Vec<String>,
    /// Office
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub office: Vec<String>,
    /// Private
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub private: Vec<String>,
    /// Mobile (phone numbers only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mobile: Vec<String>,
    /// Fax (phone numbers only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fax: Vec<String>,
    /// Other
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_company_contact() {
        let json = r#"{
            "id": "e9066f04-8cc7-4616-93f8-ac9ecc8479c8",
            "organizationId": "aa93e8a8-2aa3-470b-b914-caad8a255dd8",
            "version": 0,
            "roles": { "customer": { "number": 10307 } },
            "company": {
                "name": "Testfirma",
                "taxNumber": "12345/12345",
                "vatRegistrationId": "DE123456789",
                "allowTaxFreeInvoices": true,
                "contactPersons": [
                    { "salutation": "Herr", "firstName": "Max", "lastName": "Mustermann", "primary": true }
                ]
            },
            "addresses": {
                "billing": [
                    { "supplement": "Gebäude 10", "street": "Musterstraße 42", "zip": "79112", "city": "Freiburg", "countryCode": "DE" }
                ]
            },
            "emailAddresses": { "business": ["info@example.com"] },
            "note": "Notizen",
            "archived": false
        }"#;

        let contact: Contact = serde_json::from_str(json).unwrap();
        assert!(contact.is_customer());
        assert!(!contact.is_vendor());
        assert_eq!(contact.roles.customer.as_ref().unwrap().number, Some(10307));
        assert_eq!(contact.display_name().as_deref(), Some("Testfirma"));
        assert_eq!(contact.addresses.billing[0].city.as_deref(), Some("Freiburg"));
        assert_eq!(contact.email_addresses.business, vec!["info@example.com"]);
        assert!(contact.phone_numbers.business.is_empty());
    }

    #[test]
    fn test_person_display_name() {
        let json = r#"{
            "id": "313ac153-9f8e-4f4e-9b3e-3d8e1ad4fa4b",
            "roles": { "vendor": {} },
            "person": { "salutation": "Frau", "firstName": "Inge", "lastName": "Musterfrau" }
        }"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert!(contact.is_vendor());
        assert_eq!(contact.display_name().as_deref(), Some("Inge Musterfrau"));
    }
}
