//! Generic response to create calls.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::primitives::{timestamp, Timestamp};

/// What lexoffice returns after creating a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceResponse {
    /// Id of the created resource
    pub id: Uuid,
    /// Canonical URI of the created resource
    #[serde(default)]
    pub resource_uri: Option<String>,
    /// Creation time
    #[serde(default, with = "timestamp::option")]
    pub created_date: Option<Timestamp>,
    /// Last update time
    #[serde(default, with = "timestamp::option")]
    pub updated_date: Option<Timestamp>,
    /// Optimistic locking version
    #[serde(default)]
    pub version: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_create_response() {
        let json = r#"{
            "id": "66196c43-baf3-4335-bfee-d610367059db",
            "resourceUri": "https://api.lexoffice.io/v1/invoices/66196c43-baf3-4335-bfee-d610367059db",
            "createdDate": "2023-06-29T15:15:09.447+02:00",
            "updatedDate": "2023-06-29T15:15:09.447+02:00",
            "version": 1
        }"#;
        let r: ResourceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.version, 1);
        assert_eq!(r.created_date.unwrap().timestamp_subsec_millis(), 447);
    }
}
