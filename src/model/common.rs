//! Types shared across every resource: the `type` discriminator, resource
//! metadata, and the error body the API returns on failed calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resource kind discriminator carried by every API object in its `type`
/// field.
///
/// The in-memory form is the symbolic `SCREAMING_SNAKE_CASE` name (what the
/// generated client serializes), while the wire form the API itself speaks is
/// lowercase-hyphenated. [`ResourceType::wire_value`] and
/// [`ResourceType::from_symbol`] convert between the two; the response
/// normalizer relies on them to hand callers the wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    #[serde(rename = "COLLECTION", alias = "collection")]
    Collection,
    #[serde(rename = "DATACENTER", alias = "datacenter")]
    Datacenter,
    #[serde(rename = "SERVER", alias = "server")]
    Server,
    #[serde(rename = "VOLUME", alias = "volume")]
    Volume,
    #[serde(rename = "SNAPSHOT", alias = "snapshot")]
    Snapshot,
    #[serde(rename = "NIC", alias = "nic")]
    Nic,
    #[serde(rename = "LAN", alias = "lan")]
    Lan,
    #[serde(rename = "IMAGE", alias = "image")]
    Image,
    #[serde(rename = "REQUEST", alias = "request")]
    Request,
    #[serde(rename = "REQUEST_STATUS", alias = "request-status")]
    RequestStatus,
}

impl ResourceType {
    /// The lowercase value the API uses on the wire.
    pub fn wire_value(self) -> &'static str {
        match self {
            Self::Collection => "collection",
            Self::Datacenter => "datacenter",
            Self::Server => "server",
            Self::Volume => "volume",
            Self::Snapshot => "snapshot",
            Self::Nic => "nic",
            Self::Lan => "lan",
            Self::Image => "image",
            Self::Request => "request",
            Self::RequestStatus => "request-status",
        }
    }

    /// Look up a type from its symbolic serialized name (`"DATACENTER"`).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "COLLECTION" => Some(Self::Collection),
            "DATACENTER" => Some(Self::Datacenter),
            "SERVER" => Some(Self::Server),
            "VOLUME" => Some(Self::Volume),
            "SNAPSHOT" => Some(Self::Snapshot),
            "NIC" => Some(Self::Nic),
            "LAN" => Some(Self::Lan),
            "IMAGE" => Some(Self::Image),
            "REQUEST" => Some(Self::Request),
            "REQUEST_STATUS" => Some(Self::RequestStatus),
            _ => None,
        }
    }
}

/// Audit metadata attached to every persisted resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Body shape of an API failure response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<ApiErrorMessage>>,
}

/// One entry of an API failure response's `messages` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resource_type_serializes_symbolically() {
        assert_eq!(
            serde_json::to_value(ResourceType::Datacenter).unwrap(),
            json!("DATACENTER")
        );
        assert_eq!(
            serde_json::to_value(ResourceType::RequestStatus).unwrap(),
            json!("REQUEST_STATUS")
        );
    }

    #[test]
    fn resource_type_accepts_wire_form() {
        let t: ResourceType = serde_json::from_value(json!("datacenter")).unwrap();
        assert_eq!(t, ResourceType::Datacenter);
        let t: ResourceType = serde_json::from_value(json!("request-status")).unwrap();
        assert_eq!(t, ResourceType::RequestStatus);
    }

    #[test]
    fn symbol_and_wire_round_trip() {
        for t in [
            ResourceType::Collection,
            ResourceType::Datacenter,
            ResourceType::Server,
            ResourceType::Volume,
            ResourceType::Snapshot,
            ResourceType::Nic,
            ResourceType::Lan,
            ResourceType::Image,
            ResourceType::Request,
            ResourceType::RequestStatus,
        ] {
            let symbol = serde_json::to_value(t).unwrap();
            let symbol = symbol.as_str().unwrap();
            assert_eq!(ResourceType::from_symbol(symbol), Some(t));
            assert_ne!(t.wire_value(), symbol);
        }
    }
}
