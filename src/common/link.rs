//! Link decoding
//!
//! Relations arrive on the wire as `{"@odata.id": "<address>"}` objects (or
//! arrays of them). Resources capture them in private [`Link`] / [`Links`]
//! fields, which keep only the bare address. Nothing is fetched at decode
//! time.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
struct WireLink {
    #[serde(rename = "@odata.id", default)]
    odata_id: String,
}

/// Address of a single related resource. Empty when the relation is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link(String);

impl Link {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Link {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = Option::<WireLink>::deserialize(deserializer)?;
        Ok(Link(wire.map(|w| w.odata_id).unwrap_or_default()))
    }
}

/// Addresses of an array relation, in wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links(Vec<String>);

impl Links {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_strings(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Links {
    fn from(addresses: Vec<String>) -> Self {
        Self(addresses)
    }
}

impl<'de> Deserialize<'de> for Links {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = Option::<Vec<WireLink>>::deserialize(deserializer)?;
        Ok(Links(
            wire.unwrap_or_default()
                .into_iter()
                .map(|w| w.odata_id)
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(rename = "Bios", default)]
        bios: Link,
        #[serde(rename = "Chassis", default)]
        chassis: Links,
    }

    #[test]
    fn test_link_keeps_literal_address() {
        let holder: Holder = serde_json::from_str(
            r#"{"Bios": {"@odata.id": "/redfish/v1/Systems/1/Bios"}}"#,
        )
        .unwrap();
        assert_eq!(holder.bios.as_str(), "/redfish/v1/Systems/1/Bios");
        assert!(holder.chassis.is_empty());
    }

    #[test]
    fn test_null_and_missing_links_are_empty() {
        let holder: Holder = serde_json::from_str(r#"{"Bios": null, "Chassis": null}"#).unwrap();
        assert!(holder.bios.is_empty());
        assert!(holder.chassis.is_empty());

        let holder: Holder = serde_json::from_str(r#"{"Bios": {}}"#).unwrap();
        assert!(holder.bios.is_empty());
    }

    #[test]
    fn test_links_preserve_order() {
        let holder: Holder = serde_json::from_str(
            r#"{"Chassis": [
                {"@odata.id": "/redfish/v1/Chassis/b"},
                {"@odata.id": "/redfish/v1/Chassis/a"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            holder.chassis.into_strings(),
            vec!["/redfish/v1/Chassis/b", "/redfish/v1/Chassis/a"]
        );
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        assert!(serde_json::from_str::<Holder>(r#"{"Bios": "/redfish/v1/Bios"}"#).is_err());
        assert!(serde_json::from_str::<Holder>(r#"{"Chassis": {"@odata.id": "x"}}"#).is_err());
    }
}
