//! Entity
//!
//! Identity and transport binding shared by every resource.

use crate::error::{Error, Result};
use crate::service::Transport;
use serde::Deserialize;

/// Identifier, display name and owning transport of a resource.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Entity {
    /// Unique within the owning service.
    #[serde(rename = "Id")]
    pub id: String,
    /// Human readable, not guaranteed unique.
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(skip)]
    transport: Option<Transport>,
}

impl Entity {
    /// Bind this entity to the transport it was fetched through.
    pub fn set_transport(&mut self, transport: Transport) {
        self.transport = Some(transport);
    }

    /// Transport used for relation lookups.
    pub fn transport(&self) -> Result<&Transport> {
        self.transport.as_ref().ok_or_else(|| Error::DetachedEntity {
            id: self.id.clone(),
        })
    }

    /// Whether a transport has been attached to this entity.
    pub fn is_attached(&self) -> bool {
        self.transport.is_some()
    }
}

// Two entities are equal when they describe the same resource; which
// transport handle they hold does not matter.
impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

/// `@odata.*` metadata carried verbatim from the envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OData {
    #[serde(rename = "@odata.context")]
    pub context: String,
    #[serde(rename = "@odata.etag")]
    pub etag: String,
    #[serde(rename = "@odata.id")]
    pub id: String,
    #[serde(rename = "@odata.type")]
    pub odata_type: String,
}

/// A typed resource decoded from a service envelope.
pub trait Resource: serde::de::DeserializeOwned {
    fn entity(&self) -> &Entity;

    fn entity_mut(&mut self) -> &mut Entity;

    fn id(&self) -> &str {
        &self.entity().id
    }

    fn name(&self) -> &str {
        &self.entity().name
    }

    /// Transport to resolve relations with; fails if never attached.
    fn transport(&self) -> Result<&Transport> {
        self.entity().transport()
    }
}

/// Implement [`Resource`] for a type with an `entity` field, plus its
/// `get` / `list_referenced` constructors.
macro_rules! impl_resource {
    ($ty:ident) => {
        impl $crate::common::Resource for $ty {
            fn entity(&self) -> &$crate::common::Entity {
                &self.entity
            }

            fn entity_mut(&mut self) -> &mut $crate::common::Entity {
                &mut self.entity
            }
        }

        impl $ty {
            #[doc = concat!("Fetch a `", stringify!($ty), "` from the service.")]
            pub async fn get(
                transport: &$crate::service::Transport,
                uri: &str,
            ) -> $crate::error::Result<Self> {
                $crate::common::get_object(transport, uri).await
            }

            #[doc = concat!("Fetch every `", stringify!($ty), "` in the collection at `link`.")]
            pub async fn list_referenced(
                transport: &$crate::service::Transport,
                link: &str,
            ) -> $crate::error::Result<Vec<Self>> {
                $crate::common::list_referenced(transport, link).await
            }
        }
    };
}

pub(crate) use impl_resource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_entity_reports_its_id() {
        let entity: Entity = serde_json::from_str(r#"{"Id": "1", "Name": "System"}"#).unwrap();
        assert!(!entity.is_attached());
        match entity.transport() {
            Err(Error::DetachedEntity { id }) => assert_eq!(id, "1"),
            other => panic!("expected DetachedEntity, got {:?}", other),
        }
    }

    #[test]
    fn test_set_transport_is_idempotent() {
        let transport = Transport::new("http://bmc.local", None).unwrap();
        let mut entity = Entity::default();
        entity.set_transport(transport.clone());
        entity.set_transport(transport);
        assert_eq!(entity.transport().unwrap().endpoint(), "http://bmc.local");
    }

    #[test]
    fn test_equality_ignores_transport() {
        let mut a: Entity = serde_json::from_str(r#"{"Id": "1", "Name": "A"}"#).unwrap();
        let b = a.clone();
        a.set_transport(Transport::new("http://bmc.local", None).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn test_odata_fields_decode_verbatim() {
        let odata: OData = serde_json::from_str(
            r##"{
                "@odata.context": "/redfish/v1/$metadata#Drive.Drive",
                "@odata.etag": "W/\"1\"",
                "@odata.id": "/redfish/v1/Drives/1",
                "@odata.type": "#Drive.v1_4_0.Drive"
            }"##,
        )
        .unwrap();
        assert_eq!(odata.id, "/redfish/v1/Drives/1");
        assert_eq!(odata.etag, "W/\"1\"");
        assert_eq!(odata.odata_type, "#Drive.v1_4_0.Drive");
    }
}
