//! Resource resolution layer
//!
//! The pieces every resource type is assembled from.
//!
//! # Architecture
//!
//! - [`entity`] - Identity, OData metadata and the transport binding
//! - [`link`] - Wire links captured as bare addresses at decode time
//! - [`collection`] - Fetch/decode/attach and collection dereferencing
//! - [`decode`] - Body decoding with `null` members read as absent
//! - [`types`] - Schema types shared across resources
//!
//! # Example
//!
//! ```ignore
//! use rfwalk::common::{get_collection, get_object};
//! use rfwalk::redfish::ComputerSystem;
//!
//! async fn first_system(transport: &Transport) -> rfwalk::Result<Option<ComputerSystem>> {
//!     let members = get_collection(transport, "/redfish/v1/Systems").await?;
//!     match members.first() {
//!         Some(address) => Ok(Some(get_object(transport, address).await?)),
//!         None => Ok(None),
//!     }
//! }
//! ```

pub mod collection;
pub mod decode;
pub mod entity;
pub mod link;
pub mod types;

pub use collection::{get_collection, get_object, get_objects, get_optional, list_referenced};
pub use decode::decode;
pub use entity::{Entity, OData, Resource};
pub(crate) use entity::impl_resource;
pub use link::{Link, Links};
pub use types::*;
