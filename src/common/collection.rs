//! Resource fetching
//!
//! Generic fetch-and-decode functions every resource type is built on, and
//! collection dereferencing.

use super::decode::decode;
use super::entity::Resource;
use super::link::Links;
use crate::error::Result;
use crate::service::Transport;
use serde::Deserialize;

/// Wire shape of a homogeneous collection resource.
#[derive(Debug, Deserialize)]
struct CollectionEnvelope {
    #[serde(rename = "Members", default)]
    members: Links,
    // Reported by the service, never checked against `members`.
    #[serde(rename = "Members@odata.count", default)]
    #[allow(dead_code)]
    count: Option<u64>,
}

/// Resolve a collection address to its member addresses, in wire order.
///
/// An empty address yields an empty list without a request. Members are not
/// fetched, and `@odata.nextLink` paging is not followed.
pub async fn get_collection(transport: &Transport, address: &str) -> Result<Vec<String>> {
    if address.is_empty() {
        return Ok(Vec::new());
    }

    let response = transport.get(address).await?;
    let body = response.bytes().await?;
    let envelope: CollectionEnvelope = decode(&body)?;

    tracing::debug!("collection {} has {} members", address, envelope.members.len());
    Ok(envelope.members.into_strings())
}

/// Fetch and decode a resource, then bind it to `transport`.
pub async fn get_object<T: Resource>(transport: &Transport, address: &str) -> Result<T> {
    let response = transport.get(address).await?;
    let body = response.bytes().await?;

    let mut resource: T = decode(&body)?;
    resource.entity_mut().set_transport(transport.clone());
    Ok(resource)
}

/// Resolve an optional single relation. An empty address is `None`.
pub async fn get_optional<T: Resource>(transport: &Transport, address: &str) -> Result<Option<T>> {
    if address.is_empty() {
        return Ok(None);
    }

    get_object(transport, address).await.map(Some)
}

/// Fetch each address in order. The first failure aborts the whole call.
pub async fn get_objects<T: Resource>(transport: &Transport, addresses: &[String]) -> Result<Vec<T>> {
    let mut result = Vec::with_capacity(addresses.len());
    for address in addresses {
        result.push(get_object(transport, address).await?);
    }
    Ok(result)
}

/// Dereference a collection and fetch every member.
pub async fn list_referenced<T: Resource>(transport: &Transport, address: &str) -> Result<Vec<T>> {
    let members = get_collection(transport, address).await?;
    get_objects(transport, &members).await
}
