//! Envelope decoding
//!
//! Services commonly send `null` for properties they do not populate. Every
//! body is decoded through [`decode`], which treats a `null` object member as
//! absent so the field takes its default.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a JSON body into `T`, reading `null` members as missing.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let mut value: Value = serde_json::from_slice(body)?;
    drop_null_members(&mut value);
    Ok(serde_json::from_value(value)?)
}

fn drop_null_members(value: &mut Value) {
    match value {
        Value::Object(members) => {
            members.retain(|_, member| !member.is_null());
            members.values_mut().for_each(drop_null_members);
        }
        Value::Array(items) => items.iter_mut().for_each(drop_null_members),
        _ => {}
    }
}
