//! Switch

use crate::common::{impl_resource, Entity, IndicatorLed, OData, PowerState, Protocol, Status};
use serde::Deserialize;

/// A fabric switch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Switch {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub asset_tag: String,
    pub description: String,
    pub domain_id: Option<u32>,
    #[serde(rename = "IndicatorLED")]
    pub indicator_led: Option<IndicatorLed>,
    pub is_managed: bool,
    pub manufacturer: String,
    pub model: String,
    pub part_number: String,
    pub power_state: Option<PowerState>,
    #[serde(rename = "SKU")]
    pub sku: String,
    pub serial_number: String,
    pub status: Status,
    pub switch_type: Option<Protocol>,
    pub total_switch_width: Option<u32>,
}

impl_resource!(Switch);
