//! Account service

use crate::common::{impl_resource, Entity, OData, Status};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AccountService {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub account_lockout_counter_reset_after: Option<u64>,
    pub account_lockout_duration: Option<u64>,
    pub account_lockout_threshold: Option<u64>,
    pub auth_failure_logging_threshold: Option<u64>,
    pub description: String,
    pub max_password_length: Option<u32>,
    pub min_password_length: Option<u32>,
    pub service_enabled: bool,
    pub status: Status,
}

impl_resource!(AccountService);
