//! Log services and their entries

use crate::common::{impl_resource, list_referenced, Entity, Link, OData, Resource, Status};
use crate::error::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum OverWritePolicy {
    WrapsWhenFull,
    NeverOverWrites,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LogService {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub date_time: String,
    pub description: String,
    pub max_number_of_records: Option<u64>,
    pub over_write_policy: Option<OverWritePolicy>,
    pub service_enabled: bool,
    pub status: Status,

    entries: Link,
}

impl_resource!(LogService);

impl LogService {
    /// Records in this log.
    pub async fn entries(&self) -> Result<Vec<LogEntry>> {
        list_referenced(self.transport()?, self.entries.as_str()).await
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LogEntry {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub created: String,
    pub entry_type: String,
    pub message: String,
    #[serde(rename = "MessageId")]
    pub message_id: String,
    pub severity: String,
}

impl_resource!(LogEntry);
