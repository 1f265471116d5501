//! Swordfish resources
//!
//! Storage line-of-service capability resources.

pub mod datastorageloscapabilities;
pub mod ioconnectivityloscapabilities;

pub use datastorageloscapabilities::{
    DataStorageLineOfService, DataStorageLoSCapabilities, ProvisioningPolicy, RecoveryAccessScope,
    StorageAccessCapability,
};
pub use ioconnectivityloscapabilities::{IoConnectivityLineOfService, IoConnectivityLoSCapabilities};
