//! Redfish resources
//!
//! Typed Redfish schema resources. Each type decodes its own envelope,
//! captures outgoing links as addresses, and resolves them on demand through
//! the transport it was fetched with.

pub mod accountservice;
pub mod assembly;
pub mod bios;
pub mod chassis;
pub mod computersystem;
pub mod drive;
pub mod endpoint;
pub mod eventdestination;
pub mod eventservice;
pub mod logservice;
pub mod manager;
pub mod memory;
pub mod network;
pub mod pcie;
pub mod processor;
pub mod serviceroot;
pub mod storage;
pub mod switch;
pub mod virtualmedia;

pub use accountservice::AccountService;
pub use assembly::{Assembly, AssemblyData};
pub use bios::{Bios, SecureBoot, SecureBootCurrentBootType, SecureBootModeType};
pub use chassis::{Chassis, ChassisType};
pub use computersystem::{
    Boot, BootOrderTypes, BootSourceOverrideEnabled, BootSourceOverrideMode, ComputerSystem,
    ComputerSystemActions, HostingRole, InterfaceType, MemoryMirroring, MemorySummary,
    PowerRestorePolicyTypes, ProcessorSummary, ResetAction, ResetType, SystemType,
    TrustedModules, WatchdogTimer,
};
pub use drive::{
    Drive, EncryptionAbility, EncryptionStatus, HotspareReplacementMode, HotspareType, MediaType,
    Operation, StatusIndicator,
};
pub use endpoint::{ConnectedEntity, Endpoint, EntityRole};
pub use eventdestination::EventDestination;
pub use eventservice::{EventFormatType, EventService, SseFilterPropertiesSupported};
pub use logservice::{LogEntry, LogService, OverWritePolicy};
pub use manager::{
    CommandConnectTypesSupported, CommandShell, GraphicalConnectTypesSupported, GraphicalConsole,
    Manager, ManagerType, SerialConnectTypesSupported, SerialConsole,
};
pub use memory::{Memory, MemoryDomain};
pub use network::{
    EthernetInterface, HostInterface, Ipv4Address, Ipv6Address, ManagerNetworkProtocol,
    NetworkInterface, ProtocolSettings, SerialInterface,
};
pub use pcie::{PcieDevice, PcieFunction};
pub use processor::Processor;
pub use serviceroot::ServiceRoot;
pub use storage::{Device, SimpleStorage, Storage, StorageController, Volume};
pub use switch::Switch;
pub use virtualmedia::VirtualMedia;
