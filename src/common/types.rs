//! Schema types shared across resources

use serde::Deserialize;

/// Known state of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum State {
    Enabled,
    Disabled,
    StandbyOffline,
    StandbySpare,
    InTest,
    Starting,
    Absent,
    UnavailableOffline,
    Deferring,
    Quiesced,
    Updating,
    #[serde(other)]
    Unknown,
}

/// Health of a resource or its dependents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Health {
    #[serde(rename = "OK")]
    Ok,
    Warning,
    Critical,
    #[serde(other)]
    Unknown,
}

/// Status and health block present on most resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Status {
    pub state: Option<State>,
    pub health: Option<Health>,
    pub health_rollup: Option<Health>,
}

/// Power state of a system or manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PowerState {
    On,
    Off,
    PoweringOn,
    PoweringOff,
    #[serde(other)]
    Unknown,
}

/// State of an indicator LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum IndicatorLed {
    Lit,
    Blinking,
    Off,
    #[serde(other)]
    Unknown,
}

/// Format of a durable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DurableNameFormat {
    #[serde(rename = "NAA")]
    Naa,
    #[serde(rename = "iQN")]
    Iqn,
    #[serde(rename = "FC_WWN")]
    FcWwn,
    #[serde(rename = "UUID")]
    Uuid,
    #[serde(rename = "EUI")]
    Eui,
    #[serde(rename = "NQN")]
    Nqn,
    #[serde(rename = "NSID")]
    Nsid,
    #[serde(other)]
    Unknown,
}

/// A durable name for a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Identifier {
    pub durable_name: String,
    pub durable_name_format: Option<DurableNameFormat>,
}

/// Postal and placement information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Location {
    pub info: String,
    pub info_format: String,
    pub postal_address: Option<serde_json::Value>,
    pub placement: Option<serde_json::Value>,
}

/// Protocol used to communicate with a device or offered by a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Protocol {
    #[serde(rename = "PCIe")]
    Pcie,
    #[serde(rename = "AHCI")]
    Ahci,
    #[serde(rename = "UHCI")]
    Uhci,
    #[serde(rename = "SAS")]
    Sas,
    #[serde(rename = "SATA")]
    Sata,
    #[serde(rename = "USB")]
    Usb,
    #[serde(rename = "NVMe")]
    Nvme,
    #[serde(rename = "NVMeOverFabrics")]
    NvmeOverFabrics,
    #[serde(rename = "SMB")]
    Smb,
    #[serde(rename = "NFSv3")]
    NfsV3,
    #[serde(rename = "NFSv4")]
    NfsV4,
    #[serde(rename = "HTTP")]
    Http,
    #[serde(rename = "HTTPS")]
    Https,
    #[serde(rename = "FTP")]
    Ftp,
    #[serde(rename = "SFTP")]
    Sftp,
    #[serde(rename = "FC")]
    Fc,
    #[serde(rename = "FCP")]
    Fcp,
    #[serde(rename = "FCoE")]
    FcoE,
    #[serde(rename = "FICON")]
    Ficon,
    #[serde(rename = "iSCSI")]
    Iscsi,
    #[serde(rename = "iWARP")]
    Iwarp,
    #[serde(rename = "RoCE")]
    Roce,
    #[serde(rename = "RoCEv2")]
    RoceV2,
    InfiniBand,
    #[serde(rename = "OEM")]
    Oem,
    #[serde(other)]
    Unknown,
}
