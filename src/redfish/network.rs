//! Network-facing interfaces of systems and managers

use crate::common::{impl_resource, Entity, OData, Status};
use serde::Deserialize;

/// IPv4 address assigned to an interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Ipv4Address {
    pub address: String,
    pub address_origin: String,
    pub gateway: String,
    pub subnet_mask: String,
}

/// IPv6 address assigned to an interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Ipv6Address {
    pub address: String,
    pub address_origin: String,
    pub address_state: String,
    pub prefix_length: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EthernetInterface {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub description: String,
    #[serde(rename = "FQDN")]
    pub fqdn: String,
    pub full_duplex: bool,
    pub host_name: String,
    #[serde(rename = "IPv4Addresses")]
    pub ipv4_addresses: Vec<Ipv4Address>,
    #[serde(rename = "IPv6Addresses")]
    pub ipv6_addresses: Vec<Ipv6Address>,
    pub interface_enabled: bool,
    pub link_status: String,
    #[serde(rename = "MACAddress")]
    pub mac_address: String,
    #[serde(rename = "MTUSize")]
    pub mtu_size: Option<u32>,
    pub name_servers: Vec<String>,
    #[serde(rename = "PermanentMACAddress")]
    pub permanent_mac_address: String,
    pub speed_mbps: Option<u32>,
    pub status: Status,
}

impl_resource!(EthernetInterface);

/// A network adapter as seen from its owning system.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NetworkInterface {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub description: String,
    pub status: Status,
}

impl_resource!(NetworkInterface);

/// In-band interface between a host and its manager.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct HostInterface {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub description: String,
    pub externally_accessible: bool,
    pub host_interface_type: String,
    pub interface_enabled: bool,
    pub status: Status,
}

impl_resource!(HostInterface);

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SerialInterface {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub bit_rate: String,
    pub data_bits: String,
    pub description: String,
    pub flow_control: String,
    pub interface_enabled: bool,
    pub parity: String,
    pub signal_type: String,
    pub stop_bits: String,
}

impl_resource!(SerialInterface);

/// Settings of one network service offered by a manager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProtocolSettings {
    pub port: Option<u16>,
    pub protocol_enabled: bool,
}

/// Network services of a manager.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ManagerNetworkProtocol {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub description: String,
    #[serde(rename = "FQDN")]
    pub fqdn: String,
    #[serde(rename = "HTTP")]
    pub http: ProtocolSettings,
    #[serde(rename = "HTTPS")]
    pub https: ProtocolSettings,
    pub host_name: String,
    #[serde(rename = "IPMI")]
    pub ipmi: ProtocolSettings,
    #[serde(rename = "SNMP")]
    pub snmp: ProtocolSettings,
    #[serde(rename = "SSH")]
    pub ssh: ProtocolSettings,
    pub status: Status,
}

impl_resource!(ManagerNetworkProtocol);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ethernet_interface_addresses() {
        let nic: EthernetInterface = serde_json::from_str(
            r#"{
                "Id": "1",
                "Name": "Ethernet Interface",
                "MACAddress": "12:44:6A:3B:04:11",
                "SpeedMbps": 1000,
                "FullDuplex": true,
                "IPv4Addresses": [
                    {"Address": "192.168.0.10", "SubnetMask": "255.255.252.0", "AddressOrigin": "DHCP", "Gateway": "192.168.0.1"}
                ],
                "IPv6Addresses": [
                    {"Address": "fe80::1ec1:deff:fe6f:1e24", "PrefixLength": 64, "AddressOrigin": "SLAAC"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(nic.mac_address, "12:44:6A:3B:04:11");
        assert_eq!(nic.ipv4_addresses[0].gateway, "192.168.0.1");
        assert_eq!(nic.ipv6_addresses[0].prefix_length, Some(64));
        assert_eq!(nic.speed_mbps, Some(1000));
    }

    #[test]
    fn test_network_protocol_settings() {
        let protocol: ManagerNetworkProtocol = serde_json::from_str(
            r#"{
                "Id": "NetworkProtocol",
                "Name": "Manager Network Protocol",
                "HTTPS": {"ProtocolEnabled": true, "Port": 443},
                "SSH": {"ProtocolEnabled": false, "Port": 22}
            }"#,
        )
        .unwrap();
        assert!(protocol.https.protocol_enabled);
        assert_eq!(protocol.https.port, Some(443));
        assert!(!protocol.ssh.protocol_enabled);
        assert_eq!(protocol.ipmi, ProtocolSettings::default());
    }
}
