use std::net::IpAddr;

/// Address family of an interface address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
    Other,
}

impl From<&IpAddr> for AddressFamily {
    fn from(ip: &IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => AddressFamily::Ipv4,
            IpAddr::V6(_) => AddressFamily::Ipv6,
        }
    }
}

/// One address record reported for a network interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub name: String,
    pub address: String,
    pub family: AddressFamily,
    pub internal: bool,
}

impl InterfaceAddress {
    pub fn is_external_ipv4(&self) -> bool {
        !self.internal && self.family == AddressFamily::Ipv4
    }
}
