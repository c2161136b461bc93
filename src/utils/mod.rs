use if_addrs::get_if_addrs;

use crate::domain::config::ServerConfig;
use crate::domain::models::{AddressFamily, InterfaceAddress};

/// Lists every interface address reported by the OS, in OS order.
pub fn get_interface_addresses() -> std::io::Result<Vec<InterfaceAddress>> {
    Ok(get_if_addrs()?
        .into_iter()
        .map(|iface| {
            let ip = iface.ip();
            InterfaceAddress {
                address: ip.to_string(),
                family: AddressFamily::from(&ip),
                internal: iface.is_loopback(),
                name: iface.name,
            }
        })
        .collect())
}

pub fn get_machine_name() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| ServerConfig::UNKNOWN_HOSTNAME.to_string())
}
