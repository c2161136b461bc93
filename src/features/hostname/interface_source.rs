use std::io;

use crate::domain::models::InterfaceAddress;
use crate::utils::get_interface_addresses;

/// Source of the host's network interface addresses
pub trait InterfaceSource: Send + Sync {
    fn interfaces(&self) -> Vec<InterfaceAddress>;
}

/// Interface source backed by the operating system
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInterfaces;

impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> Vec<InterfaceAddress> {
        addresses_or_empty(get_interface_addresses())
    }
}

/// A failed enumeration counts as no interfaces at all.
pub(crate) fn addresses_or_empty(result: io::Result<Vec<InterfaceAddress>>) -> Vec<InterfaceAddress> {
    match result {
        Ok(addresses) => addresses,
        Err(e) => {
            log::warn!("Interface enumeration failed: {}", e);
            Vec::new()
        }
    }
}
