use std::sync::OnceLock;

use crate::domain::config::{EnvironmentConfig, EnvironmentDetector, ServerConfig};
use crate::domain::error::{NetworkError, Result};
use crate::domain::models::InterfaceAddress;
use crate::features::hostname::interface_source::{InterfaceSource, SystemInterfaces};

/// Resolves and memoizes the canonical hostname of this machine
pub struct HostnameResolver {
    environment: Box<dyn EnvironmentDetector>,
    interfaces: Box<dyn InterfaceSource>,
    hostname: OnceLock<String>,
}

impl HostnameResolver {
    pub fn new(
        environment: impl EnvironmentDetector + 'static,
        interfaces: impl InterfaceSource + 'static,
    ) -> Self {
        Self {
            environment: Box::new(environment),
            interfaces: Box::new(interfaces),
            hostname: OnceLock::new(),
        }
    }

    /// Resolver reading the mode from the process environment and
    /// enumerating the OS interfaces.
    pub fn with_system_defaults() -> Self {
        Self::new(EnvironmentConfig::from_env(), SystemInterfaces)
    }

    /// Returns the canonical hostname, computing it on first use.
    ///
    /// In test mode this is always the loopback alias. Otherwise it is the
    /// first non-internal IPv4 address in enumeration order, normalized.
    /// A failed resolution is not cached.
    pub fn resolve(&self) -> Result<&str> {
        if let Some(hostname) = self.hostname.get() {
            return Ok(hostname.as_str());
        }

        let resolved = self.determine_hostname()?;
        Ok(self.hostname.get_or_init(|| resolved).as_str())
    }

    fn determine_hostname(&self) -> Result<String> {
        if self.environment.is_test() {
            return Ok(ServerConfig::LOOPBACK_ALIAS.to_string());
        }

        let interfaces = self.interfaces.interfaces();
        let first = candidate_addresses(&interfaces)
            .into_iter()
            .next()
            .ok_or(NetworkError::HostnameUnresolvable)?;

        let hostname = standardize_hostname(first);
        log::debug!("Resolved network hostname {}", hostname);
        Ok(hostname)
    }
}

/// Addresses of non-internal IPv4 entries, in enumeration order.
pub fn candidate_addresses(interfaces: &[InterfaceAddress]) -> Vec<&str> {
    interfaces
        .iter()
        .filter(|entry| entry.is_external_ipv4())
        .map(|entry| entry.address.as_str())
        .collect()
}

/// Collapses empty/`localhost` to the loopback alias and strips the
/// IPv4-mapped IPv6 prefix.
pub fn standardize_hostname(address: &str) -> String {
    let address = if address.is_empty() || address == ServerConfig::LOCALHOST {
        ServerConfig::LOOPBACK_ALIAS
    } else {
        address
    };

    address
        .strip_prefix(ServerConfig::IPV4_MAPPED_PREFIX)
        .unwrap_or(address)
        .to_string()
}
