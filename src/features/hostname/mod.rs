pub mod hostname_resolver;
pub mod interface_source;

pub use hostname_resolver::{candidate_addresses, standardize_hostname, HostnameResolver};
pub use interface_source::{InterfaceSource, SystemInterfaces};
