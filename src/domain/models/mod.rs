pub mod interface;
pub mod network_mapping;
pub mod server_type;

pub use interface::{AddressFamily, InterfaceAddress};
pub use network_mapping::{NetworkMapping, PortAllocation};
pub use server_type::ServerType;
