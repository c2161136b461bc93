pub mod domain;
pub mod features;
pub mod status_server;
pub mod utils;

pub use domain::config::{EnvironmentConfig, EnvironmentDetector, EnvironmentType, ServerConfig};
pub use domain::error::{
    NetworkError, ParseEnvironmentTypeError, ParseServerTypeError, PortAllocationError, Result,
};
pub use domain::models::{AddressFamily, InterfaceAddress, NetworkMapping, PortAllocation, ServerType};
pub use features::hostname::{standardize_hostname, HostnameResolver, InterfaceSource, SystemInterfaces};
pub use features::mapping::NetworkMapper;
pub use features::ports::{PortAllocator, SystemPortAllocator};
