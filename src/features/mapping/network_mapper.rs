use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use crate::domain::error::Result;
use crate::domain::models::{NetworkMapping, ServerType};
use crate::features::hostname::HostnameResolver;
use crate::features::ports::{PortAllocator, SystemPortAllocator};

static INSTANCE: OnceLock<Mutex<NetworkMapper>> = OnceLock::new();

/// Registry of network mappings keyed by server type
pub struct NetworkMapper {
    resolver: HostnameResolver,
    allocator: Box<dyn PortAllocator>,
    mappings: HashMap<ServerType, Option<NetworkMapping>>,
}

impl NetworkMapper {
    /// Creates an empty registry with one absent entry per server type
    pub fn new(resolver: HostnameResolver, allocator: impl PortAllocator + 'static) -> Self {
        Self {
            resolver,
            allocator: Box::new(allocator),
            mappings: ServerType::ALL.into_iter().map(|t| (t, None)).collect(),
        }
    }

    pub fn with_system_defaults() -> Self {
        Self::new(HostnameResolver::with_system_defaults(), SystemPortAllocator)
    }

    /// Process-wide registry, built with system defaults on first use.
    ///
    /// Prefer constructing a `NetworkMapper` and passing it where it is
    /// needed; this accessor exists for call sites that cannot.
    pub fn get_instance() -> &'static Mutex<NetworkMapper> {
        INSTANCE.get_or_init(|| Mutex::new(NetworkMapper::with_system_defaults()))
    }

    pub fn get_hostname(&self) -> Result<&str> {
        self.resolver.resolve()
    }

    /// Allocates ports, resolves the hostname and stores the resulting
    /// mapping, replacing any previous mapping for `server_type`.
    pub fn create_local_mapping_for_server_type(
        &mut self,
        server_type: ServerType,
    ) -> Result<NetworkMapping> {
        let ports = self.allocator.create_port_allocation()?;
        let hostname = self.resolver.resolve()?;
        let mapping = NetworkMapping::new(server_type, hostname, ports);

        log::info!(
            "Mapped {} to {} (http {}, tcp {})",
            server_type,
            mapping.hostname,
            mapping.http_port,
            mapping.tcp_port
        );

        self.mappings.insert(server_type, Some(mapping.clone()));
        Ok(mapping)
    }

    /// Stores a caller-supplied mapping as-is under its own server type
    pub fn create_local_mapping(&mut self, mapping: NetworkMapping) -> &mut Self {
        self.mappings.insert(mapping.server_type, Some(mapping));
        self
    }

    pub fn get_mapping_for_server_type(&self, server_type: ServerType) -> Option<&NetworkMapping> {
        self.mappings.get(&server_type).and_then(Option::as_ref)
    }

    /// Present mappings in `ServerType::ALL` order
    pub fn mappings(&self) -> impl Iterator<Item = &NetworkMapping> + '_ {
        ServerType::ALL
            .into_iter()
            .filter_map(move |server_type| self.get_mapping_for_server_type(server_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{EnvironmentConfig, EnvironmentType};
    use crate::domain::error::{NetworkError, PortAllocationError};
    use crate::domain::models::{InterfaceAddress, PortAllocation};
    use crate::features::hostname::InterfaceSource;
    use std::io;
    use std::sync::atomic::{AtomicU16, Ordering};

    struct SequentialPorts {
        next: AtomicU16,
    }

    impl SequentialPorts {
        fn starting_at(port: u16) -> Self {
            Self { next: AtomicU16::new(port) }
        }
    }

    impl PortAllocator for SequentialPorts {
        fn create_port_allocation(&self) -> std::result::Result<PortAllocation, PortAllocationError> {
            let http_port = self.next.fetch_add(2, Ordering::SeqCst);
            Ok(PortAllocation { http_port, tcp_port: http_port + 1 })
        }
    }

    struct ExhaustedPorts;

    impl PortAllocator for ExhaustedPorts {
        fn create_port_allocation(&self) -> std::result::Result<PortAllocation, PortAllocationError> {
            Err(PortAllocationError::LocalAddr(io::Error::new(
                io::ErrorKind::AddrInUse,
                "no free port",
            )))
        }
    }

    struct NoInterfaces;

    impl InterfaceSource for NoInterfaces {
        fn interfaces(&self) -> Vec<InterfaceAddress> {
            Vec::new()
        }
    }

    fn test_resolver() -> HostnameResolver {
        HostnameResolver::new(EnvironmentConfig::fixed(EnvironmentType::Test), NoInterfaces)
    }

    fn test_mapper() -> NetworkMapper {
        NetworkMapper::new(test_resolver(), SequentialPorts::starting_at(40000))
    }

    fn game_mapping(hostname: &str, http_port: u16, tcp_port: u16) -> NetworkMapping {
        NetworkMapping {
            server_type: ServerType::Game,
            hostname: hostname.to_string(),
            http_port,
            tcp_port,
        }
    }

    #[test]
    fn test_new_mapper_has_no_mappings() {
        let mapper = test_mapper();
        assert_eq!(mapper.mappings.len(), ServerType::ALL.len());
        for server_type in ServerType::ALL {
            assert!(mapper.get_mapping_for_server_type(server_type).is_none());
        }
        assert_eq!(mapper.mappings().count(), 0);
    }

    #[test]
    fn test_create_then_get_mapping() {
        let mut mapper = test_mapper();
        let created = mapper.create_local_mapping_for_server_type(ServerType::Game).unwrap();
        assert_eq!(created, game_mapping("127.0.0.1", 40000, 40001));
        assert_eq!(mapper.get_mapping_for_server_type(ServerType::Game), Some(&created));
        assert!(mapper.get_mapping_for_server_type(ServerType::Api).is_none());
    }

    #[test]
    fn test_mappers_do_not_share_state() {
        let mut mapper_one = test_mapper();
        let mapper_two = test_mapper();
        mapper_one.create_local_mapping_for_server_type(ServerType::Game).unwrap();
        assert!(mapper_two.get_mapping_for_server_type(ServerType::Game).is_none());
    }

    #[test]
    fn test_create_overwrites_previous_mapping() {
        let mut mapper = test_mapper();
        let first = mapper.create_local_mapping_for_server_type(ServerType::Game).unwrap();
        let second = mapper.create_local_mapping_for_server_type(ServerType::Game).unwrap();
        let stored = mapper.get_mapping_for_server_type(ServerType::Game).unwrap();
        assert_eq!(stored, &second);
        assert_ne!(stored, &first);
    }

    #[test]
    fn test_supplied_mapping_is_stored_as_is() {
        let mut mapper = test_mapper();
        let original = game_mapping("localhost", 1234, 5678);
        mapper.create_local_mapping(original.clone());
        assert_eq!(mapper.get_mapping_for_server_type(ServerType::Game), Some(&original));
    }

    #[test]
    fn test_supplied_mapping_overwrites_and_chains() {
        let mut mapper = test_mapper();
        let one = game_mapping("localhost", 1234, 5678);
        let two = game_mapping("burninggarden.com", 4321, 8765);
        mapper.create_local_mapping(one).create_local_mapping(two.clone());
        assert_eq!(mapper.get_mapping_for_server_type(ServerType::Game), Some(&two));
    }

    #[test]
    fn test_mappings_follow_server_type_order() {
        let mut mapper = test_mapper();
        mapper.create_local_mapping_for_server_type(ServerType::Proxy).unwrap();
        mapper.create_local_mapping_for_server_type(ServerType::Api).unwrap();
        let order: Vec<ServerType> = mapper.mappings().map(|m| m.server_type).collect();
        assert_eq!(order, vec![ServerType::Api, ServerType::Proxy]);
    }

    #[test]
    fn test_get_hostname_passthrough() {
        let mapper = test_mapper();
        assert_eq!(mapper.get_hostname().unwrap(), "127.0.0.1");
    }

    #[test]
    fn test_unresolvable_hostname_propagates() {
        let resolver = HostnameResolver::new(
            EnvironmentConfig::fixed(EnvironmentType::Production),
            NoInterfaces,
        );
        let mut mapper = NetworkMapper::new(resolver, SequentialPorts::starting_at(40000));
        let err = mapper.create_local_mapping_for_server_type(ServerType::Game).unwrap_err();
        assert!(matches!(err, NetworkError::HostnameUnresolvable));
        assert!(mapper.get_mapping_for_server_type(ServerType::Game).is_none());
    }

    #[test]
    fn test_port_allocation_failure_propagates() {
        let mut mapper = NetworkMapper::new(test_resolver(), ExhaustedPorts);
        let err = mapper.create_local_mapping_for_server_type(ServerType::Api).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::PortAllocationFailed(PortAllocationError::LocalAddr(_))
        ));
        assert!(mapper.get_mapping_for_server_type(ServerType::Api).is_none());
    }

    #[test]
    fn test_get_instance_is_memoized() {
        let mapper_one = NetworkMapper::get_instance();
        let mapper_two = NetworkMapper::get_instance();
        assert!(std::ptr::eq(mapper_one, mapper_two));

        let supplied = NetworkMapping {
            server_type: ServerType::Assets,
            hostname: "10.0.0.5".to_string(),
            http_port: 1234,
            tcp_port: 5678,
        };
        mapper_one.lock().unwrap().create_local_mapping(supplied.clone());
        let guard = mapper_two.lock().unwrap();
        assert_eq!(guard.get_mapping_for_server_type(ServerType::Assets), Some(&supplied));
    }
}
