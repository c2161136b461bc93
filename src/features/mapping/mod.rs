pub mod network_mapper;

pub use network_mapper::NetworkMapper;
