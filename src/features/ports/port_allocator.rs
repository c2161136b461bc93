use std::net::TcpListener;

use crate::domain::config::ServerConfig;
use crate::domain::error::PortAllocationError;
use crate::domain::models::PortAllocation;

/// Produces a pair of free ports for a new mapping
pub trait PortAllocator: Send + Sync {
    fn create_port_allocation(&self) -> Result<PortAllocation, PortAllocationError>;
}

/// Port allocator that lets the OS pick ephemeral ports
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPortAllocator;

impl SystemPortAllocator {
    fn bind_probe() -> Result<TcpListener, PortAllocationError> {
        let address = format!("{}:0", ServerConfig::BIND_ADDRESS);
        TcpListener::bind(&address).map_err(|source| PortAllocationError::Bind { address, source })
    }

    fn probe_port(listener: &TcpListener) -> Result<u16, PortAllocationError> {
        listener
            .local_addr()
            .map(|addr| addr.port())
            .map_err(PortAllocationError::LocalAddr)
    }
}

impl PortAllocator for SystemPortAllocator {
    fn create_port_allocation(&self) -> Result<PortAllocation, PortAllocationError> {
        // Both probes stay bound until the ports are read so they differ.
        let http_probe = Self::bind_probe()?;
        let tcp_probe = Self::bind_probe()?;

        let allocation = PortAllocation {
            http_port: Self::probe_port(&http_probe)?,
            tcp_port: Self::probe_port(&tcp_probe)?,
        };

        log::debug!(
            "Allocated ports http={} tcp={}",
            allocation.http_port,
            allocation.tcp_port
        );

        Ok(allocation)
    }
}
