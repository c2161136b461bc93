use serde::{Deserialize, Serialize};

use crate::domain::models::ServerType;

/// Endpoint record binding a server type to a host and its two ports
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkMapping {
    pub server_type: ServerType,
    pub hostname: String,
    pub http_port: u16,
    pub tcp_port: u16,
}

/// Pair of free ports produced by a port allocator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortAllocation {
    pub http_port: u16,
    pub tcp_port: u16,
}

impl NetworkMapping {
    pub fn new(server_type: ServerType, hostname: impl Into<String>, ports: PortAllocation) -> Self {
        Self {
            server_type,
            hostname: hostname.into(),
            http_port: ports.http_port,
            tcp_port: ports.tcp_port,
        }
    }
}
