use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NetworkError>;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Unable to determine network hostname: no external IPv4 interface")]
    HostnameUnresolvable,

    #[error(transparent)]
    PortAllocationFailed(#[from] PortAllocationError),
}

#[derive(Error, Debug)]
pub enum PortAllocationError {
    #[error("Failed to bind probe socket on {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read probe socket address: {0}")]
    LocalAddr(#[source] io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown server type: {name}")]
pub struct ParseServerTypeError {
    pub name: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown environment type: {name}")]
pub struct ParseEnvironmentTypeError {
    pub name: String,
}
