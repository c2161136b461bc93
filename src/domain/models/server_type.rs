use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::ParseServerTypeError;

/// Logical service role within the topology
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ServerType {
    Api,
    Assets,
    Logger,
    Game,
    Proxy,
}

impl ServerType {
    pub const ALL: [ServerType; 5] = [
        ServerType::Api,
        ServerType::Assets,
        ServerType::Logger,
        ServerType::Game,
        ServerType::Proxy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServerType::Api => "api",
            ServerType::Assets => "assets",
            ServerType::Logger => "logger",
            ServerType::Game => "game",
            ServerType::Proxy => "proxy",
        }
    }
}

impl fmt::Display for ServerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerType {
    type Err = ParseServerTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServerType::ALL
            .into_iter()
            .find(|server_type| server_type.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseServerTypeError { name: s.to_string() })
    }
}
