use std::env;
use std::fmt;
use std::str::FromStr;

use crate::domain::config::ServerConfig;
use crate::domain::error::ParseEnvironmentTypeError;

/// Execution mode of the current process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvironmentType {
    #[default]
    Development,
    Production,
    Test,
}

impl EnvironmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvironmentType::Development => "development",
            EnvironmentType::Production => "production",
            EnvironmentType::Test => "test",
        }
    }
}

impl fmt::Display for EnvironmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvironmentType {
    type Err = ParseEnvironmentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" => Ok(EnvironmentType::Development),
            "production" => Ok(EnvironmentType::Production),
            "test" => Ok(EnvironmentType::Test),
            _ => Err(ParseEnvironmentTypeError { name: s.to_string() }),
        }
    }
}

/// Answers whether the process runs in the isolated test mode
pub trait EnvironmentDetector: Send + Sync {
    fn is_test(&self) -> bool;
}

/// Environment detector backed by `NETMAPPER_ENV`, or pinned to a fixed type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentConfig {
    environment: EnvironmentType,
}

impl EnvironmentConfig {
    /// Reads the environment type once from the process environment.
    pub fn from_env() -> Self {
        Self::from_value(env::var(ServerConfig::ENVIRONMENT_VAR).ok().as_deref())
    }

    /// Unset or unrecognized values fall back to development.
    pub fn from_value(value: Option<&str>) -> Self {
        let environment = match value {
            Some(value) => value.parse().unwrap_or_else(|e: ParseEnvironmentTypeError| {
                log::warn!(
                    "{} in {}, assuming {}",
                    e,
                    ServerConfig::ENVIRONMENT_VAR,
                    EnvironmentType::default()
                );
                EnvironmentType::default()
            }),
            None => EnvironmentType::default(),
        };
        Self::fixed(environment)
    }

    pub fn fixed(environment: EnvironmentType) -> Self {
        Self { environment }
    }

    pub fn environment(&self) -> EnvironmentType {
        self.environment
    }
}

impl EnvironmentDetector for EnvironmentConfig {
    fn is_test(&self) -> bool {
        self.environment == EnvironmentType::Test
    }
}
