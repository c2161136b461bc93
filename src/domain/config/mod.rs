pub mod environment;
pub mod server_config;

pub use environment::{EnvironmentConfig, EnvironmentDetector, EnvironmentType};
pub use server_config::ServerConfig;
