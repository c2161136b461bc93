use std::sync::{Arc, Mutex};

use anyhow::Result;

use netmapper::{
    status_server, utils, EnvironmentConfig, HostnameResolver, NetworkMapper, ServerType,
    SystemInterfaces, SystemPortAllocator,
};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let environment = EnvironmentConfig::from_env();
    log::info!(
        "Starting NetMapper on {} ({} environment)...",
        utils::get_machine_name(),
        environment.environment()
    );

    let resolver = HostnameResolver::new(environment, SystemInterfaces);
    let mut mapper = NetworkMapper::new(resolver, SystemPortAllocator);
    log::info!("Network hostname: {}", mapper.get_hostname()?);

    for server_type in ServerType::ALL {
        mapper.create_local_mapping_for_server_type(server_type)?;
    }

    log::info!("NetMapper ready - {} server types mapped", ServerType::ALL.len());

    status_server::run(Arc::new(Mutex::new(mapper))).await
}
