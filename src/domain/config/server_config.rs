pub struct ServerConfig;

impl ServerConfig {
    pub const LOOPBACK_ALIAS: &'static str = "127.0.0.1";
    pub const LOCALHOST: &'static str = "localhost";
    pub const IPV4_MAPPED_PREFIX: &'static str = "::ffff:";
    pub const UNKNOWN_HOSTNAME: &'static str = "Unknown";

    // Environment detection
    pub const ENVIRONMENT_VAR: &'static str = "NETMAPPER_ENV";

    // Port allocation probes bind here
    pub const BIND_ADDRESS: &'static str = "0.0.0.0";

    pub const STATUS_PORT: u16 = 45470;
}
