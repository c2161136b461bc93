pub mod hostname;
pub mod mapping;
pub mod ports;
