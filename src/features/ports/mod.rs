pub mod port_allocator;

pub use port_allocator::{PortAllocator, SystemPortAllocator};
