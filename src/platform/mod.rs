pub mod browser;
pub mod environment;
mod memory;

pub use environment::is_browser;
pub use memory::MemoryPage;
