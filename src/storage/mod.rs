pub mod fixtures;
pub mod memory;
pub mod traits;

pub use memory::MemStorage;
pub use traits::Storage;
