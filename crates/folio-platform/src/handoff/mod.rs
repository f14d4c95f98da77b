pub mod memory;
pub mod local;
pub mod auto;

pub use memory::MemoryHandoff;
pub use local::LocalStorageHandoff;
pub use auto::detect_handoff;
