//! Platform seams shared by the stores.

pub mod storage;

pub use storage::{MemoryStorage, Storage};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
