//! Registry storage implementations.
//!
//! # Backends
//!
//! - [`JsonFileStorage`] - Single JSON document on disk, replaced atomically
//! - [`MemoryStorage`] - In-process registry for tests and ephemeral runs

pub mod json_file_storage;
pub mod memory_storage;

pub use json_file_storage::JsonFileStorage;
pub use memory_storage::MemoryStorage;
