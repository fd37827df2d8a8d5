// src/storage/mod.rs
//
// Storage Module - durable key-value backends for persisted slices
//
// The store talks to storage only through the StateStorage trait; the
// sqlite backend is the durable one, the memory backend is ephemeral and
// doubles as a test fixture.

pub mod backend;
pub mod memory;
pub mod sqlite;

pub use backend::StateStorage;
pub use memory::MemoryStateStorage;
pub use sqlite::SqliteStateStorage;

#[cfg(test)]
pub use backend::MockStateStorage;
