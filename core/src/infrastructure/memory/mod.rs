//! In-process adapters for tests and embedding.

pub mod clock;
pub mod store;

pub use clock::FixedClock;
pub use store::InMemoryStore;
