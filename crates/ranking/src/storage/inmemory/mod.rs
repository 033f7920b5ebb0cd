//! In-memory storage backend for testing.
//!
//! Stores the same tagged records as the DynamoDB backend in an owned map,
//! so every instance starts empty unless seeded explicitly.

mod repository;

pub use repository::InMemoryRepository;
