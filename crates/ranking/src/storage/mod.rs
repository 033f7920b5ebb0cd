//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `ranking_core::storage`. The backend is chosen at startup with the
//! `--storage` flag.
//!
//! - `dynamodb` (default): single-table DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory`: map-backed backend for tests and local development

pub mod dynamodb;
pub mod inmemory;

pub use dynamodb::DynamoDbRepository;
pub use inmemory::InMemoryRepository;
