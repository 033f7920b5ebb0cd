//! DynamoDB storage backend implementation.
//!
//! Item conversions live in `ranking_core::storage::dynamodb` so the seed
//! task writes exactly what this repository reads.

mod error;
mod repository;

pub use repository::DynamoDbRepository;
