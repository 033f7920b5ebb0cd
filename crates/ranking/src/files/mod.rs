//! File storage backends for rank image uploads.

mod inmemory;
mod s3;

pub use inmemory::InMemoryFileStorage;
pub use s3::S3FileStorage;
