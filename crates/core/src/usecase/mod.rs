//! Application service layer.
//!
//! Each service validates its input, checks existence where the operation
//! needs it and delegates to a repository. Soft misses from the repositories
//! become [`UsecaseError::ResourceNotFound`] here.

mod attribute;
mod entry;
mod error;
mod http_mapping;
mod output;
mod rank;
mod rank_table;
mod upload;

#[cfg(test)]
mod testing;

pub use attribute::AttributeUsecases;
pub use entry::EntryUsecases;
pub use error::{Result, UsecaseError};
pub use http_mapping::usecase_error_to_status_code;
pub use output::{
    AttributeOutput, DeleteOutput, EntryOutput, RankOutput, RankTableAttributeOutput,
    RankTableEntryOutput, RankTableOutput, UploadOutput,
};
pub use rank::RankUsecases;
pub use rank_table::RankTableUsecases;
pub use upload::UploadUsecases;
