mod error;
mod http_mapping;
mod keys;
mod record;
mod traits;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use keys::{parse_scoped_id, primary_key, scoped_key, RecordKind, SCOPE_SEPARATOR};
pub use record::{
    assemble_rank_table, AttributeRecord, EntryRecord, RankRecord, StoredRecord,
};
pub use traits::{AttributeRepository, EntryRepository, RankRepository, RankTableRepository};
