mod mock_data;
mod requests;
mod types;
mod validation;

pub use mock_data::{demo_attributes, demo_entries, demo_rank};
pub use requests::{AttributeRequest, EntryRequest, RankRequest};
pub use types::{Attribute, Entry, Rank, RankTable, Scores};
pub use validation::{
    is_url, is_uuid, validate_attribute, validate_entry, validate_rank, ValidationErrors,
    Validator,
};
