//! Object storage for uploaded images.

mod error;
mod functions;
mod traits;

pub use error::FileStorageError;
pub use functions::{detect_image_type, upload_path, ImageType};
pub use traits::{FileStorage, Result};
