//! The four catalog checks.
//!
//! Each check is independent and returns a [`CheckOutcome`](crate::CheckOutcome);
//! none of them stops at the first problem.

pub mod consistency;
pub mod duplicates;
pub mod schema;
pub mod thumbnails;

pub use consistency::{FileConsistencyCheck, References, MAX_THUMBNAILS};
pub use duplicates::DuplicateNameCheck;
pub use schema::SchemaCheck;
pub use thumbnails::RequiredThumbnailCheck;
