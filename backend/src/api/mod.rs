pub mod channel;
pub mod generate;
pub mod research;
pub mod video;

pub use channel::*;
pub use generate::*;
pub use research::*;
pub use video::*;

use crate::error::ApiError;

/// A required body field must be present and non-empty; the error names it.
pub(crate) fn require<'a>(
    field: &'a Option<String>,
    name: &'static str,
) -> Result<&'a str, ApiError> {
    field
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or(ApiError::MissingField(name))
}
