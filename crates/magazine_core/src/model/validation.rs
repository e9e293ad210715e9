//! Field-level validation rules shared by all catalog entities.
//!
//! # Invariants
//! - Lengths are counted in chars, never bytes.
//! - Bounds are inclusive on both ends.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use uuid::Uuid;

/// Allowed magazine name length, in chars.
pub const MAGAZINE_NAME_LEN: RangeInclusive<usize> = 2..=16;
/// Allowed article title length, in chars.
pub const ARTICLE_TITLE_LEN: RangeInclusive<usize> = 5..=50;

/// Validation failures raised while building or mutating an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Caller-provided id is the nil UUID.
    NilId,
    /// Author name is empty.
    EmptyAuthorName,
    /// Magazine name length is outside `MAGAZINE_NAME_LEN`.
    MagazineNameLength { len: usize },
    /// Magazine category is empty.
    EmptyCategory,
    /// Article title length is outside `ARTICLE_TITLE_LEN`.
    TitleLength { len: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "id must not be nil"),
            Self::EmptyAuthorName => write!(f, "author name must not be empty"),
            Self::MagazineNameLength { len } => write!(
                f,
                "magazine name must be between {} and {} characters, got {len}",
                MAGAZINE_NAME_LEN.start(),
                MAGAZINE_NAME_LEN.end()
            ),
            Self::EmptyCategory => write!(f, "magazine category must not be empty"),
            Self::TitleLength { len } => write!(
                f,
                "article title must be between {} and {} characters, got {len}",
                ARTICLE_TITLE_LEN.start(),
                ARTICLE_TITLE_LEN.end()
            ),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn ensure_id(id: Uuid) -> Result<Uuid, ValidationError> {
    if id.is_nil() {
        return Err(ValidationError::NilId);
    }
    Ok(id)
}

pub(crate) fn validate_author_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

pub(crate) fn validate_magazine_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if !MAGAZINE_NAME_LEN.contains(&len) {
        return Err(ValidationError::MagazineNameLength { len });
    }
    Ok(())
}

pub(crate) fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

/// Checks an article title against `ARTICLE_TITLE_LEN`.
///
/// Exposed so callers can pre-check input before touching the catalog.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if !ARTICLE_TITLE_LEN.contains(&len) {
        return Err(ValidationError::TitleLength { len });
    }
    Ok(())
}
