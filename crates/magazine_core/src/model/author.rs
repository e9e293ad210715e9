//! Author entity.
//!
//! # Invariants
//! - `name` is non-empty and fixed at construction.
//! - `articles` keeps registration order and holds each id at most once.

use crate::model::article::ArticleId;
use crate::model::validation::{ensure_id, validate_author_name, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of an author.
pub type AuthorId = Uuid;

/// A writer of articles.
///
/// The name cannot be reassigned once the author exists:
///
/// ```compile_fail
/// let mut author = magazine_core::Author::new("Jane Doe").unwrap();
/// author.name = "John Roe".to_string();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthorRecord")]
pub struct Author {
    id: AuthorId,
    name: String,
    articles: Vec<ArticleId>,
}

impl Author {
    /// Creates an author with a generated id and no articles.
    ///
    /// # Errors
    /// - `ValidationError::EmptyAuthorName` when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an author with a caller-provided id.
    ///
    /// # Errors
    /// - `ValidationError::NilId` for the nil UUID.
    /// - `ValidationError::EmptyAuthorName` when `name` is empty.
    pub fn with_id(id: AuthorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_author_name(&name)?;
        Ok(Self {
            id: ensure_id(id)?,
            name,
            articles: Vec::new(),
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of the articles this author wrote, in registration order.
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    /// Appends `article_id` unless it is already listed.
    pub(crate) fn record_article(&mut self, article_id: ArticleId) -> bool {
        if self.articles.contains(&article_id) {
            return false;
        }
        self.articles.push(article_id);
        true
    }
}

#[derive(Deserialize)]
struct AuthorRecord {
    id: AuthorId,
    name: String,
    #[serde(default)]
    articles: Vec<ArticleId>,
}

impl TryFrom<AuthorRecord> for Author {
    type Error = ValidationError;

    fn try_from(record: AuthorRecord) -> Result<Self, Self::Error> {
        let mut author = Self::with_id(record.id, record.name)?;
        for article_id in record.articles {
            author.record_article(article_id);
        }
        Ok(author)
    }
}
