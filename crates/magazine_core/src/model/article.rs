//! Article entity: the join between one author and one magazine.
//!
//! # Invariants
//! - `title` length stays within `ARTICLE_TITLE_LEN` and never changes.
//! - `author` and `magazine` can be re-pointed; owner lists are not touched
//!   by the model (see `CatalogRepository::reassign_author`).

use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::{ensure_id, validate_title, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of an article.
pub type ArticleId = Uuid;

/// One article written by an author for a magazine.
///
/// The title is fixed at construction:
///
/// ```compile_fail
/// use magazine_core::{Article, Author, Magazine};
/// let author = Author::new("Jane Doe").unwrap();
/// let magazine = Magazine::new("Tech Weekly", "Technology").unwrap();
/// let mut article = Article::new(&author, &magazine, "AI Trends").unwrap();
/// article.title = "Other Trends".to_string();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ArticleRecord")]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: String,
}

impl Article {
    /// Builds an unregistered article linking `author` and `magazine`.
    ///
    /// The article only becomes visible to owner lists and catalog queries
    /// once passed to `CatalogRepository::insert_article`.
    ///
    /// # Errors
    /// - `ValidationError::TitleLength` when `title` is not 5..=50 chars.
    pub fn new(
        author: &Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), author, magazine, title)
    }

    /// Same as `new` with a caller-provided id.
    pub fn with_id(
        id: ArticleId,
        author: &Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::from_parts(id, author.id(), magazine.id(), title.into())
    }

    fn from_parts(
        id: ArticleId,
        author: AuthorId,
        magazine: MagazineId,
        title: String,
    ) -> Result<Self, ValidationError> {
        validate_title(&title)?;
        Ok(Self {
            id: ensure_id(id)?,
            author,
            magazine,
            title,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    /// Re-points this article at another author.
    pub fn set_author(&mut self, author: &Author) {
        self.author = author.id();
    }

    /// Re-points this article at another magazine.
    pub fn set_magazine(&mut self, magazine: &Magazine) {
        self.magazine = magazine.id();
    }
}

#[derive(Deserialize)]
struct ArticleRecord {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: String,
}

impl TryFrom<ArticleRecord> for Article {
    type Error = ValidationError;

    fn try_from(record: ArticleRecord) -> Result<Self, Self::Error> {
        Self::from_parts(record.id, record.author, record.magazine, record.title)
    }
}
