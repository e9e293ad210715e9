//! Magazine entity.
//!
//! # Invariants
//! - `name` length stays within `MAGAZINE_NAME_LEN`; `category` stays non-empty.
//! - Setters leave the previous value untouched when validation fails.
//! - `articles` keeps insertion order without duplicates.

use crate::model::article::{Article, ArticleId};
use crate::model::validation::{
    ensure_id, validate_category, validate_magazine_name, ValidationError,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a magazine.
pub type MagazineId = Uuid;

/// A publication grouping articles under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MagazineRecord")]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
    articles: Vec<ArticleId>,
}

impl Magazine {
    /// Creates a magazine with a generated id and no articles.
    ///
    /// # Errors
    /// - `ValidationError::MagazineNameLength` when `name` is not 2..=16 chars.
    /// - `ValidationError::EmptyCategory` when `category` is empty.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name, category)
    }

    /// Creates a magazine with a caller-provided id.
    pub fn with_id(
        id: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        validate_magazine_name(&name)?;
        validate_category(&category)?;
        Ok(Self {
            id: ensure_id(id)?,
            name,
            category,
            articles: Vec::new(),
        })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Renames the magazine.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_magazine_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Moves the magazine to another category.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(())
    }

    /// Ids of the articles published here, in insertion order.
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    /// Lists `article` in this magazine.
    ///
    /// Idempotent: returns `false` without changes when the article is
    /// already listed.
    pub fn add_article(&mut self, article: &Article) -> bool {
        let article_id = article.id();
        if self.articles.contains(&article_id) {
            return false;
        }
        self.articles.push(article_id);
        true
    }
}

#[derive(Deserialize)]
struct MagazineRecord {
    id: MagazineId,
    name: String,
    category: String,
    #[serde(default)]
    articles: Vec<ArticleId>,
}

impl TryFrom<MagazineRecord> for Magazine {
    type Error = ValidationError;

    fn try_from(record: MagazineRecord) -> Result<Self, Self::Error> {
        let mut magazine = Self::with_id(record.id, record.name, record.category)?;
        for article_id in record.articles {
            if !magazine.articles.contains(&article_id) {
                magazine.articles.push(article_id);
            }
        }
        Ok(magazine)
    }
}
