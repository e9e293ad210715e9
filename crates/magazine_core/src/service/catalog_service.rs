//! Catalog use-case service.
//!
//! # Responsibility
//! - Create and register entities through repository contracts.
//! - Compute derived views (magazines, topic areas, contributors, top
//!   publisher) on demand from registry state.
//!
//! # Invariants
//! - Nothing derived is cached; every query re-reads the repository.
//! - "Unique" views keep first-seen order.
//! - `None` is the "no data" result of the optional views.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::validate_title;
use crate::repo::catalog_repo::{CatalogRepository, RepoError, RepoResult};

/// An author needs strictly more articles than this in one magazine to count
/// as a contributing author.
pub const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// Use-case facade over a catalog repository.
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn into_repo(self) -> R {
        self.repo
    }

    /// Creates and registers an author.
    pub fn create_author(&mut self, name: impl Into<String>) -> RepoResult<AuthorId> {
        let author = Author::new(name)?;
        self.repo.insert_author(author)
    }

    /// Creates and registers a magazine.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> RepoResult<MagazineId> {
        let magazine = Magazine::new(name, category)?;
        self.repo.insert_magazine(magazine)
    }

    /// Constructs an article between two registered entities and registers it.
    ///
    /// # Contract
    /// - On success the article is in the registry, in the magazine's list and
    ///   in the author's list.
    /// - On failure none of those change.
    pub fn create_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> RepoResult<ArticleId> {
        let article = Article::new(
            self.author(author_id)?,
            self.magazine(magazine_id)?,
            title,
        )?;
        self.repo.insert_article(article)
    }

    /// Writes a new article for `author_id` in `magazine_id`.
    ///
    /// Checks the magazine and title before the article is built, then
    /// behaves like `create_article`.
    pub fn add_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> RepoResult<ArticleId> {
        let title = title.into();
        self.magazine(magazine_id)?;
        validate_title(&title)?;
        self.create_article(author_id, magazine_id, title)
    }

    pub fn author(&self, id: AuthorId) -> RepoResult<&Author> {
        self.repo.get_author(id).ok_or(RepoError::AuthorNotFound(id))
    }

    pub fn magazine(&self, id: MagazineId) -> RepoResult<&Magazine> {
        self.repo
            .get_magazine(id)
            .ok_or(RepoError::MagazineNotFound(id))
    }

    pub fn article(&self, id: ArticleId) -> RepoResult<&Article> {
        self.repo
            .get_article(id)
            .ok_or(RepoError::ArticleNotFound(id))
    }

    /// Every registered article, in registration order.
    pub fn articles(&self) -> &[Article] {
        self.repo.list_articles()
    }

    /// Every registered magazine, in registration order.
    pub fn magazines(&self) -> &[Magazine] {
        self.repo.list_magazines()
    }

    pub fn author_articles(&self, id: AuthorId) -> RepoResult<Vec<&Article>> {
        Ok(self.resolve_articles(self.author(id)?.articles()))
    }

    /// Unique magazines the author's articles currently point at.
    pub fn author_magazines(&self, id: AuthorId) -> RepoResult<Vec<&Magazine>> {
        let articles = self.author_articles(id)?;
        let magazine_ids = unique(articles.iter().map(|article| article.magazine()));
        Ok(magazine_ids
            .into_iter()
            .filter_map(|magazine_id| self.repo.get_magazine(magazine_id))
            .collect())
    }

    /// Unique categories of the author's magazines, or `None` without any.
    pub fn author_topic_areas(&self, id: AuthorId) -> RepoResult<Option<Vec<&str>>> {
        let magazines = self.author_magazines(id)?;
        if magazines.is_empty() {
            return Ok(None);
        }
        Ok(Some(unique(
            magazines.into_iter().map(|magazine| magazine.category()),
        )))
    }

    pub fn magazine_articles(&self, id: MagazineId) -> RepoResult<Vec<&Article>> {
        Ok(self.resolve_articles(self.magazine(id)?.articles()))
    }

    /// Lists an already registered article in `magazine_id`.
    ///
    /// Silently returns `Ok(false)` for an unknown or already listed article.
    pub fn magazine_add_article(
        &mut self,
        magazine_id: MagazineId,
        article_id: ArticleId,
    ) -> RepoResult<bool> {
        self.repo.attach_article(magazine_id, article_id)
    }

    /// Unique authors of the magazine's articles.
    pub fn magazine_contributors(&self, id: MagazineId) -> RepoResult<Vec<&Author>> {
        let articles = self.magazine_articles(id)?;
        let author_ids = unique(articles.iter().map(|article| article.author()));
        Ok(self.resolve_authors(author_ids))
    }

    /// Titles in listing order, or `None` for a magazine without articles.
    pub fn magazine_article_titles(&self, id: MagazineId) -> RepoResult<Option<Vec<&str>>> {
        let articles = self.magazine_articles(id)?;
        if articles.is_empty() {
            return Ok(None);
        }
        Ok(Some(
            articles.into_iter().map(|article| article.title()).collect(),
        ))
    }

    /// Authors with more than `CONTRIBUTING_AUTHOR_THRESHOLD` articles here.
    pub fn magazine_contributing_authors(
        &self,
        id: MagazineId,
    ) -> RepoResult<Option<Vec<&Author>>> {
        let articles = self.magazine_articles(id)?;
        let author_ids: Vec<AuthorId> = count_first_seen(articles.iter().map(|a| a.author()))
            .into_iter()
            .filter(|(_, count)| *count > CONTRIBUTING_AUTHOR_THRESHOLD)
            .map(|(author_id, _)| author_id)
            .collect();

        let authors = self.resolve_authors(author_ids);
        if authors.is_empty() {
            return Ok(None);
        }
        Ok(Some(authors))
    }

    /// Magazine referenced by the most registered articles.
    ///
    /// Ties go to the magazine met first while walking the registry. `None`
    /// when no article is registered.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        let counts = count_first_seen(
            self.repo
                .list_articles()
                .iter()
                .map(|article| article.magazine()),
        );

        let mut best: Option<(MagazineId, usize)> = None;
        for (magazine_id, count) in counts {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((magazine_id, count));
            }
        }
        best.and_then(|(magazine_id, _)| self.repo.get_magazine(magazine_id))
    }

    pub fn rename_magazine(&mut self, id: MagazineId, name: impl Into<String>) -> RepoResult<()> {
        self.repo.rename_magazine(id, name.into())
    }

    pub fn recategorize_magazine(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> RepoResult<()> {
        self.repo.recategorize_magazine(id, category.into())
    }

    /// Points an article at another author.
    ///
    /// The article stays listed under its original author.
    pub fn reassign_author(&mut self, article_id: ArticleId, author_id: AuthorId) -> RepoResult<()> {
        self.repo.reassign_author(article_id, author_id)
    }

    /// Points an article at another magazine.
    ///
    /// The article stays listed in its original magazine.
    pub fn reassign_magazine(
        &mut self,
        article_id: ArticleId,
        magazine_id: MagazineId,
    ) -> RepoResult<()> {
        self.repo.reassign_magazine(article_id, magazine_id)
    }

    fn resolve_articles(&self, ids: &[ArticleId]) -> Vec<&Article> {
        ids.iter()
            .filter_map(|article_id| self.repo.get_article(*article_id))
            .collect()
    }

    fn resolve_authors(&self, ids: Vec<AuthorId>) -> Vec<&Author> {
        ids.into_iter()
            .filter_map(|author_id| self.repo.get_author(author_id))
            .collect()
    }
}

fn unique<T: PartialEq>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

fn count_first_seen<T: PartialEq>(values: impl Iterator<Item = T>) -> Vec<(T, usize)> {
    let mut counts: Vec<(T, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }
    counts
}
