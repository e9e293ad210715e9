//! Catalog repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Register entities and keep cross-references resolvable.
//! - Keep owner-list bookkeeping out of service/query code.
//!
//! # Invariants
//! - `insert_article` checks both endpoints exist before mutating anything.
//! - Reassigning an article's author or magazine does not move it between
//!   owner lists; only the article's own reference changes.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::ValidationError;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Catalog write and lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ValidationError),
    AuthorNotFound(AuthorId),
    MagazineNotFound(MagazineId),
    ArticleNotFound(ArticleId),
    /// An entity with this id is already registered.
    DuplicateId(Uuid),
    /// An author or magazine arrived with articles already listed; owner
    /// lists are only filled by `insert_article`.
    PrelinkedArticles(Uuid),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::MagazineNotFound(id) => write!(f, "magazine not found: {id}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
            Self::DuplicateId(id) => write!(f, "id already registered: {id}"),
            Self::PrelinkedArticles(id) => {
                write!(f, "entity {id} must not list articles before registration")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface over the author/magazine/article registries.
pub trait CatalogRepository {
    fn insert_author(&mut self, author: Author) -> RepoResult<AuthorId>;
    fn insert_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId>;
    /// Registers `article` and lists it in its magazine and author.
    fn insert_article(&mut self, article: Article) -> RepoResult<ArticleId>;

    fn get_author(&self, id: AuthorId) -> Option<&Author>;
    fn get_magazine(&self, id: MagazineId) -> Option<&Magazine>;
    fn get_article(&self, id: ArticleId) -> Option<&Article>;

    /// All registered authors, in registration order.
    fn list_authors(&self) -> &[Author];
    /// All registered magazines, in registration order.
    fn list_magazines(&self) -> &[Magazine];
    /// All registered articles, in registration order.
    fn list_articles(&self) -> &[Article];

    fn rename_magazine(&mut self, id: MagazineId, name: String) -> RepoResult<()>;
    fn recategorize_magazine(&mut self, id: MagazineId, category: String) -> RepoResult<()>;

    /// Lists a registered article in `magazine_id`.
    ///
    /// Returns `Ok(false)` for an unknown or already listed article.
    fn attach_article(
        &mut self,
        magazine_id: MagazineId,
        article_id: ArticleId,
    ) -> RepoResult<bool>;

    fn reassign_author(&mut self, article_id: ArticleId, author_id: AuthorId) -> RepoResult<()>;
    fn reassign_magazine(
        &mut self,
        article_id: ArticleId,
        magazine_id: MagazineId,
    ) -> RepoResult<()>;
}

/// Vec-backed catalog; lookups are linear scans.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn author_index(&self, id: AuthorId) -> RepoResult<usize> {
        self.authors
            .iter()
            .position(|author| author.id() == id)
            .ok_or(RepoError::AuthorNotFound(id))
    }

    fn magazine_index(&self, id: MagazineId) -> RepoResult<usize> {
        self.magazines
            .iter()
            .position(|magazine| magazine.id() == id)
            .ok_or(RepoError::MagazineNotFound(id))
    }

    fn article_index(&self, id: ArticleId) -> RepoResult<usize> {
        self.articles
            .iter()
            .position(|article| article.id() == id)
            .ok_or(RepoError::ArticleNotFound(id))
    }

    fn is_registered(&self, id: Uuid) -> bool {
        self.authors.iter().any(|author| author.id() == id)
            || self.magazines.iter().any(|magazine| magazine.id() == id)
            || self.articles.iter().any(|article| article.id() == id)
    }

    fn ensure_unregistered(&self, id: Uuid, kind: &str) -> RepoResult<()> {
        if self.is_registered(id) {
            warn!("event={kind}_insert module=catalog status=rejected reason=duplicate_id id={id}");
            return Err(RepoError::DuplicateId(id));
        }
        Ok(())
    }

    fn ensure_no_articles(id: Uuid, articles: &[ArticleId], kind: &str) -> RepoResult<()> {
        if !articles.is_empty() {
            warn!(
                "event={kind}_insert module=catalog status=rejected reason=prelinked_articles id={id} count={}",
                articles.len()
            );
            return Err(RepoError::PrelinkedArticles(id));
        }
        Ok(())
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn insert_author(&mut self, author: Author) -> RepoResult<AuthorId> {
        let id = author.id();
        self.ensure_unregistered(id, "author")?;
        Self::ensure_no_articles(id, author.articles(), "author")?;
        self.authors.push(author);
        info!("event=author_insert module=catalog status=ok author_id={id}");
        Ok(id)
    }

    fn insert_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId> {
        let id = magazine.id();
        self.ensure_unregistered(id, "magazine")?;
        Self::ensure_no_articles(id, magazine.articles(), "magazine")?;
        self.magazines.push(magazine);
        info!("event=magazine_insert module=catalog status=ok magazine_id={id}");
        Ok(id)
    }

    fn insert_article(&mut self, article: Article) -> RepoResult<ArticleId> {
        let id = article.id();
        self.ensure_unregistered(id, "article")?;
        let author_idx = self.author_index(article.author()).inspect_err(|_| {
            warn!("event=article_insert module=catalog status=rejected article_id={id} reason=author_not_found");
        })?;
        let magazine_idx = self.magazine_index(article.magazine()).inspect_err(|_| {
            warn!("event=article_insert module=catalog status=rejected article_id={id} reason=magazine_not_found");
        })?;

        self.magazines[magazine_idx].add_article(&article);
        self.authors[author_idx].record_article(id);
        info!(
            "event=article_insert module=catalog status=ok article_id={id} author_id={} magazine_id={} title_len={}",
            article.author(),
            article.magazine(),
            article.title().chars().count()
        );
        self.articles.push(article);
        Ok(id)
    }

    fn get_author(&self, id: AuthorId) -> Option<&Author> {
        debug!("event=author_get module=catalog author_id={id}");
        self.authors.iter().find(|author| author.id() == id)
    }

    fn get_magazine(&self, id: MagazineId) -> Option<&Magazine> {
        debug!("event=magazine_get module=catalog magazine_id={id}");
        self.magazines.iter().find(|magazine| magazine.id() == id)
    }

    fn get_article(&self, id: ArticleId) -> Option<&Article> {
        debug!("event=article_get module=catalog article_id={id}");
        self.articles.iter().find(|article| article.id() == id)
    }

    fn list_authors(&self) -> &[Author] {
        &self.authors
    }

    fn list_magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    fn list_articles(&self) -> &[Article] {
        &self.articles
    }

    fn rename_magazine(&mut self, id: MagazineId, name: String) -> RepoResult<()> {
        let idx = self.magazine_index(id)?;
        self.magazines[idx].set_name(name)?;
        info!("event=magazine_rename module=catalog status=ok magazine_id={id}");
        Ok(())
    }

    fn recategorize_magazine(&mut self, id: MagazineId, category: String) -> RepoResult<()> {
        let idx = self.magazine_index(id)?;
        self.magazines[idx].set_category(category)?;
        info!("event=magazine_recategorize module=catalog status=ok magazine_id={id}");
        Ok(())
    }

    fn attach_article(
        &mut self,
        magazine_id: MagazineId,
        article_id: ArticleId,
    ) -> RepoResult<bool> {
        let magazine_idx = self.magazine_index(magazine_id)?;
        let Some(article) = self.articles.iter().find(|article| article.id() == article_id)
        else {
            debug!("event=article_attach module=catalog status=noop reason=unknown_article article_id={article_id}");
            return Ok(false);
        };

        let attached = self.magazines[magazine_idx].add_article(article);
        debug!(
            "event=article_attach module=catalog status={} magazine_id={magazine_id} article_id={article_id}",
            if attached { "ok" } else { "noop" }
        );
        Ok(attached)
    }

    fn reassign_author(&mut self, article_id: ArticleId, author_id: AuthorId) -> RepoResult<()> {
        let article_idx = self.article_index(article_id)?;
        let author_idx = self.author_index(author_id)?;
        self.articles[article_idx].set_author(&self.authors[author_idx]);
        info!("event=article_reassign_author module=catalog status=ok article_id={article_id} author_id={author_id}");
        Ok(())
    }

    fn reassign_magazine(
        &mut self,
        article_id: ArticleId,
        magazine_id: MagazineId,
    ) -> RepoResult<()> {
        let article_idx = self.article_index(article_id)?;
        let magazine_idx = self.magazine_index(magazine_id)?;
        self.articles[article_idx].set_magazine(&self.magazines[magazine_idx]);
        info!("event=article_reassign_magazine module=catalog status=ok article_id={article_id} magazine_id={magazine_id}");
        Ok(())
    }
}
