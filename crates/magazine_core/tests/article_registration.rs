use magazine_core::{
    Article, Author, CatalogRepository, CatalogService, InMemoryCatalog, RepoError,
    ValidationError,
};

fn service() -> CatalogService<InMemoryCatalog> {
    CatalogService::new(InMemoryCatalog::new())
}

#[test]
fn article_appears_once_in_registry_and_both_owner_lists() {
    let mut catalog = service();
    let author_id = catalog.create_author("Jane Doe").unwrap();
    let magazine_id = catalog.create_magazine("Tech Weekly", "Technology").unwrap();

    let article_id = catalog
        .create_article(author_id, magazine_id, "AI Trends")
        .unwrap();

    let in_registry = catalog
        .articles()
        .iter()
        .filter(|article| article.id() == article_id)
        .count();
    assert_eq!(in_registry, 1);
    assert_eq!(catalog.author(author_id).unwrap().articles(), &[article_id]);
    assert_eq!(
        catalog.magazine(magazine_id).unwrap().articles(),
        &[article_id]
    );
}

#[test]
fn invalid_title_leaves_no_partial_state() {
    let mut catalog = service();
    let author_id = catalog.create_author("Jane Doe").unwrap();
    let magazine_id = catalog.create_magazine("Tech Weekly", "Technology").unwrap();

    let long_title = "x".repeat(51);
    for title in ["AI", long_title.as_str()] {
        let err = catalog
            .create_article(author_id, magazine_id, title)
            .unwrap_err();
        assert!(matches!(
            err,
            RepoError::Validation(ValidationError::TitleLength { .. })
        ));
    }

    assert!(catalog.articles().is_empty());
    assert!(catalog.author(author_id).unwrap().articles().is_empty());
    assert!(catalog.magazine(magazine_id).unwrap().articles().is_empty());
}

#[test]
fn add_article_checks_magazine_before_title() {
    let mut catalog = service();
    let author_id = catalog.create_author("Jane Doe").unwrap();
    let missing = uuid::Uuid::new_v4();

    let err = catalog.add_article(author_id, missing, "AI").unwrap_err();
    assert_eq!(err, RepoError::MagazineNotFound(missing));
}

#[test]
fn add_article_returns_registered_article() {
    let mut catalog = service();
    let author_id = catalog.create_author("Jane Doe").unwrap();
    let magazine_id = catalog.create_magazine("Tech Weekly", "Technology").unwrap();

    let article_id = catalog
        .add_article(author_id, magazine_id, "AI Trends")
        .unwrap();

    let article = catalog.article(article_id).unwrap();
    assert_eq!(article.author(), author_id);
    assert_eq!(article.magazine(), magazine_id);
    assert_eq!(article.title(), "AI Trends");
}

#[test]
fn unregistered_endpoint_is_rejected_before_any_write() {
    let mut repo = InMemoryCatalog::new();
    let author = Author::new("Jane Doe").unwrap();
    let magazine = magazine_core::Magazine::new("Tech Weekly", "Technology").unwrap();
    repo.insert_author(author.clone()).unwrap();

    let article = Article::new(&author, &magazine, "AI Trends").unwrap();
    let err = repo.insert_article(article).unwrap_err();

    assert_eq!(err, RepoError::MagazineNotFound(magazine.id()));
    assert!(repo.list_articles().is_empty());
    assert!(repo.get_author(author.id()).unwrap().articles().is_empty());
}

#[test]
fn magazine_add_article_is_idempotent_and_silent() {
    let mut catalog = service();
    let author_id = catalog.create_author("Jane Doe").unwrap();
    let magazine_id = catalog.create_magazine("Tech Weekly", "Technology").unwrap();
    let other_id = catalog.create_magazine("Food Daily", "Cooking").unwrap();
    let article_id = catalog
        .create_article(author_id, magazine_id, "AI Trends")
        .unwrap();

    assert!(!catalog
        .magazine_add_article(magazine_id, article_id)
        .unwrap());
    assert!(!catalog
        .magazine_add_article(magazine_id, uuid::Uuid::new_v4())
        .unwrap());
    assert_eq!(catalog.magazine(magazine_id).unwrap().articles().len(), 1);

    assert!(catalog.magazine_add_article(other_id, article_id).unwrap());
    assert_eq!(
        catalog.magazine(other_id).unwrap().articles(),
        &[article_id]
    );
}

#[test]
fn reassigning_author_keeps_article_in_original_list() {
    let mut catalog = service();
    let jane = catalog.create_author("Jane Doe").unwrap();
    let john = catalog.create_author("John Roe").unwrap();
    let magazine_id = catalog.create_magazine("Tech Weekly", "Technology").unwrap();
    let article_id = catalog
        .create_article(jane, magazine_id, "AI Trends")
        .unwrap();

    catalog.reassign_author(article_id, john).unwrap();

    assert_eq!(catalog.article(article_id).unwrap().author(), john);
    assert_eq!(catalog.author(jane).unwrap().articles(), &[article_id]);
    assert!(catalog.author(john).unwrap().articles().is_empty());
}

#[test]
fn reassigning_to_unknown_entity_fails() {
    let mut catalog = service();
    let author_id = catalog.create_author("Jane Doe").unwrap();
    let magazine_id = catalog.create_magazine("Tech Weekly", "Technology").unwrap();
    let article_id = catalog
        .create_article(author_id, magazine_id, "AI Trends")
        .unwrap();
    let missing = uuid::Uuid::new_v4();

    assert_eq!(
        catalog.reassign_author(article_id, missing).unwrap_err(),
        RepoError::AuthorNotFound(missing)
    );
    assert_eq!(
        catalog.reassign_magazine(article_id, missing).unwrap_err(),
        RepoError::MagazineNotFound(missing)
    );
    assert_eq!(
        catalog.reassign_author(missing, author_id).unwrap_err(),
        RepoError::ArticleNotFound(missing)
    );
    assert_eq!(catalog.article(article_id).unwrap().author(), author_id);
}

#[test]
fn magazines_are_listed_in_creation_order() {
    let mut catalog = service();
    let first = catalog.create_magazine("Tech Weekly", "Technology").unwrap();
    let second = catalog.create_magazine("Food Daily", "Cooking").unwrap();

    let ids: Vec<_> = catalog.magazines().iter().map(|m| m.id()).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn create_author_surfaces_validation_error() {
    let mut catalog = service();
    let err = catalog.create_author("").unwrap_err();
    assert_eq!(err, RepoError::Validation(ValidationError::EmptyAuthorName));
    assert!(catalog.repo().list_authors().is_empty());
}

#[test]
fn deserialized_author_with_listed_articles_is_rejected() {
    let mut repo = InMemoryCatalog::new();
    let jane = Author::new("Jane Doe").unwrap();
    let magazine = magazine_core::Magazine::new("Tech Weekly", "Technology").unwrap();
    repo.insert_author(jane.clone()).unwrap();
    repo.insert_magazine(magazine.clone()).unwrap();
    let article_id = repo
        .insert_article(Article::new(&jane, &magazine, "AI Trends").unwrap())
        .unwrap();

    let other: Author = serde_json::from_value(serde_json::json!({
        "id": uuid::Uuid::new_v4(),
        "name": "John Roe",
        "articles": [article_id]
    }))
    .unwrap();
    let err = repo.insert_author(other.clone()).unwrap_err();

    assert_eq!(err, RepoError::PrelinkedArticles(other.id()));
    assert!(repo.get_author(other.id()).is_none());
    let listing_authors = repo
        .list_authors()
        .iter()
        .filter(|author| author.articles().contains(&article_id))
        .count();
    assert_eq!(listing_authors, 1);
}

#[test]
fn deserialized_magazine_with_listed_articles_is_rejected() {
    let mut repo = InMemoryCatalog::new();
    let magazine: magazine_core::Magazine = serde_json::from_value(serde_json::json!({
        "id": uuid::Uuid::new_v4(),
        "name": "Tech Weekly",
        "category": "Technology",
        "articles": [uuid::Uuid::new_v4()]
    }))
    .unwrap();

    let err = repo.insert_magazine(magazine.clone()).unwrap_err();

    assert_eq!(err, RepoError::PrelinkedArticles(magazine.id()));
    assert!(repo.list_magazines().is_empty());
}
