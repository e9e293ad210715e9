//! Demo entry point.
//!
//! # Responsibility
//! - Build the one-author, one-magazine, one-article catalog.
//! - Print the derived views to stdout.

use magazine_core::{CatalogService, InMemoryCatalog, LoggingConfig};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    if let Some(config) = LoggingConfig::from_env()? {
        magazine_core::init_logging(&config)?;
    }
    log::info!(
        "event=demo_start module=cli status=ok version={}",
        magazine_core::core_version()
    );

    let mut catalog = CatalogService::new(InMemoryCatalog::new());
    let author_id = catalog.create_author("Jane Doe")?;
    let magazine_id = catalog.create_magazine("Tech Weekly", "Technology")?;
    catalog.add_article(author_id, magazine_id, "AI Trends")?;

    let author = catalog.author(author_id)?;
    let magazine = catalog.magazine(magazine_id)?;
    println!("author: {}", author.name());
    println!("magazine: {} ({})", magazine.name(), magazine.category());

    let titles: Vec<&str> = catalog
        .author_articles(author_id)?
        .into_iter()
        .map(|article| article.title())
        .collect();
    println!("author articles: {titles:?}");

    let magazines: Vec<&str> = catalog
        .author_magazines(author_id)?
        .into_iter()
        .map(|magazine| magazine.name())
        .collect();
    println!("author magazines: {magazines:?}");
    println!(
        "author topic areas: {:?}",
        catalog.author_topic_areas(author_id)?
    );

    let contributors: Vec<&str> = catalog
        .magazine_contributors(magazine_id)?
        .into_iter()
        .map(|author| author.name())
        .collect();
    println!("magazine contributors: {contributors:?}");
    println!(
        "magazine article titles: {:?}",
        catalog.magazine_article_titles(magazine_id)?
    );
    let contributing: Option<Vec<&str>> = catalog
        .magazine_contributing_authors(magazine_id)?
        .map(|authors| authors.into_iter().map(|author| author.name()).collect());
    println!("magazine contributing authors: {contributing:?}");
    println!(
        "top publisher: {:?}",
        catalog.top_publisher().map(|magazine| magazine.name())
    );

    Ok(())
}
