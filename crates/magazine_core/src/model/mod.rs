//! Catalog domain model: authors, magazines and the articles joining them.
//!
//! # Responsibility
//! - Define the three entity shapes and their field-level validation.
//! - Keep cross-entity wiring (registries, owner lists) out of the model.
//!
//! # Invariants
//! - Every entity is identified by a stable, non-nil UUID.
//! - Entities reference each other by id only; the catalog resolves ids.
//! - `Author::name` and `Article::title` have no setter.

pub mod article;
pub mod author;
pub mod magazine;
pub mod validation;
