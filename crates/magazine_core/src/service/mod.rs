//! Catalog use-case services.
//!
//! # Responsibility
//! - Turn id-based catalog state into author/magazine views.
//! - Keep callers decoupled from the repository implementation.

pub mod catalog_service;
