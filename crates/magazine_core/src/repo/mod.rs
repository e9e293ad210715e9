//! Catalog storage contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Own every registered author, magazine and article.
//! - Wire articles into their owners' lists at registration time.
//!
//! # Invariants
//! - Registries are append-only and keep insertion order.
//! - A failed write leaves every registry and owner list unchanged.

pub mod catalog_repo;
