//! Storage layer for Academy CMS.
//!
//! Provides database access via SQLx with SQLite.

mod models;
mod repository;

pub use repository::CmsRepository;
