//! Core types and trait definitions for the campus content site.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! It holds the entity records, the [`UniversityStore`](store::UniversityStore)
//! abstraction, and the storage-agnostic content-resolution logic built on
//! top of it.

pub mod error;
pub mod guard;
pub mod media;
pub mod resolve;
pub mod store;
pub mod university;

pub use error::{Error, Result};
