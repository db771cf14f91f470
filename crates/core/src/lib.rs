//! Core domain types and pure logic for the flipbook service.
//!
//! This crate has no database, async, or I/O dependencies. It provides
//! the shared id/timestamp aliases, the domain error type, upload
//! filename validation and sanitization, and annotation validation.

pub mod annotation;
pub mod book;
pub mod error;
pub mod types;
