//! # desk-core
//!
//! Core types, ID generation, and error types for newsdesk.
//!
//! This crate provides the foundational types shared across all newsdesk crates:
//! - Article entity, its image attachments, and its id-less field set
//! - Partial update payloads with a builder
//! - Status filter, editor mode, and form field enums
//! - Article ID generation
//! - Publication date parsing and display formatting
//! - The sample article set used to seed an empty store
//! - Cross-cutting error types

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod seed;
pub mod updates;
