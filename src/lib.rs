//! Generator for dayalbum - turns a short description of your day into a
//! fictitious album
//!
//! This library classifies the mood of the input text, extracts keywords,
//! composes album metadata from template pools, and produces cover artwork
//! via remote generative-image providers with a deterministic procedural
//! fallback.

pub mod artwork;
pub mod error;
pub mod lexical;
pub mod models;
pub mod pipeline;
pub mod prompt;
pub mod providers;
pub mod templates;

pub use error::{Error, Result};
