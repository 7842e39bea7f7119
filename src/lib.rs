//! Meeting Minutes - Document Assembly Engine
//!
//! This crate turns a structured meeting-minutes record into a WordprocessingML
//! (`.docx`) document, either as titled sections or as narrative prose, with optional
//! line numbering scoped to the document body.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::document::render_minutes;
