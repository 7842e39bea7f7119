//! Adapters - Implementations of port interfaces.
//!
//! - `narrative` - prose composition for narrative minutes
//! - `document` - layout and `.docx` serialization

pub mod document;
pub mod narrative;
