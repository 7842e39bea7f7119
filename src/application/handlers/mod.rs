//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod minutes;

pub use minutes::{
    GenerateMinutesCommand, GenerateMinutesError, GenerateMinutesHandler, MinutesSource,
};
