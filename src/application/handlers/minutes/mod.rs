//! Minutes command handlers.

mod generate_minutes;

pub use generate_minutes::{
    GenerateMinutesCommand, GenerateMinutesError, GenerateMinutesHandler, MinutesSource,
};
