//! Narrative adapters - implementations of the `NarrativeComposer` port.
//!
//! - `ProseNarrativeComposer` - Portuguese prose in the register of formal minutes

mod prose_composer;

pub use prose_composer::ProseNarrativeComposer;
