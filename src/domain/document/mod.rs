//! Document module - a format-agnostic model of the styled output.
//!
//! Layout produces a [`DocumentModel`]: a running header, an ordered list of
//! [`Block`]s split into sections, and the [`StyleTheme`] the styles derive from.
//! Serializers (WordprocessingML today) consume the model without knowing anything
//! about meetings.

mod block;
mod model;
mod section;
mod theme;

pub use block::{Alignment, Block, Paragraph, ParagraphStyle, Table};
pub use model::{DocumentModel, DocumentProperties, HeaderBlock};
pub use section::{LineNumbering, SectionProperties};
pub use theme::StyleTheme;
