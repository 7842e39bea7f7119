//! Rendering configuration: theme values and option defaults.

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::document::StyleTheme;
use crate::domain::minutes::{RenderOptions, DEFAULT_TITLE};

const MAX_LOGO_WIDTH_IN: f32 = 8.0;

/// Rendering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_font_family")]
    pub font_family: String,

    #[serde(default = "default_base_size")]
    pub base_size_pt: f32,

    #[serde(default = "default_title_size")]
    pub title_size_pt: f32,

    #[serde(default = "default_heading1_size")]
    pub heading1_size_pt: f32,

    #[serde(default = "default_heading2_size")]
    pub heading2_size_pt: f32,

    /// Display width of the header logo in inches
    #[serde(default = "default_logo_width")]
    pub logo_width_in: f32,

    /// First-line indent of narrative paragraphs in centimetres
    #[serde(default = "default_indent")]
    pub first_line_indent_cm: f32,

    /// Title used when the record has none
    #[serde(default = "default_title")]
    pub default_title: String,

    /// Whether signature lines are included in line numbering
    #[serde(default = "default_true")]
    pub number_signatures: bool,
}

impl RenderConfig {
    /// Style theme built from these values
    pub fn theme(&self) -> StyleTheme {
        StyleTheme {
            font_family: self.font_family.clone(),
            base_size_pt: self.base_size_pt,
            title_size_pt: self.title_size_pt,
            heading1_size_pt: self.heading1_size_pt,
            heading2_size_pt: self.heading2_size_pt,
            logo_width_in: self.logo_width_in,
            first_line_indent_cm: self.first_line_indent_cm,
        }
    }

    /// Render options for a run, with the configured signature numbering.
    pub fn options(&self, narrative_mode: bool, line_numbering: bool) -> RenderOptions {
        RenderOptions {
            narrative_mode,
            line_numbering,
            number_signatures: self.number_signatures,
        }
    }

    /// Validate rendering configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.font_family.trim().is_empty() {
            return Err(ValidationError::MissingRequired("render.font_family"));
        }
        if self.default_title.trim().is_empty() {
            return Err(ValidationError::MissingRequired("render.default_title"));
        }

        for (field, value) in [
            ("base_size_pt", self.base_size_pt),
            ("title_size_pt", self.title_size_pt),
            ("heading1_size_pt", self.heading1_size_pt),
            ("heading2_size_pt", self.heading2_size_pt),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ValidationError::InvalidFontSize { field, value });
            }
        }

        if !(0.0..=MAX_LOGO_WIDTH_IN).contains(&self.logo_width_in) || self.logo_width_in == 0.0 {
            return Err(ValidationError::InvalidLogoWidth(self.logo_width_in));
        }
        if self.first_line_indent_cm.is_nan() || self.first_line_indent_cm < 0.0 {
            return Err(ValidationError::InvalidIndent(self.first_line_indent_cm));
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            base_size_pt: default_base_size(),
            title_size_pt: default_title_size(),
            heading1_size_pt: default_heading1_size(),
            heading2_size_pt: default_heading2_size(),
            logo_width_in: default_logo_width(),
            first_line_indent_cm: default_indent(),
            default_title: default_title(),
            number_signatures: true,
        }
    }
}

fn default_font_family() -> String {
    StyleTheme::default().font_family
}

fn default_base_size() -> f32 {
    StyleTheme::default().base_size_pt
}

fn default_title_size() -> f32 {
    StyleTheme::default().title_size_pt
}

fn default_heading1_size() -> f32 {
    StyleTheme::default().heading1_size_pt
}

fn default_heading2_size() -> f32 {
    StyleTheme::default().heading2_size_pt
}

fn default_logo_width() -> f32 {
    StyleTheme::default().logo_width_in
}

fn default_indent() -> f32 {
    StyleTheme::default().first_line_indent_cm
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_default_theme() {
        assert_eq!(RenderConfig::default().theme(), StyleTheme::default());
    }

    #[test]
    fn options_carry_signature_setting() {
        let config = RenderConfig {
            number_signatures: false,
            ..RenderConfig::default()
        };
        let options = config.options(false, true);
        assert!(!options.narrative_mode);
        assert!(options.line_numbering);
        assert!(!options.number_signatures);
    }

    #[test]
    fn rejects_zero_font_size() {
        let config = RenderConfig {
            heading2_size_pt: 0.0,
            ..RenderConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidFontSize {
                field: "heading2_size_pt",
                value: 0.0
            })
        );
    }

    #[test]
    fn rejects_oversized_logo() {
        let config = RenderConfig {
            logo_width_in: 9.0,
            ..RenderConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogoWidth(_))
        ));
    }

    #[test]
    fn rejects_blank_font_family() {
        let config = RenderConfig {
            font_family: "  ".to_string(),
            ..RenderConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("render.font_family"))
        );
    }

    #[test]
    fn nan_sizes_are_rejected() {
        let config = RenderConfig {
            base_size_pt: f32::NAN,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
