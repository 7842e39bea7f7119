//! StyleTheme - fonts and sizes applied to the built-in styles.

/// Font family and sizes for Normal, Title and the heading styles.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTheme {
    pub font_family: String,
    pub base_size_pt: f32,
    pub title_size_pt: f32,
    pub heading1_size_pt: f32,
    pub heading2_size_pt: f32,
    /// Display width of the header logo, in inches.
    pub logo_width_in: f32,
    /// First-line indent of narrative paragraphs, in centimetres.
    pub first_line_indent_cm: f32,
}

impl Default for StyleTheme {
    fn default() -> Self {
        Self {
            font_family: "Calibri".to_string(),
            base_size_pt: 11.0,
            title_size_pt: 20.0,
            heading1_size_pt: 14.0,
            heading2_size_pt: 12.0,
            logo_width_in: 1.2,
            first_line_indent_cm: 0.8,
        }
    }
}

impl StyleTheme {
    /// Heading 3 has no size of its own; it uses the base size.
    pub fn heading3_size_pt(&self) -> f32 {
        self.base_size_pt
    }
}
