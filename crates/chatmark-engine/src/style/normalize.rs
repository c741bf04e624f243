use super::{color::Color, font::Font, text::StyledText};

/// Brings a paragraph's runs to a consistent size.
///
/// Runs without a font get `base_font`. Runs whose font is neither fixed-width
/// nor bold are resized to `base_font`'s point size, keeping family, weight and
/// slant. Inline code and bold text keep their fonts so they stay distinct.
/// When `override_color` is set it replaces every run's colour.
#[must_use]
pub fn normalize(
    mut text: StyledText,
    base_font: &Font,
    override_color: Option<Color>,
) -> StyledText {
    text.map_styles(|style| {
        let font = style.font.get_or_insert_with(|| base_font.clone());
        if !font.is_fixed_width() && !font.is_bold() {
            font.size = base_font.size;
        }
        if let Some(color) = override_color {
            style.color = Some(color);
        }
    });
    text
}
