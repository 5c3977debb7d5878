use crate::render::FontWeight;

/// Measures rendered text width so layouts can size boxes around labels.
pub trait TextMetrics {
    fn text_width(&self, text: &str, font_size_px: f64, weight: FontWeight) -> f64;
}

/// Per-glyph width estimate for a proportional sans-serif face.
///
/// Good enough to size tooltips and pills without a font backend; Cairo
/// hosts should measure with Pango instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateTextMetrics {
    pub bold_factor: f64,
}

impl Default for ApproximateTextMetrics {
    fn default() -> Self {
        Self { bold_factor: 1.08 }
    }
}

impl TextMetrics for ApproximateTextMetrics {
    fn text_width(&self, text: &str, font_size_px: f64, weight: FontWeight) -> f64 {
        let em: f64 = text.chars().map(glyph_em).sum();
        let factor = match weight {
            FontWeight::Bold => self.bold_factor,
            FontWeight::Medium => 1.0 + (self.bold_factor - 1.0) / 2.0,
            FontWeight::Normal => 1.0,
        };
        em * font_size_px * factor
    }
}

fn glyph_em(ch: char) -> f64 {
    match ch {
        'i' | 'l' | 'j' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' | 'I' => 0.28,
        ' ' | 'f' | 't' | 'r' | '(' | ')' | '-' => 0.34,
        'm' | 'w' | 'M' | 'W' => 0.85,
        c if c.is_ascii_uppercase() => 0.68,
        c if c.is_ascii_digit() => 0.56,
        c if c.is_ascii() => 0.52,
        _ => 0.9,
    }
}

#[cfg(test)]
mod tests {
    use super::{ApproximateTextMetrics, TextMetrics};
    use crate::render::FontWeight;

    #[test]
    fn width_scales_with_font_size_and_weight() {
        let metrics = ApproximateTextMetrics::default();
        let small = metrics.text_width("Hook", 10.0, FontWeight::Normal);
        let large = metrics.text_width("Hook", 20.0, FontWeight::Normal);
        let bold = metrics.text_width("Hook", 10.0, FontWeight::Bold);
        assert!((large - 2.0 * small).abs() <= 1e-9);
        assert!(bold > small);
        assert_eq!(metrics.text_width("", 12.0, FontWeight::Normal), 0.0);
    }
}
