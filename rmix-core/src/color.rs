use std::fmt;

use crate::value::format_number;

/// Color as written by the author.
///
/// The text is printed back unchanged, channels are resolved only when
/// a mixin needs to blend alpha.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    source: String,
}

impl Color {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into().trim().to_owned(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// 8-bit RGBA channels, `None` if text is not a color.
    pub fn to_rgba8(&self) -> Option<[u8; 4]> {
        let parsed: csscolorparser::Color = self.source.parse().ok()?;
        Some(parsed.to_rgba8())
    }

    /// `rgba(r, g, b, a)` with alpha replaced by `alpha`.
    pub fn with_alpha(&self, alpha: f64) -> Option<String> {
        let [r, g, b, _] = self.to_rgba8()?;
        Some(format!("rgba({r}, {g}, {b}, {})", format_number(alpha)))
    }
}

impl From<&str> for Color {
    fn from(source: &str) -> Self {
        Color::new(source)
    }
}

impl From<String> for Color {
    fn from(source: String) -> Self {
        Color::new(source)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn keeps_source_text() {
        assert_eq!(Color::new(" #333 ").to_string(), "#333");
        assert_eq!(Color::from("red").as_str(), "red");
    }

    #[test]
    fn blends_alpha() {
        assert_eq!(
            Color::new("#ff0000").with_alpha(0.5).as_deref(),
            Some("rgba(255, 0, 0, 0.5)")
        );
        assert_eq!(
            Color::new("black").with_alpha(1.0).as_deref(),
            Some("rgba(0, 0, 0, 1)")
        );
        assert_eq!(Color::new("not-a-color").with_alpha(0.5), None);
    }
}
