use std::borrow::Cow;

use crate::{Block, Color};

/// `property` set to `color`, then overridden with its alpha-blended form.
///
/// Browsers without `rgba()` support drop the second declaration and keep the
/// first. The blended line is omitted when `opacity` is outside `0..=1` or
/// the color has no known channels.
pub fn color_with_fallback(
    property: impl Into<Cow<'static, str>>,
    color: &Color,
    opacity: f64,
) -> Block {
    let property = property.into();
    let mut block = Block::new();
    block.declare(property.clone(), color);
    if !(0.0..=1.0).contains(&opacity) {
        log::debug!("opacity {opacity} is out of range, keep only fallback `{color}`");
        return block;
    }
    match color.with_alpha(opacity) {
        Some(rgba) => {
            block.declare(property, rgba);
        }
        None => log::debug!("`{color}` can't be resolved to rgba, keep only fallback"),
    }
    block
}

/// [`color_with_fallback`] for `background`.
pub fn background_rgba(color: &Color, opacity: Option<f64>) -> Block {
    color_with_fallback("background", color, opacity.unwrap_or(1.0))
}
