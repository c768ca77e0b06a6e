use const_format::concatcp;

use crate::Block;

/// Device pixel ratio treated as high density.
const RATIO: &str = "1.5";

/// Resolution features matching high-density displays, oldest engines first.
pub const HIDPI_FEATURES: [&str; 6] = [
    concatcp!("(-webkit-min-device-pixel-ratio: ", RATIO, ")"),
    concatcp!("(min--moz-device-pixel-ratio: ", RATIO, ")"),
    "(-o-min-device-pixel-ratio: 3/2)",
    concatcp!("(min-device-pixel-ratio: ", RATIO, ")"),
    "(min-resolution: 144dpi)",
    concatcp!("(min-resolution: ", RATIO, "dppx)"),
];

pub const DEFAULT_MEDIA: &str = "all";

/// Content of `content` applied only on high-density displays.
///
/// Any of the [`HIDPI_FEATURES`] matching is enough.
pub fn retina(media: Option<&str>, content: impl Fn() -> Block) -> Block {
    let media = media.unwrap_or(DEFAULT_MEDIA);
    let conditions = HIDPI_FEATURES
        .iter()
        .map(|feature| format!("only {media} and {feature}"))
        .collect();
    let mut block = Block::new();
    block.at_rule("media", conditions, content());
    block
}
