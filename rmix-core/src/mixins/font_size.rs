use crate::{Block, Declaration, Length};

/// Pixels in one `rem`, assuming root font-size of 62.5%.
const PX_PER_REM: f64 = 10.0;

/// `font-size` in `px`, then in `rem` for browsers that support it.
///
/// The magnitude of `size` is read as pixels: `20` and `20px` both give
/// `20px` and `2rem`, other units are dropped rather than converted.
pub fn font_size(size: Length, important: bool) -> Block {
    let px = size.strip_unit();
    let mut block = Block::new();
    block
        .push(Declaration::new("font-size", Length::px(px)).important(important))
        .push(Declaration::new("font-size", Length::rem(px / PX_PER_REM)).important(important));
    block
}
