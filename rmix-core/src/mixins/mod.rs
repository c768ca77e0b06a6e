//! Mixins: free functions returning [`Block`](crate::Block) of declarations.
//!
//! None of them fail. Input they don't recognize leaves the matching
//! declarations out of the output.
mod arrow;
mod color;
mod font_size;
mod legacy;
mod media;
mod opacity;
mod placeholder;
mod position;
mod size;

pub use arrow::{arrow, Direction};
pub use color::{background_rgba, color_with_fallback};
pub use font_size::font_size;
pub use legacy::{
    center_block, clearfix, focus_outline, hide_text, inline_block, inline_block_fix_left,
    inline_block_fix_right, reset_list,
};
pub use media::{retina, DEFAULT_MEDIA, HIDPI_FEATURES};
pub use opacity::opacity;
pub use placeholder::{placeholder, PLACEHOLDER_SELECTORS};
pub use position::{absolute, fixed, position, relative, PositionKind};
pub use size::size;
