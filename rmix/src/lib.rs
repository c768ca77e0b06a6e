//! Mixins for cross-browser presentational rules.
//!
//! Positioning helpers, color fallbacks, `px`/`rem` font sizes, css arrows,
//! high-density display media queries, placeholder styling and a few
//! workarounds for old browsers.
//!
//! Mixins are plain functions that return a [`Block`] of declarations,
//! attach it to a selector with [`Rule`] to get css text:
//! ```rust
//! use rmix::{mixins, Color, Length, Rule};
//!
//! let mut block = mixins::font_size(Length::px(14.0), false);
//! block.include(mixins::background_rgba(&Color::new("#000"), Some(0.5)));
//! assert_eq!(
//!     Rule::new("p", block).to_string(),
//!     "p {\n  font-size: 14px;\n  font-size: 1.4rem;\n  background: #000;\n  background: rgba(0, 0, 0, 0.5);\n}\n"
//! );
//! ```
//!
//! Mixins that don't recognize their input (unknown arrow direction,
//! offset without a number, opacity out of range) leave that part of the
//! output out instead of failing.
//!
#[cfg(feature = "macro")]
/// Expands `@include` calls at compile time, result is minified css `&'static str`.
///
/// Source text of the macro call is used, so css keeps the spacing it was written
/// with (`#333`, `5%`). Units that are not valid rust tokens (`1.5em`) need
/// a single string literal as input instead.
///
/// Example:
/// ```rust
/// const TOOLTIP: &str = rmix::css! {
///     .tooltip {
///         @include absolute(top 10px left 5%);
///         @include arrow(top, #333, 6px);
///     }
/// };
/// assert_eq!(
///     TOOLTIP,
///     ".tooltip{position:absolute;top:10px;left:5%;display:inline-block;height:0;width:0;\
///     border-left:6px solid transparent;border-right:6px solid transparent;border-bottom:6px solid #333}"
/// );
/// ```
pub use rmix_macro::css;

pub use rmix_core::{
    include, mixins, value, AtRule, Block, Color, Declaration, Error, Length, NestedRule, Node,
    Offsets, PrinterOptions, Result, Rule, Side, Stylesheet, Unit, Value,
};

#[cfg(feature = "lightningcss")]
pub use rmix_core::lightning_css;
