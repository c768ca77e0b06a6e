//! Mixins for cross-browser presentational rules.
//!
//! Each mixin is a pure function that returns a [`Block`] of declarations,
//! blocks are rendered with [`Rule`] (or written nested, as is).
//! [`include`] expands the same mixins written as `@include name(args)` text.
//!
//! ```rust
//! use rmix_core::{mixins, Length, Rule};
//!
//! let mut block = mixins::absolute(&"top 0 left 50%".parse().unwrap());
//! block.include(mixins::size(Length::px(10.0), None));
//! assert_eq!(
//!     Rule::new(".dot", block).to_string(),
//!     ".dot {\n  position: absolute;\n  top: 0;\n  left: 50%;\n  width: 10px;\n  height: 10px;\n}\n"
//! );
//! ```
use thiserror::Error;

mod block;
mod color;
pub mod include;
#[cfg(feature = "lightningcss")]
pub mod lightning_css;
pub mod mixins;
pub mod value;

pub use block::{AtRule, Block, Declaration, NestedRule, Node, PrinterOptions, Rule, Stylesheet};
pub use color::Color;
pub use value::{Length, Offsets, Side, Unit, Value};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Failed to parse `{0}` as length")]
    InvalidLength(String),
    #[error("Unknown keyword `{0}`")]
    UnknownKeyword(String),
    #[error("Unknown mixin `{0}`")]
    UnknownMixin(String),
    #[error("Mixin `{name}` expects {expected} arguments, got {got}")]
    ArgumentCount {
        name: String,
        expected: String,
        got: usize,
    },
    #[error("Invalid argument `{value}` for mixin `{name}`")]
    InvalidArgument { name: String, value: String },
    #[error("Mixin `{0}` requires content block")]
    MissingContent(String),
    #[error("Mixin `{0}` doesn't accept content block")]
    UnexpectedContent(String),
    #[error("Only @include is supported inside rules, got `@{0}`")]
    UnsupportedAtRule(String),
    #[error("Nested rules can only come from mixins, got `{0} {{..}}`")]
    NestedRule(String),
    #[error("Expected `property: value`, got `{0}`")]
    InvalidDeclaration(String),
    #[error("Rule without selector at {line}:{column}")]
    EmptySelector { line: u32, column: u32 },
    #[error("Invalid rule `{0}`")]
    InvalidRule(String),
    #[error("Unexpected `{found}` at {line}:{column}")]
    UnexpectedToken {
        found: String,
        line: u32,
        column: u32,
    },
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[cfg(feature = "lightningcss")]
    #[error("Failed to process css: {0}")]
    LightningCss(String),
}
