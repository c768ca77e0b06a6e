//! Optional normalization pass through lightningcss.
//!
//! Legacy hacks that lightningcss can't parse (`*zoom`, `*display`) are dropped,
//! so this pass is meant for output that doesn't target IE6/7.
use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

use crate::{Error, Result, Stylesheet};

/// Parse rendered css with lightningcss and print it minified.
pub fn minify(css: &str) -> Result<String> {
    let style = StyleSheet::parse(
        css,
        ParserOptions {
            error_recovery: true,
            ..Default::default()
        },
    )
    .map_err(|e| Error::LightningCss(format!("{:?}", e)))?;
    let output = style
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| Error::LightningCss(format!("{:?}", e)))?;
    Ok(output.code)
}

impl Stylesheet {
    /// Render and minify with lightningcss.
    pub fn to_minified_css(&self) -> Result<String> {
        minify(&self.to_string())
    }
}
