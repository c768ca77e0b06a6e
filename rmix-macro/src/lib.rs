use proc_macro::TokenStream;
use proc_macro2::{Literal, Span};

use quote::quote_spanned;
use rmix_core::PrinterOptions;

mod fallback_ide;
mod helpers;

/// Expand `@include` calls at compile time into minified css `&'static str`.
/// Don't use this macro directly, use rmix crate instead.
#[proc_macro]
pub fn css(tokens: TokenStream) -> TokenStream {
    let tokens: proc_macro2::TokenStream = tokens.into();
    let is_literal = helpers::string_literal(&tokens).is_some();
    if !is_literal && Span::call_site().source_text().is_none() {
        return fallback_ide::check(tokens).into();
    }
    match css_inner(&tokens) {
        Ok(style) => {
            let style = Literal::string(&style);
            quote::quote! { #style }.into()
        }
        Err(e) => {
            let msg = format!("{}", e);
            quote_spanned! {Span::call_site()=>
                compile_error!(#msg)
            }
            .into()
        }
    }
}

#[derive(thiserror::Error, Debug)]
enum MacroError {
    #[error("Failed to expand css: {0}")]
    ExpandError(#[from] rmix_core::Error),
    #[error("No valid source code available for this macro call.")]
    NoSourceAvailable,
}

/// Source is taken from string literal if macro got one,
/// otherwise from macro call source text, to keep units like `1.5em` intact.
fn css_inner(tokens: &proc_macro2::TokenStream) -> Result<String, MacroError> {
    let text = match helpers::string_literal(tokens) {
        Some(text) => text,
        None => {
            let Some(text) = Span::call_site().source_text() else {
                return Err(MacroError::NoSourceAvailable);
            };
            let Some(text) = helpers::macro_input(&text) else {
                return Err(MacroError::NoSourceAvailable);
            };
            text
        }
    };
    let sheet = rmix_core::include::parse_stylesheet(&text)?;
    Ok(sheet.to_css(PrinterOptions { minify: true }))
}
