//!
//! Fallback for IDEs, where macro call has no source text.
//! Printed token stream is not valid css (`10 px`, `@ include`), so css is not expanded,
//! only mixin names are checked, to report unknown ones at their span.
//!
//! Outputs empty style.
use proc_macro2::{Span, TokenStream, TokenTree};
use quote::quote_spanned;

pub fn check(input: TokenStream) -> TokenStream {
    let errors = unknown_mixins(input)
        .into_iter()
        .map(|(name, span)| {
            let msg = format!("Unknown mixin `{name}`");
            quote_spanned! {span=> compile_error!(#msg);}
        })
        .collect::<TokenStream>();
    if errors.is_empty() {
        quote::quote! { "" }
    } else {
        quote::quote! {{ #errors "" }}
    }
}

/// Names after `@include` that are not known mixins, with span of their first ident.
fn unknown_mixins(input: TokenStream) -> Vec<(String, Span)> {
    let mut stack = vec![input];
    let mut unknown = Vec::new();
    while let Some(input) = stack.pop() {
        let mut tokens = input.into_iter().peekable();
        while let Some(token) = tokens.next() {
            match token {
                TokenTree::Punct(punct) if punct.as_char() == '@' => {}
                TokenTree::Group(group) => {
                    stack.push(group.stream());
                    continue;
                }
                _ => continue,
            }
            if !matches!(tokens.peek(), Some(TokenTree::Ident(i)) if i == "include") {
                continue;
            }
            let _include = tokens.next();
            let Some(TokenTree::Ident(first)) = tokens.next() else {
                continue;
            };
            let span = first.span();
            let mut name = first.to_string();
            // dashed names are split into `ident - ident`
            while matches!(tokens.peek(), Some(TokenTree::Punct(p)) if p.as_char() == '-') {
                let _dash = tokens.next();
                match tokens.next() {
                    Some(TokenTree::Ident(part)) => {
                        name.push('-');
                        name.push_str(&part.to_string());
                    }
                    _ => break,
                }
            }
            if !is_known(&name) {
                unknown.push((name, span));
            }
        }
    }
    unknown
}

fn is_known(name: &str) -> bool {
    rmix_core::include::MIXINS.contains(&name)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    fn unknown(source: &str) -> Vec<String> {
        super::unknown_mixins(source.parse().unwrap())
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    #[test]
    fn dashed_names_are_joined() {
        assert_eq!(
            unknown(".a { @include inline-block-fix-left; @include reset-list; }"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn unknown_names_are_reported() {
        assert_eq!(
            unknown(".a { @include hide-txt; } .b { @include absolute(top 0); @include spin; }"),
            vec!["spin".to_owned(), "hide-txt".to_owned()]
        );
    }

    #[test]
    fn empty_style_without_errors() {
        let output = super::check(".a { @include clearfix; }".parse().unwrap());
        assert_eq!(output.to_string(), "\"\"");
    }
}
