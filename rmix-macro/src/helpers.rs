use proc_macro2::TokenStream;

/// Get macro input from macro call source text.
/// Input should be in format: `css! { ... }`
/// And can be retrived in function like proc-macro `Span::call_site().source_text()`.
pub fn macro_input(source_text: &str) -> Option<String> {
    // 1. Find macro call group (any type of braces)
    // 2. skip whitespaces
    // 3. return rest of the string or None, if group wasn't found
    let (_path, group_start) = source_text.split_once(|c| "{[(".contains(c))?;
    let (group, _end) = group_start.rsplit_once(|c| "}])".contains(c))?;

    let trimed = group.trim();

    Some(trimed.to_owned())
}

/// Value of the string literal if it is the only macro input.
pub fn string_literal(tokens: &TokenStream) -> Option<String> {
    syn::parse2::<syn::LitStr>(tokens.clone())
        .ok()
        .map(|lit| lit.value())
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    #[test]
    fn check_macro_input_extractor() {
        let input = r#"
        rmix::css! {
            .my-class {
                @include size(1.5em);
            }
        }
        "#;
        let compare_optimized = super::macro_input(input).unwrap();
        assert_eq!(
            compare_optimized,
            ".my-class {\n                @include size(1.5em);\n            }"
        );
        assert_eq!(super::macro_input("css!"), None);
    }

    #[test]
    fn check_string_literal() {
        let tokens: proc_macro2::TokenStream = r##"r#".a { @include clearfix; }"#"##.parse().unwrap();
        assert_eq!(
            super::string_literal(&tokens).as_deref(),
            Some(".a { @include clearfix; }")
        );
        let tokens: proc_macro2::TokenStream = ".a { color: red; }".parse().unwrap();
        assert_eq!(super::string_literal(&tokens), None);
    }
}
