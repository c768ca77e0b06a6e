pub const BUTTON: &str = rmix::css! {
    .button {
        @include inline-block;
        @include font-size(15px, important);
        @include focus-outline;
        padding: 0 10px;
    }
    .button:hover {
        @include background-rgba(#ff0000, 0.5);
    }
};

pub const SEARCH: &str = rmix::css!(
    r#"
    input.search {
        /* `1.5em` is not a valid rust token, literal input keeps it */
        @include font-size(1.5em);
        @include placeholder { color: #999; }
    }
"#
);

pub const LOGO: &str = rmix::css! {
    .logo {
        @include hide-text;
        @include size(120px, 40px);
        @include retina(screen) {
            background-image: url("logo@2x.png");
        }
    }
};

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    #[test]
    fn expanded_at_compile_time() {
        assert_eq!(
            super::BUTTON,
            ".button{*display:inline;*zoom:1;font-size:15px!important;font-size:1.5rem!important;\
             outline:thin dotted;outline:5px auto -webkit-focus-ring-color;outline-offset:-2px;padding:0 10px}\
             .button:hover{background:#ff0000;background:rgba(255, 0, 0, 0.5)}"
        );
    }

    #[test]
    fn string_literal_input() {
        assert_eq!(
            super::SEARCH,
            "input.search{font-size:1.5px;font-size:0.15rem}\
             input.search::-webkit-input-placeholder{color:#999}\
             input.search:-moz-placeholder{color:#999}\
             input.search::-moz-placeholder{color:#999}\
             input.search:-ms-input-placeholder{color:#999}"
        );
    }

    #[test]
    fn media_is_bubbled() {
        let expected = rmix::include::parse_stylesheet(
            r#".logo {
                @include hide-text;
                @include size(120px, 40px);
                @include retina(screen) { background-image: url("logo@2x.png"); }
            }"#,
        )
        .unwrap()
        .to_css(rmix::PrinterOptions { minify: true });
        assert_eq!(super::LOGO, expected);
        assert!(super::LOGO.starts_with(
            ".logo{overflow:hidden;text-indent:100%;white-space:nowrap;width:120px;height:40px}@media only screen and"
        ));
    }
}
