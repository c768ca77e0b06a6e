use crate::Block;

/// Vendor variants of the input placeholder pseudo-element.
pub const PLACEHOLDER_SELECTORS: [&str; 4] = [
    "&::-webkit-input-placeholder",
    "&:-moz-placeholder",
    "&::-moz-placeholder",
    "&:-ms-input-placeholder",
];

/// Content of `content` repeated under each placeholder selector.
///
/// Selectors are kept in separate rules, an engine drops the whole rule
/// when it sees a selector it doesn't know.
pub fn placeholder(content: impl Fn() -> Block) -> Block {
    let mut block = Block::new();
    for selector in PLACEHOLDER_SELECTORS {
        block.nest(selector, content());
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PrinterOptions, Rule};
    use pretty_assertions::assert_eq;

    #[test]
    fn one_rule_per_vendor() {
        let rule = Rule::new(
            "input",
            placeholder(|| {
                let mut block = Block::new();
                block.declare("color", "#999");
                block
            }),
        );
        assert_eq!(
            rule.to_css(PrinterOptions { minify: true }),
            "input::-webkit-input-placeholder{color:#999}\
             input:-moz-placeholder{color:#999}\
             input::-moz-placeholder{color:#999}\
             input:-ms-input-placeholder{color:#999}"
        );
    }

    #[test]
    fn content_produced_per_selector() {
        let calls = std::cell::Cell::new(0);
        placeholder(|| {
            calls.set(calls.get() + 1);
            Block::new()
        });
        assert_eq!(calls.get(), PLACEHOLDER_SELECTORS.len());
    }
}
