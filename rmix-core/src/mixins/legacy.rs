//! Fixed rule sets, mostly workarounds for old Internet Explorer.
use crate::Block;

/// Whitespace between `inline-block` siblings, in `px`.
const INLINE_BLOCK_GAP: &str = "-4px";

pub fn reset_list() -> Block {
    let mut block = Block::new();
    block
        .declare("list-style", "none")
        .declare("margin", 0)
        .declare("padding", 0);
    block
}

/// Image replacement: text is pushed outside of the clipped box.
pub fn hide_text() -> Block {
    let mut block = Block::new();
    block
        .declare("overflow", "hidden")
        .declare("text-indent", "100%")
        .declare("white-space", "nowrap");
    block
}

pub fn center_block() -> Block {
    let mut block = Block::new();
    block
        .declare("display", "block")
        .declare("margin-left", "auto")
        .declare("margin-right", "auto");
    block
}

/// `inline-block` for IE6/7, which only honour it on inline elements with layout.
pub fn inline_block() -> Block {
    let mut block = Block::new();
    block.declare("*display", "inline").declare("*zoom", 1);
    block
}

pub fn focus_outline() -> Block {
    let mut block = Block::new();
    block
        .declare("outline", "thin dotted")
        .declare("outline", "5px auto -webkit-focus-ring-color")
        .declare("outline-offset", "-2px");
    block
}

/// Contain floats. `zoom` gives the box layout in IE6/7.
pub fn clearfix() -> Block {
    let mut generated = Block::new();
    generated
        .declare("content", "\" \"")
        .declare("display", "table");
    let mut clear = Block::new();
    clear.declare("clear", "both");

    let mut block = Block::new();
    block
        .declare("*zoom", 1)
        .nest("&:before, &:after", generated)
        .nest("&:after", clear);
    block
}

fn inline_block_fix(side: &'static str, reset: &str) -> Block {
    let mut first = Block::new();
    first.declare(side, 0);
    let mut block = Block::new();
    block
        .declare(side, INLINE_BLOCK_GAP)
        .nest(format!("&:{reset}"), first);
    block
}

/// Pull `inline-block` siblings over the whitespace on their left.
pub fn inline_block_fix_left() -> Block {
    inline_block_fix("margin-left", "first-child")
}

/// Pull `inline-block` siblings over the whitespace on their right.
pub fn inline_block_fix_right() -> Block {
    inline_block_fix("margin-right", "last-child")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PrinterOptions, Rule};
    use pretty_assertions::assert_eq;

    fn minified(selector: &str, block: Block) -> String {
        Rule::new(selector, block).to_css(PrinterOptions { minify: true })
    }

    #[test]
    fn fixed_sets() {
        assert_eq!(
            minified("ul", reset_list()),
            "ul{list-style:none;margin:0;padding:0}"
        );
        assert_eq!(
            minified(".logo", hide_text()),
            ".logo{overflow:hidden;text-indent:100%;white-space:nowrap}"
        );
        assert_eq!(
            minified(".page", center_block()),
            ".page{display:block;margin-left:auto;margin-right:auto}"
        );
        assert_eq!(minified("li", inline_block()), "li{*display:inline;*zoom:1}");
        assert_eq!(
            minified("a:focus", focus_outline()),
            "a:focus{outline:thin dotted;outline:5px auto -webkit-focus-ring-color;outline-offset:-2px}"
        );
    }

    #[test]
    fn clearfix_rules() {
        assert_eq!(
            Rule::new(".row", clearfix()).to_string(),
            ".row {\n  *zoom: 1;\n}\n\
             .row:before, .row:after {\n  content: \" \";\n  display: table;\n}\n\
             .row:after {\n  clear: both;\n}\n"
        );
    }

    #[test]
    fn whitespace_fixes() {
        assert_eq!(
            minified("li", inline_block_fix_left()),
            "li{margin-left:-4px}li:first-child{margin-left:0}"
        );
        assert_eq!(
            minified("li", inline_block_fix_right()),
            "li{margin-right:-4px}li:last-child{margin-right:0}"
        );
    }

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(clearfix().to_string(), clearfix().to_string());
    }
}
