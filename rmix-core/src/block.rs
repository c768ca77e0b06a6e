//! Output of mixins: declarations, nested rules and at-rules,
//! and their textual representation.
//!
//! A [`Block`] renders the way it was written (nested, `&` unresolved).
//! A [`Rule`] resolves `&` against its selector and bubbles at-rules out:
//! ```rust
//! use rmix_core::{mixins, Rule, PrinterOptions};
//! let rule = Rule::new(".list", mixins::reset_list());
//! assert_eq!(
//!     rule.to_css(PrinterOptions { minify: true }),
//!     ".list{list-style:none;margin:0;padding:0}"
//! );
//! ```
use std::{borrow::Cow, fmt};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrinterOptions {
    /// Strip all optional whitespace.
    pub minify: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: Cow<'static, str>,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    pub fn new(property: impl Into<Cow<'static, str>>, value: impl fmt::Display) -> Self {
        Self {
            property: property.into(),
            value: value.to_string(),
            important: false,
        }
    }
    pub fn important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }
}

/// Rule with selector relative to parent, `&` stands for parent selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedRule {
    pub selector: String,
    pub block: Block,
}

/// Conditional group, e.g. `@media`. Conditions are alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtRule {
    pub name: Cow<'static, str>,
    pub conditions: Vec<String>,
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Declaration(Declaration),
    Nested(NestedRule),
    AtRule(AtRule),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    nodes: Vec<Node>,
}

impl Block {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn declare(
        &mut self,
        property: impl Into<Cow<'static, str>>,
        value: impl fmt::Display,
    ) -> &mut Self {
        self.push(Declaration::new(property, value))
    }

    pub fn push(&mut self, node: impl Into<Node>) -> &mut Self {
        self.nodes.push(node.into());
        self
    }

    pub fn nest(&mut self, selector: impl Into<String>, block: Block) -> &mut Self {
        self.push(NestedRule {
            selector: selector.into(),
            block,
        })
    }

    pub fn at_rule(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        conditions: Vec<String>,
        block: Block,
    ) -> &mut Self {
        self.push(AtRule {
            name: name.into(),
            conditions,
            block,
        })
    }

    /// Append all nodes of other block.
    pub fn include(&mut self, other: Block) -> &mut Self {
        self.nodes.extend(other.nodes);
        self
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Declarations of this block, without nested ones.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Declaration(declaration) => Some(declaration),
            _ => None,
        })
    }

    /// Value of the first declaration of `property`.
    pub fn value_of(&self, property: &str) -> Option<&str> {
        self.declarations()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    /// Values of every declaration of `property`, in order.
    pub fn values_of<'a>(&'a self, property: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.declarations()
            .filter(move |d| d.property == property)
            .map(|d| d.value.as_str())
    }

    pub fn to_css(&self, options: PrinterOptions) -> String {
        let mut result = String::new();
        let mut printer = Printer::new(&mut result, options);
        // writing into String never fails
        let _ = printer.write_block(self);
        result
    }
}

impl From<Declaration> for Node {
    fn from(declaration: Declaration) -> Self {
        Node::Declaration(declaration)
    }
}
impl From<NestedRule> for Node {
    fn from(rule: NestedRule) -> Self {
        Node::Nested(rule)
    }
}
impl From<AtRule> for Node {
    fn from(rule: AtRule) -> Self {
        Node::AtRule(rule)
    }
}

impl FromIterator<Node> for Block {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Printer::new(f, PrinterOptions::default()).write_block(self)
    }
}

/// Block attached to a top-level selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub block: Block,
}

impl Rule {
    pub fn new(selector: impl Into<String>, block: Block) -> Self {
        Self {
            selector: selector.into(),
            block,
        }
    }

    pub fn to_css(&self, options: PrinterOptions) -> String {
        let mut result = String::new();
        let _ = Printer::new(&mut result, options).write_rule(self);
        result
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Printer::new(f, PrinterOptions::default()).write_rule(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule)
    }

    pub fn to_css(&self, options: PrinterOptions) -> String {
        let mut result = String::new();
        let mut printer = Printer::new(&mut result, options);
        for rule in &self.rules {
            let _ = printer.write_rule(rule);
        }
        result
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut printer = Printer::new(f, PrinterOptions::default());
        for rule in &self.rules {
            printer.write_rule(rule)?;
        }
        Ok(())
    }
}

/// Split selector list by top-level commas.
fn split_selectors(selector: &str) -> Vec<&str> {
    let mut result = vec![];
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in selector.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                result.push(selector[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    result.push(selector[start..].trim());
    result.retain(|s| !s.is_empty());
    result
}

/// Resolve nested selector against each of parent selectors.
fn resolve_selectors(parents: &[String], nested: &str) -> Vec<String> {
    let children = split_selectors(nested);
    let mut result = Vec::with_capacity(parents.len() * children.len());
    for parent in parents {
        for child in &children {
            if child.contains('&') {
                result.push(child.replace('&', parent));
            } else {
                result.push(format!("{parent} {child}"));
            }
        }
    }
    result
}

struct Printer<'a, W> {
    dest: &'a mut W,
    options: PrinterOptions,
    indent: usize,
}

impl<'a, W: fmt::Write> Printer<'a, W> {
    fn new(dest: &'a mut W, options: PrinterOptions) -> Self {
        Self {
            dest,
            options,
            indent: 0,
        }
    }

    fn write_indent(&mut self) -> fmt::Result {
        if !self.options.minify {
            for _ in 0..self.indent {
                self.dest.write_str("  ")?;
            }
        }
        Ok(())
    }

    fn open(&mut self) -> fmt::Result {
        self.indent += 1;
        if self.options.minify {
            self.dest.write_char('{')
        } else {
            self.dest.write_str(" {\n")
        }
    }

    fn close(&mut self) -> fmt::Result {
        self.indent -= 1;
        self.write_indent()?;
        if self.options.minify {
            self.dest.write_char('}')
        } else {
            self.dest.write_str("}\n")
        }
    }

    fn write_declaration(&mut self, declaration: &Declaration) -> fmt::Result {
        self.write_indent()?;
        let important = if declaration.important {
            if self.options.minify {
                "!important"
            } else {
                " !important"
            }
        } else {
            ""
        };
        let separator = if self.options.minify { ":" } else { ": " };
        write!(
            self.dest,
            "{}{separator}{}{important}",
            declaration.property, declaration.value
        )
    }

    fn write_selectors(&mut self, selectors: &[impl AsRef<str>]) -> fmt::Result {
        self.write_indent()?;
        let separator = if self.options.minify { "," } else { ", " };
        for (i, selector) in selectors.iter().enumerate() {
            if i > 0 {
                self.dest.write_str(separator)?;
            }
            self.dest.write_str(selector.as_ref())?;
        }
        Ok(())
    }

    fn write_at_rule_prelude(&mut self, rule: &AtRule) -> fmt::Result {
        self.write_indent()?;
        write!(self.dest, "@{}", rule.name)?;
        let separator = if self.options.minify { "," } else { ", " };
        for (i, condition) in rule.conditions.iter().enumerate() {
            self.dest.write_str(if i == 0 { " " } else { separator })?;
            self.dest.write_str(condition)?;
        }
        Ok(())
    }

    /// Nested representation, the way block was built.
    fn write_block(&mut self, block: &Block) -> fmt::Result {
        let nodes = block.nodes();
        for (i, node) in nodes.iter().enumerate() {
            match node {
                Node::Declaration(declaration) => {
                    self.write_declaration(declaration)?;
                    if !self.options.minify {
                        self.dest.write_str(";\n")?;
                    } else if i + 1 < nodes.len() {
                        self.dest.write_char(';')?;
                    }
                }
                Node::Nested(rule) => {
                    self.write_selectors(&split_selectors(&rule.selector))?;
                    self.open()?;
                    self.write_block(&rule.block)?;
                    self.close()?;
                }
                Node::AtRule(rule) => {
                    self.write_at_rule_prelude(rule)?;
                    self.open()?;
                    self.write_block(&rule.block)?;
                    self.close()?;
                }
            }
        }
        Ok(())
    }

    fn write_rule(&mut self, rule: &Rule) -> fmt::Result {
        let selectors = split_selectors(&rule.selector)
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();
        self.write_resolved(&selectors, &rule.block)
    }

    /// Flat representation: declarations under `selectors`,
    /// nested rules resolved, at-rules bubbled up.
    fn write_resolved(&mut self, selectors: &[String], block: &Block) -> fmt::Result {
        let declarations = block.declarations().collect::<Vec<_>>();
        if !declarations.is_empty() {
            self.write_selectors(selectors)?;
            self.open()?;
            for (i, declaration) in declarations.into_iter().enumerate() {
                if self.options.minify && i > 0 {
                    self.dest.write_char(';')?;
                }
                self.write_declaration(declaration)?;
                if !self.options.minify {
                    self.dest.write_str(";\n")?;
                }
            }
            self.close()?;
        }
        for node in block.nodes() {
            match node {
                Node::Declaration(_) => {}
                Node::Nested(rule) => {
                    let resolved = resolve_selectors(selectors, &rule.selector);
                    self.write_resolved(&resolved, &rule.block)?;
                }
                Node::AtRule(rule) => {
                    self.write_at_rule_prelude(rule)?;
                    self.open()?;
                    self.write_resolved(selectors, &rule.block)?;
                    self.close()?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MINIFY: PrinterOptions = PrinterOptions { minify: true };

    fn sample() -> Block {
        let mut inner = Block::new();
        inner.declare("clear", "both");
        let mut media = Block::new();
        media.declare("color", "red");
        let mut block = Block::new();
        block
            .declare("zoom", 1)
            .nest("&:before, &:after", inner)
            .at_rule("media", vec!["print".into(), "screen".into()], media);
        block
    }

    #[test]
    fn block_keeps_nesting() {
        assert_eq!(
            sample().to_string(),
            "zoom: 1;\n&:before, &:after {\n  clear: both;\n}\n@media print, screen {\n  color: red;\n}\n"
        );
        assert_eq!(
            sample().to_css(MINIFY),
            "zoom:1;&:before,&:after{clear:both}@media print,screen{color:red}"
        );
    }

    #[test]
    fn rule_resolves_parent() {
        let rule = Rule::new(".a, .b", sample());
        assert_eq!(
            rule.to_css(MINIFY),
            ".a,.b{zoom:1}.a:before,.a:after,.b:before,.b:after{clear:both}@media print,screen{.a,.b{color:red}}"
        );
        assert_eq!(
            rule.to_string(),
            ".a, .b {\n  zoom: 1;\n}\n.a:before, .a:after, .b:before, .b:after {\n  clear: both;\n}\n@media print, screen {\n  .a, .b {\n    color: red;\n  }\n}\n"
        );
    }

    #[test]
    fn nested_without_ampersand_is_descendant() {
        let mut inner = Block::new();
        inner.declare("color", "red");
        let mut block = Block::new();
        block.nest("span", inner);
        assert_eq!(
            Rule::new(".a", block).to_css(MINIFY),
            ".a span{color:red}"
        );
    }

    #[test]
    fn important_and_empty_rules() {
        let mut block = Block::new();
        block.push(Declaration::new("font-size", "14px").important(true));
        assert_eq!(
            Rule::new("p", block).to_css(MINIFY),
            "p{font-size:14px!important}"
        );
        assert_eq!(Rule::new("p", Block::new()).to_css(MINIFY), "");
    }

    #[test]
    fn lookup_by_property() {
        let mut block = sample();
        block.declare("zoom", "normal");
        assert_eq!(block.value_of("zoom"), Some("1"));
        assert_eq!(block.values_of("zoom").collect::<Vec<_>>(), vec!["1", "normal"]);
        // nested declarations are not part of the block itself
        assert_eq!(block.value_of("clear"), None);
    }

    #[test]
    fn minified_block_drops_last_semicolon() {
        let mut block = Block::new();
        block.declare("color", "blue").declare("margin", 0);
        assert_eq!(block.to_css(MINIFY), "color:blue;margin:0");
        assert_eq!(Block::new().to_css(MINIFY), "");
    }

    #[test]
    fn split_selector_list() {
        assert_eq!(
            split_selectors("a:not(.b, .c), d"),
            vec!["a:not(.b, .c)", "d"]
        );
    }
}
