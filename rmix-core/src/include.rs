//! Expansion of `@include` calls written as text.
//!
//! Input is a list of rules, each rule body holds plain declarations
//! (copied as is) and mixin calls:
//! ```rust
//! let sheet = rmix_core::include::parse_stylesheet(r#"
//!     .tooltip {
//!         @include absolute(top 10px left 5%);
//!         color: white;
//!     }
//! "#).unwrap();
//! assert_eq!(
//!     sheet.to_css(rmix_core::PrinterOptions { minify: true }),
//!     ".tooltip{position:absolute;top:10px;left:5%;color:white}"
//! );
//! ```
//!
//! Only the call surface is checked here, declarations are not validated.
use cssparser::{
    parse_important, AtRuleParser, BasicParseErrorKind, CowRcStr, DeclarationParser, Delimiter,
    ParseError, ParseErrorKind, Parser, ParserInput, ParserState, QualifiedRuleParser,
    RuleBodyItemParser, RuleBodyParser, StyleSheetParser, ToCss, Token,
};

use crate::{
    mixins::{self, Direction, PositionKind},
    Block, Color, Declaration, Error, Length, Offsets, Result, Rule, Stylesheet, Value,
};

type ParseResult<'i, T> = std::result::Result<T, ParseError<'i, Error>>;

/// Names accepted by `@include`.
pub const MIXINS: [&str; 19] = [
    "position",
    "absolute",
    "fixed",
    "relative",
    "background-rgba",
    "size",
    "font-size",
    "arrow",
    "retina",
    "reset-list",
    "hide-text",
    "opacity",
    "placeholder",
    "center-block",
    "inline-block",
    "focus-outline",
    "clearfix",
    "inline-block-fix-left",
    "inline-block-fix-right",
];

/// Parse rules and expand every `@include` in them.
pub fn parse_stylesheet(source: &str) -> Result<Stylesheet> {
    let mut input = ParserInput::new(source);
    let mut input = Parser::new(&mut input);
    let mut sheet = Stylesheet::new();
    for rule in StyleSheetParser::new(&mut input, &mut TopLevelParser) {
        sheet.push(rule.map_err(into_error)?);
    }
    Ok(sheet)
}

/// Parse content of a single rule body (without braces).
pub fn parse_block(source: &str) -> Result<Block> {
    let mut input = ParserInput::new(source);
    parse_body(&mut Parser::new(&mut input))
}

fn parse_body(input: &mut Parser<'_, '_>) -> Result<Block> {
    let mut block = Block::new();
    let mut parser = BodyParser;
    let items: RuleBodyParser<'_, '_, '_, BodyParser, Item, Error> =
        RuleBodyParser::new(input, &mut parser);
    for item in items {
        match item {
            Ok(Item::Declaration(declaration)) => {
                block.push(declaration);
            }
            Ok(Item::Include(call, content)) => {
                log::trace!("expand `@include {}` with {:?}", call.name, call.args);
                block.include(expand(&call.name, &call.args, content)?);
            }
            // only identifiers are read as property names, `*zoom: 1` ends up here
            Err((error, text))
                if matches!(error.kind, ParseErrorKind::Basic(_)) && !text.starts_with('@') =>
            {
                block.push(raw_declaration(text)?);
            }
            Err(error) => return Err(into_error(error)),
        }
    }
    Ok(block)
}

fn into_error((error, text): (ParseError<'_, Error>, &str)) -> Error {
    let location = error.location;
    match error.kind {
        ParseErrorKind::Custom(error) => error,
        ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(token)) => {
            Error::UnexpectedToken {
                found: token.to_css_string(),
                line: location.line + 1,
                column: location.column,
            }
        }
        ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => Error::UnexpectedEnd,
        ParseErrorKind::Basic(BasicParseErrorKind::AtRuleInvalid(name)) => {
            Error::UnsupportedAtRule(name.to_string())
        }
        ParseErrorKind::Basic(_) => Error::InvalidRule(text.trim().to_owned()),
    }
}

/// Declaration kept as written, with `!important` split off.
fn raw_declaration(text: &str) -> Result<Declaration> {
    let text = text.trim().trim_end_matches(';').trim_end();
    if let Some((selector, _)) = text.split_once('{') {
        return Err(Error::NestedRule(selector.trim().to_owned()));
    }
    let invalid = || Error::InvalidDeclaration(text.to_owned());
    let (property, value) = text.split_once(':').ok_or_else(invalid)?;
    let (property, value) = (property.trim(), value.trim());
    let (value, important) = match value.strip_suffix("!important") {
        Some(value) => (value.trim_end(), true),
        None => (value, false),
    };
    if property.is_empty() || value.is_empty() {
        return Err(invalid());
    }
    Ok(Declaration::new(property.to_owned(), value).important(important))
}

/// Skip one token, with its nested block if it opens one.
/// Returns `true` for `{}` blocks.
fn skip_token<'i>(input: &mut Parser<'i, '_>) -> ParseResult<'i, bool> {
    let (opens_block, curly) = match input.next()? {
        Token::CurlyBracketBlock => (true, true),
        Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock => (true, false),
        _ => (false, false),
    };
    if opens_block {
        input.parse_nested_block(|input| {
            while input.next().is_ok() {}
            Ok::<_, ParseError<'i, Error>>(())
        })?;
    }
    Ok(curly)
}

/// Source text of the remaining tokens.
fn raw_value<'i>(input: &mut Parser<'i, '_>) -> ParseResult<'i, &'i str> {
    let start = input.position();
    let mut end = start;
    while !input.is_exhausted() {
        skip_token(input)?;
        end = input.position();
    }
    Ok(input.slice(start..end).trim())
}

/// Comma separated arguments, each kept as text.
fn arguments<'i>(input: &mut Parser<'i, '_>) -> ParseResult<'i, Vec<String>> {
    let mut args = vec![];
    if input.is_exhausted() {
        return Ok(args);
    }
    loop {
        let arg = input.parse_until_before(Delimiter::Comma, raw_value)?;
        args.push(arg.to_owned());
        // either comma or end of arguments
        if input.next().is_err() {
            return Ok(args);
        }
    }
}

struct TopLevelParser;

impl<'i> QualifiedRuleParser<'i> for TopLevelParser {
    type Prelude = &'i str;
    type QualifiedRule = Rule;
    type Error = Error;

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> ParseResult<'i, Self::Prelude> {
        let location = input.current_source_location();
        let selector = raw_value(input)?;
        if selector.is_empty() {
            return Err(location.new_custom_error(Error::EmptySelector {
                line: location.line + 1,
                column: location.column,
            }));
        }
        Ok(selector)
    }

    fn parse_block<'t>(
        &mut self,
        selector: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> ParseResult<'i, Self::QualifiedRule> {
        parse_body(input)
            .map(|block| Rule::new(selector, block))
            .map_err(|e| input.new_custom_error(e))
    }
}

impl<'i> AtRuleParser<'i> for TopLevelParser {
    type Prelude = ();
    type AtRule = Rule;
    type Error = Error;

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> ParseResult<'i, Self::Prelude> {
        Err(input.new_custom_error(Error::UnsupportedAtRule(name.to_string())))
    }
}

/// `@include name(args)` before its optional content block.
struct Include {
    name: String,
    args: Vec<String>,
}

enum Item {
    Declaration(Declaration),
    Include(Include, Option<Block>),
}

struct BodyParser;

impl<'i> DeclarationParser<'i> for BodyParser {
    type Declaration = Item;
    type Error = Error;

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        declaration_start: &ParserState,
    ) -> ParseResult<'i, Self::Declaration> {
        let start = input.position();
        let mut end = start;
        let mut important = false;
        while !input.is_exhausted() {
            if input.try_parse(parse_important).is_ok() && input.is_exhausted() {
                important = true;
                break;
            }
            let before = input.position();
            // custom properties may hold any block
            if skip_token(input)? && !name.starts_with("--") {
                let selector = input.slice(declaration_start.position()..before).trim();
                return Err(input.new_custom_error(Error::NestedRule(selector.to_owned())));
            }
            end = input.position();
        }
        let value = input.slice(start..end).trim();
        if value.is_empty() {
            return Err(input.new_custom_error(Error::InvalidDeclaration(format!("{name}:"))));
        }
        let declaration = Declaration::new(name.to_string(), value).important(important);
        Ok(Item::Declaration(declaration))
    }
}

impl<'i> AtRuleParser<'i> for BodyParser {
    type Prelude = Include;
    type AtRule = Item;
    type Error = Error;

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> ParseResult<'i, Self::Prelude> {
        if !name.eq_ignore_ascii_case("include") {
            return Err(input.new_custom_error(Error::UnsupportedAtRule(name.to_string())));
        }
        input.skip_whitespace();
        let location = input.current_source_location();
        let token = input.next()?.clone();
        let (name, args) = match token {
            Token::Function(name) => (name, input.parse_nested_block(arguments)?),
            Token::Ident(name) => {
                let args = match input.try_parse(|input| input.expect_parenthesis_block()) {
                    Ok(()) => input.parse_nested_block(arguments)?,
                    Err(_) => vec![],
                };
                (name, args)
            }
            token => return Err(location.new_unexpected_token_error(token)),
        };
        input.expect_exhausted()?;
        Ok(Include {
            name: name.to_string(),
            args,
        })
    }

    fn rule_without_block(
        &mut self,
        call: Self::Prelude,
        _start: &ParserState,
    ) -> std::result::Result<Self::AtRule, ()> {
        Ok(Item::Include(call, None))
    }

    fn parse_block<'t>(
        &mut self,
        call: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> ParseResult<'i, Self::AtRule> {
        parse_body(input)
            .map(|content| Item::Include(call, Some(content)))
            .map_err(|e| input.new_custom_error(e))
    }
}

impl<'i> QualifiedRuleParser<'i> for BodyParser {
    type Prelude = &'i str;
    type QualifiedRule = Item;
    type Error = Error;

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> ParseResult<'i, Self::Prelude> {
        raw_value(input)
    }

    fn parse_block<'t>(
        &mut self,
        selector: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> ParseResult<'i, Self::QualifiedRule> {
        Err(input.new_custom_error(Error::NestedRule(selector.to_owned())))
    }
}

impl<'i> RuleBodyItemParser<'i, Item, Error> for BodyParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        true
    }
}

fn expect_args(name: &str, args: &[String], min: usize, max: usize) -> Result<()> {
    if (min..=max).contains(&args.len()) {
        return Ok(());
    }
    let expected = if min == max {
        min.to_string()
    } else {
        format!("{min} to {max}")
    };
    Err(Error::ArgumentCount {
        name: name.to_owned(),
        expected,
        got: args.len(),
    })
}

fn length(name: &str, arg: &str) -> Result<Length> {
    arg.parse().map_err(|_| Error::InvalidArgument {
        name: name.to_owned(),
        value: arg.to_owned(),
    })
}

fn fraction(name: &str, arg: &str) -> Result<f64> {
    match length(name, arg)? {
        number if number.is_unitless() => Ok(number.value),
        _ => Err(Error::InvalidArgument {
            name: name.to_owned(),
            value: arg.to_owned(),
        }),
    }
}

fn flag(name: &str, arg: &str) -> Result<bool> {
    match arg {
        "important" | "!important" | "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::InvalidArgument {
            name: name.to_owned(),
            value: arg.to_owned(),
        }),
    }
}

fn offsets(arg: Option<&String>) -> Offsets {
    arg.map(|text| text.split_whitespace().map(Value::parse).collect())
        .unwrap_or_default()
}

/// Call mixin `name` with textual arguments.
pub fn expand(name: &str, args: &[String], content: Option<Block>) -> Result<Block> {
    let takes_content = matches!(name, "retina" | "placeholder");
    match (&content, takes_content) {
        (None, true) => return Err(Error::MissingContent(name.to_owned())),
        (Some(_), false) => return Err(Error::UnexpectedContent(name.to_owned())),
        _ => {}
    }
    let content = content.unwrap_or_default();
    let arg = |i: usize| args.get(i).map(String::as_str);

    let block = match name {
        "position" => {
            expect_args(name, args, 1, 2)?;
            let kind: PositionKind = args[0].parse()?;
            mixins::position(kind, &offsets(args.get(1)))
        }
        "absolute" | "fixed" | "relative" => {
            expect_args(name, args, 0, 1)?;
            let offsets = offsets(args.first());
            match name {
                "absolute" => mixins::absolute(&offsets),
                "fixed" => mixins::fixed(&offsets),
                _ => mixins::relative(&offsets),
            }
        }
        "background-rgba" => {
            expect_args(name, args, 1, 2)?;
            let opacity = arg(1).map(|a| fraction(name, a)).transpose()?;
            mixins::background_rgba(&Color::new(args[0].as_str()), opacity)
        }
        "size" => {
            expect_args(name, args, 1, 2)?;
            let height = arg(1).map(|a| length(name, a)).transpose()?;
            mixins::size(length(name, &args[0])?, height)
        }
        "font-size" => {
            expect_args(name, args, 1, 2)?;
            let important = arg(1).map(|a| flag(name, a)).transpose()?;
            mixins::font_size(length(name, &args[0])?, important.unwrap_or(false))
        }
        "arrow" => {
            expect_args(name, args, 3, 3)?;
            let direction: Direction = args[0].parse().unwrap_or_else(|e| match e {});
            mixins::arrow(
                &direction,
                &Color::new(args[1].as_str()),
                length(name, &args[2])?,
            )
        }
        "opacity" => {
            expect_args(name, args, 1, 1)?;
            mixins::opacity(fraction(name, &args[0])?)
        }
        "retina" => {
            expect_args(name, args, 0, 1)?;
            mixins::retina(arg(0), || content.clone())
        }
        "placeholder" => {
            expect_args(name, args, 0, 0)?;
            mixins::placeholder(|| content.clone())
        }
        _ => {
            let mixin: fn() -> Block = match name {
                "reset-list" => mixins::reset_list,
                "hide-text" => mixins::hide_text,
                "center-block" => mixins::center_block,
                "inline-block" => mixins::inline_block,
                "focus-outline" => mixins::focus_outline,
                "clearfix" => mixins::clearfix,
                "inline-block-fix-left" => mixins::inline_block_fix_left,
                "inline-block-fix-right" => mixins::inline_block_fix_right,
                _ => return Err(Error::UnknownMixin(name.to_owned())),
            };
            expect_args(name, args, 0, 0)?;
            mixin()
        }
    };
    Ok(block)
}
