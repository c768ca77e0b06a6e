//! Parameter values accepted by mixins.
//!
//! Numbers carry an optional unit and print the way a stylesheet author
//! would write them (`2` rather than `2.0`, `1.4` rather than `1.4000001`).
use std::{fmt, str::FromStr};

use cssparser::{ParseError, Parser, ParserInput, Token};

use crate::Error;

/// Number of fractional digits kept when printing numbers.
const PRECISION: i32 = 5;

/// Format number without trailing zeros, rounded to [`PRECISION`] digits.
pub fn format_number(value: f64) -> String {
    let scale = 10f64.powi(PRECISION);
    let rounded = (value * scale).round() / scale;
    // avoid printing "-0"
    if rounded == 0.0 {
        return String::from("0");
    }
    format!("{rounded}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    None,
    Px,
    Em,
    Rem,
    Percent,
    Pt,
    Pc,
    Cm,
    Mm,
    In,
    Ex,
    Ch,
    Vw,
    Vh,
    Vmin,
    Vmax,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Percent => "%",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::In => "in",
            Unit::Ex => "ex",
            Unit::Ch => "ch",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::Vmin => "vmin",
            Unit::Vmax => "vmax",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        let unit = match suffix.to_ascii_lowercase().as_str() {
            "" => Unit::None,
            "px" => Unit::Px,
            "em" => Unit::Em,
            "rem" => Unit::Rem,
            "%" => Unit::Percent,
            "pt" => Unit::Pt,
            "pc" => Unit::Pc,
            "cm" => Unit::Cm,
            "mm" => Unit::Mm,
            "in" => Unit::In,
            "ex" => Unit::Ex,
            "ch" => Unit::Ch,
            "vw" => Unit::Vw,
            "vh" => Unit::Vh,
            "vmin" => Unit::Vmin,
            "vmax" => Unit::Vmax,
            _ => return None,
        };
        Some(unit)
    }
}

/// Number with optional unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }
    pub const fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }
    pub const fn rem(value: f64) -> Self {
        Self::new(value, Unit::Rem)
    }
    pub const fn em(value: f64) -> Self {
        Self::new(value, Unit::Em)
    }
    pub const fn percent(value: f64) -> Self {
        Self::new(value, Unit::Percent)
    }
    pub const fn number(value: f64) -> Self {
        Self::new(value, Unit::None)
    }

    pub fn is_unitless(&self) -> bool {
        self.unit == Unit::None
    }

    /// Magnitude with unit dropped, `14px` and `14em` both become `14`.
    pub fn strip_unit(&self) -> f64 {
        self.value
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Length::number(value)
    }
}

impl From<i32> for Length {
    fn from(value: i32) -> Self {
        Length::number(value as f64)
    }
}

impl Length {
    /// Read a number, percentage or dimension token.
    pub(crate) fn parse<'i>(input: &mut Parser<'i, '_>) -> Result<Self, ParseError<'i, Error>> {
        input.skip_whitespace();
        let start = input.position();
        let token = input.next()?.clone();
        let text = input.slice_from(start);
        // reparse the written digits, token values are only f32
        let number = |digits: Option<&str>, value: f32| {
            digits
                .and_then(|digits| digits.parse::<f64>().ok())
                .unwrap_or_else(|| f64::from(value))
        };
        let length = match token {
            Token::Number { value, .. } => Length::number(number(Some(text), value)),
            Token::Percentage { unit_value, .. } => {
                Length::percent(number(text.strip_suffix('%'), unit_value * 100.0))
            }
            Token::Dimension {
                value,
                unit: ref written,
                ..
            } => {
                let unit = Unit::from_suffix(written).ok_or_else(|| {
                    input.new_custom_error::<_, Error>(Error::InvalidLength(text.to_owned()))
                })?;
                Length::new(number(text.strip_suffix(&**written), value), unit)
            }
            token => return Err(input.new_unexpected_token_error(token)),
        };
        Ok(length)
    }
}

impl FromStr for Length {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut input = ParserInput::new(s);
        Parser::new(&mut input)
            .parse_entirely(Length::parse)
            .map_err(|_| Error::InvalidLength(s.to_owned()))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit.as_str())
    }
}

/// Item of offset list, either number or any other keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(Length),
    Keyword(String),
}

impl Value {
    pub fn parse(text: &str) -> Self {
        match text.parse::<Length>() {
            Ok(length) => Value::Number(length),
            Err(_) => Value::Keyword(text.trim().to_owned()),
        }
    }
    pub fn as_number(&self) -> Option<Length> {
        match self {
            Value::Number(length) => Some(*length),
            Value::Keyword(_) => None,
        }
    }
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Value::Keyword(k) if k == keyword)
    }
}

impl From<Length> for Value {
    fn from(length: Length) -> Self {
        Value::Number(length)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::parse(text)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(length) => length.fmt(f),
            Value::Keyword(keyword) => f.write_str(keyword),
        }
    }
}

/// One of four box sides, used as offset keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of keywords and values, e.g. `top 10px right 5%`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Offsets(pub Vec<Value>);

impl Offsets {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends `side value` pair.
    pub fn with(mut self, side: Side, value: impl Into<Length>) -> Self {
        self.0.push(Value::Keyword(side.as_str().to_owned()));
        self.0.push(Value::Number(value.into()));
        self
    }

    /// Appends any item, well formed or not.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.0.push(value.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }

    /// Value that follows the first occurrence of `side`, if it is a number.
    pub fn offset(&self, side: Side) -> Option<Length> {
        let index = self.0.iter().position(|v| v.is_keyword(side.as_str()))?;
        self.0.get(index + 1).and_then(Value::as_number)
    }
}

impl FromStr for Offsets {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Offsets(s.split_whitespace().map(Value::parse).collect()))
    }
}

impl FromIterator<Value> for Offsets {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Offsets(iter.into_iter().collect())
    }
}
