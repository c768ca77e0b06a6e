use std::{fmt, str::FromStr};

use crate::{
    value::{Offsets, Side},
    Block, Error,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionKind {
    Absolute,
    Fixed,
    Relative,
    Static,
}

impl PositionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionKind::Absolute => "absolute",
            PositionKind::Fixed => "fixed",
            PositionKind::Relative => "relative",
            PositionKind::Static => "static",
        }
    }
}

impl FromStr for PositionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "absolute" => Ok(PositionKind::Absolute),
            "fixed" => Ok(PositionKind::Fixed),
            "relative" => Ok(PositionKind::Relative),
            "static" => Ok(PositionKind::Static),
            other => Err(Error::UnknownKeyword(other.to_owned())),
        }
    }
}

impl fmt::Display for PositionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `position` declaration followed by offsets found in `offsets`.
///
/// Offsets are emitted in `top right bottom left` order. A side is emitted only
/// when its first occurrence is directly followed by a number, anything else
/// is skipped.
pub fn position(kind: PositionKind, offsets: &Offsets) -> Block {
    let mut block = Block::new();
    block.declare("position", kind);
    for side in Side::ALL {
        match offsets.offset(side) {
            Some(value) => {
                block.declare(side.as_str(), value);
            }
            None if offsets.iter().any(|v| v.is_keyword(side.as_str())) => {
                log::debug!("skip `{side}` offset: not followed by a number in `{offsets:?}`");
            }
            None => {}
        }
    }
    block
}

pub fn absolute(offsets: &Offsets) -> Block {
    position(PositionKind::Absolute, offsets)
}

pub fn fixed(offsets: &Offsets) -> Block {
    position(PositionKind::Fixed, offsets)
}

pub fn relative(offsets: &Offsets) -> Block {
    position(PositionKind::Relative, offsets)
}
