use std::{fmt, str::FromStr};

use crate::{Block, Color, Length};

/// Direction the arrow points to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Tag that is not a direction, arrow will have no borders.
    Unknown(String),
}

impl FromStr for Direction {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let direction = match s.trim().trim_matches(|c| c == '\'' || c == '"') {
            "top" => Direction::Top,
            "right" => Direction::Right,
            "bottom" => Direction::Bottom,
            "left" => Direction::Left,
            "top-left" => Direction::TopLeft,
            "top-right" => Direction::TopRight,
            "bottom-left" => Direction::BottomLeft,
            "bottom-right" => Direction::BottomRight,
            other => Direction::Unknown(other.to_owned()),
        };
        Ok(direction)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
            Direction::TopLeft => "top-left",
            Direction::TopRight => "top-right",
            Direction::BottomLeft => "bottom-left",
            Direction::BottomRight => "bottom-right",
            Direction::Unknown(tag) => tag,
        })
    }
}

#[derive(Clone, Copy)]
enum Fill {
    Transparent,
    Solid,
}

/// Zero-size box whose borders draw a triangle pointing to `direction`.
pub fn arrow(direction: &Direction, color: &Color, size: Length) -> Block {
    use Fill::*;

    let mut block = Block::new();
    block
        .declare("display", "inline-block")
        .declare("height", 0)
        .declare("width", 0);

    let borders: &[(&'static str, Fill)] = match direction {
        Direction::Top => &[
            ("border-left", Transparent),
            ("border-right", Transparent),
            ("border-bottom", Solid),
        ],
        Direction::Bottom => &[
            ("border-left", Transparent),
            ("border-right", Transparent),
            ("border-top", Solid),
        ],
        Direction::Left => &[
            ("border-top", Transparent),
            ("border-bottom", Transparent),
            ("border-right", Solid),
        ],
        Direction::Right => &[
            ("border-top", Transparent),
            ("border-bottom", Transparent),
            ("border-left", Solid),
        ],
        Direction::TopLeft => &[("border-top", Solid), ("border-right", Transparent)],
        Direction::TopRight => &[("border-top", Solid), ("border-left", Transparent)],
        Direction::BottomLeft => &[("border-bottom", Solid), ("border-right", Transparent)],
        Direction::BottomRight => &[("border-bottom", Solid), ("border-left", Transparent)],
        Direction::Unknown(tag) => {
            log::debug!("unknown arrow direction `{tag}`, no borders emitted");
            &[]
        }
    };
    for &(property, fill) in borders {
        match fill {
            Transparent => block.declare(property, format_args!("{size} solid transparent")),
            Solid => block.declare(property, format_args!("{size} solid {color}")),
        };
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn direction(tag: &str) -> Direction {
        tag.parse().unwrap()
    }

    #[test]
    fn pointing_up() {
        let block = arrow(&direction("top"), &Color::new("black"), Length::px(50.0));
        assert_eq!(
            block.to_string(),
            "display: inline-block;\n\
             height: 0;\n\
             width: 0;\n\
             border-left: 50px solid transparent;\n\
             border-right: 50px solid transparent;\n\
             border-bottom: 50px solid black;\n"
        );
    }

    #[test]
    fn side_directions() {
        let color = Color::new("#333");
        let size = Length::px(4.0);
        let bottom = arrow(&Direction::Bottom, &color, size);
        assert_eq!(bottom.value_of("border-top"), Some("4px solid #333"));
        assert_eq!(bottom.value_of("border-bottom"), None);

        let left = arrow(&Direction::Left, &color, size);
        assert_eq!(left.value_of("border-top"), Some("4px solid transparent"));
        assert_eq!(left.value_of("border-bottom"), Some("4px solid transparent"));
        assert_eq!(left.value_of("border-right"), Some("4px solid #333"));

        let right = arrow(&Direction::Right, &color, size);
        assert_eq!(right.value_of("border-left"), Some("4px solid #333"));
        assert_eq!(right.value_of("border-right"), None);
    }

    #[test]
    fn corners_set_two_borders() {
        let block = arrow(&direction("bottom-right"), &Color::new("red"), Length::px(10.0));
        let borders = block
            .declarations()
            .filter(|d| d.property.starts_with("border"))
            .map(|d| (d.property.to_string(), d.value.clone()))
            .collect::<Vec<_>>();
        assert_eq!(
            borders,
            vec![
                ("border-bottom".to_owned(), "10px solid red".to_owned()),
                ("border-left".to_owned(), "10px solid transparent".to_owned()),
            ]
        );

        let block = arrow(&direction("'top-left'"), &Color::new("red"), Length::px(1.0));
        assert_eq!(block.value_of("border-top"), Some("1px solid red"));
        assert_eq!(block.value_of("border-right"), Some("1px solid transparent"));
    }

    #[test]
    fn remaining_corners() {
        let color = Color::new("navy");
        let borders = |tag: &str| {
            arrow(&direction(tag), &color, Length::px(3.0))
                .declarations()
                .filter(|d| d.property.starts_with("border"))
                .map(|d| format!("{}: {}", d.property, d.value))
                .collect::<Vec<_>>()
        };
        assert_eq!(
            borders("top-right"),
            vec!["border-top: 3px solid navy", "border-left: 3px solid transparent"]
        );
        assert_eq!(
            borders("bottom-left"),
            vec!["border-bottom: 3px solid navy", "border-right: 3px solid transparent"]
        );
    }

    #[test]
    fn unknown_direction_has_no_borders() {
        let block = arrow(&direction("up"), &Color::new("red"), Length::px(10.0));
        assert_eq!(block.to_string(), "display: inline-block;\nheight: 0;\nwidth: 0;\n");
        assert_eq!(direction("up").to_string(), "up");
    }
}
