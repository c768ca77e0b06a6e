use crate::{value::format_number, Block};

/// `opacity` with IE5-9 filter equivalents.
///
/// Nothing is emitted for fractions outside `0..=1`.
pub fn opacity(fraction: f64) -> Block {
    let mut block = Block::new();
    if !(0.0..=1.0).contains(&fraction) {
        log::debug!("opacity {fraction} is out of range, nothing emitted");
        return block;
    }
    let percent = format_number(fraction * 100.0);
    block
        .declare("opacity", format_number(fraction))
        .declare(
            "-ms-filter",
            format_args!("\"progid:DXImageTransform.Microsoft.Alpha(Opacity={percent})\""),
        )
        .declare("filter", format_args!("alpha(opacity={percent})"));
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn half_transparent() {
        assert_eq!(
            opacity(0.5).to_string(),
            "opacity: 0.5;\n\
             -ms-filter: \"progid:DXImageTransform.Microsoft.Alpha(Opacity=50)\";\n\
             filter: alpha(opacity=50);\n"
        );
    }

    #[test]
    fn scaled_percent_is_rounded() {
        assert_eq!(opacity(0.07).value_of("filter"), Some("alpha(opacity=7)"));
        assert_eq!(opacity(1.0).value_of("filter"), Some("alpha(opacity=100)"));
        assert_eq!(opacity(0.0).value_of("opacity"), Some("0"));
    }

    #[test]
    fn out_of_range() {
        assert!(opacity(1.2).is_empty());
        assert!(opacity(-1.0).is_empty());
        assert!(opacity(f64::NAN).is_empty());
    }
}
