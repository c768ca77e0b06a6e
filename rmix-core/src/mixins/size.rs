use crate::{Block, Length};

/// `width` and `height`, height defaults to width.
pub fn size(width: Length, height: Option<Length>) -> Block {
    let mut block = Block::new();
    block
        .declare("width", width)
        .declare("height", height.unwrap_or(width));
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_by_default() {
        let block = size(Length::px(10.0), None);
        assert_eq!(block.to_string(), "width: 10px;\nheight: 10px;\n");
    }

    #[test]
    fn explicit_height() {
        let block = size(Length::percent(100.0), Some(Length::em(2.5)));
        assert_eq!(block.value_of("width"), Some("100%"));
        assert_eq!(block.value_of("height"), Some("2.5em"));
    }
}
