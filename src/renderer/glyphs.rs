//! Cell glyphs
//!
//! Emoji render two columns wide in most terminals, so the ASCII set pads
//! every glyph to two characters to keep the ground round.

use serde::{Deserialize, Serialize};

use crate::sim::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    #[default]
    Emoji,
    Ascii,
}

impl GlyphSet {
    pub fn glyph(&self, cell: Cell) -> &'static str {
        match self {
            GlyphSet::Emoji => match cell {
                Cell::Fielder => "🏃🏻‍♂️",
                Cell::OuterBoundary => "🟠",
                Cell::InnerBoundary => "⚪",
                Cell::Grass => "🟢",
                Cell::Pitch => "⬜️",
                Cell::Ball => "🎾",
                Cell::Outside => "⬛",
            },
            GlyphSet::Ascii => match cell {
                Cell::Fielder => "F ",
                Cell::OuterBoundary => "O ",
                Cell::InnerBoundary => "o ",
                Cell::Grass => ". ",
                Cell::Pitch => "| ",
                Cell::Ball => "* ",
                Cell::Outside => "  ",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_glyphs_are_two_wide() {
        for cell in [
            Cell::Fielder,
            Cell::OuterBoundary,
            Cell::InnerBoundary,
            Cell::Grass,
            Cell::Pitch,
            Cell::Ball,
            Cell::Outside,
        ] {
            assert_eq!(GlyphSet::Ascii.glyph(cell).chars().count(), 2);
        }
    }
}
