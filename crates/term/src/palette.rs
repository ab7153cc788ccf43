//! Colours and glyphs for board cells and actors.
//!
//! Appearance is a pure function of what a cell holds, so the game logic never
//! looks at colours.

use crate::fb::{CellStyle, Rgb};
use crate::types::CellKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub grass: Rgb,
    pub grass_dot: Rgb,
    pub wall: Rgb,
    pub treasure: Rgb,
    pub player: Rgb,
    pub player_dead: Rgb,
    pub enemy: Rgb,
    pub border: Rgb,
    pub text: Rgb,
    pub backdrop: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grass: Rgb::new(46, 110, 52),
            grass_dot: Rgb::new(70, 140, 76),
            wall: Rgb::new(120, 100, 80),
            treasure: Rgb::new(245, 200, 40),
            player: Rgb::new(70, 150, 255),
            player_dead: Rgb::new(110, 110, 120),
            enemy: Rgb::new(230, 60, 60),
            border: Rgb::new(200, 200, 200),
            text: Rgb::new(220, 220, 220),
            backdrop: Rgb::new(0, 0, 0),
        }
    }
}

impl Palette {
    /// Glyph and style for a board cell.
    pub fn cell(&self, kind: CellKind) -> (char, CellStyle) {
        match kind {
            CellKind::Empty => ('·', CellStyle::new(self.grass_dot, self.grass).dim()),
            CellKind::Wall => ('█', CellStyle::new(self.wall, self.grass)),
            CellKind::Treasure => ('◆', CellStyle::new(self.treasure, self.grass).bold()),
        }
    }

    pub fn player(&self, alive: bool) -> CellStyle {
        let fg = if alive { self.player } else { self.player_dead };
        CellStyle::new(fg, self.grass).bold()
    }

    pub fn enemy(&self) -> CellStyle {
        CellStyle::new(self.enemy, self.grass).bold()
    }

    pub fn border(&self) -> CellStyle {
        CellStyle::new(self.border, self.backdrop)
    }

    pub fn label(&self) -> CellStyle {
        CellStyle::new(self.text, self.backdrop).bold()
    }

    pub fn value(&self) -> CellStyle {
        CellStyle::new(self.text, self.backdrop)
    }
}
