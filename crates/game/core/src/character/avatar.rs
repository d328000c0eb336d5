//! Mirrored 5×5 identicon derived from a character's digest.
//!
//! Only the left three columns are computed; columns 3 and 4 mirror 1 and 0.
//! Cell `(x, y)` is filled when the hex digit at `(x * 5 + y) % len` is even.

use super::{Character, HexColor};

const GRID: usize = 5;

/// Symmetric pixel grid plus the colour to draw it in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Avatar {
    /// `cells[y][x]`
    cells: [[bool; GRID]; GRID],
    pub color: HexColor,
}

impl Avatar {
    pub const SIZE: usize = GRID;

    pub fn from_character(character: &Character) -> Self {
        Self::from_digest(&character.hash, character.color)
    }

    pub fn from_digest(digest: &str, color: HexColor) -> Self {
        let digits: Vec<char> = digest.chars().collect();
        let mut cells = [[false; Self::SIZE]; Self::SIZE];

        if digits.is_empty() {
            return Self { cells, color };
        }

        for x in 0..Self::SIZE.div_ceil(2) {
            for (y, row) in cells.iter_mut().enumerate() {
                let digit = digits[(x * Self::SIZE + y) % digits.len()];
                let filled = digit.to_digit(16).is_some_and(|value| value % 2 == 0);
                row[x] = filled;
                row[Self::SIZE - 1 - x] = filled;
            }
        }

        Self { cells, color }
    }

    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool; GRID]> {
        self.cells.iter()
    }
}
