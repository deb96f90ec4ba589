//! Knight move generation.

use super::Square;

/// The 8 knight offsets: ±1/±2 on perpendicular axes.
pub(crate) const KNIGHT_DELTAS: [(i64, i64); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

impl Square {
    /// The 8 squares one knight move away.
    ///
    /// The board is unbounded, so every candidate is kept; the result is
    /// always exactly 8 distinct squares.
    #[must_use]
    pub fn knight_moves(self) -> [Square; 8] {
        KNIGHT_DELTAS.map(|(dx, dy)| Square::new(self.x + dx, self.y + dy))
    }
}
