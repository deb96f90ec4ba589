//! Unpruned search with a duplicating frontier.

use crate::board::Square;

/// Minimum number of knight moves from `src` to `dst`, computed without
/// frontier deduplication or pruning.
///
/// The frontier starts as the 8 moves of `src` (move count 1). Each round
/// scans the whole layer and returns the current count on a hit; otherwise
/// every square contributes all 8 of its moves to the next layer. Repeated
/// squares are kept, so the layer size grows roughly 8^k; the answer is
/// still minimal, the work is just redundant.
///
/// Callers must pass distinct squares. The first layer this search
/// evaluates is move count 1, so a destination equal to the source is only
/// rediscovered on the out-and-back layer and the answer for that input is
/// 2, not 0. This is a known gap of the variant, left as is.
pub fn distance_naive(src: Square, dst: Square) -> u32 {
    let mut frontier: Vec<Square> = src.knight_moves().to_vec();
    let mut moves = 1u32;

    loop {
        #[cfg(feature = "logging")]
        log::trace!("naive layer {moves}: {} squares", frontier.len());

        if frontier.iter().any(|&sq| sq == dst) {
            return moves;
        }

        let mut next = Vec::with_capacity(frontier.len() * 8);
        for sq in &frontier {
            next.extend(sq.knight_moves());
        }
        frontier = next;
        moves += 1;
    }
}
