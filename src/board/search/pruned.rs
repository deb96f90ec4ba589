//! Deduplicated search with taxicab pruning and fast paths for move
//! counts 0 and 1.

use std::collections::HashSet;

use crate::board::Square;

/// Pruning is disabled within this taxicab radius of the destination, and
/// the one-move fast path keys on the same boundary. The two must change
/// together: a knight move shifts taxicab distance by at most 3, and only
/// beyond 3 is a non-improving move never part of a shortest path.
const NEAR_FIELD_RADIUS: i64 = 3;

/// Minimum number of knight moves from `src` to `dst`.
///
/// Answers move counts 0 and 1 without searching:
/// - equal squares are distance 0;
/// - squares differing on both axes at taxicab distance exactly 3 are the
///   (±1,±2)/(±2,±1) shapes, distance 1. Same-row and same-column squares
///   are excluded even at taxicab distance 3, since no single knight move
///   stays on its own row or column.
///
/// Everything else runs the layered search with a set frontier. Frontier
/// squares beyond `NEAR_FIELD_RADIUS` of the destination keep only the
/// moves that strictly reduce taxicab distance; squares inside it keep all
/// 8, since the final approach can need a locally worsening move.
pub fn distance(src: Square, dst: Square) -> u32 {
    if src == dst {
        return 0;
    }
    if !src.shares_axis(dst) && src.taxicab_distance(dst) == NEAR_FIELD_RADIUS {
        return 1;
    }

    let mut frontier: HashSet<Square> = src.knight_moves().into_iter().collect();
    let mut moves = 1u32;

    loop {
        #[cfg(feature = "logging")]
        log::trace!("pruned layer {moves}: {} squares", frontier.len());

        if frontier.contains(&dst) {
            return moves;
        }

        let mut next = HashSet::with_capacity(frontier.len() * 4);
        for &sq in &frontier {
            let here = sq.taxicab_distance(dst);
            if here > NEAR_FIELD_RADIUS {
                next.extend(
                    sq.knight_moves()
                        .into_iter()
                        .filter(|cand| cand.taxicab_distance(dst) < here),
                );
            } else {
                next.extend(sq.knight_moves());
            }
        }
        frontier = next;
        moves += 1;
    }
}
