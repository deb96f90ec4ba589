//! Layered breadth-first search for the knight distance metric.
//!
//! Two variants answer the same question at different costs:
//! - [`distance_naive`] keeps every frontier square, duplicates included,
//!   and does no pruning. Work grows roughly 8^k with the answer k, so it
//!   is only practical for nearby targets. It is kept as the ground truth
//!   the pruned variant is cross-checked against.
//! - [`distance`] deduplicates each layer, answers move counts 0 and 1
//!   directly, and discards moves that fail to close on the destination
//!   once the taxicab distance exceeds the near field.
//!
//! Both walk the same layer state machine: scan the current layer for the
//! destination, return the move count on a hit, otherwise build the next
//! layer and repeat. The board being infinite and unobstructed guarantees
//! a hit eventually.

mod baseline;
mod pruned;

pub use baseline::distance_naive;
pub use pruned::distance;
