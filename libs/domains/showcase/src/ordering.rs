//! Display-order maintenance for showcase projects.
//!
//! Ranks are dense `0..N-1` immediately after a full reorder; between
//! reorders they may drift non-contiguous (deletes leave gaps). Display order
//! is ascending rank with the store's stable tiebreak.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

/// Direction for single-step reordering in the admin list
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// Rank for a record appended without an explicit position: one past the
/// current maximum, or 0 for an empty collection.
pub fn append_default(existing_max: Option<i32>) -> i32 {
    existing_max.map_or(0, |max| max + 1)
}

/// Compute the full ordering after moving `id` one slot up or down.
///
/// Returns the input unchanged when `id` is absent or already at the
/// corresponding boundary. Moving one slot is an adjacent swap.
pub fn move_one_step(order: &[Uuid], id: Uuid, direction: MoveDirection) -> Vec<Uuid> {
    let Some(current) = order.iter().position(|candidate| *candidate == id) else {
        return order.to_vec();
    };

    let target = match direction {
        MoveDirection::Up if current > 0 => current - 1,
        MoveDirection::Down if current + 1 < order.len() => current + 1,
        _ => return order.to_vec(),
    };

    let mut reordered = order.to_vec();
    reordered.swap(current, target);
    reordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<Uuid> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn test_append_default_empty_collection() {
        assert_eq!(append_default(None), 0);
    }

    #[test]
    fn test_append_default_one_past_max() {
        assert_eq!(append_default(Some(4)), 5);
    }

    #[test]
    fn test_move_up_swaps_with_previous() {
        let order = ids(3);
        let moved = move_one_step(&order, order[2], MoveDirection::Up);
        assert_eq!(moved, vec![order[0], order[2], order[1]]);
    }

    #[test]
    fn test_move_down_swaps_with_next() {
        let order = ids(3);
        let moved = move_one_step(&order, order[0], MoveDirection::Down);
        assert_eq!(moved, vec![order[1], order[0], order[2]]);
    }

    #[test]
    fn test_move_first_up_is_noop() {
        let order = ids(3);
        assert_eq!(move_one_step(&order, order[0], MoveDirection::Up), order);
    }

    #[test]
    fn test_move_last_down_is_noop() {
        let order = ids(3);
        assert_eq!(move_one_step(&order, order[2], MoveDirection::Down), order);
    }

    #[test]
    fn test_move_unknown_id_is_noop() {
        let order = ids(2);
        assert_eq!(move_one_step(&order, Uuid::new_v4(), MoveDirection::Up), order);
    }
}
