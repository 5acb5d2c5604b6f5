use std::cmp::Reverse;

use discpack::entities::BPInstance;
use itertools::Itertools;
use ordered_float::OrderedFloat;

/// Order in which the items are placed: descending size.
/// The sort is stable, items of equal size keep their order in the instance.
pub fn item_placement_order(instance: &BPInstance) -> Vec<usize> {
    instance
        .items
        .iter()
        .sorted_by_cached_key(|item| Reverse(OrderedFloat(item.size)))
        .map(|item| item.id)
        .collect_vec()
}

pub fn is_descending(instance: &BPInstance, order: &[usize]) -> bool {
    order
        .iter()
        .map(|id| instance.item(*id).size)
        .tuple_windows()
        .all(|(a, b)| a >= b)
}
