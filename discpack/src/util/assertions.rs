//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks and tests

use crate::entities::{BPInstance, BPProblem, BPSolution, Bin, Item};
use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

pub fn instance_item_ids_correct(items: &[Item]) -> bool {
    items.iter().enumerate().all(|(i, item)| item.id == i)
}

/// Checks that the used space of the bin matches its items and does not exceed its capacity
pub fn bin_matches_items(bin: &Bin, instance: &BPInstance) -> bool {
    let item_size_sum = bin
        .item_ids
        .iter()
        .map(|id| instance.item(*id).size)
        .sum::<f64>();

    if bin.used_space > bin.capacity {
        error!(
            "bin {} overflows: {} used of {}",
            bin.id, bin.used_space, bin.capacity
        );
        return false;
    }
    if !approx_eq!(f64, bin.used_space, item_size_sum, ulps = 4) {
        error!(
            "bin {} registers {} used, but its items sum to {}",
            bin.id, bin.used_space, item_size_sum
        );
        return false;
    }
    true
}

/// Checks that every item is placed at most once, and exactly in the bins the problem registers it for.
pub fn problem_matches_solution(bpp: &BPProblem, sol: &BPSolution) -> bool {
    let BPSolution {
        bins,
        time_stamp: _,
    } = sol;

    assert_eq!(bpp.n_used_bins(), bins.len());
    assert_eq!(bpp.n_placed_items(), sol.n_placed_items());

    // Each bin in the solution has an identical counterpart in the problem
    let bins_match = bins.iter().all(|b| bpp.bins[b.id] == *b);

    // No item is placed twice and every placed item is registered as such
    let placed_ids = bins
        .iter()
        .flat_map(|b| b.item_ids.iter().copied())
        .collect_vec();
    let no_duplicates = placed_ids.iter().all_unique();
    let registered = placed_ids.iter().all(|id| bpp.item_placed[*id]);

    bins_match
        && no_duplicates
        && registered
        && bins.iter().all(|b| bin_matches_items(b, &bpp.instance))
}

/// Checks that the bins of a solution contain every item of the instance which fits in a bin exactly once,
/// and that no bin exceeds its capacity.
pub fn solution_is_complete(instance: &BPInstance, sol: &BPSolution) -> bool {
    let placed_ids = sol
        .bins
        .iter()
        .flat_map(|b| b.item_ids.iter().copied())
        .sorted()
        .collect_vec();
    let fittable_ids = instance
        .items
        .iter()
        .filter(|item| item.fits_in(instance.bin_capacity))
        .map(|item| item.id)
        .collect_vec();

    placed_ids == fittable_ids && sol.bins.iter().all(|b| bin_matches_items(b, instance))
}
