use discpack::entities::{BPPlacement, BPProblem, Item};
use log::trace;
use ordered_float::OrderedFloat;

/// Search the bins of the problem for the one with the least free space remaining after placing the item.
/// Bins the item would overflow are skipped, ties go to the bin with the lowest id.
/// Returns `None` if the item fits in none of the bins.
pub fn search(problem: &BPProblem, item: &Item) -> Option<BPPlacement> {
    let best = problem
        .bins
        .iter()
        .filter_map(|bin| {
            let residual = bin.residual(item.size);
            (residual >= 0.0).then_some((bin.id, residual))
        })
        // min_by_key returns the first of several equal minima
        .min_by_key(|(_, residual)| OrderedFloat(*residual));

    if let Some((bin_id, residual)) = best {
        trace!(
            "[OBF] best fit for {} ({}) is bin {} with {} to spare",
            item.tag, item.size, bin_id, residual
        );
    }

    best.map(|(bin_id, _)| BPPlacement {
        bin_id,
        item_id: item.id,
    })
}
