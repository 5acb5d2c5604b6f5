use discpack::entities::BPInstance;

use crate::opt::order::is_descending;

/// Split of the items into oversized and fittable ones, and the number of bins to provision for them.
#[derive(Debug, Clone, PartialEq)]
pub struct BinEstimate {
    /// Items larger than the bin capacity, in placement order. These can never be packed.
    pub oversized: Vec<usize>,
    /// Items that fit in an empty bin, in placement order
    pub fittable: Vec<usize>,
    /// Sum of the sizes of the fittable items
    pub total_size: f64,
    /// Number of bins needed if items could be split: `ceil(total_size / capacity)`
    pub optimum: usize,
    /// `ceil(11/9 * optimum)`, the worst-case ratio of first/best fit decreasing
    /// (Johnson, Demers, Ullman, Garey & Graham, SIAM J. Comput. 3(4), 1974)
    pub worst_case_bound: usize,
    /// Number of bins to allocate, the placement never exceeds this
    pub n_bins: usize,
}

/// Estimates the number of bins required to pack the instance with best fit decreasing.
///
/// `order` must list the items by descending size (see [`item_placement_order`](crate::opt::order::item_placement_order)),
/// so that the oversized items form a prefix of it.
///
/// The 11/9 ratio holds against the true optimum, which can exceed `optimum`
/// (ten items of 2.3 with capacity 4.5 need ten bins, while `ceil(11/9 * 6) = 8`).
/// Best fit never leaves two bins at most half full, so it uses at most `ceil(2 * total_size / capacity)`
/// bins, and never more bins than items. The provisioned number covers both.
pub fn estimate_bins(instance: &BPInstance, order: &[usize]) -> BinEstimate {
    debug_assert!(is_descending(instance, order));
    let capacity = instance.bin_capacity;

    let start_index = order
        .iter()
        .take_while(|id| !instance.item(**id).fits_in(capacity))
        .count();
    let (oversized, fittable) = order.split_at(start_index);

    let total_size = fittable
        .iter()
        .map(|id| instance.item(*id).size)
        .sum::<f64>();
    let optimum = (total_size / capacity).ceil() as usize;
    let worst_case_bound = (11 * optimum).div_ceil(9);
    let any_fit_bound = usize::min(fittable.len(), 2 * optimum);
    let n_bins = usize::max(worst_case_bound, any_fit_bound);

    BinEstimate {
        oversized: oversized.to_vec(),
        fittable: fittable.to_vec(),
        total_size,
        optimum,
        worst_case_bound,
        n_bins,
    }
}
