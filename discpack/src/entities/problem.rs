use crate::entities::{BPInstance, BPSolution, Bin};
use crate::util::assertions::{bin_matches_items, problem_matches_solution};
use itertools::Itertools;
use std::time::Instant;

/// Dynamic counterpart of [`BPInstance`].
/// Holds a fixed array of bins, allocated up front, into which the items are placed one by one.
#[derive(Clone, Debug)]
pub struct BPProblem {
    pub instance: BPInstance,
    pub bins: Vec<Bin>,
    /// Whether each item of the instance has been placed in a bin
    pub item_placed: Vec<bool>,
}

impl BPProblem {
    /// Creates a problem with `n_bins` empty bins of the instance's capacity.
    pub fn new(instance: BPInstance, n_bins: usize) -> Self {
        let bins = (0..n_bins)
            .map(|id| Bin::new(id, instance.bin_capacity))
            .collect_vec();
        let item_placed = vec![false; instance.n_items()];

        Self {
            instance,
            bins,
            item_placed,
        }
    }

    /// Places an item according to the provided [`BPPlacement`] in the problem.
    /// Returns the id of the bin the item was placed in.
    pub fn place_item(&mut self, placement: BPPlacement) -> usize {
        let BPPlacement { bin_id, item_id } = placement;
        assert!(
            !self.item_placed[item_id],
            "item {item_id} was already placed"
        );
        let item = self.instance.item(item_id);
        let bin = &mut self.bins[bin_id];
        bin.place_item(item);
        self.item_placed[item_id] = true;

        debug_assert!(bin_matches_items(bin, &self.instance));

        bin_id
    }

    /// Creates a snapshot of the current state of the problem as a [`BPSolution`].
    /// Only bins containing at least one item are part of the solution.
    pub fn save(&self) -> BPSolution {
        let bins = self
            .bins
            .iter()
            .filter(|bin| !bin.is_empty())
            .cloned()
            .collect_vec();

        let solution = BPSolution {
            bins,
            time_stamp: Instant::now(),
        };

        debug_assert!(problem_matches_solution(self, &solution));

        solution
    }

    pub fn is_placed(&self, item_id: usize) -> bool {
        self.item_placed[item_id]
    }

    pub fn n_placed_items(&self) -> usize {
        self.item_placed.iter().filter(|placed| **placed).count()
    }

    /// Number of bins containing at least one item
    pub fn n_used_bins(&self) -> usize {
        self.bins.iter().filter(|bin| !bin.is_empty()).count()
    }

    /// Total size of the placed items divided by the total capacity of the used bins
    pub fn density(&self) -> f64 {
        let used_bins = self.bins.iter().filter(|bin| !bin.is_empty());
        let (used, capacity) = used_bins.fold((0.0, 0.0), |(used, capacity), bin| {
            (used + bin.used_space, capacity + bin.capacity)
        });
        match capacity > 0.0 {
            true => used / capacity,
            false => 0.0,
        }
    }
}

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
/// Encapsulates all required information to place an [`Item`](crate::entities::Item) in a [`BPProblem`].
pub struct BPPlacement {
    /// Which [`Bin`] to place the item in
    pub bin_id: usize,
    /// The id of the [`Item`](crate::entities::Item) to be placed
    pub item_id: usize,
}
