use crate::entities::{BPInstance, Bin, Item};
use std::collections::HashSet;
use std::time::Instant;

/// Snapshot of [`BPProblem`](crate::entities::BPProblem) at a specific moment.
/// Contains only the bins holding at least one item, in order of their id.
#[derive(Debug, Clone)]
pub struct BPSolution {
    pub bins: Vec<Bin>,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl BPSolution {
    pub fn n_bins(&self) -> usize {
        self.bins.len()
    }

    pub fn n_placed_items(&self) -> usize {
        self.bins.iter().map(|bin| bin.n_items()).sum()
    }

    pub fn density(&self) -> f64 {
        let used = self.bins.iter().map(|bin| bin.used_space).sum::<f64>();
        let capacity = self.bins.iter().map(|bin| bin.capacity).sum::<f64>();
        match capacity > 0.0 {
            true => used / capacity,
            false => 0.0,
        }
    }

    /// The items of each bin, in order of placement
    pub fn bin_items<'a>(
        &'a self,
        instance: &'a BPInstance,
    ) -> impl Iterator<Item = (&'a Bin, Vec<&'a Item>)> + 'a {
        self.bins.iter().map(move |bin| {
            let items = bin.item_ids.iter().map(|id| instance.item(*id)).collect();
            (bin, items)
        })
    }

    /// Items of the instance which are not part of any bin of the solution
    pub fn unplaced_items<'a>(&self, instance: &'a BPInstance) -> Vec<&'a Item> {
        let placed = self
            .bins
            .iter()
            .flat_map(|bin| bin.item_ids.iter().copied())
            .collect::<HashSet<usize>>();
        instance
            .items
            .iter()
            .filter(|item| !placed.contains(&item.id))
            .collect()
    }
}
