use crate::entities::{BPInstance, BPSolution, Item};
use crate::io::ext_repr::{ExtBPSolution, ExtBin, ExtItem};
use std::time::Instant;

/// Exports a solution out of the library
pub fn export(instance: &BPInstance, solution: &BPSolution, epoch: Instant) -> ExtBPSolution {
    let bins = solution
        .bin_items(instance)
        .map(|(bin, items)| ExtBin {
            id: bin.id as u64,
            used_space: bin.used_space,
            items: items.into_iter().map(export_item).collect(),
        })
        .collect();

    ExtBPSolution {
        n_bins: solution.n_bins(),
        bins,
        excluded: solution
            .unplaced_items(instance)
            .into_iter()
            .map(export_item)
            .collect(),
        density: solution.density(),
        run_time_sec: solution
            .time_stamp
            .saturating_duration_since(epoch)
            .as_secs(),
    }
}

pub fn export_item(item: &Item) -> ExtItem {
    ExtItem {
        id: item.id as u64,
        tag: item.tag.clone(),
        size: item.size,
    }
}
