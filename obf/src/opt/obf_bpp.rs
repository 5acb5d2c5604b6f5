use std::time::Instant;

use discpack::entities::{BPInstance, BPProblem, BPSolution};
use log::{debug, info, warn};
use thousands::Separable;

use crate::error::OBFError;
use crate::opt::best_fit::search;
use crate::opt::estimate::{BinEstimate, estimate_bins};
use crate::opt::order::item_placement_order;

/// Offline Best Fit (OBF) optimizer for one-dimensional Bin Packing problems.
/// Places the items by descending size, each in the bin where it leaves the least free space.
pub struct OBFOptimizerBP {
    pub instance: BPInstance,
    pub problem: BPProblem,
    pub estimate: BinEstimate,
}

impl OBFOptimizerBP {
    pub fn new(instance: BPInstance) -> Self {
        let order = item_placement_order(&instance);
        let estimate = estimate_bins(&instance, &order);

        for id in &estimate.oversized {
            let item = instance.item(*id);
            warn!(
                "[OBF] item {} ({}) exceeds the bin capacity of {} and is excluded",
                item.tag, item.size, instance.bin_capacity
            );
        }
        info!(
            "[OBF] {} items fit in a bin, total size {}: lower bound of {} bins, worst case {} bins, {} bins provisioned",
            estimate.fittable.len().separate_with_commas(),
            estimate.total_size,
            estimate.optimum,
            estimate.worst_case_bound,
            estimate.n_bins
        );

        let problem = BPProblem::new(instance.clone(), estimate.n_bins);
        Self {
            instance,
            problem,
            estimate,
        }
    }

    pub fn solve(&mut self) -> Result<BPSolution, OBFError> {
        let start = Instant::now();

        for &item_id in &self.estimate.fittable {
            if self.problem.is_placed(item_id) {
                continue;
            }
            let item = self.instance.item(item_id);
            match search(&self.problem, item) {
                Some(placement) => {
                    let bin_id = self.problem.place_item(placement);
                    debug!(
                        "[OBF] placing item {}/{} {} ({}) in bin {}",
                        self.problem.n_placed_items(),
                        self.estimate.fittable.len(),
                        item.tag,
                        item.size,
                        bin_id + 1
                    );
                }
                None => {
                    return Err(OBFError::CapacityInvariantViolation {
                        tag: item.tag.clone(),
                        size: item.size,
                        n_bins: self.estimate.n_bins,
                    });
                }
            }
        }

        let solution = self.problem.save();

        info!(
            "[OBF] optimization finished in {:.3}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );
        info!(
            "[OBF] solution packs {} items in {} bins with a density of {:.3}%",
            solution.n_placed_items().separate_with_commas(),
            solution.n_bins(),
            solution.density() * 100.0
        );
        Ok(solution)
    }
}
