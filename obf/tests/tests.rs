#[cfg(test)]
mod tests {
    use std::path::Path;

    use discpack::entities::{BPInstance, BPSolution};
    use discpack::io::ext_repr::{ExtBPInstance, ExtItem};
    use discpack::util::assertions;
    use float_cmp::approx_eq;
    use obf::config::OBFConfig;
    use obf::io::catalog;
    use obf::io::report::{Report, ReportMeta, report_groups};
    use obf::opt::estimate::estimate_bins;
    use obf::opt::obf_bpp::OBFOptimizerBP;
    use obf::opt::order::{is_descending, item_placement_order};
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    const CAPACITY: f64 = 4.5;
    const N_RANDOM_INSTANCES: usize = 200;

    fn instance(bin_capacity: f64, items: &[(&str, f64)]) -> BPInstance {
        let ext_instance = ExtBPInstance {
            name: "test".to_string(),
            bin_capacity,
            items: items
                .iter()
                .enumerate()
                .map(|(id, (tag, size))| ExtItem {
                    id: id as u64,
                    tag: tag.to_string(),
                    size: *size,
                })
                .collect(),
        };
        discpack::io::import(&ext_instance).unwrap()
    }

    fn read_instance(path: &str) -> BPInstance {
        let ext_instance = catalog::read_catalog(Path::new(path), CAPACITY).unwrap();
        discpack::io::import(&ext_instance).unwrap()
    }

    fn solve(instance: &BPInstance) -> BPSolution {
        OBFOptimizerBP::new(instance.clone()).solve().unwrap()
    }

    fn bin_tags(instance: &BPInstance, solution: &BPSolution) -> Vec<Vec<String>> {
        solution
            .bin_items(instance)
            .map(|(_, items)| items.iter().map(|item| item.tag.clone()).collect())
            .collect()
    }

    fn random_instance(rng: &mut SmallRng) -> BPInstance {
        let n_items = rng.random_range(0..60);
        let max_size = match rng.random_bool(0.5) {
            true => CAPACITY * 1.2,
            false => CAPACITY * 0.6,
        };
        let items = (0..n_items)
            .map(|i| (format!("item_{i}"), rng.random_range(0.01..max_size)))
            .collect::<Vec<_>>();
        let items = items
            .iter()
            .map(|(tag, size)| (tag.as_str(), *size))
            .collect::<Vec<_>>();
        instance(CAPACITY, &items)
    }

    #[test]
    fn scenario_a_best_fit_with_lowest_index_tie_break() {
        let instance = instance(CAPACITY, &[("a", 3.0), ("b", 3.0), ("c", 2.0), ("d", 1.5)]);
        let solution = solve(&instance);

        assert_eq!(
            bin_tags(&instance, &solution),
            vec![vec!["a", "d"], vec!["b"], vec!["c"]]
        );
        let used = solution.bins.iter().map(|b| b.used_space).collect::<Vec<_>>();
        assert_eq!(used, vec![4.5, 3.0, 2.0]);
    }

    #[test]
    fn scenario_b_oversized_item_is_excluded() {
        let instance = instance(CAPACITY, &[("small", 1.0), ("huge", 5.0)]);
        let order = item_placement_order(&instance);
        let estimate = estimate_bins(&instance, &order);
        assert_eq!(estimate.oversized, vec![1]);
        assert_eq!(estimate.fittable, vec![0]);

        let solution = solve(&instance);
        assert_eq!(bin_tags(&instance, &solution), vec![vec!["small"]]);
        let excluded = solution.unplaced_items(&instance);
        assert_eq!(excluded.len(), 1);
        assert_eq!(excluded[0].tag, "huge");

        let meta = ReportMeta::new(&OBFConfig::default());
        let report = Report::new(&meta, &instance, &solution).to_string();
        assert!(report.contains("Excluded"));
        assert!(report.contains("   Tag: huge\n   Size: 5\n"));
    }

    #[test]
    fn scenario_c_empty_instance_packs_nothing() {
        let instance = read_instance("../assets/empty.txt");
        let order = item_placement_order(&instance);
        let estimate = estimate_bins(&instance, &order);
        assert_eq!(estimate.optimum, 0);
        assert_eq!(estimate.n_bins, 0);

        let solution = solve(&instance);
        assert_eq!(solution.n_bins(), 0);

        let meta = ReportMeta::new(&OBFConfig::default());
        let report = Report::new(&meta, &instance, &solution).to_string();
        assert!(report.starts_with("========== Created with OfflineBestFit =========="));
        assert!(!report.contains("Bin 1"));
        assert!(!report.contains("Tag:"));
    }

    #[test_case("../assets/scenario_a.txt", 3; "scenario_a")]
    #[test_case("../assets/movies.txt", 8; "movies")]
    #[test_case("../assets/oversized.txt", 1; "oversized")]
    fn instance_is_packed_within_bounds(path: &str, expected_n_bins: usize) {
        let instance = read_instance(path);
        let order = item_placement_order(&instance);
        let estimate = estimate_bins(&instance, &order);
        let solution = solve(&instance);

        assert!(assertions::solution_is_complete(&instance, &solution));
        assert_eq!(solution.n_bins(), expected_n_bins);
        assert!(solution.n_bins() >= estimate.optimum);
        assert!(solution.n_bins() <= estimate.worst_case_bound);
    }

    #[test]
    fn bins_exceeding_the_worst_case_ratio_are_provisioned() {
        let items = vec![("x", 2.3); 10];
        let instance = instance(CAPACITY, &items);
        let order = item_placement_order(&instance);
        let estimate = estimate_bins(&instance, &order);
        assert_eq!(estimate.optimum, 6);
        assert_eq!(estimate.worst_case_bound, 8);
        assert_eq!(estimate.n_bins, 10);

        let solution = solve(&instance);
        assert_eq!(solution.n_bins(), 10);
        assert!(assertions::solution_is_complete(&instance, &solution));
    }

    #[test]
    fn worst_case_bound_is_exact_for_multiples_of_nine() {
        let items = vec![("full", CAPACITY); 45];
        let instance = instance(CAPACITY, &items);
        let order = item_placement_order(&instance);
        let estimate = estimate_bins(&instance, &order);
        assert_eq!(estimate.optimum, 45);
        assert_eq!(estimate.worst_case_bound, 55);
        assert_eq!(estimate.n_bins, 55);

        let solution = solve(&instance);
        assert_eq!(solution.n_bins(), 45);
    }

    #[test]
    fn placement_order_is_descending_and_stable() {
        let instance = instance(
            CAPACITY,
            &[("a", 1.0), ("b", 2.0), ("c", 1.0), ("d", 3.0), ("e", 2.0)],
        );
        let order = item_placement_order(&instance);
        assert_eq!(order, vec![3, 1, 4, 0, 2]);
        assert!(is_descending(&instance, &order));
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..20 {
            let instance = random_instance(&mut rng);
            let order = item_placement_order(&instance);
            let sorted_items = order
                .iter()
                .map(|id| {
                    let item = instance.item(*id);
                    (item.tag.as_str(), item.size)
                })
                .collect::<Vec<_>>();
            let sorted_instance = self::instance(CAPACITY, &sorted_items);

            let identity = (0..sorted_instance.n_items()).collect::<Vec<_>>();
            assert_eq!(item_placement_order(&sorted_instance), identity);
        }
    }

    #[test]
    fn packing_is_deterministic() {
        let instance = read_instance("../assets/movies.txt");
        let first = solve(&instance);
        let second = solve(&instance);
        assert_eq!(first.bins, second.bins);
    }

    #[test]
    fn solving_twice_does_not_place_items_again() {
        let instance = read_instance("../assets/scenario_a.txt");
        let mut optimizer = OBFOptimizerBP::new(instance.clone());
        let first = optimizer.solve().unwrap();
        let second = optimizer.solve().unwrap();
        assert_eq!(first.bins, second.bins);
    }

    #[test]
    fn random_instances_never_overflow_or_run_out_of_bins() {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..N_RANDOM_INSTANCES {
            let instance = random_instance(&mut rng);
            let order = item_placement_order(&instance);
            let estimate = estimate_bins(&instance, &order);

            let mut optimizer = OBFOptimizerBP::new(instance.clone());
            let solution = optimizer.solve().expect("estimate should provision enough bins");

            assert!(assertions::solution_is_complete(&instance, &solution));
            assert!(assertions::problem_matches_solution(
                &optimizer.problem,
                &solution
            ));
            assert!(solution.n_bins() <= estimate.n_bins);
            assert!(solution.n_bins() >= estimate.optimum);
            assert!(
                solution
                    .bins
                    .iter()
                    .all(|bin| bin.used_space <= bin.capacity)
            );
            // at most one bin is filled to half its capacity or less
            let half_empty = solution
                .bins
                .iter()
                .filter(|bin| bin.used_space <= bin.capacity / 2.0)
                .count();
            assert!(half_empty <= 1);
            // used bins form a prefix of the provisioned bins
            assert!(solution.bins.iter().enumerate().all(|(i, bin)| bin.id == i));
            // no size is lost or duplicated
            let packed_size = solution.bins.iter().map(|bin| bin.used_space).sum::<f64>();
            assert!(approx_eq!(
                f64,
                packed_size,
                estimate.total_size,
                epsilon = 1e-9
            ));
        }
    }

    #[test]
    fn report_lists_one_item_per_entry() {
        let instance = read_instance("../assets/scenario_a.txt");
        let solution = solve(&instance);

        let groups = report_groups(&instance, &solution);
        let labels = groups.iter().map(|g| g.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Bin 1", "Bin 2", "Bin 3"]);
        assert_eq!(groups[0].items, vec![("a", 3.0), ("d", 1.5)]);

        let config = OBFConfig {
            author: Some("Zoltan".to_string()),
            ..OBFConfig::default()
        };
        let meta = ReportMeta::new(&config);
        let report = Report::new(&meta, &instance, &solution).to_string();
        assert!(report.contains("Author: Zoltan"));
        assert!(report.contains(&format!("Version: {}", obf::VERSION)));
        assert!(report.contains("\nBin 1\n\n   Tag: a\n   Size: 3\n   Tag: d\n   Size: 1.5\n"));
        assert!(report.contains("\nBin 3\n\n   Tag: c\n   Size: 2\n"));
        assert!(!report.contains("Excluded"));
        for line in report.lines().take(7) {
            assert_eq!(line.chars().count(), 49, "header line {line:?}");
        }
    }
}
