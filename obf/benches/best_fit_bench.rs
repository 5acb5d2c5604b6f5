use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use discpack::io::ext_repr::{ExtBPInstance, ExtItem};
use obf::opt::obf_bpp::OBFOptimizerBP;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

criterion_main!(benches);
criterion_group!(benches, best_fit_bench);

const N_ITEMS: [usize; 3] = [100, 1_000, 5_000];
const BIN_CAPACITY: f64 = 4.5;

/// Benchmark a complete best fit decreasing run for catalogs of increasing size.
/// Item sizes are uniformly distributed up to the bin capacity.
fn best_fit_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_fit_decreasing");
    for n_items in N_ITEMS {
        let mut rng = SmallRng::seed_from_u64(0);
        let ext_instance = ExtBPInstance {
            name: format!("uniform_{n_items}"),
            bin_capacity: BIN_CAPACITY,
            items: (0..n_items)
                .map(|id| ExtItem {
                    id: id as u64,
                    tag: format!("file_{id}"),
                    size: rng.random_range(0.01..BIN_CAPACITY),
                })
                .collect(),
        };
        let instance = discpack::io::import(&ext_instance).expect("valid instance");

        group.throughput(criterion::Throughput::Elements(n_items as u64));
        group.bench_function(BenchmarkId::from_parameter(n_items), |b| {
            b.iter(|| {
                OBFOptimizerBP::new(instance.clone())
                    .solve()
                    .expect("enough bins provisioned")
            })
        });
    }
    group.finish();
}
