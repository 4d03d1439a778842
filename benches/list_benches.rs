use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use guarded_list::GuardedList;
use rand::Rng;
use std::hint::black_box;
use std::sync::{Arc, Barrier};
use std::thread;

const OPS: usize = 10_000;
const SEED_LEN: usize = 256;

// Enum to define the workload mix
enum Workload {
    WriteHeavy, // 80% mutation, 20% reads
    ReadHeavy,  // 20% mutation, 80% reads
    Mixed,      // 50% mutation, 50% reads
}

impl Workload {
    fn write_ratio(&self) -> u32 {
        match self {
            Workload::WriteHeavy => 80,
            Workload::ReadHeavy => 20,
            Workload::Mixed => 50,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Workload::WriteHeavy => "write_heavy",
            Workload::ReadHeavy => "read_heavy",
            Workload::Mixed => "mixed",
        }
    }
}

fn guarded_list_benchmark(c: &mut Criterion, threads: usize, workload: Workload) {
    let mut group = c.benchmark_group(format!("GuardedList_{}_threads", threads));
    let write_ratio = workload.write_ratio();

    let list: Arc<GuardedList<u64>> = Arc::new(GuardedList::new());

    group.throughput(Throughput::Elements(OPS as u64));

    group.bench_function(BenchmarkId::new(workload.name(), OPS), |b| {
        b.iter_with_setup(
            || {
                list.clear();
                for i in 0..SEED_LEN {
                    list.insert(i as u64, i as isize);
                }
                (Arc::clone(&list), Arc::new(Barrier::new(threads)))
            },
            |(list, barrier)| {
                thread::scope(|s| {
                    for _ in 0..threads {
                        let list = Arc::clone(&list);
                        let barrier = Arc::clone(&barrier);

                        s.spawn(move || {
                            let mut rng = rand::rng();
                            barrier.wait();
                            for _ in 0..OPS / threads {
                                let roll: u32 = rng.random_range(0..100);
                                let position = rng.random_range(0..SEED_LEN) as isize;

                                if roll < write_ratio {
                                    if roll % 2 == 0 {
                                        list.insert(rng.random_range(0..100), position);
                                    } else {
                                        black_box(list.erase(position));
                                    }
                                } else {
                                    black_box(list.find(&rng.random_range(0..100)));
                                }
                            }
                        });
                    }
                });
            },
        );
    });

    group.finish();
}

fn guarded_list_small_pressure(c: &mut Criterion) {
    guarded_list_benchmark(c, 2, Workload::Mixed);
    guarded_list_benchmark(c, 2, Workload::ReadHeavy);
    guarded_list_benchmark(c, 2, Workload::WriteHeavy);
}

fn guarded_list_medium_pressure(c: &mut Criterion) {
    guarded_list_benchmark(c, 4, Workload::Mixed);
    guarded_list_benchmark(c, 4, Workload::ReadHeavy);
    guarded_list_benchmark(c, 4, Workload::WriteHeavy);
}

fn guarded_list_high_pressure(c: &mut Criterion) {
    guarded_list_benchmark(c, 8, Workload::Mixed);
    guarded_list_benchmark(c, 8, Workload::ReadHeavy);
    guarded_list_benchmark(c, 8, Workload::WriteHeavy);
}

criterion_group!(
    benches,
    guarded_list_small_pressure,
    guarded_list_medium_pressure,
    guarded_list_high_pressure
);
criterion_main!(benches);
