use criterion::{Criterion, black_box, criterion_group, criterion_main};

use repool::client::PoolClient;
use repool::coordinator::PoolCoordinator;
use repool::lifecycle::NoopLifecycle;
use repool::store_in_memory::InMemoryLeaseStore;

fn bench_acquire_release_cycle(c: &mut Criterion) {
    c.bench_function("acquire_release_cycle", |b| {
        b.iter(|| {
            let mut client = PoolClient::new();
            let id = client.acquire("sftp").unwrap();
            client.release("sftp", &id).unwrap();
            black_box(id)
        })
    });
}

fn bench_sweep_1000_abandoned(c: &mut Criterion) {
    c.bench_function("sweep_1000_abandoned", |b| {
        b.iter(|| {
            let mut pool = PoolCoordinator::new(InMemoryLeaseStore::new(), NoopLifecycle);

            for i in 0..1000 {
                pool.acquire("sftp", i).unwrap();
            }

            // Every lock is past its TTL, nothing past its creation TTL.
            black_box(pool.release_all("sftp", 400_000).unwrap())
        })
    });
}

criterion_group!(benches, bench_acquire_release_cycle, bench_sweep_1000_abandoned);
criterion_main!(benches);
