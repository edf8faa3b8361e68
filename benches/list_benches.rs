use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use linear_collections::{Deque, DoublyLinkedList, Queue, SinglyLinkedList, Stack};
use rand::Rng;
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn append_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("singly", size), |b| {
            b.iter(|| {
                let mut list = SinglyLinkedList::new();
                for i in 0..size {
                    list.append(black_box(i));
                }
                list
            })
        });

        group.bench_function(BenchmarkId::new("doubly", size), |b| {
            b.iter(|| {
                let mut list = DoublyLinkedList::new();
                for i in 0..size {
                    list.append(black_box(i));
                }
                list
            })
        });
    }

    group.finish();
}

// The interesting comparison: singly pop walks to the new tail, doubly pop
// follows the back-pointer.
fn pop_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("singly", size), |b| {
            b.iter_with_setup(
                || (0..size).collect::<SinglyLinkedList<usize>>(),
                |mut list| {
                    while let Some(value) = list.pop() {
                        black_box(value);
                    }
                },
            )
        });

        group.bench_function(BenchmarkId::new("doubly", size), |b| {
            b.iter_with_setup(
                || (0..size).collect::<DoublyLinkedList<usize>>(),
                |mut list| {
                    while let Some(value) = list.pop() {
                        black_box(value);
                    }
                },
            )
        });
    }

    group.finish();
}

fn iteration_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let singly: SinglyLinkedList<usize> = (0..size).collect();
        let doubly: DoublyLinkedList<usize> = (0..size).collect();

        group.bench_function(BenchmarkId::new("singly", size), |b| {
            b.iter(|| singly.iter().sum::<usize>())
        });
        group.bench_function(BenchmarkId::new("doubly", size), |b| {
            b.iter(|| doubly.iter().sum::<usize>())
        });
        group.bench_function(BenchmarkId::new("doubly_rev", size), |b| {
            b.iter(|| doubly.iter().rev().sum::<usize>())
        });
    }

    group.finish();
}

fn adapter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapters");
    let size = 1_000;
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("stack_push_pop", |b| {
        b.iter(|| {
            let mut stack = Stack::new();
            for i in 0..size {
                stack.push(black_box(i));
            }
            while stack.pop().is_some() {}
        })
    });

    group.bench_function("queue_enqueue_dequeue", |b| {
        b.iter(|| {
            let mut queue = Queue::new();
            for i in 0..size {
                queue.enqueue(black_box(i));
            }
            while queue.dequeue().is_some() {}
        })
    });

    group.bench_function("deque_mixed_ends", |b| {
        let mut rng = rand::rng();
        b.iter(|| {
            let mut deque = Deque::new();
            for i in 0..size {
                if rng.random_range(0..2) == 0 {
                    deque.append(black_box(i));
                } else {
                    deque.prepend(black_box(i));
                }
            }
            while deque.pop().is_some() {}
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    append_benchmark,
    pop_benchmark,
    iteration_benchmark,
    adapter_benchmark
);
criterion_main!(benches);
