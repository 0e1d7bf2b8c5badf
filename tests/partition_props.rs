//! Partition invariants: coverage, disjointness, balance and determinism.

use proptest::prelude::*;
use vphys::parallel::{par_map_indices, run_ranks, LocalRank};
use vphys::partition::{generate_indices, indices_for, partition_all, Assignment, RemainderPolicy};

fn union_counts(total: i64, loop_size: i64) -> Vec<usize> {
    let mut seen = vec![0usize; loop_size as usize];
    for a in partition_all(total, loop_size, RemainderPolicy::Contiguous).unwrap() {
        for &i in a.indices() {
            assert!(i < loop_size as usize, "index {} out of range for loop_size {}", i, loop_size);
            seen[i] += 1;
        }
    }
    seen
}

#[test]
fn exhaustive_coverage_small_grid() {
    for total in 1..=50i64 {
        for loop_size in 0..=500i64 {
            let seen = union_counts(total, loop_size);
            assert!(
                seen.iter().all(|&c| c == 1),
                "total={} loop_size={} not an exact partition",
                total,
                loop_size
            );
        }
    }
}

#[test]
fn per_rank_calls_agree_with_partition_all() {
    let all = partition_all(7, 45, RemainderPolicy::Contiguous).unwrap();
    for (rank, expected) in all.iter().enumerate() {
        assert_eq!(&generate_indices(7, 45, rank as i64).unwrap(), expected);
        let me = LocalRank::new(rank, 7);
        assert_eq!(&indices_for(&me, 45, RemainderPolicy::Contiguous).unwrap(), expected);
    }
}

#[test]
fn legacy_overlaps_when_base_exceeds_one() {
    // 4 ranks, 10 items: legacy extra indices 4 and 5 collide with rank 2's block
    let all = partition_all(4, 10, RemainderPolicy::Legacy).unwrap();
    assert_eq!(all[0], Assignment::Indices(vec![0, 1, 4]));
    assert_eq!(all[2], Assignment::Indices(vec![4, 5]));
}

#[test]
fn parallel_runner_covers_every_index() {
    let out = par_map_indices(6, 100, RemainderPolicy::Contiguous, |i| i as u64 * 3).unwrap();
    assert_eq!(out.len(), 100);
    assert!(out.iter().enumerate().all(|(i, &v)| v == i as u64 * 3));

    let counts = run_ranks(6, 100, RemainderPolicy::Contiguous, |_, a| a.len()).unwrap();
    assert_eq!(counts.iter().sum::<usize>(), 100);
}

proptest! {
    #[test]
    fn prop_disjoint_and_complete(total in 1i64..200, loop_size in 0i64..5000) {
        let seen = union_counts(total, loop_size);
        prop_assert!(seen.iter().all(|&c| c == 1));
    }

    #[test]
    fn prop_balanced(total in 1i64..100, loop_size in 0i64..5000) {
        prop_assume!(total <= loop_size);
        let sizes: Vec<usize> = partition_all(total, loop_size, RemainderPolicy::Contiguous)
            .unwrap()
            .iter()
            .map(Assignment::len)
            .collect();
        let max = *sizes.iter().max().unwrap();
        let min = *sizes.iter().min().unwrap();
        prop_assert!(max - min <= 1, "sizes {:?}", sizes);
    }

    #[test]
    fn prop_deterministic(total in 1i64..64, loop_size in 0i64..1000, rank_seed in 0usize..64) {
        let rank = (rank_seed as i64) % total;
        let a = generate_indices(total, loop_size, rank).unwrap();
        let b = generate_indices(total, loop_size, rank).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_indices_ascending(total in 1i64..64, loop_size in 0i64..1000) {
        for a in partition_all(total, loop_size, RemainderPolicy::Contiguous).unwrap() {
            prop_assert!(a.indices().windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn prop_no_work_only_when_oversubscribed(total in 1i64..64, loop_size in 0i64..64) {
        for (rank, a) in partition_all(total, loop_size, RemainderPolicy::Contiguous).unwrap().iter().enumerate() {
            prop_assert_eq!(a.is_no_work(), total > loop_size && rank as i64 >= loop_size);
        }
    }

    #[test]
    fn prop_zero_workers_rejected(loop_size in 0i64..1000) {
        prop_assert!(generate_indices(0, loop_size, 0).is_err());
    }
}
