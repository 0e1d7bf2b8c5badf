/// In-process parallel execution over partitioned loop indices.

use rayon::prelude::*;

use crate::error::Result;
use crate::partition::{Assignment, Partitioner, RemainderPolicy};

/// Answers "which participant am I, and how many are there?".
pub trait RankSource {
    fn rank(&self) -> usize;
    fn size(&self) -> usize;
}

/// A fixed rank identity, e.g. read from a launcher's environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalRank {
    rank: usize,
    size: usize,
}

impl LocalRank {
    pub fn new(rank: usize, size: usize) -> Self {
        Self { rank, size }
    }
}

impl RankSource for LocalRank {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.size
    }
}

/// Run `f` once per rank on the rayon pool. Results are ordered by rank.
///
/// Ranks with [`Assignment::NoWork`] still invoke `f`; the callback decides
/// whether to skip.
pub fn run_ranks<T, F>(
    total_workers: i64,
    loop_size: i64,
    policy: RemainderPolicy,
    f: F,
) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(usize, &Assignment) -> T + Sync + Send,
{
    let partitioner = Partitioner::new(total_workers, loop_size, policy)?;
    let assignments = partitioner.all()?;
    tracing::debug!(
        total_workers = partitioner.total_workers(),
        loop_size = partitioner.loop_size(),
        "dispatching ranks"
    );

    Ok(assignments
        .par_iter()
        .enumerate()
        .map(|(rank, assignment)| f(rank, assignment))
        .collect())
}

/// Map `f` over every loop index, one rayon task per rank.
/// Results are ordered by index.
pub fn par_map_indices<T, F>(
    total_workers: i64,
    loop_size: i64,
    policy: RemainderPolicy,
    f: F,
) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    let per_rank = run_ranks(total_workers, loop_size, policy, |_, assignment| {
        assignment
            .indices()
            .iter()
            .map(|&i| (i, f(i)))
            .collect::<Vec<_>>()
    })?;

    let mut pairs: Vec<(usize, T)> = per_rank.into_iter().flatten().collect();
    pairs.sort_by_key(|(i, _)| *i);
    Ok(pairs.into_iter().map(|(_, v)| v).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VphysError;

    #[test]
    fn test_local_rank() {
        let r = LocalRank::new(2, 8);
        assert_eq!(r.rank(), 2);
        assert_eq!(r.size(), 8);
    }

    #[test]
    fn test_run_ranks_ordered() {
        let sizes = run_ranks(4, 10, RemainderPolicy::Contiguous, |rank, a| (rank, a.len())).unwrap();
        assert_eq!(sizes, vec![(0, 3), (1, 3), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_run_ranks_sees_no_work() {
        let flags = run_ranks(5, 3, RemainderPolicy::Contiguous, |_, a| a.is_no_work()).unwrap();
        assert_eq!(flags, vec![false, false, false, true, true]);
    }

    #[test]
    fn test_run_ranks_invalid() {
        let err = run_ranks(0, 3, RemainderPolicy::Contiguous, |_, _| ()).unwrap_err();
        assert!(matches!(err, VphysError::InvalidArgument(_)));
    }

    #[test]
    fn test_run_ranks_too_many_workers() {
        let err = run_ranks(i64::MAX, 0, RemainderPolicy::Contiguous, |_, _| ()).unwrap_err();
        assert!(matches!(err, VphysError::InvalidArgument(_)));
    }

    #[test]
    fn test_par_map_indices() {
        let squares = par_map_indices(3, 11, RemainderPolicy::Contiguous, |i| i * i).unwrap();
        let expected: Vec<usize> = (0..11).map(|i| i * i).collect();
        assert_eq!(squares, expected);
    }

    #[test]
    fn test_par_map_indices_empty() {
        let out = par_map_indices(4, 0, RemainderPolicy::Contiguous, |i| i).unwrap();
        assert!(out.is_empty());
    }
}
