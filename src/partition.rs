//! Loop-index partitioning across parallel ranks.
//!
//! Every rank evaluates the same formula locally, so the partition is
//! agreed on without any communication. For fixed inputs the result is
//! deterministic and the union over all ranks covers `0..loop_size`
//! exactly once (under the default remainder policy).

use serde::Serialize;

use crate::error::{Result, VphysError};
use crate::parallel::RankSource;

/// How the leftover `loop_size % total_workers` indices are numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RemainderPolicy {
    /// Extra index for rank `r` is `total_workers * base + r`, continuing
    /// after the last base block.
    #[default]
    Contiguous,
    /// Extra index for rank `r` is `total_workers + r`. Reproduces older
    /// runs bit for bit. Only a true partition when `base == 1`.
    Legacy,
}

/// Indices assigned to one rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Assignment {
    Indices(Vec<usize>),
    /// More ranks than work items and this rank got nothing.
    NoWork,
}

impl Assignment {
    pub fn is_no_work(&self) -> bool {
        matches!(self, Assignment::NoWork)
    }

    /// Assigned indices; empty for `NoWork`.
    pub fn indices(&self) -> &[usize] {
        match self {
            Assignment::Indices(v) => v,
            Assignment::NoWork => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.indices().len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices().is_empty()
    }

    pub fn into_vec(self) -> Vec<usize> {
        match self {
            Assignment::Indices(v) => v,
            Assignment::NoWork => Vec::new(),
        }
    }
}

/// Validated `(total_workers, loop_size, policy)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partitioner {
    total_workers: usize,
    loop_size: usize,
    policy: RemainderPolicy,
}

impl Partitioner {
    pub fn new(total_workers: i64, loop_size: i64, policy: RemainderPolicy) -> Result<Self> {
        if total_workers <= 0 {
            return Err(VphysError::invalid(format!(
                "total_workers must be positive, got {}",
                total_workers
            )));
        }
        if loop_size < 0 {
            return Err(VphysError::invalid(format!(
                "loop_size must be non-negative, got {}",
                loop_size
            )));
        }
        if policy == RemainderPolicy::Legacy {
            tracing::warn!(
                total_workers,
                loop_size,
                "legacy remainder numbering selected; indices may overlap when loop_size >= 2 * total_workers"
            );
        }
        Ok(Self {
            total_workers: to_usize(total_workers, "total_workers")?,
            loop_size: to_usize(loop_size, "loop_size")?,
            policy,
        })
    }

    pub fn total_workers(&self) -> usize {
        self.total_workers
    }

    pub fn loop_size(&self) -> usize {
        self.loop_size
    }

    pub fn policy(&self) -> RemainderPolicy {
        self.policy
    }

    /// Number of indices every rank gets before remainder distribution.
    pub fn block_size(&self) -> usize {
        if self.total_workers <= self.loop_size {
            self.loop_size / self.total_workers
        } else {
            0
        }
    }

    /// Assignment for `rank`. Errors if `rank` is outside `[0, total_workers)`.
    pub fn assignment(&self, rank: i64) -> Result<Assignment> {
        match usize::try_from(rank) {
            Ok(r) if r < self.total_workers => Ok(self.assign(r)),
            _ => Err(VphysError::invalid(format!(
                "rank {} outside [0, {})",
                rank, self.total_workers
            ))),
        }
    }

    /// Assignments for every rank, ordered by rank.
    ///
    /// Errors if one entry per rank cannot be allocated. Use
    /// [`Partitioner::assignment`] to walk ranks one at a time instead.
    pub fn all(&self) -> Result<Vec<Assignment>> {
        let mut out = Vec::new();
        out.try_reserve_exact(self.total_workers).map_err(|e| {
            VphysError::invalid(format!(
                "cannot hold assignments for {} ranks: {}",
                self.total_workers, e
            ))
        })?;
        out.extend((0..self.total_workers).map(|rank| self.assign(rank)));
        Ok(out)
    }

    fn assign(&self, rank: usize) -> Assignment {
        let n = self.total_workers;

        if n > self.loop_size {
            return if rank < self.loop_size {
                Assignment::Indices(vec![rank])
            } else {
                Assignment::NoWork
            };
        }

        let base = self.loop_size / n;
        let remainder = self.loop_size % n;
        let start = rank * base;
        let mut indices: Vec<usize> = (start..start + base).collect();

        if rank < remainder {
            let extra = match self.policy {
                RemainderPolicy::Contiguous => n * base + rank,
                RemainderPolicy::Legacy => n + rank,
            };
            indices.push(extra);
        }

        Assignment::Indices(indices)
    }
}

fn to_usize(value: i64, what: &str) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| VphysError::invalid(format!("{} {} does not fit in usize", what, value)))
}

/// Indices for `rank` under the default contiguous remainder policy.
pub fn generate_indices(total_workers: i64, loop_size: i64, rank: i64) -> Result<Assignment> {
    generate_indices_with(total_workers, loop_size, rank, RemainderPolicy::default())
}

pub fn generate_indices_with(
    total_workers: i64,
    loop_size: i64,
    rank: i64,
    policy: RemainderPolicy,
) -> Result<Assignment> {
    Partitioner::new(total_workers, loop_size, policy)?.assignment(rank)
}

/// Indices for the participant described by `source`.
pub fn indices_for<R: RankSource + ?Sized>(
    source: &R,
    loop_size: i64,
    policy: RemainderPolicy,
) -> Result<Assignment> {
    let size = i64::try_from(source.size())
        .map_err(|_| VphysError::invalid("total_workers does not fit in i64"))?;
    let rank = i64::try_from(source.rank())
        .map_err(|_| VphysError::invalid("rank does not fit in i64"))?;
    generate_indices_with(size, loop_size, rank, policy)
}

/// Every rank's assignment, ordered by rank.
pub fn partition_all(
    total_workers: i64,
    loop_size: i64,
    policy: RemainderPolicy,
) -> Result<Vec<Assignment>> {
    Partitioner::new(total_workers, loop_size, policy)?.all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parallel::LocalRank;

    fn idx(total: i64, loop_size: i64, rank: i64) -> Assignment {
        generate_indices(total, loop_size, rank).unwrap()
    }

    #[test]
    fn test_more_workers_than_work() {
        assert_eq!(idx(5, 3, 0), Assignment::Indices(vec![0]));
        assert_eq!(idx(5, 3, 1), Assignment::Indices(vec![1]));
        assert_eq!(idx(5, 3, 2), Assignment::Indices(vec![2]));
        assert_eq!(idx(5, 3, 3), Assignment::NoWork);
        assert_eq!(idx(5, 3, 4), Assignment::NoWork);
    }

    #[test]
    fn test_exact_divisor() {
        assert_eq!(idx(4, 8, 0), Assignment::Indices(vec![0, 1]));
        assert_eq!(idx(4, 8, 1), Assignment::Indices(vec![2, 3]));
        assert_eq!(idx(4, 8, 2), Assignment::Indices(vec![4, 5]));
        assert_eq!(idx(4, 8, 3), Assignment::Indices(vec![6, 7]));
    }

    #[test]
    fn test_zero_loop_size() {
        for rank in 0..3 {
            let a = idx(3, 0, rank);
            assert!(a.is_empty());
            assert!(a.is_no_work());
        }
    }

    #[test]
    fn test_remainder_contiguous() {
        // 10 items over 4 ranks: base 2, remainder 2
        assert_eq!(idx(4, 10, 0), Assignment::Indices(vec![0, 1, 8]));
        assert_eq!(idx(4, 10, 1), Assignment::Indices(vec![2, 3, 9]));
        assert_eq!(idx(4, 10, 2), Assignment::Indices(vec![4, 5]));
        assert_eq!(idx(4, 10, 3), Assignment::Indices(vec![6, 7]));
    }

    #[test]
    fn test_remainder_legacy() {
        let a = generate_indices_with(4, 10, 0, RemainderPolicy::Legacy).unwrap();
        assert_eq!(a, Assignment::Indices(vec![0, 1, 4]));
        let b = generate_indices_with(4, 10, 1, RemainderPolicy::Legacy).unwrap();
        assert_eq!(b, Assignment::Indices(vec![2, 3, 5]));
    }

    #[test]
    fn test_legacy_matches_contiguous_when_base_is_one() {
        for total in 1..20i64 {
            for loop_size in total..(2 * total) {
                let a = partition_all(total, loop_size, RemainderPolicy::Legacy).unwrap();
                let b = partition_all(total, loop_size, RemainderPolicy::Contiguous).unwrap();
                assert_eq!(a, b, "total={} loop_size={}", total, loop_size);
            }
        }
    }

    #[test]
    fn test_zero_workers_is_invalid() {
        for loop_size in [0, 1, 10] {
            let err = generate_indices(0, loop_size, 0).unwrap_err();
            assert!(matches!(err, VphysError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_negative_inputs_are_invalid() {
        assert!(matches!(generate_indices(-1, 5, 0), Err(VphysError::InvalidArgument(_))));
        assert!(matches!(generate_indices(2, -5, 0), Err(VphysError::InvalidArgument(_))));
        assert!(matches!(generate_indices(2, 5, -1), Err(VphysError::InvalidArgument(_))));
    }

    #[test]
    fn test_rank_out_of_range() {
        let err = generate_indices(3, 9, 3).unwrap_err();
        assert!(err.to_string().contains("rank 3"));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_huge_worker_count_is_error() {
        let err = partition_all(i64::MAX, 0, RemainderPolicy::Contiguous).unwrap_err();
        assert!(matches!(err, VphysError::InvalidArgument(_)));

        // single-rank queries still work at that size
        let p = Partitioner::new(i64::MAX, 0, RemainderPolicy::Contiguous).unwrap();
        assert!(p.assignment(i64::MAX - 1).unwrap().is_no_work());
        assert!(p.assignment(7).unwrap().is_no_work());
    }

    #[test]
    fn test_to_usize() {
        assert_eq!(to_usize(0, "x").unwrap(), 0);
        assert_eq!(to_usize(42, "x").unwrap(), 42);
        let err = to_usize(-3, "loop_size").unwrap_err();
        assert!(matches!(err, VphysError::InvalidArgument(_)));
        assert!(err.to_string().contains("loop_size -3"));
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn test_worker_count_wider_than_usize() {
        let err = Partitioner::new(1 << 32, 10, RemainderPolicy::Contiguous).unwrap_err();
        assert!(matches!(err, VphysError::InvalidArgument(_)));
        let p = Partitioner::new(4, 10, RemainderPolicy::Contiguous).unwrap();
        assert!(p.assignment(1 << 32).is_err());
    }

    #[test]
    fn test_block_size() {
        let p = Partitioner::new(4, 10, RemainderPolicy::Contiguous).unwrap();
        assert_eq!(p.block_size(), 2);
        let q = Partitioner::new(8, 3, RemainderPolicy::Contiguous).unwrap();
        assert_eq!(q.block_size(), 0);
    }

    #[test]
    fn test_indices_for_rank_source() {
        let me = LocalRank::new(1, 4);
        let a = indices_for(&me, 8, RemainderPolicy::Contiguous).unwrap();
        assert_eq!(a.indices(), &[2, 3]);
    }

    #[test]
    fn test_into_vec_no_work() {
        assert!(Assignment::NoWork.into_vec().is_empty());
        assert_eq!(Assignment::Indices(vec![4, 5]).into_vec(), vec![4, 5]);
    }
}
