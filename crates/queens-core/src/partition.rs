//! Round-robin split of the permutation index range across workers.

use serde::Serialize;

use crate::conflict::is_accepted;
use crate::factorial::factorial;
use crate::permutation::PermutationDecoder;

/// Indices `rank, rank + workers, rank + 2 * workers, ...` below `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StridePartition {
    rank: usize,
    workers: usize,
    limit: u64,
}

impl StridePartition {
    /// A `workers` count of zero is treated as a single worker.
    pub fn new(rank: usize, workers: usize, limit: u64) -> Self {
        Self {
            rank,
            workers: workers.max(1),
            limit,
        }
    }

    /// Partition of the full `[0, n!)` range for one board size.
    pub fn for_board(board_size: usize, rank: usize, workers: usize) -> Self {
        Self::new(rank, workers, factorial(board_size as u64))
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn indices(&self) -> StrideIndices {
        StrideIndices {
            next: Some(self.rank as u64),
            step: self.workers as u64,
            limit: self.limit,
        }
    }
}

/// Iterator over the indices of one [`StridePartition`].
#[derive(Debug, Clone)]
pub struct StrideIndices {
    next: Option<u64>,
    step: u64,
    limit: u64,
}

impl Iterator for StrideIndices {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let index = self.next.filter(|&index| index < self.limit)?;
        self.next = index.checked_add(self.step);
        Some(index)
    }
}

/// Per-worker result of scanning one partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WorkerTally {
    pub rank: usize,
    pub indices_scanned: u64,
    pub solutions: u64,
}

/// Decodes and checks every index in `partition`, counting accepted boards.
pub fn count_solutions(board_size: usize, partition: &StridePartition) -> WorkerTally {
    let mut decoder = PermutationDecoder::new(board_size);
    let mut tally = WorkerTally {
        rank: partition.rank(),
        ..WorkerTally::default()
    };

    for index in partition.indices() {
        tally.indices_scanned += 1;
        if is_accepted(decoder.decode(index)) {
            tally.solutions += 1;
        }
    }

    tally
}

/// Single-worker scan over the whole index range.
pub fn count_all(board_size: usize) -> u64 {
    count_solutions(board_size, &StridePartition::for_board(board_size, 0, 1)).solutions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_visits_interleaved_indices() {
        let partition = StridePartition::new(1, 3, 10);
        let indices: Vec<u64> = partition.indices().collect();
        assert_eq!(indices, vec![1, 4, 7]);
    }

    #[test]
    fn rank_past_limit_is_empty() {
        let partition = StridePartition::new(5, 8, 2);
        assert_eq!(partition.indices().count(), 0);
    }

    #[test]
    fn zero_workers_falls_back_to_one() {
        let partition = StridePartition::new(0, 0, 4);
        assert_eq!(partition.workers(), 1);
        assert_eq!(partition.indices().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn strides_cover_range_without_overlap() {
        let workers = 4;
        let limit = 23;
        let mut all: Vec<u64> = (0..workers)
            .flat_map(|rank| StridePartition::new(rank, workers, limit).indices())
            .collect();
        all.sort_unstable();
        assert_eq!(all, (0..limit).collect::<Vec<_>>());
    }

    #[test]
    fn tally_counts_scanned_indices() {
        let partition = StridePartition::for_board(4, 2, 5);
        let tally = count_solutions(4, &partition);
        assert_eq!(tally.rank, 2);
        assert_eq!(tally.indices_scanned, 5);
    }

    #[test]
    fn tally_serializes_with_field_names() {
        let tally = WorkerTally {
            rank: 1,
            indices_scanned: 12,
            solutions: 1,
        };
        let json = serde_json::to_value(tally).expect("serialize tally");
        assert_eq!(json["indices_scanned"], 12);
        assert_eq!(json["solutions"], 1);
    }

    #[test]
    fn serial_counts_match_known_values() {
        assert_eq!(count_all(0), 1);
        assert_eq!(count_all(1), 1);
        assert_eq!(count_all(2), 0);
        assert_eq!(count_all(3), 0);
        assert_eq!(count_all(4), 2);
        assert_eq!(count_all(5), 10);
        assert_eq!(count_all(6), 4);
    }
}
