//! Row partitioning for the threaded multiplier.

use std::fmt;

/// Half-open interval `[start, end)` of left-operand rows owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl RowRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for RowRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Splits `row_count` rows into contiguous ranges, one per worker.
///
/// Every worker but the last gets `row_count / worker_count` rows; the
/// last runs to `row_count` and so absorbs the remainder. Empty ranges
/// (more workers than rows) are dropped, so the result may hold fewer
/// than `worker_count` entries.
///
/// The returned ranges are ordered, pairwise disjoint, non-empty, and
/// cover `[0, row_count)` exactly. A `worker_count` of 0 is treated as 1.
///
/// # Example
///
/// ```
/// use matmul_threads::{plan, RowRange};
///
/// let ranges = plan(10, 3);
/// assert_eq!(
///     ranges,
///     vec![
///         RowRange { start: 0, end: 3 },
///         RowRange { start: 3, end: 6 },
///         RowRange { start: 6, end: 10 },
///     ]
/// );
/// ```
pub fn plan(row_count: usize, worker_count: usize) -> Vec<RowRange> {
    let workers = worker_count.max(1);
    let rows_per_worker = row_count / workers;

    (0..workers)
        .map(|tid| {
            let start = tid * rows_per_worker;
            let end = if tid == workers - 1 {
                row_count
            } else {
                start + rows_per_worker
            };
            RowRange { start, end }
        })
        .filter(|r| !r.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_partition(ranges: &[RowRange], row_count: usize) {
        let mut next = 0;
        for r in ranges {
            assert!(r.start < r.end, "empty or inverted range {}", r);
            assert_eq!(r.start, next, "gap or overlap before {}", r);
            next = r.end;
        }
        assert_eq!(next, row_count, "ranges stop short of {}", row_count);
    }

    #[test]
    fn test_even_split() {
        assert_eq!(
            plan(8, 4),
            vec![
                RowRange { start: 0, end: 2 },
                RowRange { start: 2, end: 4 },
                RowRange { start: 4, end: 6 },
                RowRange { start: 6, end: 8 },
            ]
        );
    }

    #[test]
    fn test_remainder_goes_to_last() {
        let ranges = plan(11, 4);
        assert_eq!(ranges.len(), 4);
        assert_eq!(ranges[3], RowRange { start: 6, end: 11 });
        assert_partition(&ranges, 11);
    }

    #[test]
    fn test_more_workers_than_rows() {
        // base is 0, so only the last worker gets rows
        assert_eq!(plan(3, 5), vec![RowRange { start: 0, end: 3 }]);
    }

    #[test]
    fn test_zero_rows() {
        assert!(plan(0, 1).is_empty());
        assert!(plan(0, 8).is_empty());
    }

    #[test]
    fn test_zero_workers_is_one() {
        assert_eq!(plan(5, 0), vec![RowRange { start: 0, end: 5 }]);
    }

    #[test]
    fn test_partition_exhaustive_small() {
        for rows in 0..40 {
            for workers in 1..12 {
                let ranges = plan(rows, workers);
                assert!(ranges.len() <= workers);
                assert_partition(&ranges, rows);
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(RowRange { start: 2, end: 7 }.to_string(), "[2, 7)");
    }
}
