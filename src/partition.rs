use std::ops::Range;

/// Below this many elements per thread, extra threads cost more than they
/// save (C++ Concurrency in Action's rule of thumb for small reductions).
pub const MIN_ELEMENTS_PER_THREAD: usize = 10;

/// Used when the platform cannot report its hardware concurrency.
const FALLBACK_THREADS: usize = 2;

/// How a fold's input is split across worker threads.
///
/// The policy, given `n` elements and a hardware-concurrency hint:
///
/// 1. A hint of 0 (platform unknown) falls back to 2.
/// 2. Inputs smaller than the hint get exactly 1 thread.
/// 3. Otherwise `thread_count = min(n / MIN_ELEMENTS_PER_THREAD, hint)`,
///    clamped to at least 1 so sparse inputs never compute a zero count.
/// 4. `block_size = n / thread_count`, truncating. The division's remainder
///    (`n % thread_count` elements) is absorbed by the final block so every
///    element is summed exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionPlan {
    total_elements: usize,
    thread_count: usize,
    block_size: usize,
}

impl PartitionPlan {
    pub fn new(total_elements: usize, hardware_threads: usize) -> Self {
        let hint = if hardware_threads == 0 {
            FALLBACK_THREADS
        } else {
            hardware_threads
        };
        let thread_count = if total_elements < hint {
            1
        } else {
            (total_elements / MIN_ELEMENTS_PER_THREAD).min(hint).max(1)
        };
        let block_size = total_elements / thread_count;
        Self {
            total_elements,
            thread_count,
            block_size,
        }
    }

    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Elements left over by the truncating division. They belong to the
    /// last block, so coverage tests can assert the edge case directly.
    pub fn remainder(&self) -> usize {
        self.total_elements - self.block_size * self.thread_count
    }

    /// The contiguous, non-overlapping index range for each worker, in
    /// order. Empty input yields no blocks at all.
    pub fn blocks(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        let count = if self.total_elements == 0 {
            0
        } else {
            self.thread_count
        };
        (0..count).map(move |i| {
            let start = i * self.block_size;
            let end = if i + 1 == self.thread_count {
                self.total_elements
            } else {
                start + self.block_size
            };
            start..end
        })
    }
}
