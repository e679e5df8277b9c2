use std::ops::AddAssign;
use std::thread;

use crate::error::FoldError;
use crate::fold::sequential_fold;
use crate::partition::PartitionPlan;

/// Fold a slice in parallel across statically-partitioned blocks.
///
/// Queries the machine's hardware concurrency on every call; see
/// [`parallel_fold_with_hint`] for the partitioning policy and the rest of
/// the contract. `T::default()` must be the additive identity (it seeds each
/// worker's slot).
pub fn parallel_fold<T>(items: &[T], initial: T) -> Result<T, FoldError>
where
    T: Copy + AddAssign + Default + Send + Sync,
{
    parallel_fold_with_hint(items, initial, num_cpus::get())
}

/// [`parallel_fold`] with the hardware-concurrency hint supplied by the
/// caller. A hint of 0 means the platform could not report one and falls
/// back to 2 threads.
///
/// Each worker borrows one block of `items` and exactly one `&mut` slot, so
/// the compiler rules out aliased writes; the thread scope's join is the
/// only synchronization point. Once every worker has joined, the partial
/// sums are combined with [`sequential_fold`] starting from `initial`, so
/// the result matches the sequential baseline for any initial value.
///
/// A worker whose `+=` panics is reported as
/// [`FoldError::WorkerPanicked`] — after all other workers have joined —
/// rather than being silently dropped.
pub fn parallel_fold_with_hint<T>(
    items: &[T],
    initial: T,
    hardware_threads: usize,
) -> Result<T, FoldError>
where
    T: Copy + AddAssign + Default + Send + Sync,
{
    if items.is_empty() {
        return Ok(initial);
    }

    let plan = PartitionPlan::new(items.len(), hardware_threads);

    // Sized once, before any spawn. Workers hold &mut references into this
    // vector, so it must never grow or reallocate while they run.
    let mut slots = vec![T::default(); plan.thread_count()];

    let mut panicked = None;
    thread::scope(|s| {
        let handles: Vec<_> = plan
            .blocks()
            .zip(slots.iter_mut())
            .map(|(block, slot)| {
                let section = &items[block];
                s.spawn(move || {
                    *slot = sequential_fold(section, *slot);
                })
            })
            .collect();

        for (worker, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() && panicked.is_none() {
                panicked = Some(worker);
            }
        }
    });

    if let Some(worker) = panicked {
        return Err(FoldError::WorkerPanicked { worker });
    }

    Ok(sequential_fold(&slots, initial))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_sequential_for_every_hint() {
        let numbers: Vec<i64> = (1..=100).collect();
        for hint in 0..=16 {
            assert_eq!(
                parallel_fold_with_hint(&numbers, 0, hint),
                Ok(5050),
                "hint={hint}"
            );
        }
    }

    #[test]
    fn empty_input_returns_initial_without_spawning() {
        let empty: [i32; 0] = [];
        assert_eq!(parallel_fold_with_hint(&empty, 7, 8), Ok(7));
    }
}
