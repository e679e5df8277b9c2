use std::ops::AddAssign;

/// Left-fold a slice into `initial`, applying `+=` in iteration order.
///
/// This is both the single-threaded baseline and the combine step that
/// [`crate::parallel_fold`] runs over its per-worker partial sums, so the
/// same accumulation semantics apply in both places.
pub fn sequential_fold<T>(items: &[T], initial: T) -> T
where
    T: Copy + AddAssign,
{
    let mut accumulator = initial;
    for &item in items {
        accumulator += item;
    }
    accumulator
}
