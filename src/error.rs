use thiserror::Error;

/// Failures surfaced by the multi-threaded fold.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldError {
    /// A worker's accumulation panicked. Reported only after every worker
    /// has been joined, so the slot storage is quiescent when the caller
    /// sees the error.
    #[error("worker {worker} panicked during accumulation")]
    WorkerPanicked { worker: usize },
}
