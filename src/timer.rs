use std::time::{Duration, Instant};

/// Stopwatch that starts running at construction.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    begin: Instant,
    end: Option<Instant>,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            begin: Instant::now(),
            end: None,
        }
    }

    pub fn stop(&mut self) {
        self.end = Some(Instant::now());
    }

    /// Time between construction and `stop()`, or time since construction
    /// if the stopwatch is still running.
    pub fn elapsed(&self) -> Duration {
        self.end.unwrap_or_else(Instant::now) - self.begin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_frozen_after_stop() {
        let mut timer = Stopwatch::start();
        timer.stop();
        let first = timer.elapsed();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(timer.elapsed(), first);
    }

    #[test]
    fn elapsed_grows_while_running() {
        let timer = Stopwatch::start();
        let first = timer.elapsed();
        std::thread::sleep(Duration::from_millis(5));
        assert!(timer.elapsed() > first);
    }
}
