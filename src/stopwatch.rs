//! Wall-clock timing for iteration histories and time limits

use std::time::Instant;

/// Monotonic timer started on construction
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    #[must_use]
    pub fn start() -> Stopwatch {
        Stopwatch {
            start: Instant::now(),
        }
    }

    /// Seconds elapsed since [`Stopwatch::start`]
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn elapsed_is_monotone() {
        let watch = Stopwatch::start();
        let first = watch.elapsed();
        sleep(Duration::from_millis(5));
        let second = watch.elapsed();
        assert!(first >= 0.);
        assert!(second - first >= 0.004);
    }
}
