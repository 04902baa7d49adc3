use std::fmt::Debug;
use std::time::{Duration, Instant};

/// A reading of a monotonic clock.
pub trait Instantaneous: Copy + Debug {
    fn now() -> Self;

    fn elapsed(&self) -> Duration;
}

impl Instantaneous for Instant {
    fn now() -> Self {
        Instant::now()
    }

    fn elapsed(&self) -> Duration {
        Instant::elapsed(self)
    }
}

/// Follows the runtime clock, so it stands still under `tokio::time::pause`.
#[cfg(any(test, feature = "tokio"))]
impl Instantaneous for tokio::time::Instant {
    fn now() -> Self {
        tokio::time::Instant::now()
    }

    fn elapsed(&self) -> Duration {
        tokio::time::Instant::elapsed(self)
    }
}

/// Interval timer backing a single active segment.
///
/// A stopped timer keeps reporting what it measured until it is replaced.
#[derive(Debug)]
pub struct Timer<I = Instant> {
    last_start: Option<I>,
    elapsed: Duration,
}

impl<I> Default for Timer<I> {
    fn default() -> Self {
        Self {
            last_start: None,
            elapsed: Duration::ZERO,
        }
    }
}

impl<I: Instantaneous> Timer<I> {
    pub fn start(&mut self) {
        if self.last_start.is_none() {
            self.last_start = Some(I::now());
        }
    }

    pub fn stop(&mut self) {
        if let Some(t) = self.last_start.take() {
            self.elapsed += t.elapsed();
        }
    }

    pub fn elapsed(&self) -> Duration {
        match self.last_start {
            Some(t) => self.elapsed + t.elapsed(),
            None => self.elapsed,
        }
    }

    pub fn is_running(&self) -> bool {
        self.last_start.is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unstarted_reports_zero() {
        let timer: Timer = Timer::default();
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn measures_wall_time() {
        let mut timer: Timer = Timer::default();
        timer.start();
        std::thread::sleep(Duration::from_millis(20));
        timer.stop();

        let took = timer.elapsed();
        assert!(took >= Duration::from_millis(20));
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(timer.elapsed(), took);
    }

    #[tokio::test(start_paused = true)]
    async fn follows_paused_clock() {
        let mut timer: Timer<tokio::time::Instant> = Timer::default();
        timer.start();
        tokio::time::advance(Duration::from_millis(150)).await;
        assert!(timer.is_running());
        assert_eq!(timer.elapsed(), Duration::from_millis(150));

        // Starting again while running keeps the original start point.
        timer.start();
        tokio::time::advance(Duration::from_millis(50)).await;
        timer.stop();
        assert_eq!(timer.elapsed(), Duration::from_millis(200));

        tokio::time::advance(Duration::from_secs(5)).await;
        assert_eq!(timer.elapsed(), Duration::from_millis(200));
    }
}
