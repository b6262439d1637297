use std::time::Duration;

pub const DEFAULT_THROTTLE_SECONDS: u64 = 5;

/// Fixed pause taken after every scanner invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    interval: Duration,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Throttle { interval }
    }

    pub fn none() -> Self {
        Throttle::new(Duration::ZERO)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub async fn wait(&self) {
        if self.interval.is_zero() {
            return;
        }

        log::debug!("waiting {:?} before the next scan", self.interval);
        tokio::time::sleep(self.interval).await;
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Throttle::new(Duration::from_secs(DEFAULT_THROTTLE_SECONDS))
    }
}
