//! Pluggable pause before an analysis run
//!
//! Production runs wait a random 2-3 seconds so generating insights feels
//! like real work; tests swap in [`NoDelay`].
//!
//! Configured with `PULSE_ANALYSIS_DELAY_MS`:
//! - unset or empty: random delay between 2000 and 3000 ms
//! - `0`: no delay
//! - any other number: fixed delay of that many milliseconds

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tracing::warn;

/// Environment variable selecting the analysis delay
pub const ANALYSIS_DELAY_ENV: &str = "PULSE_ANALYSIS_DELAY_MS";

/// Default bounds for the randomized delay, in milliseconds
pub const DEFAULT_MIN_DELAY_MS: u64 = 2000;
pub const DEFAULT_MAX_DELAY_MS: u64 = 3000;

/// Strategy for the pause that precedes an engine run
#[async_trait]
pub trait AnalysisDelay: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Wait before the engine runs
    async fn wait(&self);
}

/// Run immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl AnalysisDelay for NoDelay {
    fn name(&self) -> &'static str {
        "none"
    }

    async fn wait(&self) {}
}

/// Always wait the same amount of time
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

#[async_trait]
impl AnalysisDelay for FixedDelay {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn wait(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// Wait a uniformly random time within `[min_ms, max_ms]`
#[derive(Debug, Clone, Copy)]
pub struct RandomDelay {
    min_ms: u64,
    max_ms: u64,
}

impl RandomDelay {
    /// Bounds are swapped if given in the wrong order
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min_ms: min_ms.min(max_ms),
            max_ms: min_ms.max(max_ms),
        }
    }

    pub fn bounds(&self) -> (u64, u64) {
        (self.min_ms, self.max_ms)
    }

    /// Draw the next wait duration
    pub fn pick(&self) -> Duration {
        let ms = rand::thread_rng().gen_range(self.min_ms..=self.max_ms);
        Duration::from_millis(ms)
    }
}

impl Default for RandomDelay {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DELAY_MS, DEFAULT_MAX_DELAY_MS)
    }
}

#[async_trait]
impl AnalysisDelay for RandomDelay {
    fn name(&self) -> &'static str {
        "random"
    }

    async fn wait(&self) {
        // Draw before awaiting; ThreadRng is not Send
        let duration = self.pick();
        tokio::time::sleep(duration).await;
    }
}

/// Build the delay strategy from a raw setting (see module docs)
pub fn parse_delay(value: Option<&str>) -> Box<dyn AnalysisDelay> {
    let Some(raw) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return Box::new(RandomDelay::default());
    };

    match raw.parse::<u64>() {
        Ok(0) => Box::new(NoDelay),
        Ok(ms) => Box::new(FixedDelay(Duration::from_millis(ms))),
        Err(_) => {
            warn!(
                value = raw,
                "Invalid {}, using the random delay", ANALYSIS_DELAY_ENV
            );
            Box::new(RandomDelay::default())
        }
    }
}

/// Build the delay strategy from `PULSE_ANALYSIS_DELAY_MS`
pub fn delay_from_env() -> Box<dyn AnalysisDelay> {
    parse_delay(std::env::var(ANALYSIS_DELAY_ENV).ok().as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_delay_stays_in_bounds() {
        let delay = RandomDelay::default();
        for _ in 0..50 {
            let d = delay.pick();
            assert!(d >= Duration::from_millis(2000));
            assert!(d <= Duration::from_millis(3000));
        }
    }

    #[test]
    fn test_random_delay_orders_bounds() {
        assert_eq!(RandomDelay::new(30, 10).bounds(), (10, 30));
    }

    #[test]
    fn test_parse_delay() {
        assert_eq!(parse_delay(None).name(), "random");
        assert_eq!(parse_delay(Some("")).name(), "random");
        assert_eq!(parse_delay(Some("0")).name(), "none");
        assert_eq!(parse_delay(Some("150")).name(), "fixed");
        assert_eq!(parse_delay(Some("soon")).name(), "random");
    }

    #[tokio::test]
    async fn test_no_delay_returns_immediately() {
        let started = std::time::Instant::now();
        NoDelay.wait().await;
        assert!(started.elapsed() < Duration::from_millis(100));
    }
}
