//! Clock abstraction for the sign-in polling loop
//!
//! The acquirer never reads wall-clock time or sleeps directly; it goes
//! through this trait so tests can drive the loop with a fake clock.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Time source and suspension point used by the polling loop
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Suspend for the given duration
    async fn sleep(&self, duration: Duration);
}

/// Wall-clock time and real sleeping
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
pub mod fake {
    use std::sync::Mutex;

    use super::*;

    /// Test clock that advances instantly when slept on
    pub struct FakeClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl FakeClock {
        pub fn new(start: DateTime<Utc>) -> Self {
            Self {
                now: Mutex::new(start),
            }
        }

        pub fn advance(&self, duration: Duration) {
            let mut now = self.now.lock().unwrap();
            *now += chrono::Duration::from_std(duration).expect("duration in range");
        }
    }

    #[async_trait]
    impl Clock for FakeClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }

        async fn sleep(&self, duration: Duration) {
            self.advance(duration);
        }
    }

    #[tokio::test]
    async fn test_fake_clock_advances_on_sleep() {
        let start = Utc::now();
        let clock = FakeClock::new(start);

        clock.sleep(Duration::from_secs(30)).await;

        assert_eq!(clock.now(), start + chrono::Duration::seconds(30));
    }
}
