//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Wall-clock time in milliseconds
//! - The repeating frame task that drives the game

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::IntervalTicker;

/// A cancellable repeating task. The owner decides what runs on each fire;
/// the ticker only knows whether it is scheduled and at what period.
pub trait Ticker {
    /// Start firing every `period_ms`. Re-arming replaces any running schedule.
    fn arm(&mut self, period_ms: u32);

    /// Stop firing. Safe to call when not armed.
    fn cancel(&mut self);

    fn is_armed(&self) -> bool;
}

/// Ticker driven by hand; used natively and in tests
#[derive(Debug, Default, Clone)]
pub struct ManualTicker {
    period_ms: Option<u32>,
    pub arm_count: u32,
    pub cancel_count: u32,
}

impl ManualTicker {
    pub fn period_ms(&self) -> Option<u32> {
        self.period_ms
    }
}

impl Ticker for ManualTicker {
    fn arm(&mut self, period_ms: u32) {
        self.period_ms = Some(period_ms);
        self.arm_count += 1;
    }

    fn cancel(&mut self) {
        if self.period_ms.take().is_some() {
            self.cancel_count += 1;
        }
    }

    fn is_armed(&self) -> bool {
        self.period_ms.is_some()
    }
}

/// Milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Milliseconds since the Unix epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_ticker_arm_and_cancel() {
        let mut t = ManualTicker::default();
        assert!(!t.is_armed());
        t.arm(25);
        assert!(t.is_armed());
        assert_eq!(t.period_ms(), Some(25));

        t.cancel();
        t.cancel();
        assert!(!t.is_armed());
        assert_eq!(t.arm_count, 1);
        assert_eq!(t.cancel_count, 1);
    }

    #[test]
    fn test_rearm_replaces_period() {
        let mut t = ManualTicker::default();
        t.arm(25);
        t.arm(40);
        assert_eq!(t.period_ms(), Some(40));
        assert_eq!(t.arm_count, 2);
    }

    #[test]
    fn test_now_ms_is_after_2020() {
        assert!(now_ms() > 1_577_836_800_000.0);
    }
}
