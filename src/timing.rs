//! Named wall-clock timers.
//!
//! A [`Timings`] registry accumulates, per name, the total time, the number of
//! timed calls and the slowest call. It is owned by the caller; there is no
//! process-wide registry.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::time::{Duration, Instant};

use serde::Serialize;

/// Accumulated measurements for one timer name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimerData {
    /// Sum of all recorded durations, in milliseconds.
    pub total_ms: u128,
    /// Number of recorded durations.
    pub count: usize,
    /// Longest recorded duration, in milliseconds.
    pub max_ms: u128,
}

/// A registry of named timers.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Timings {
    timers: BTreeMap<String, TimerData>,
}

impl Timings {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f`, records its duration under `name` and returns its result.
    pub fn time<T>(&mut self, name: &str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.record(name, start.elapsed());
        out
    }

    /// Records one duration under `name`.
    pub fn record(&mut self, name: &str, elapsed: Duration) {
        let ms = elapsed.as_millis();
        let data = self.timers.entry(name.to_owned()).or_default();
        data.total_ms += ms;
        data.count += 1;
        data.max_ms = data.max_ms.max(ms);
    }

    /// Measurements recorded under `name`.
    pub fn get(&self, name: &str) -> Option<&TimerData> {
        self.timers.get(name)
    }

    /// Renders all timers as a fixed-width table.
    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "-".repeat(80));
        let _ = writeln!(
            out,
            "{:<40}{:>9}    {:>13}     {:>9}",
            "Timer", "Count", "Total-Time", "Max-Time"
        );
        for (name, data) in &self.timers {
            let _ = writeln!(
                out,
                "{:<40}{:>9}    {:>13}     {:>9}",
                name,
                data.count,
                format!("{} ms", data.total_ms),
                format!("{} ms", data.max_ms)
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accumulates() {
        let mut timings = Timings::new();
        timings.record("eis", Duration::from_millis(5));
        timings.record("eis", Duration::from_millis(12));
        timings.record("io", Duration::from_millis(3));

        let eis = timings.get("eis").unwrap();
        assert_eq!(eis.count, 2);
        assert_eq!(eis.total_ms, 17);
        assert_eq!(eis.max_ms, 12);
        assert!(timings.get("missing").is_none());
    }

    #[test]
    fn test_time_returns_closure_value() {
        let mut timings = Timings::new();
        let value = timings.time("work", || 6 * 7);
        assert_eq!(value, 42);
        assert_eq!(timings.get("work").unwrap().count, 1);
    }

    #[test]
    fn test_report_lists_every_timer() {
        let mut timings = Timings::new();
        timings.record("main", Duration::from_millis(40));
        timings.record("IO", Duration::from_millis(8));
        let report = timings.report();
        assert!(report.contains("Timer"));
        assert!(report.lines().any(|l| l.starts_with("main") && l.contains("40 ms")));
        assert!(report.lines().any(|l| l.starts_with("IO") && l.contains("8 ms")));
    }
}
