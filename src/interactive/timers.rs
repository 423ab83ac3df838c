//! Host-side timers
//!
//! The game never schedules anything. The UI raises a deadline when a signal
//! fires and lowers the signal once the deadline passes. Time is always passed
//! in, so both timers are deterministic under test.

use crate::game::Signal;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// One pending auto-clear deadline per signal
#[derive(Debug, Clone)]
pub struct SignalTimers {
    durations: FxHashMap<Signal, Duration>,
    deadlines: FxHashMap<Signal, Instant>,
}

impl SignalTimers {
    #[must_use]
    pub fn new(short_entry: Duration, hard_mode_violation: Duration) -> Self {
        let mut durations = FxHashMap::default();
        durations.insert(Signal::ShortEntry, short_entry);
        durations.insert(Signal::HardModeViolation, hard_mode_violation);
        Self {
            durations,
            deadlines: FxHashMap::default(),
        }
    }

    /// Start the countdown for `signal`, replacing any pending one
    pub fn schedule(&mut self, signal: Signal, now: Instant) {
        let duration = self.durations.get(&signal).copied().unwrap_or_default();
        self.deadlines.insert(signal, now + duration);
    }

    /// Drop the pending countdown for `signal`, if any
    pub fn cancel(&mut self, signal: Signal) {
        self.deadlines.remove(&signal);
    }

    /// Remove and return every signal whose deadline has passed
    pub fn expire(&mut self, now: Instant) -> Vec<Signal> {
        let due: Vec<Signal> = self
            .deadlines
            .iter()
            .filter(|&(_, &deadline)| deadline <= now)
            .map(|(&signal, _)| signal)
            .collect();
        for signal in &due {
            self.deadlines.remove(signal);
        }
        due
    }

    #[must_use]
    pub fn is_pending(&self, signal: Signal) -> bool {
        self.deadlines.contains_key(&signal)
    }

    /// Time until the earliest deadline, if one is pending
    #[must_use]
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.deadlines
            .values()
            .min()
            .map(|&deadline| deadline.saturating_duration_since(now))
    }
}

/// Elapsed-time counter
///
/// Counts whole intervals while enabled. Disabling resets the count to zero.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    interval: Duration,
    elapsed: u64,
    next_tick: Option<Instant>,
}

impl Stopwatch {
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: 0,
            next_tick: None,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Number of intervals counted since the last restart
    #[must_use]
    pub const fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub fn set_enabled(&mut self, enabled: bool, now: Instant) {
        if enabled == self.is_enabled() {
            return;
        }
        self.elapsed = 0;
        self.next_tick = enabled.then(|| now + self.interval);
    }

    /// Count back from zero without stopping
    pub fn restart(&mut self, now: Instant) {
        self.elapsed = 0;
        if self.is_enabled() {
            self.next_tick = Some(now + self.interval);
        }
    }

    /// Advance the count for every interval that has passed
    pub fn tick(&mut self, now: Instant) {
        let Some(mut next) = self.next_tick else {
            return;
        };
        while next <= now {
            self.elapsed += 1;
            next += self.interval;
        }
        self.next_tick = Some(next);
    }

    /// Time until the next increment, if running
    #[must_use]
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.next_tick
            .map(|next| next.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: Duration = Duration::from_secs(3);
    const HARD: Duration = Duration::from_secs(1);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn signal_expires_after_its_duration() {
        let start = Instant::now();
        let mut timers = SignalTimers::new(SHORT, HARD);
        timers.schedule(Signal::HardModeViolation, start);

        assert!(timers.expire(start + ms(999)).is_empty());
        assert_eq!(
            timers.expire(start + ms(1000)),
            vec![Signal::HardModeViolation]
        );
        assert!(!timers.is_pending(Signal::HardModeViolation));
    }

    #[test]
    fn retrigger_replaces_pending_deadline() {
        let start = Instant::now();
        let mut timers = SignalTimers::new(SHORT, HARD);
        timers.schedule(Signal::ShortEntry, start);
        timers.schedule(Signal::ShortEntry, start + ms(2000));

        // The first deadline no longer fires
        assert!(timers.expire(start + ms(3000)).is_empty());
        assert_eq!(timers.expire(start + ms(5000)), vec![Signal::ShortEntry]);
    }

    #[test]
    fn cancel_removes_deadline() {
        let start = Instant::now();
        let mut timers = SignalTimers::new(SHORT, HARD);
        timers.schedule(Signal::ShortEntry, start);
        timers.cancel(Signal::ShortEntry);

        assert!(timers.expire(start + ms(10_000)).is_empty());
        assert_eq!(timers.next_deadline(start), None);
    }

    #[test]
    fn next_deadline_is_earliest() {
        let start = Instant::now();
        let mut timers = SignalTimers::new(SHORT, HARD);
        timers.schedule(Signal::ShortEntry, start);
        timers.schedule(Signal::HardModeViolation, start);

        assert_eq!(timers.next_deadline(start), Some(HARD));
    }

    #[test]
    fn stopwatch_counts_only_when_enabled() {
        let start = Instant::now();
        let mut watch = Stopwatch::new(Duration::from_secs(1));

        watch.tick(start + Duration::from_secs(5));
        assert_eq!(watch.elapsed(), 0);

        watch.set_enabled(true, start);
        watch.tick(start + ms(999));
        assert_eq!(watch.elapsed(), 0);
        watch.tick(start + ms(3500));
        assert_eq!(watch.elapsed(), 3);
        watch.tick(start + ms(4000));
        assert_eq!(watch.elapsed(), 4);
    }

    #[test]
    fn disabling_resets_to_zero() {
        let start = Instant::now();
        let mut watch = Stopwatch::new(Duration::from_secs(1));
        watch.set_enabled(true, start);
        watch.tick(start + Duration::from_secs(7));
        assert_eq!(watch.elapsed(), 7);

        watch.set_enabled(false, start + Duration::from_secs(7));
        assert_eq!(watch.elapsed(), 0);
        assert!(!watch.is_enabled());

        watch.tick(start + Duration::from_secs(20));
        assert_eq!(watch.elapsed(), 0);
    }

    #[test]
    fn restart_keeps_running() {
        let start = Instant::now();
        let mut watch = Stopwatch::new(Duration::from_secs(1));
        watch.set_enabled(true, start);
        watch.tick(start + Duration::from_secs(4));

        watch.restart(start + Duration::from_secs(4));
        assert_eq!(watch.elapsed(), 0);
        watch.tick(start + Duration::from_secs(6));
        assert_eq!(watch.elapsed(), 2);
    }
}
