//! Boundary contracts between the timer engine and its host.
//!
//! The engine never talks to the terminal, a config file, or a notification
//! daemon directly. Hosts implement these three traits; tests substitute
//! in-memory recorders.

use crate::timer::Phase;

/// Snapshot of the timer settings, taken fresh at every duration lookup.
///
/// Values arrive already clamped: durations are at least one minute and
/// `sessions_before_long` is at least 1. Clamping is the provider's job
/// ([`crate::Config::timer`]), never the engine's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerConfig {
    pub work_secs: u64,
    pub short_break_secs: u64,
    pub long_break_secs: u64,
    pub sessions_before_long: u64,
    pub notify: bool,
}

impl TimerConfig {
    /// Duration of one full phase, in seconds.
    pub fn duration_secs(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Work => self.work_secs,
            Phase::Break => self.short_break_secs,
            Phase::LongBreak => self.long_break_secs,
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_secs: 25 * 60,
            short_break_secs: 5 * 60,
            long_break_secs: 15 * 60,
            sessions_before_long: 4,
            notify: true,
        }
    }
}

/// Provides the current timer settings.
///
/// Called once per duration lookup; implementations must not cache across
/// calls, so config edits take effect at the next phase boundary.
pub trait ConfigSource {
    fn snapshot(&self) -> TimerConfig;
}

/// A single persistent status line. Each `set_text` overwrites the previous
/// text; there is no history and no queuing.
pub trait DisplaySink {
    fn set_text(&mut self, text: &str);

    /// Release the underlying resource. Called once, on dispose.
    fn close(&mut self) {}
}

/// Fire-and-forget user-visible alert. Must never block; host-side failures
/// stay on the host side.
pub trait NotificationSink {
    fn notify(&mut self, message: &str);
}
