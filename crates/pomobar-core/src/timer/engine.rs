//! Phase timer engine.
//!
//! The timer is a caller-driven state machine. It does not use internal
//! threads - the host invokes `tick()` once per elapsed second while the
//! timer is running, and forwards start/pause/reset from its command surface.
//!
//! ## State Transitions
//!
//! ```text
//! Idle --start--> Running --pause--> Paused --start--> Running
//!                 Running --tick at 0--> Running (next phase)
//!                 any --reset--> Idle
//! ```
//!
//! Phase boundaries never pass through Idle: when the countdown reaches zero
//! the next tick transitions directly into the next phase with a duration
//! read fresh from the config source. A config edit made mid-countdown
//! therefore applies at the next boundary, never retroactively.

use chrono::Utc;

use super::phase::Phase;
use crate::events::Event;
use crate::surface::{ConfigSource, DisplaySink, NotificationSink};

/// Status text shown while the timer is idle.
pub const READY_LABEL: &str = "Ready \u{1F345}";

const WORK_DONE_MSG: &str = "Work session done! Take a break.";
const BREAK_DONE_MSG: &str = "Break finished! Back to work.";

/// Format seconds as zero-padded `MM:SS`.
pub fn format_mmss(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Core phase-cycling countdown timer.
///
/// Owns the one mutable timer state: current phase, remaining seconds,
/// completed work-session count and the running flag. Writes display text
/// to `D`, notification requests to `N`, and reads settings from `C` at
/// every duration lookup.
#[derive(Debug)]
pub struct PhaseTimer<C, D, N> {
    config: C,
    display: D,
    notifier: N,
    phase: Phase,
    remaining_secs: u64,
    completed_sessions: u64,
    running: bool,
    disposed: bool,
}

impl<C, D, N> PhaseTimer<C, D, N>
where
    C: ConfigSource,
    D: DisplaySink,
    N: NotificationSink,
{
    /// Create an idle timer and render the ready label.
    pub fn new(config: C, mut display: D, notifier: N) -> Self {
        display.set_text(READY_LABEL);
        Self {
            config,
            display,
            notifier,
            phase: Phase::Work,
            remaining_secs: 0,
            completed_sessions: 0,
            running: false,
            disposed: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn completed_sessions(&self) -> u64 {
        self.completed_sessions
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// `<icon> <word>: MM:SS` for the current phase and remaining time.
    pub fn label(&self) -> String {
        format!(
            "{} {}: {}",
            self.phase.icon(),
            self.phase.word(),
            format_mmss(self.remaining_secs)
        )
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            completed_sessions: self.completed_sessions,
            running: self.running,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start the countdown, or resume it after a pause.
    ///
    /// No-op while already running. A fresh start (remaining at zero) loads
    /// the phase duration from a new config snapshot and immediately runs
    /// one tick, so the first second elapses on start. A resume keeps the
    /// paused remaining time exactly as it was.
    pub fn start(&mut self) -> Option<Event> {
        if self.running || self.disposed {
            return None;
        }
        self.running = true;
        let duration_secs = if self.remaining_secs == 0 {
            let secs = self.config.snapshot().duration_secs(self.phase);
            self.remaining_secs = secs;
            self.tick();
            secs
        } else {
            self.render();
            self.remaining_secs
        };
        Some(Event::TimerStarted {
            phase: self.phase,
            duration_secs,
            at: Utc::now(),
        })
    }

    /// Stop ticking, keeping phase and remaining time. No-op while idle.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        self.display.set_text(&format!(
            "Paused \u{23F8} {}",
            format_mmss(self.remaining_secs)
        ));
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Back to idle: Work phase, zero remaining, session count cleared.
    pub fn reset(&mut self) -> Option<Event> {
        if self.disposed {
            return None;
        }
        self.running = false;
        self.phase = Phase::Work;
        self.remaining_secs = 0;
        self.completed_sessions = 0;
        self.display.set_text(READY_LABEL);
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Stop ticking and release the display. Idempotent; every operation
    /// after dispose is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.running = false;
        self.display.close();
    }

    /// Advance the countdown by one elapsed second.
    ///
    /// While remaining time is left this only decrements and re-renders.
    /// At zero it crosses the phase boundary: notify (if enabled), apply the
    /// transition rule, and reload the duration for the new phase from a
    /// fresh config snapshot. Returns the boundary event when one occurs.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            self.render();
            return None;
        }
        // Phase boundary.
        let cfg = self.config.snapshot();
        if cfg.notify {
            let message = if self.phase == Phase::Work {
                WORK_DONE_MSG
            } else {
                BREAK_DONE_MSG
            };
            self.notifier.notify(message);
        }
        let finished = self.phase;
        self.phase = if self.phase == Phase::Work {
            self.completed_sessions += 1;
            if self.completed_sessions % cfg.sessions_before_long == 0 {
                Phase::LongBreak
            } else {
                Phase::Break
            }
        } else {
            // Any break returns to Work, long or short.
            Phase::Work
        };
        self.remaining_secs = cfg.duration_secs(self.phase);
        self.render();
        Some(Event::PhaseCompleted {
            finished,
            next: self.phase,
            completed_sessions: self.completed_sessions,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn render(&mut self) {
        let label = self.label();
        self.display.set_text(&label);
    }
}
