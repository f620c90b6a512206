//! # pomobar Core Library
//!
//! Core business logic for pomobar, a phase-cycling pomodoro timer.
//! The library owns the timer state machine and configuration storage;
//! hosts (the CLI binary, or anything else with a status line) plug in
//! behind the small boundary traits in [`surface`].
//!
//! ## Architecture
//!
//! - **Timer Engine**: A caller-driven state machine -- the host invokes
//!   `tick()` once per elapsed second while the timer is running
//! - **Storage**: TOML-based configuration, re-read at every phase boundary
//!   so edits apply lazily at the next boundary rather than retroactively
//! - **Surface**: Traits for the display line, notifications, and the
//!   configuration provider
//!
//! ## Key Components
//!
//! - [`PhaseTimer`]: Core timer state machine
//! - [`Config`]: Application configuration management
//! - [`Event`]: Emitted on every state change

pub mod error;
pub mod events;
pub mod storage;
pub mod surface;
pub mod timer;

pub use error::ConfigError;
pub use events::Event;
pub use storage::{Config, StoredConfig};
pub use surface::{ConfigSource, DisplaySink, NotificationSink, TimerConfig};
pub use timer::{format_mmss, Phase, PhaseTimer};
