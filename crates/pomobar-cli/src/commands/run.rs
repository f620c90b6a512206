//! Interactive foreground timer session.
//!
//! Owns the one [`PhaseTimer`] instance for the lifetime of the process.
//! A single select! loop drives everything: a one-second interval delivers
//! ticks, stdin lines deliver the start/pause/reset commands, and Ctrl-C
//! tears the session down through `dispose()`. One execution context means
//! ticks and commands never interleave with each other.

use std::io::Write;

use pomobar_core::{DisplaySink, NotificationSink, PhaseTimer, StoredConfig};
use tokio::io::AsyncBufReadExt;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::debug;

const TICK: Duration = Duration::from_secs(1);

/// Status line on stderr, overwritten in place via carriage return.
#[derive(Default)]
struct TermDisplay {
    // Width of the previous text, so shorter labels blank the leftovers.
    last_width: usize,
}

impl DisplaySink for TermDisplay {
    fn set_text(&mut self, text: &str) {
        let width = text.chars().count();
        let pad = self.last_width.saturating_sub(width);
        eprint!("\r{}{}", text, " ".repeat(pad));
        let _ = std::io::stderr().flush();
        self.last_width = width;
    }

    fn close(&mut self) {
        eprintln!();
    }
}

/// Prints the message on its own line, with a terminal bell.
struct TermNotifier;

impl NotificationSink for TermNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("\r{message}\u{7}");
    }
}

pub fn run(autostart: bool) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .enable_io()
        .build()?;
    runtime.block_on(session(autostart));
    Ok(())
}

async fn session(autostart: bool) {
    let mut timer = PhaseTimer::new(StoredConfig, TermDisplay::default(), TermNotifier);
    eprintln!("commands: start (s), pause (p), reset (r), quit (q)");

    if autostart {
        if let Some(event) = timer.start() {
            debug!(?event, "timer started");
        }
    }

    // First tick one second from now; start() already rendered.
    let mut ticker = interval_at(Instant::now() + TICK, TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if timer.is_running() {
                    if let Some(event) = timer.tick() {
                        debug!(?event, "phase boundary");
                    }
                }
            }
            line = lines.next_line() => {
                let Ok(Some(line)) = line else { break };
                match line.trim() {
                    "start" | "s" => {
                        if let Some(event) = timer.start() {
                            debug!(?event, "timer started");
                        }
                    }
                    "pause" | "p" => {
                        if let Some(event) = timer.pause() {
                            debug!(?event, "timer paused");
                        }
                    }
                    "reset" | "r" => {
                        if let Some(event) = timer.reset() {
                            debug!(?event, "timer reset");
                        }
                    }
                    "quit" | "q" | "exit" => break,
                    "" => {}
                    other => eprintln!("\runknown command: {other}"),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    timer.dispose();
}
