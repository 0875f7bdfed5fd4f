//! Single-line spinner driven by a background render loop.
//!
//! The loop runs as a tokio task and owns every piece of mutable render state.
//! The caller talks to it through two one-shot signals: the stop message (which
//! carries the [`Outcome`]) and the task's completion.
//!
//! Misuse is ruled out by ownership rather than runtime checks:
//! [`Spinner::run`] consumes the spinner, and [`RunningSpinner::success`] /
//! [`RunningSpinner::fail`] consume the running handle, so starting twice,
//! stopping before starting, or stopping twice do not compile. Dropping a
//! [`RunningSpinner`] without stopping it erases the progress line, restores the
//! cursor and ends the loop without a status line.

use std::io::{self, Write};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::config::{Config, Sink};
use crate::cursor::{self, CursorControl};

/// Time between two progress frames.
pub const TICK: Duration = Duration::from_millis(100);

/// How a spinner finishes: which glyph and message the status line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Fail,
}

/// A spinner that has been configured but not started.
pub struct Spinner {
    config: Config,
    out: Sink,
    cursor: Box<dyn CursorControl>,
}

impl Spinner {
    /// Default glyphs, with `progress` shown in every state.
    pub fn new(progress: impl Into<String>) -> Self {
        Self::with_config(Config::new(progress))
    }

    pub fn with_messages(
        progress: impl Into<String>,
        success: impl Into<String>,
        fail: impl Into<String>,
    ) -> Self {
        Self::with_config(Config::with_messages(progress, success, fail))
    }

    /// Uses `config` as given. Empty glyphs, prefix or suffix render as blanks.
    /// A config without a writer paints to stdout.
    pub fn with_config(config: Config) -> Self {
        Self::with_fallback_sink(config, || Box::new(io::stdout()))
    }

    fn with_fallback_sink(mut config: Config, fallback: impl FnOnce() -> Sink) -> Self {
        let out = config.writer.take().unwrap_or_else(fallback);
        let cursor = cursor::for_flag(config.hide_cursor);
        Self {
            config,
            out,
            cursor,
        }
    }

    /// Replaces the cursor controller picked from `hide_cursor`.
    #[must_use]
    pub fn with_cursor(mut self, cursor: impl CursorControl + 'static) -> Self {
        self.cursor = Box::new(cursor);
        self
    }

    /// Starts animating in the background and returns right away.
    ///
    /// Must be called from inside a tokio runtime.
    pub fn run(self) -> RunningSpinner {
        let (stop_tx, stop_rx) = oneshot::channel();
        let renderer = Renderer {
            config: self.config,
            out: self.out,
            cursor: self.cursor,
            next_glyph: 0,
            last_len: 0,
        };
        debug!(message = %renderer.config.progress_message, "spinner started");
        let task = tokio::spawn(renderer.animate(stop_rx));
        RunningSpinner {
            stop: stop_tx,
            task,
        }
    }
}

/// Handle to an animating spinner.
#[must_use = "dropping a running spinner ends it without a status line"]
pub struct RunningSpinner {
    stop: oneshot::Sender<Outcome>,
    task: JoinHandle<()>,
}

impl RunningSpinner {
    /// Paints the success line and waits until it is on the terminal.
    pub async fn success(self) {
        self.finish(Outcome::Success).await;
    }

    /// Paints the fail line and waits until it is on the terminal.
    pub async fn fail(self) {
        self.finish(Outcome::Fail).await;
    }

    /// Stops the loop with `outcome`. Returns once the status line is painted
    /// and the cursor is restored.
    pub async fn finish(self, outcome: Outcome) {
        if self.stop.send(outcome).is_err() {
            debug!("render loop exited before stop");
        }
        if let Err(err) = self.task.await {
            debug!(%err, "render loop ended abnormally");
        }
        debug!(?outcome, "spinner stopped");
    }
}

/// Owns all render state inside the spawned task.
///
/// Writes are plain blocking `std::io` calls made on the runtime worker. Frames
/// are a few bytes each, but a terminal that stops draining its output stalls
/// that worker until the write returns.
struct Renderer {
    config: Config,
    out: Sink,
    cursor: Box<dyn CursorControl>,
    next_glyph: usize,
    last_len: usize,
}

impl Renderer {
    async fn animate(mut self, mut stop: oneshot::Receiver<Outcome>) {
        if let Err(err) = self.cursor.hide(&mut self.out) {
            trace!(%err, "hide cursor failed");
        }

        let mut ticker = time::interval_at(Instant::now() + TICK, TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let outcome = loop {
            tokio::select! {
                _ = ticker.tick() => self.paint_progress(),
                outcome = &mut stop => break outcome.ok(),
            }
        };

        match outcome {
            Some(outcome) => self.paint_status(outcome),
            None => {
                if let Err(err) = self.erase() {
                    trace!(%err, "erase failed");
                }
            }
        }

        if let Err(err) = self.cursor.show(&mut self.out) {
            trace!(%err, "show cursor failed");
        }
    }

    fn paint_progress(&mut self) {
        let glyph = self
            .config
            .glyphs
            .get(self.next_glyph)
            .map_or("", String::as_str);
        let line = self.line(glyph, &self.config.progress_message);
        if !self.config.glyphs.is_empty() {
            self.next_glyph = (self.next_glyph + 1) % self.config.glyphs.len();
        }

        if let Err(err) = self.erase() {
            trace!(%err, "erase failed, skipping frame");
            return;
        }
        match self.write(line.as_bytes()) {
            Ok(()) => self.last_len = line.len(),
            Err(err) => trace!(%err, "paint failed, skipping frame"),
        }
    }

    fn paint_status(&mut self, outcome: Outcome) {
        let (glyph, message) = match outcome {
            Outcome::Success => (&self.config.success_glyph, &self.config.success_message),
            Outcome::Fail => (&self.config.fail_glyph, &self.config.fail_message),
        };
        let mut line = self.line(glyph, message);
        line.push('\n');

        if let Err(err) = self.erase() {
            trace!(%err, "erase failed, skipping status line");
            return;
        }
        match self.write(line.as_bytes()) {
            Ok(()) => self.last_len = 0,
            Err(err) => trace!(%err, "status line failed"),
        }
    }

    fn line(&self, glyph: &str, message: &str) -> String {
        format!(
            "{}{}{}{}",
            self.config.prefix, glyph, self.config.suffix, message
        )
    }

    fn erase(&mut self) -> io::Result<()> {
        let blank = format!("\r{}\r", " ".repeat(self.last_len));
        self.write(blank.as_bytes())
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)?;
        self.out.flush()
    }
}
