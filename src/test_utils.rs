//! Writers for asserting on what the render loop puts on the terminal.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Records every `write` call as its own chunk, in order.
///
/// Clones share the same log, so a test can keep one handle and give the other to a spinner.
#[derive(Clone, Default)]
pub struct RecordingWriter {
    chunks: Arc<Mutex<Vec<Vec<u8>>>>,
    delay: Option<Duration>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks the writing thread for `delay` before each write lands in the log.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn chunks(&self) -> Vec<String> {
        self.chunks
            .lock()
            .unwrap()
            .iter()
            .map(|c| String::from_utf8_lossy(c).into_owned())
            .collect()
    }

    pub fn output(&self) -> String {
        self.chunks().concat()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.chunks.lock().unwrap().concat()
    }
}

impl Write for RecordingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        self.chunks.lock().unwrap().push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Fails the writes whose zero-based call index is in `failing`, records the rest.
#[derive(Clone)]
pub struct FlakyWriter {
    inner: RecordingWriter,
    failing: Arc<Vec<usize>>,
    calls: Arc<Mutex<usize>>,
}

impl FlakyWriter {
    pub fn new(failing: Vec<usize>) -> Self {
        Self {
            inner: RecordingWriter::new(),
            failing: Arc::new(failing),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Every write fails.
    pub fn broken() -> Self {
        Self::new((0..10_000).collect())
    }

    pub fn recorded(&self) -> RecordingWriter {
        self.inner.clone()
    }
}

impl Write for FlakyWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            let call = *calls;
            *calls += 1;
            call
        };
        if self.failing.contains(&call) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// The erase sequence for a previously painted line of `len` bytes.
pub fn erase(len: usize) -> String {
    format!("\r{}\r", " ".repeat(len))
}

pub const HIDE: &str = "\r\x1b[?25l\r";
pub const SHOW: &str = "\r\x1b[?25h\r";
