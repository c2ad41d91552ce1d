//! Log sinks and subscriber setup.

use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::{Arc, Mutex};

use chrono::Local;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// A write destination plus formatting policy for one class of log
/// output.
///
/// Two sinks exist per process: informational (stdout, date+time prefix)
/// and error (stderr, date+time plus the caller's source location).
/// Each `print` emits exactly one line under the internal lock, so any
/// number of tasks may log without coordinating.
pub struct LogSink {
    target: Mutex<Box<dyn Write + Send>>,
    tag: &'static str,
    locations: bool,
}

impl LogSink {
    /// Informational sink: stdout, tagged `INFO`.
    pub fn info() -> Self {
        Self::new("INFO", Box::new(io::stdout()), false)
    }

    /// Error sink: stderr, tagged `ERROR`, with source-location tagging.
    pub fn error() -> Self {
        Self::new("ERROR", Box::new(io::stderr()), true)
    }

    /// Sink over an arbitrary writer.
    pub fn new(tag: &'static str, target: Box<dyn Write + Send>, locations: bool) -> Self {
        Self {
            target: Mutex::new(target),
            tag,
            locations,
        }
    }

    /// In-memory sink; the returned handle reads back captured lines.
    pub fn capture(tag: &'static str, locations: bool) -> (Self, CapturedLog) {
        let captured = CapturedLog::default();
        let sink = Self::new(tag, Box::new(CaptureWriter(captured.0.clone())), locations);
        (sink, captured)
    }

    /// Write one formatted line. Write failures are swallowed: a sink
    /// that cannot reach its destination must not take the process down.
    #[track_caller]
    pub fn print(&self, msg: impl fmt::Display) {
        let stamp = Local::now().format("%Y/%m/%d %H:%M:%S");
        let line = if self.locations {
            let loc = Location::caller();
            let file = loc.file().rsplit('/').next().unwrap_or(loc.file());
            format!("{}\t{} {}:{}: {}\n", self.tag, stamp, file, loc.line(), msg)
        } else {
            format!("{}\t{} {}\n", self.tag, stamp, msg)
        };
        let mut target = match self.target.lock() {
            Ok(target) => target,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = target.write_all(line.as_bytes());
        let _ = target.flush();
    }
}

/// Handle onto the buffer behind a capture sink.
#[derive(Clone, Default)]
pub struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    /// Everything written so far.
    pub fn contents(&self) -> String {
        let buf = match self.0.lock() {
            Ok(buf) => buf,
            Err(poisoned) => poisoned.into_inner(),
        };
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Captured lines, most recent last.
    pub fn lines(&self) -> Vec<String> {
        self.contents()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.contents().is_empty()
    }
}

struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut target = match self.0.lock() {
            Ok(target) => target,
            Err(poisoned) => poisoned.into_inner(),
        };
        target.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Install the process-wide tracing subscriber carrying `tower_http`
/// request traces. Later calls are no-ops, so tests may call freely.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shopfront=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
