//! Tracing subscriber setup for binaries embedding glide components.
//!
//! ## Usage
//!
//! Call [`init_tracing`] once at startup. Libraries only emit events; they
//! never install a subscriber themselves.
//!
//! Native builds format to stdout. On wasm there is no stdout, so events go
//! to the browser console through a [`SinkWriter`] and panics are reported
//! there too.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Default filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "error,glide_ui=info,glide_components=info";

/// Receives one formatted event at a time, with its level.
pub type LogSink = fn(Level, &str);

/// [`MakeWriter`] that hands each formatted event to a [`LogSink`].
#[derive(Clone, Copy, Debug)]
pub struct SinkWriter {
    sink: LogSink,
}

impl SinkWriter {
    /// Creates a writer delivering events to `sink`.
    pub fn new(sink: LogSink) -> Self {
        Self { sink }
    }

    fn event(&self, level: Level) -> SinkEvent {
        SinkEvent {
            sink: self.sink,
            level,
            buffer: Vec::new(),
        }
    }
}

/// Buffers one event and flushes it to the sink when dropped.
#[derive(Debug)]
pub struct SinkEvent {
    sink: LogSink,
    level: Level,
    buffer: Vec<u8>,
}

impl io::Write for SinkEvent {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for SinkEvent {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buffer);
        (self.sink)(self.level, text.trim_end());
    }
}

impl<'a> MakeWriter<'a> for SinkWriter {
    type Writer = SinkEvent;

    fn make_writer(&'a self) -> Self::Writer {
        self.event(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.event(*meta.level())
    }
}

#[cfg(target_family = "wasm")]
fn console_sink(level: Level, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&line),
        Level::WARN => web_sys::console::warn_1(&line),
        Level::INFO => web_sys::console::info_1(&line),
        _ => web_sys::console::debug_1(&line),
    }
}

/// Installs a formatted subscriber filtered by `RUST_LOG`.
///
/// Falls back to [`DEFAULT_FILTER`]. Calling it again after a subscriber is
/// installed is a no-op.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    #[cfg(target_family = "wasm")]
    let result = {
        console_error_panic_hook::set_once();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(SinkWriter::new(console_sink))
            .with_ansi(false)
            .without_time()
            .with_level(false)
            .try_init()
    };

    #[cfg(not(target_family = "wasm"))]
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();

    if let Err(err) = result {
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}
