//! Routes `tracing` output to the browser console.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::{fmt::MakeWriter, EnvFilter};
use wasm_bindgen::JsValue;
use web_sys::console;

use crate::config;

#[derive(Clone, Copy)]
struct ConsoleMakeWriter;

/// Buffers one formatted event and hands it to the matching console method
/// when dropped.
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        let value = JsValue::from_str(line);
        match self.level {
            Level::ERROR => console::error_1(&value),
            Level::WARN => console::warn_1(&value),
            Level::DEBUG | Level::TRACE => console::debug_1(&value),
            _ => console::log_1(&value),
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

/// Install the console subscriber. Safe to call more than once.
pub fn init_logging() {
    let filter = EnvFilter::try_new(config::LOG_FILTER).unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .try_init();

    if let Err(err) = result {
        console::warn_1(&format!("tracing subscriber not installed: {err}").into());
    }
}
