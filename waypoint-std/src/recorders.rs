//! Event recorder implementations.

use std::{
    io::{self, Write},
    sync::Mutex,
};
use waypoint_core::EventRecorder;

/// Writes `[Analytics] Page View: <title>` lines to a sink.
///
/// Defaults to stdout. Write failures are dropped.
pub struct ConsoleRecorder {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleRecorder {
    /// Record to stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Record to an arbitrary writer.
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            sink: Mutex::new(Box::new(writer)),
        }
    }
}

impl Default for ConsoleRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRecorder for ConsoleRecorder {
    fn record(&self, page_title: &str) {
        // A poisoned sink is still usable for appending lines.
        let mut sink = match self.sink.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(sink, "[Analytics] Page View: {}", page_title);
        let _ = sink.flush();
    }
}

/// Emits each page view as a `tracing` event on the `waypoint::analytics`
/// target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRecorder;

impl EventRecorder for TracingRecorder {
    fn record(&self, page_title: &str) {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(target: "waypoint::analytics", title = %page_title, "page view");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = page_title;
        }
    }
}
