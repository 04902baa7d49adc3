//! Stopwatch allowing pause and resume, for timing the inner parts of loops.
//!
//! ```
//! use smart_stopwatch::SmartStopwatch;
//!
//! let mut first_loop = SmartStopwatch::with_label("first");
//! let mut second_loop = SmartStopwatch::with_label("second");
//!
//! for _ in 0..10 {
//!     first_loop.resume();
//!     // work in the first loop
//!     first_loop.pause();
//!
//!     for _ in 0..100 {
//!         second_loop.resume();
//!         // work in the second loop
//!         second_loop.pause();
//!     }
//! }
//!
//! // Emitted through `tracing` at debug level as `first;Stop;...`.
//! let line = first_loop.stop();
//! assert!(line.starts_with("first;Stop;"));
//! second_loop.stop();
//! ```

#[derive(Debug, Clone)]
pub struct StopwatchConfig {
    /// Falls back to the instance counter when unset.
    pub label: Option<String>,
    pub output_pause_elapsed: bool,
    pub output_stop_elapsed: bool,
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self {
            label: None,
            output_pause_elapsed: false,
            output_stop_elapsed: true,
        }
    }
}

mod report;
mod seq;
mod sink;
mod stopwatch;
mod timer;

pub use report::{Action, Interval, Report};
pub use sink::{DiagnosticSink, MemorySink, NullSink, TracingSink};
pub use stopwatch::{SmartStopwatch, State};
pub use timer::{Instantaneous, Timer};
