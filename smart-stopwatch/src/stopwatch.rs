use std::time::{Duration, Instant};

use metrics::{counter, histogram};
use tracing::{trace, warn};

use crate::{
    report::Report,
    seq,
    sink::{DiagnosticSink, TracingSink},
    timer::{Instantaneous, Timer},
    StopwatchConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Paused,
    Running,
}

/// Stopwatch that can be paused and resumed, summing only the time spent
/// between a `resume` and the following `pause` or `stop`.
///
/// Each pause produces `label;Pause;segment;total` and each stop produces
/// `label;Stop;total`. Both lines are returned to the caller and forwarded to
/// the sink when the matching output flag is set.
#[derive(Debug)]
pub struct SmartStopwatch<S = TracingSink, I = Instant> {
    label: String,
    elapsed: Duration,
    interval: Timer<I>,
    state: State,
    output_pause_elapsed: bool,
    output_stop_elapsed: bool,
    sink: S,
}

impl SmartStopwatch {
    pub fn new() -> Self {
        Self::with_config(StopwatchConfig::default(), TracingSink)
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self::with_config(
            StopwatchConfig {
                label: Some(label.into()),
                ..Default::default()
            },
            TracingSink,
        )
    }
}

impl Default for SmartStopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DiagnosticSink> SmartStopwatch<S> {
    pub fn with_config(config: StopwatchConfig, sink: S) -> Self {
        Self::with_clock(config, sink)
    }
}

impl<S: DiagnosticSink, I: Instantaneous> SmartStopwatch<S, I> {
    /// Like `with_config`, reading time from `I` instead of `std::time::Instant`.
    pub fn with_clock(config: StopwatchConfig, sink: S) -> Self {
        // The counter advances even when a label is given.
        let id = seq::next_instance_id();

        Self {
            label: config.label.unwrap_or_else(|| id.to_string()),
            elapsed: Duration::ZERO,
            interval: Timer::default(),
            state: State::Paused,
            output_pause_elapsed: config.output_pause_elapsed,
            output_stop_elapsed: config.output_stop_elapsed,
            sink,
        }
    }

    /// Discards everything accumulated so far and resumes.
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.state = State::Paused;
        self.resume();
    }

    /// Begins a new segment. Works without a prior `start`.
    pub fn resume(&mut self) {
        if self.state == State::Running {
            self.misuse("resume");
        }
        self.interval = Timer::default();
        self.interval.start();
        self.state = State::Running;
        trace!(label = %self.label, "resume");
    }

    /// Folds the current segment into the total. Pausing again before a
    /// `resume` folds zero.
    pub fn pause(&mut self) -> String {
        let segment = self.fold("pause");
        let line = Report::Pause {
            label: self.label.clone(),
            segment,
            total: self.elapsed,
        }
        .to_string();
        self.sink.write_line_if(self.output_pause_elapsed, &line);
        line
    }

    /// Pauses and reports only the total. A later `resume` keeps accumulating.
    /// Like `pause`, it folds zero when nothing is running.
    pub fn stop(&mut self) -> String {
        self.fold("stop");
        let line = Report::Stop {
            label: self.label.clone(),
            total: self.elapsed,
        }
        .to_string();
        self.sink.write_line_if(self.output_stop_elapsed, &line);
        line
    }

    /// Runs `f` as one segment.
    pub fn measure<T>(&mut self, f: impl FnOnce() -> T) -> (T, String) {
        self.resume();
        let t = f();
        let line = self.pause();
        (t, line)
    }

    // The folded timer is swapped for an idle one, so folding again while
    // paused adds zero.
    fn fold(&mut self, transition: &'static str) -> Duration {
        if self.state == State::Paused {
            self.misuse(transition);
        }
        let mut interval = std::mem::take(&mut self.interval);
        interval.stop();
        let segment = interval.elapsed();
        self.elapsed += segment;
        self.state = State::Paused;

        histogram!("smart_stopwatch::segment").record(segment.as_secs_f64());
        trace!(label = %self.label, ?segment, total = ?self.elapsed, "{transition}");
        segment
    }

    fn misuse(&self, transition: &'static str) {
        counter!("smart_stopwatch::misuse", "transition" => transition).increment(1);
        warn!(label = %self.label, state = ?self.state, "{transition} while {:?}", self.state);
    }

    /// Total accumulated since the last `start`, excluding a running segment.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Duration of the current segment only, live while running and zero while paused.
    pub fn segment_elapsed(&self) -> Duration {
        self.interval.elapsed()
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn output_pause_elapsed(&self) -> bool {
        self.output_pause_elapsed
    }

    pub fn set_output_pause_elapsed(&mut self, enabled: bool) {
        self.output_pause_elapsed = enabled;
    }

    pub fn output_stop_elapsed(&self) -> bool {
        self.output_stop_elapsed
    }

    pub fn set_output_stop_elapsed(&mut self, enabled: bool) {
        self.output_stop_elapsed = enabled;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
