//! Step tracing shared by every algorithm.
//!
//! The caller builds a [`TraceConfig`] once per run and hands a [`Tracer`] to the algorithm. The
//! algorithm only reads the configuration. With tracing disabled every method is a no-op and
//! nothing is formatted.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use crate::RunStats;

/// Environment variable toggling tracing, accepts `1/true/yes/on` and `0/false/no/off`.
pub const TRACE_ENV: &str = "SORT_SEARCH_TRACE";

/// Environment variable holding the pause between traced steps, either a [`Pace`] name or a
/// duration like `250ms`.
pub const STEP_DELAY_ENV: &str = "SORT_SEARCH_STEP_DELAY";

/// Preset pauses between traced steps.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Pace {
    Fast,
    #[default]
    Normal,
    Slow,
}

impl Pace {
    pub fn delay(self) -> Duration {
        match self {
            Pace::Fast => Duration::from_millis(300),
            Pace::Normal => Duration::from_millis(800),
            Pace::Slow => Duration::from_millis(1500),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown pace `{0}`, expected fast/normal/slow or 1/2/3")]
pub struct UnknownPace(String);

impl FromStr for Pace {
    type Err = UnknownPace;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" | "1" => Ok(Pace::Fast),
            "normal" | "2" => Ok(Pace::Normal),
            "slow" | "3" => Ok(Pace::Slow),
            _ => Err(UnknownPace(s.to_owned())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}, expected one of 1/true/yes/on or 0/false/no/off")]
    InvalidToggle { key: &'static str, value: String },
    #[error("invalid value `{value}` for {key}, expected fast/normal/slow or a duration")]
    InvalidDelay {
        key: &'static str,
        value: String,
        #[source]
        source: humantime::DurationError,
    },
}

/// Process configuration for step tracing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TraceConfig {
    pub enabled: bool,
    pub step_delay: Duration,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            step_delay: Pace::default().delay(),
        }
    }
}

impl TraceConfig {
    pub fn enabled(pace: Pace) -> Self {
        Self {
            enabled: true,
            step_delay: pace.delay(),
        }
    }

    /// Reads [`TRACE_ENV`] and [`STEP_DELAY_ENV`], unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(TRACE_ENV) {
            config.enabled = parse_toggle(TRACE_ENV, &value)?;
        }

        if let Some(value) = lookup(STEP_DELAY_ENV) {
            config.step_delay = parse_delay(STEP_DELAY_ENV, &value)?;
        }

        Ok(config)
    }
}

fn parse_toggle(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidToggle {
            key,
            value: value.to_owned(),
        }),
    }
}

fn parse_delay(key: &'static str, value: &str) -> Result<Duration, ConfigError> {
    if let Ok(pace) = value.parse::<Pace>() {
        return Ok(pace.delay());
    }

    humantime::parse_duration(value.trim()).map_err(|source| ConfigError::InvalidDelay {
        key,
        value: value.to_owned(),
        source,
    })
}

/// Receiver of trace events.
///
/// Only called by [`Tracer`] while tracing is enabled.
pub trait TraceSink {
    /// A snapshot of the whole sequence with the positions the algorithm is working on.
    fn step(&mut self, v: &[i32], label: fmt::Arguments<'_>, highlight: &[usize]);

    /// Outcome of comparing two keys, `will_act` is true if the algorithm moves them.
    fn comparison(&mut self, a: i32, b: i32, will_act: bool);

    fn note(&mut self, message: fmt::Arguments<'_>);

    /// Blocks until the observer is ready to continue.
    fn acknowledge(&mut self) {}

    /// Pacing between steps. Blocks the calling thread by default.
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    fn complete(&mut self, algorithm: &str, stats: &RunStats);
}

/// Handle given to every algorithm run.
pub struct Tracer<'a> {
    config: TraceConfig,
    sink: Option<&'a mut dyn TraceSink>,
}

impl<'a> Tracer<'a> {
    pub fn new(config: TraceConfig, sink: &'a mut dyn TraceSink) -> Self {
        Self {
            config,
            sink: Some(sink),
        }
    }

    pub fn disabled() -> Tracer<'static> {
        Tracer {
            config: TraceConfig::default(),
            sink: None,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled && self.sink.is_some()
    }

    pub fn step_delay(&self) -> Duration {
        self.config.step_delay
    }

    #[inline]
    fn sink(&mut self) -> Option<&mut (dyn TraceSink + 'a)> {
        if !self.config.enabled {
            return None;
        }

        self.sink.as_deref_mut()
    }

    /// Emits a snapshot and then paces by the configured delay.
    #[inline]
    pub fn step(&mut self, v: &[i32], label: fmt::Arguments<'_>, highlight: &[usize]) {
        let delay = self.config.step_delay;
        if let Some(sink) = self.sink() {
            sink.step(v, label, highlight);
            sink.pause(delay);
        }
    }

    #[inline]
    pub fn comparison(&mut self, a: i32, b: i32, will_act: bool) {
        if let Some(sink) = self.sink() {
            sink.comparison(a, b, will_act);
        }
    }

    #[inline]
    pub fn note(&mut self, message: fmt::Arguments<'_>) {
        if let Some(sink) = self.sink() {
            sink.note(message);
        }
    }

    #[inline]
    pub fn wait_for_ack(&mut self) {
        if let Some(sink) = self.sink() {
            sink.acknowledge();
        }
    }

    pub fn complete(&mut self, algorithm: &str, stats: &RunStats) {
        if let Some(sink) = self.sink() {
            sink.complete(algorithm, stats);
        }
    }
}

/// Renders `v` with the highlighted positions wrapped in brackets, e.g. `5 [2] 8 1`.
pub fn render(v: &[i32], highlight: &[usize]) -> String {
    let mut out = String::with_capacity(v.len() * 4);
    for (i, val) in v.iter().enumerate() {
        if i != 0 {
            out.push(' ');
        }

        if highlight.contains(&i) {
            out.push('[');
            out.push_str(&val.to_string());
            out.push(']');
        } else {
            out.push_str(&val.to_string());
        }
    }

    out
}

/// Forwards trace events to `tracing`.
#[derive(Debug, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn step(&mut self, v: &[i32], label: fmt::Arguments<'_>, highlight: &[usize]) {
        info!(target: "sort_search_rs::trace", "{label}: {}", render(v, highlight));
    }

    fn comparison(&mut self, a: i32, b: i32, will_act: bool) {
        let outcome = if will_act { "act" } else { "keep" };
        debug!(target: "sort_search_rs::trace", a, b, outcome, "compare {a} and {b}");
    }

    fn note(&mut self, message: fmt::Arguments<'_>) {
        debug!(target: "sort_search_rs::trace", "{message}");
    }

    fn acknowledge(&mut self) {
        debug!(target: "sort_search_rs::trace", "checkpoint");
    }

    fn complete(&mut self, algorithm: &str, stats: &RunStats) {
        info!(
            target: "sort_search_rs::trace",
            algorithm,
            comparisons = stats.comparisons,
            moves = stats.moves,
            "completed"
        );
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    Step {
        snapshot: Vec<i32>,
        label: String,
        highlight: Vec<usize>,
    },
    Comparison {
        a: i32,
        b: i32,
        will_act: bool,
    },
    Note(String),
    Acknowledge,
    Pause(Duration),
    Complete {
        algorithm: String,
        stats: RunStats,
    },
}

/// Collects every event in order. Pauses are recorded, not slept.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<TraceEvent>,
}

impl RecordingSink {
    /// Highlighted positions of every recorded step, in order.
    pub fn highlights(&self) -> Vec<Vec<usize>> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TraceEvent::Step { highlight, .. } => Some(highlight.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn notes(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TraceEvent::Note(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl TraceSink for RecordingSink {
    fn step(&mut self, v: &[i32], label: fmt::Arguments<'_>, highlight: &[usize]) {
        self.events.push(TraceEvent::Step {
            snapshot: v.to_vec(),
            label: label.to_string(),
            highlight: highlight.to_vec(),
        });
    }

    fn comparison(&mut self, a: i32, b: i32, will_act: bool) {
        self.events.push(TraceEvent::Comparison { a, b, will_act });
    }

    fn note(&mut self, message: fmt::Arguments<'_>) {
        self.events.push(TraceEvent::Note(message.to_string()));
    }

    fn acknowledge(&mut self) {
        self.events.push(TraceEvent::Acknowledge);
    }

    fn pause(&mut self, delay: Duration) {
        self.events.push(TraceEvent::Pause(delay));
    }

    fn complete(&mut self, algorithm: &str, stats: &RunStats) {
        self.events.push(TraceEvent::Complete {
            algorithm: algorithm.to_owned(),
            stats: *stats,
        });
    }
}
