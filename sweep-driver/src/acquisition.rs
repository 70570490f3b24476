use crate::cancel::CancelToken;
use crate::constants::DEFAULT_COMPLETION_ANGLE;
use crate::error::SweepError;
use crate::parser::parse;
use crate::serial::LineSource;
use std::time::{Duration, Instant};
use sweep_data::{Sample, Sweep};

#[derive(Clone, Debug, PartialEq)]
pub struct AcquisitionConfig {
    /// An accepted angle at or above this ends the sweep.
    pub completion_angle: i64,
    /// Upper bound on the whole acquisition, checked between reads.
    pub deadline: Option<Duration>,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        AcquisitionConfig {
            completion_angle: DEFAULT_COMPLETION_ANGLE,
            deadline: None,
        }
    }
}

/// Why the loop stopped collecting.
#[derive(Debug)]
pub enum Completion {
    ThresholdReached,
    ReadFailed(SweepError),
    Cancelled,
    DeadlineExpired,
}

/// Outcome of handling one read while collecting.
#[derive(Debug)]
enum Step {
    Collecting,
    Skipped,
    Done(Completion),
}

#[derive(Debug)]
pub struct Acquisition {
    pub completion: Completion,
    /// Lines that were skipped because they did not parse.
    pub malformed_lines: usize,
}

impl Acquisition {
    /// True when the sweep ended by reaching the completion angle.
    pub fn is_complete(&self) -> bool {
        matches!(self.completion, Completion::ThresholdReached)
    }
}

/// Receives one-way notifications while a sweep is collected.
pub trait SweepSink {
    fn on_sample(&mut self, sample: &Sample);
    fn on_malformed(&mut self, error: &SweepError);
    fn on_read_failure(&mut self, error: &SweepError);
}

/// Reports progress through the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl SweepSink for LogSink {
    fn on_sample(&mut self, sample: &Sample) {
        log::info!("Angle: {}, Distance: {}", sample.angle, sample.distance);
    }

    fn on_malformed(&mut self, error: &SweepError) {
        log::warn!("{}. Skipping...", error);
    }

    fn on_read_failure(&mut self, error: &SweepError) {
        log::error!("Error reading data: {}", error);
    }
}

/// Collects one sweep into `sweep`, which is reset first.
///
/// Malformed lines are reported and skipped. A read failure, cancellation or an
/// expired deadline ends the loop early and leaves the partial sweep in place.
pub fn acquire<S: LineSource, K: SweepSink>(
    source: &mut S,
    sweep: &mut Sweep,
    config: &AcquisitionConfig,
    cancel: &mut CancelToken,
    sink: &mut K,
) -> Acquisition {
    sweep.reset();
    let deadline = config.deadline.map(|d| Instant::now() + d);
    let mut malformed_lines = 0;

    log::info!("Capturing data...");
    loop {
        if cancel.is_cancelled() {
            log::warn!("Acquisition cancelled after {} samples", sweep.len());
            return finish(Completion::Cancelled, malformed_lines);
        }
        if deadline.is_some_and(|d| Instant::now() >= d) {
            log::warn!("Acquisition deadline expired after {} samples", sweep.len());
            return finish(Completion::DeadlineExpired, malformed_lines);
        }

        let line = source.read_line();
        match step(line, sweep, config, sink) {
            Step::Collecting => {}
            Step::Skipped => malformed_lines += 1,
            Step::Done(completion) => return finish(completion, malformed_lines),
        }
    }
}

/// One transition of the collecting state.
fn step<K: SweepSink>(
    line: Result<String, SweepError>,
    sweep: &mut Sweep,
    config: &AcquisitionConfig,
    sink: &mut K,
) -> Step {
    let parsed = match line {
        Ok(line) => parse(&line),
        Err(e) => Err(e),
    };

    match parsed {
        Ok(None) => Step::Collecting,
        Ok(Some(sample)) => {
            sweep.append(sample);
            sink.on_sample(&sample);
            if sample.angle >= config.completion_angle {
                Step::Done(Completion::ThresholdReached)
            } else {
                Step::Collecting
            }
        }
        Err(e) if e.is_recoverable() => {
            sink.on_malformed(&e);
            Step::Skipped
        }
        Err(e) => {
            sink.on_read_failure(&e);
            Step::Done(Completion::ReadFailed(e))
        }
    }
}

fn finish(completion: Completion, malformed_lines: usize) -> Acquisition {
    Acquisition {
        completion,
        malformed_lines,
    }
}
