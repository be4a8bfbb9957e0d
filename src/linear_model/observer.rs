use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use tracing::debug;

pub const DEFAULT_PROGRESS_INTERVAL: usize = 20;

/// Called by the training loop after every completed iteration.
///
/// `iteration` counts from 1. Returning `ControlFlow::Break` stops training;
/// the interrupted run is discarded and the estimator keeps whatever it had
/// before the call.
pub trait TrainingObserver {
    fn on_iteration(&mut self, iteration: usize, loss: f64) -> ControlFlow<()>;
}

impl<F> TrainingObserver for F
where
    F: FnMut(usize, f64) -> ControlFlow<()>,
{
    fn on_iteration(&mut self, iteration: usize, loss: f64) -> ControlFlow<()> {
        self(iteration, loss)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl TrainingObserver for Silent {
    fn on_iteration(&mut self, _iteration: usize, _loss: f64) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Emits a `debug` event with the current loss every `interval` iterations.
#[derive(Clone, Copy, Debug)]
pub struct ProgressLog {
    interval: usize,
}

impl ProgressLog {
    pub fn every(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
        }
    }

    pub fn interval(&self) -> usize {
        self.interval
    }
}

impl Default for ProgressLog {
    fn default() -> Self {
        Self::every(DEFAULT_PROGRESS_INTERVAL)
    }
}

impl TrainingObserver for ProgressLog {
    fn on_iteration(&mut self, iteration: usize, loss: f64) -> ControlFlow<()> {
        if iteration % self.interval == 0 {
            debug!(iteration, loss, "training progress");
        }
        ControlFlow::Continue(())
    }
}

/// Stops training once a wall-clock budget is spent.
///
/// A budget too large to represent as an `Instant` never expires.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now().checked_add(budget),
        }
    }

    pub fn at(at: Instant) -> Self {
        Self { at: Some(at) }
    }
}

impl TrainingObserver for Deadline {
    fn on_iteration(&mut self, iteration: usize, _loss: f64) -> ControlFlow<()> {
        if self.at.is_some_and(|at| Instant::now() >= at) {
            debug!(iteration, "training deadline reached");
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}
