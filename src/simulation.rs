use crate::{Frame, Grid, Pacer};
use std::time::Duration;

/// Result of waiting for the next generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wait {
    Elapsed,
    Interrupted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Cancel key pressed during an unbounded run.
    User,
    /// The wait between generations was interrupted.
    Interrupted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Seed,
    Running,
    Stopped(StopReason),
    Completed,
}

impl LoopState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Stopped(_) | Self::Completed)
    }
}

/// How the run ended and at which generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub state: LoopState,
    pub generation: u64,
}

/// Receives everything the loop produces.
pub trait Observer {
    /// Called once per generation with the rendered field.
    fn frame(&mut self, frame: &Frame);

    /// Called right before the frame of `generation` is handed out.
    fn generation_produced(&mut self, _generation: u64) {}

    fn stopped(&mut self, reason: StopReason, generation: u64);

    fn completed(&mut self, limit: u64);
}

/// Source of user input.
pub trait Controls {
    /// Non-blocking check for a pending cancel request.
    fn cancel_requested(&mut self) -> bool;

    /// Blocks for `timeout` unless interrupted.
    fn wait(&mut self, timeout: Duration) -> Wait;
}

/// Repeats render, wait and advance over a [`Grid`].
pub struct SimulationLoop {
    grid: Grid,
    limit: u64,
    pacer: Pacer,
    generation: u64,
    state: LoopState,
}

impl SimulationLoop {
    /// `limit == 0` runs until cancelled, otherwise generations `0..=limit` are produced.
    pub fn new(grid: Grid, limit: u64, interval: Duration) -> Self {
        Self {
            grid,
            limit,
            pacer: Pacer::new(interval),
            generation: 0,
            state: LoopState::Seed,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    fn is_unbounded(&self) -> bool {
        self.limit == 0
    }

    fn should_continue(&self) -> bool {
        self.is_unbounded() || self.generation <= self.limit
    }

    /// Drives the simulation until it completes or is stopped.
    pub fn run(&mut self, controls: &mut impl Controls, observer: &mut impl Observer) -> Outcome {
        log::info!(
            "Starting {}x{} simulation, {} neighborhood (n={}), limit {}, interval {:?}",
            self.grid.width(),
            self.grid.height(),
            self.grid.neighborhood().name(),
            self.grid.neighborhood().selector(),
            self.limit,
            self.pacer.interval()
        );

        while !self.state.is_terminal() {
            self.state = self.step(controls, observer);
        }

        match self.state {
            LoopState::Stopped(reason) => observer.stopped(reason, self.generation),
            _ => observer.completed(self.limit),
        }
        log::info!("Simulation ended: {:?} at generation {}", self.state, self.generation);

        Outcome {
            state: self.state,
            generation: self.generation,
        }
    }

    fn step(&mut self, controls: &mut impl Controls, observer: &mut impl Observer) -> LoopState {
        if !self.should_continue() {
            return LoopState::Completed;
        }

        observer.generation_produced(self.generation);
        observer.frame(&self.grid.render(self.generation));

        if self.is_unbounded() && controls.cancel_requested() {
            return LoopState::Stopped(StopReason::User);
        }

        if controls.wait(self.pacer.remaining()) == Wait::Interrupted {
            return LoopState::Stopped(StopReason::Interrupted);
        }
        self.pacer.tick();
        log::trace!("{:.2} generations/s", self.pacer.rate());

        self.grid.advance();
        self.generation += 1;
        LoopState::Running
    }
}
