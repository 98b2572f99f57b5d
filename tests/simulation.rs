use conway_term::{
    Chime, Config, Controls, Frame, Grid, LoopState, Neighborhood, Observer, Population,
    SimulationLoop, StopReason, TerminalView, Wait,
};
use std::time::Duration;

const SEED: u64 = 42;

struct Counter {
    frames: Vec<u64>,
    populations: Vec<usize>,
}

impl Observer for Counter {
    fn frame(&mut self, frame: &Frame) {
        self.frames.push(frame.generation());
        self.populations.push(frame.alive());
    }

    fn stopped(&mut self, _reason: StopReason, _generation: u64) {}

    fn completed(&mut self, _limit: u64) {}
}

/// Cancels once `after` checks have been made.
struct CancelAfter {
    checks: u64,
    after: u64,
}

impl Controls for CancelAfter {
    fn cancel_requested(&mut self) -> bool {
        self.checks += 1;
        self.checks > self.after
    }

    fn wait(&mut self, _timeout: Duration) -> Wait {
        Wait::Elapsed
    }
}

fn counter() -> Counter {
    Counter {
        frames: Vec::new(),
        populations: Vec::new(),
    }
}

#[test]
fn test_config_to_completed_run() {
    let config = Config::from_args(["w=40", "h=20", "g=30", "s=250", "p=rnd", "r=42"]).unwrap();
    let grid = Grid::new(
        config.width,
        config.height,
        config.neighborhood,
        &config.population,
        config.seed,
    );
    let mut controls = CancelAfter { checks: 0, after: 0 };
    let mut observer = counter();

    let outcome = SimulationLoop::new(grid, config.generations, Duration::ZERO)
        .run(&mut controls, &mut observer);

    assert_eq!(outcome.state, LoopState::Completed);
    assert_eq!(outcome.generation, 31);
    assert_eq!(observer.frames, (0..=30).collect::<Vec<_>>());
    assert!(observer.populations.iter().all(|&p| p <= 800));
}

#[test]
fn test_unbounded_run_needs_cancel() {
    let grid = Grid::new(10, 10, Neighborhood::Full, &Population::Random, Some(SEED));
    let mut controls = CancelAfter { checks: 0, after: 200 };
    let mut observer = counter();

    let outcome = SimulationLoop::new(grid, 0, Duration::ZERO).run(&mut controls, &mut observer);

    assert_eq!(outcome.state, LoopState::Stopped(StopReason::User));
    assert_eq!(outcome.generation, 200);
    assert_eq!(observer.frames.len(), 201);
}

#[test]
fn test_same_seed_same_history() {
    let run = |seed| {
        let grid = Grid::new(20, 20, Neighborhood::Partial, &Population::Random, Some(seed));
        let mut observer = counter();
        SimulationLoop::new(grid, 25, Duration::ZERO)
            .run(&mut CancelAfter { checks: 0, after: 0 }, &mut observer);
        observer.populations
    };
    assert_eq!(run(SEED), run(SEED));
}

#[test]
fn test_fallback_selector_runs_like_full() {
    let history = |selector| {
        let grid = Grid::new(
            20,
            20,
            Neighborhood::from_selector(selector),
            &Population::Random,
            Some(SEED),
        );
        let mut observer = counter();
        SimulationLoop::new(grid, 15, Duration::ZERO)
            .run(&mut CancelAfter { checks: 0, after: 0 }, &mut observer);
        observer.populations
    };
    assert_eq!(history(6), history(3));
}

#[test]
fn test_terminal_view_prints_every_generation() {
    let grid = Grid::new(10, 10, Neighborhood::Full, &Population::Pattern("#0111".into()), None);
    let mut view = TerminalView::new(Vec::new(), Chime::silent());

    SimulationLoop::new(grid, 3, Duration::ZERO).run(&mut CancelAfter { checks: 0, after: 0 }, &mut view);

    let text = String::from_utf8(view.into_inner()).unwrap();
    assert!(text.contains("Seed generation"));
    for generation in 1..=3 {
        assert!(text.contains(&format!("Generation {generation} ")));
    }
    assert!(!text.contains("Generation 4 "));
    assert_eq!(text.matches("Alive: 3").count(), 4);
    assert!(text.contains("limit of 3 generations"));
}
