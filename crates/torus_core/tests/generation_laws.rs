//! Integration tests for the generation engine.
//!
//! Covers the counter law, batch rejection, fixed points, dispatch
//! determinism and two hand-computed 5x5 generations.

use torus_core::{Grid, LifeError, StepScheduler, MAX_STEPS_PER_CALL};

fn render(grid: &Grid) -> Vec<String> {
    grid.snapshot()
        .rows()
        .map(|row| {
            row.iter()
                .map(|c| if c.is_alive() { 'X' } else { '.' })
                .collect()
        })
        .collect()
}

fn seeded(width: usize, height: usize, scheduler: StepScheduler, seed: u64) -> Grid {
    let mut grid = Grid::with_scheduler(width, height, scheduler).unwrap();
    grid.randomize_seeded(0.35, seed).unwrap();
    grid
}

// ============================================================================
// SHAPE
// ============================================================================

#[test]
fn grid_has_width_times_height_cells() {
    for (w, h) in [(1, 1), (1, 9), (9, 1), (80, 200), (13, 7)] {
        let grid = Grid::create(w, h).unwrap();
        assert_eq!(grid.cell_count(), w * h);
        assert_eq!(grid.snapshot().cells().len(), w * h);
        assert_eq!(grid.snapshot().rows().count(), h);
    }
}

#[test]
fn zero_dimension_is_rejected() {
    assert_eq!(
        Grid::create(0, 10).unwrap_err(),
        LifeError::InvalidDimension { width: 0, height: 10 }
    );
    assert_eq!(
        Grid::create(10, 0).unwrap_err(),
        LifeError::InvalidDimension { width: 10, height: 0 }
    );
}

// ============================================================================
// WORKED EXAMPLES
// ============================================================================

#[test]
fn five_by_five_single_step() {
    let mut grid = Grid::from_rows(&[
        ".X...",
        "XXX..",
        ".X.X.",
        "...XX",
        ".....",
    ])
    .unwrap();

    grid.step(1).unwrap();

    // (0,2) and (4,2) were dead and come alive; (4,2) only through the
    // left/right wrap.
    assert_eq!(
        render(&grid),
        vec![
            ".....",
            ".XX..",
            "X.X.X",
            ".....",
            ".....",
        ]
    );
    assert_eq!(grid.generation(), 1);
}

#[test]
fn five_by_five_corner_wrap() {
    let mut grid = Grid::from_rows(&[
        "XX...",
        "XX...",
        ".....",
        ".....",
        "X...X",
    ])
    .unwrap();

    grid.step(1).unwrap();

    assert_eq!(
        render(&grid),
        vec![
            "XX..X",
            ".....",
            ".....",
            ".....",
            ".....",
        ]
    );
}

// ============================================================================
// COUNTER LAW
// ============================================================================

#[test]
fn generation_advances_by_exactly_n() {
    let mut grid = seeded(30, 20, StepScheduler::parallel(), 3);
    let mut expected = 0;
    for n in [1, 7, 1, 25] {
        grid.step(n).unwrap();
        expected += n as u64;
        assert_eq!(grid.generation(), expected);
    }
}

#[test]
fn randomize_resets_generation_and_snapshot_does_not_change_it() {
    let mut grid = seeded(16, 16, StepScheduler::sequential(), 5);
    grid.step(12).unwrap();

    let _ = grid.snapshot();
    let _ = grid.snapshot();
    assert_eq!(grid.generation(), 12);

    grid.randomize(0.5).unwrap();
    assert_eq!(grid.generation(), 0);
}

#[test]
fn max_batch_is_accepted() {
    let mut grid = Grid::with_scheduler(4, 4, StepScheduler::sequential()).unwrap();
    let elapsed = grid.step(MAX_STEPS_PER_CALL).unwrap();
    assert!(elapsed >= 0.0);
    assert_eq!(grid.generation(), 10_000);
}

// ============================================================================
// BOUNDARY REJECTION
// ============================================================================

#[test]
fn invalid_step_counts_change_nothing() {
    let mut grid = seeded(12, 9, StepScheduler::parallel(), 11);
    grid.step(2).unwrap();
    let before = grid.snapshot().as_bytes().to_vec();

    for n in [0, -5, 10_001, i64::MIN, i64::MAX] {
        assert_eq!(grid.step(n), Err(LifeError::InvalidStepCount(n)));
        assert_eq!(grid.generation(), 2);
        assert_eq!(grid.snapshot().as_bytes(), before.as_slice());
    }
}

// ============================================================================
// FIXED POINTS
// ============================================================================

#[test]
fn all_dead_stays_dead() {
    let mut grid = Grid::create(9, 6).unwrap();
    grid.step(1).unwrap();
    assert_eq!(grid.snapshot().alive_count(), 0);
    grid.step(50).unwrap();
    assert_eq!(grid.snapshot().alive_count(), 0);
}

#[test]
fn all_alive_stays_alive() {
    let mut grid = Grid::create(7, 5).unwrap();
    grid.randomize_seeded(1.0, 0).unwrap();
    grid.step(3).unwrap();
    assert_eq!(grid.snapshot().alive_count(), 35);
    assert!((grid.snapshot().population_percent() - 100.0).abs() < 1e-9);
}

// ============================================================================
// DETERMINISM
// ============================================================================

#[test]
fn dispatch_does_not_change_results() {
    let schedulers = [
        StepScheduler::sequential(),
        StepScheduler::with_threads(1).unwrap(),
        StepScheduler::with_threads(3).unwrap(),
        StepScheduler::with_threads(8).unwrap(),
        StepScheduler::parallel(),
    ];

    let outcomes: Vec<Vec<u8>> = schedulers
        .into_iter()
        .map(|scheduler| {
            let mut grid = seeded(64, 41, scheduler, 2024);
            grid.step(1).unwrap();
            grid.step(9).unwrap();
            grid.snapshot().as_bytes().to_vec()
        })
        .collect();

    for outcome in &outcomes[1..] {
        assert_eq!(outcome, &outcomes[0]);
    }
}

#[test]
fn thin_grids_wrap_onto_themselves() {
    // A 1-wide column sees each row neighbor three times (west, center and
    // east all wrap to the same column).
    let mut grid = Grid::from_rows(&["X", "X", "."]).unwrap();
    grid.step(1).unwrap();
    assert_eq!(render(&grid), vec!["X", "X", "X"]);
}
