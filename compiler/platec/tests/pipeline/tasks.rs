use plate_eval::{Position, RunOutcome, World};
use platec::{load_level, run};
use pretty_assertions::assert_eq;

const SWEEP: &str = include_str!("../fixtures/sweep.plate");
const CORNERS: &str = include_str!("../fixtures/corners.plate");

const PICK_ALL: [&str; 3] = [
    include_str!("../fixtures/pick_all_1.level"),
    include_str!("../fixtures/pick_all_2.level"),
    include_str!("../fixtures/pick_all_3.level"),
];

const CORNER_LEVELS: [&str; 2] = [
    include_str!("../fixtures/corners_1.level"),
    include_str!("../fixtures/corners_2.level"),
];

fn corners_filled(world: &World) -> bool {
    let last = world.size() - 1;
    [(0, 0), (last, 0), (0, last), (last, last)]
        .into_iter()
        .all(|(column, row)| matches!(world.cell(Position::new(column, row)), Some(Some(_))))
}

#[test]
fn test_fixtures_load() {
    let sizes: Vec<usize> = PICK_ALL
        .iter()
        .chain(CORNER_LEVELS.iter())
        .map(|text| load_level(text).unwrap().size())
        .collect();
    assert_eq!(sizes, vec![3, 3, 3, 5, 5]);
}

#[test]
fn test_sweep_picks_every_plate() {
    for level in PICK_ALL {
        let before = load_level(level).unwrap().plates_on_grid();
        let result = run(SWEEP, level, Some(10_000)).unwrap();
        assert_eq!(result.summary.outcome, RunOutcome::Finished);
        assert_eq!(result.world.plates_on_grid(), 0);
        assert_eq!(result.world.plates().len(), before);
    }
}

#[test]
fn test_sweep_step_count() {
    let result = run(SWEEP, PICK_ALL[0], None).unwrap();
    assert_eq!(result.summary.steps, 24);
    assert_eq!(result.world.position(), Position::new(0, 2));
}

#[test]
fn test_budget_of_exact_step_count_finishes() {
    let unlimited = run(SWEEP, PICK_ALL[0], None).unwrap();
    let exact = run(SWEEP, PICK_ALL[0], Some(unlimited.summary.steps)).unwrap();
    assert_eq!(exact.summary, unlimited.summary);
    assert_eq!(exact.world, unlimited.world);

    let short = run(SWEEP, PICK_ALL[0], Some(unlimited.summary.steps - 1)).unwrap();
    assert_eq!(short.summary.outcome, RunOutcome::StepLimit);
}

#[test]
fn test_sweep_pick_order() {
    let result = run(SWEEP, PICK_ALL[2], None).unwrap();
    let ids: Vec<u32> = result.world.plates().iter().map(|p| p.id()).collect();
    // Zig-zag: row 0 rightwards, row 1 leftwards, row 2 rightwards.
    assert_eq!(ids, vec![1, 2, 3, 6, 5, 4, 7, 8, 9]);
}

#[test]
fn test_corners() {
    for level in CORNER_LEVELS {
        let initial = load_level(level).unwrap();
        assert!(!corners_filled(&initial));

        let result = run(CORNERS, level, Some(10_000)).unwrap();
        assert_eq!(result.summary.outcome, RunOutcome::Finished);
        assert!(corners_filled(&result.world), "{}", result.world);
        assert_eq!(result.world.plates_on_grid(), 4);
    }
}

#[test]
fn test_world_clone_resets_between_runs() {
    let pristine = load_level(PICK_ALL[1]).unwrap();
    let program = platec::compile(SWEEP).unwrap();

    let mut first = pristine.clone();
    let a = plate_eval::run_to_end(&mut first, &program, None).unwrap();
    let mut second = pristine.clone();
    let b = plate_eval::run_to_end(&mut second, &program, None).unwrap();

    assert_eq!(a, b);
    assert_eq!(first, second);
    assert_eq!(pristine.plates_on_grid(), 3);
}
