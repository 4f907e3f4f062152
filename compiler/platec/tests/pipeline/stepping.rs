use plate_eval::{run_program, Plate, Position, Step};
use plate_ir::{Command, Direction};
use platec::{compile, load_level};
use pretty_assertions::assert_eq;

#[test]
fn test_drop_leftwards_from_column_three() {
    let mut world = load_level(
        "position 3 0
plates 1 2 3 4 5
_ _ _ _
_ _ _ _
_ _ _ _
_ _ _ _",
    )
    .unwrap();
    let program = compile("while (move left) { drop }").unwrap();

    let mut stepper = run_program(&mut world, &program);
    let mut held = Vec::new();
    let mut steps = Vec::new();
    while let Some(step) = stepper.next() {
        steps.push(step.unwrap());
        held.push(stepper.world().plates().len());
    }

    let condition = Step::Condition {
        command: Command::Move(Direction::Left),
    };
    let drop = Step::Command {
        command: Command::Drop,
        succeeded: true,
    };
    assert_eq!(steps, vec![condition, drop, condition, drop, condition, drop]);
    assert_eq!(held, vec![5, 4, 4, 3, 3, 2]);
    assert_eq!(world.position(), Position::new(0, 0));
    assert_eq!(world.cell(Position::new(0, 0)), Some(Plate::new(3)));
}

#[test]
fn test_caller_can_stop_early() {
    let mut world = load_level("3 2 1\n_ _ _\n_ _ _").unwrap();
    let program = compile("do { pick } while (move right)").unwrap();

    let taken: Vec<Step> = run_program(&mut world, &program)
        .take(2)
        .map(Result::unwrap)
        .collect();

    assert_eq!(taken.len(), 2);
    // Abandoned mid-loop: one plate picked, agent moved once.
    assert_eq!(world.plates().len(), 1);
    assert_eq!(world.position(), Position::new(1, 0));
    assert_eq!(world.plates_on_grid(), 2);
}

#[test]
fn test_display_between_steps() {
    let mut world = load_level("position 0 1\n1 _\n_ _").unwrap();
    let program = compile("move up pick").unwrap();

    let mut stepper = run_program(&mut world, &program);
    let mut frames = Vec::new();
    while let Some(step) = stepper.next() {
        step.unwrap();
        frames.push(stepper.world().to_string());
    }

    assert_eq!(
        frames,
        vec![
            "[1] _\n_ _\nplates: []".to_string(),
            "[_] _\n_ _\nplates: [1]".to_string(),
        ]
    );
}
