#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::{execute, would_succeed};
use plate_ir::Command;
use pretty_assertions::assert_eq;

fn plates(ids: &[u32]) -> Vec<Plate> {
    ids.iter().map(|&id| Plate::new(id).unwrap()).collect()
}

fn world(rows: &[&str], column: usize, row: usize, held: &[u32]) -> World {
    World::parse_grid(rows, Position::new(column, row), plates(held)).unwrap()
}

#[test]
fn test_plate_rejects_zero() {
    assert_eq!(Plate::new(0), None);
    assert_eq!(Plate::new(7).map(Plate::id), Some(7));
}

#[test]
fn test_parse_grid() {
    let w = world(&["1 _", "_ 22"], 1, 0, &[]);
    assert_eq!(w.size(), 2);
    assert_eq!(w.cell(Position::new(0, 0)), Some(Plate::new(1)));
    assert_eq!(w.cell(Position::new(1, 0)), Some(None));
    assert_eq!(w.cell(Position::new(1, 1)), Some(Plate::new(22)));
    assert_eq!(w.cell(Position::new(2, 0)), None);
    assert_eq!(w.plates_on_grid(), 2);
}

#[test]
fn test_empty_grid_is_rejected() {
    let rows: [&str; 0] = [];
    assert_eq!(
        World::parse_grid(rows, Position::default(), vec![]),
        Err(WorldError::EmptyGrid)
    );
}

#[test]
fn test_non_square_grid_is_rejected() {
    let err = World::parse_grid(["_ _", "_"], Position::default(), vec![]).unwrap_err();
    assert_eq!(
        err,
        WorldError::NotSquare {
            row: 1,
            expected: 2,
            found: 1,
        }
    );
    assert_eq!(err.code(), plate_diagnostic::ErrorCode::E5002);
}

#[test]
fn test_invalid_cells_are_rejected() {
    for bad in ["0", "x", "-1", "1.5"] {
        let row = format!("_ {bad}");
        let rows = [row.as_str(), "_ _"];
        let err = World::parse_grid(rows, Position::default(), vec![]).unwrap_err();
        assert!(
            matches!(err, WorldError::InvalidCell { row: 0, column: 1, .. }),
            "{bad:?} gave {err:?}"
        );
    }
}

#[test]
fn test_double_space_is_an_empty_cell_text() {
    let err = World::parse_grid(["_  _", "_ _", "_ _"], Position::default(), vec![]).unwrap_err();
    assert!(matches!(err, WorldError::InvalidCell { column: 1, .. }));
}

#[test]
fn test_position_out_of_bounds() {
    let err = World::parse_grid(["_"], Position::new(0, 1), vec![]).unwrap_err();
    assert_eq!(err.to_string(), "position (0, 1) is outside the 1x1 grid");
}

#[test]
fn test_display_marks_agent() {
    let w = world(&["1 _ _", "_ _ _", "_ _ 3"], 1, 0, &[4, 5]);
    assert_eq!(w.to_string(), "1 [_] _\n_ _ _\n_ _ 3\nplates: [4, 5]");
}

#[test]
fn test_pick_from_plate_cell() {
    let mut w = world(&["1 _", "_ _"], 0, 0, &[9]);
    assert!(execute(&mut w, Command::Pick));
    assert_eq!(w.current_cell(), None);
    assert_eq!(w.plates(), plates(&[9, 1]).as_slice());
}

#[test]
fn test_pick_from_empty_cell_changes_nothing() {
    let mut w = world(&["1 _", "_ _"], 1, 0, &[9]);
    let before = w.clone();
    assert!(!execute(&mut w, Command::Pick));
    assert_eq!(w, before);
}

#[test]
fn test_drop_onto_empty_cell() {
    let mut w = world(&["_ _", "_ _"], 1, 1, &[3, 4]);
    assert!(execute(&mut w, Command::Drop));
    assert_eq!(w.current_cell(), Plate::new(4));
    assert_eq!(w.plates(), plates(&[3]).as_slice());
}

#[test]
fn test_drop_onto_occupied_cell_changes_nothing() {
    let mut w = world(&["2 _", "_ _"], 0, 0, &[3]);
    let before = w.clone();
    assert!(!execute(&mut w, Command::Drop));
    assert_eq!(w, before);
}

#[test]
fn test_drop_with_no_plates_changes_nothing() {
    let mut w = world(&["_ _", "_ _"], 0, 0, &[]);
    let before = w.clone();
    assert!(!execute(&mut w, Command::Drop));
    assert_eq!(w, before);
}

#[test]
fn test_move_from_interior() {
    for (direction, expected) in [
        (Direction::Up, Position::new(1, 0)),
        (Direction::Down, Position::new(1, 2)),
        (Direction::Left, Position::new(0, 1)),
        (Direction::Right, Position::new(2, 1)),
    ] {
        let mut w = world(&["_ _ _", "_ _ _", "_ _ _"], 1, 1, &[]);
        assert!(execute(&mut w, Command::Move(direction)));
        assert_eq!(w.position(), expected, "{direction}");
    }
}

#[test]
fn test_move_into_boundary_changes_nothing() {
    for (direction, column, row) in [
        (Direction::Up, 1, 0),
        (Direction::Down, 1, 2),
        (Direction::Left, 0, 1),
        (Direction::Right, 2, 1),
    ] {
        let mut w = world(&["_ _ _", "_ _ _", "_ _ _"], column, row, &[]);
        let before = w.clone();
        assert!(!execute(&mut w, Command::Move(direction)), "{direction}");
        assert_eq!(w, before);
    }
}

#[test]
fn test_single_cell_world_cannot_move() {
    let mut w = world(&["5"], 0, 0, &[]);
    for direction in Direction::ALL {
        assert!(!w.move_agent(direction));
    }
    assert_eq!(w.position(), Position::new(0, 0));
}

#[test]
fn test_would_succeed_matches_execute() {
    let mut commands = vec![Command::Pick, Command::Drop];
    commands.extend(Direction::ALL.map(Command::Move));
    let worlds = [
        world(&["1 _", "_ _"], 0, 0, &[]),
        world(&["1 _", "_ _"], 1, 0, &[2]),
        world(&["1 _", "_ _"], 0, 0, &[2]),
        world(&["_ _", "_ 3"], 1, 1, &[]),
        world(&["5"], 0, 0, &[]),
    ];
    for initial in &worlds {
        for &command in &commands {
            let predicted = would_succeed(initial, command);
            let mut w = initial.clone();
            assert_eq!(predicted, execute(&mut w, command), "{command} on\n{initial}");
        }
    }
}
