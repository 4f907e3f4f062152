//! Level files: a textual description of an initial world.
//!
//! ```text
//! # a 3x3 room with one plate in the corner
//! position 1 0
//! plates 7 8
//! 1 _ _
//! _ _ _
//! _ _ _
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. `position <column>
//! <row>` places the agent (default `0 0`), `plates <id> ...` fills the held
//! stack bottom first (default empty). Every other line is a grid row in the
//! [`World::parse_grid`] format. Directives may appear anywhere.

use crate::error::{LevelError, WorldError};
use crate::world::{Plate, Position, World};

const POSITION: &str = "position";
const PLATES: &str = "plates";

/// Parse a level file into a world.
pub fn parse_level(text: &str) -> Result<World, LevelError> {
    let mut rows: Vec<(usize, &str)> = Vec::new();
    let mut position: Option<(usize, Position)> = None;
    let mut plates: Vec<Plate> = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut words = trimmed.split_whitespace();
        match words.next() {
            Some(POSITION) => {
                if position.is_some() {
                    return Err(directive(line, "duplicate `position` directive"));
                }
                let coords: Vec<&str> = words.collect();
                let [column, row] = coords.as_slice() else {
                    return Err(directive(line, "`position` takes a column and a row"));
                };
                let column = parse_index(line, column)?;
                let row = parse_index(line, row)?;
                position = Some((line, Position::new(column, row)));
            }
            Some(PLATES) => {
                for id in words {
                    plates.push(parse_plate(line, id)?);
                }
            }
            _ => rows.push((line, trimmed)),
        }
    }

    let (position_line, position) = match position {
        Some((line, position)) => (Some(line), position),
        None => (None, Position::default()),
    };

    let result = World::parse_grid(rows.iter().map(|(_, text)| *text), position, plates);
    result.map_err(|error| {
        let line = match &error {
            WorldError::InvalidCell { row, .. } | WorldError::NotSquare { row, .. } => {
                rows.get(*row).map(|(line, _)| *line)
            }
            WorldError::PositionOutOfBounds { .. } => position_line,
            WorldError::EmptyGrid => None,
        };
        match line {
            Some(line) => LevelError::Grid {
                line,
                source: error,
            },
            None => LevelError::World(error),
        }
    })
}

fn directive(line: usize, message: impl Into<String>) -> LevelError {
    LevelError::Directive {
        line,
        message: message.into(),
    }
}

fn parse_index(line: usize, text: &str) -> Result<usize, LevelError> {
    text.parse()
        .map_err(|_| directive(line, format!("`{text}` is not a grid coordinate")))
}

fn parse_plate(line: usize, text: &str) -> Result<Plate, LevelError> {
    text.parse()
        .ok()
        .and_then(Plate::new)
        .ok_or_else(|| directive(line, format!("`{text}` is not a positive plate id")))
}
