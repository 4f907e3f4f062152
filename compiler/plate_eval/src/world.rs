//! World state: a square grid of plates, the agent's position, and the
//! stack of plates the agent holds.
//!
//! Fields are private and every constructor validates, so any `World`
//! value is N×N with N ≥ 1 and has its agent inside the grid. Primitive
//! actions keep both invariants.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use plate_ir::Direction;

use crate::error::{LevelError, WorldError};

/// A numbered plate. Ids are positive.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Plate(NonZeroU32);

impl Plate {
    /// Create a plate, or `None` for id 0.
    pub fn new(id: u32) -> Option<Plate> {
        NonZeroU32::new(id).map(Plate)
    }

    pub fn id(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Agent position; `column` is x, `row` is y.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub const fn new(column: usize, row: usize) -> Self {
        Position { column, row }
    }

    /// One step toward `direction`, or `None` when that leaves `0..size`.
    pub fn step(self, direction: Direction, size: usize) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let column = self.column.checked_add_signed(dx)?;
        let row = self.row.checked_add_signed(dy)?;
        (column < size && row < size).then_some(Position { column, row })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// A grid cell: empty or holding one plate.
pub type Cell = Option<Plate>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    grid: Vec<Vec<Cell>>,
    position: Position,
    plates: Vec<Plate>,
}

impl World {
    /// Create a world, checking that `grid` is square and non-empty and that
    /// `position` lies inside it.
    ///
    /// `plates` is the held stack, bottom first.
    pub fn new(
        grid: Vec<Vec<Cell>>,
        position: Position,
        plates: Vec<Plate>,
    ) -> Result<World, WorldError> {
        let size = grid.len();
        if size == 0 {
            return Err(WorldError::EmptyGrid);
        }
        if let Some((row, cells)) = grid.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(WorldError::NotSquare {
                row,
                expected: size,
                found: cells.len(),
            });
        }
        if position.column >= size || position.row >= size {
            return Err(WorldError::PositionOutOfBounds { position, size });
        }
        Ok(World {
            grid,
            position,
            plates,
        })
    }

    /// Create a world from textual rows such as `"1 _ 3"`.
    ///
    /// Cells are separated by single spaces; `_` is empty, anything else must
    /// be a positive plate id.
    pub fn parse_grid<I, S>(
        rows: I,
        position: Position,
        plates: Vec<Plate>,
    ) -> Result<World, WorldError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let grid = rows
            .into_iter()
            .enumerate()
            .map(|(row, text)| parse_row(row, text.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        World::new(grid, position, plates)
    }

    /// Side length N of the N×N grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.grid.len()
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Held plates, bottom first; the last one is picked up most recently.
    #[inline]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    /// Contents of the cell at `position`; `None` past the grid edge.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.grid
            .get(position.row)
            .and_then(|row| row.get(position.column))
            .copied()
    }

    /// Contents of the agent's cell.
    pub fn current_cell(&self) -> Cell {
        self.cell(self.position).flatten()
    }

    /// Number of plates lying on the grid.
    pub fn plates_on_grid(&self) -> usize {
        self.grid.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    fn current_mut(&mut self) -> Option<&mut Cell> {
        let Position { column, row } = self.position;
        self.grid.get_mut(row).and_then(|cells| cells.get_mut(column))
    }

    /// Pick up the plate under the agent. Fails on an empty cell.
    pub fn pick(&mut self) -> bool {
        let Some(plate) = self.current_mut().and_then(Option::take) else {
            return false;
        };
        self.plates.push(plate);
        true
    }

    /// Put the top held plate on the agent's cell. Fails when the cell is
    /// occupied or nothing is held.
    pub fn drop_plate(&mut self) -> bool {
        let Position { column, row } = self.position;
        let Some(cell) = self.grid.get_mut(row).and_then(|cells| cells.get_mut(column)) else {
            return false;
        };
        if cell.is_some() {
            return false;
        }
        let Some(top) = self.plates.pop() else {
            return false;
        };
        *cell = Some(top);
        true
    }

    /// Move one cell toward `direction`. Fails at the grid edge.
    pub fn move_agent(&mut self, direction: Direction) -> bool {
        match self.position.step(direction, self.size()) {
            Some(next) => {
                self.position = next;
                true
            }
            None => false,
        }
    }
}

fn parse_row(row: usize, text: &str) -> Result<Vec<Cell>, WorldError> {
    text.trim()
        .split(' ')
        .enumerate()
        .map(|(column, cell)| {
            parse_cell(cell).ok_or_else(|| WorldError::InvalidCell {
                row,
                column,
                text: cell.to_string(),
            })
        })
        .collect()
}

fn parse_cell(text: &str) -> Option<Cell> {
    if text == "_" {
        return Some(None);
    }
    text.parse::<u32>().ok().and_then(Plate::new).map(Some)
}

/// Parses the `.level` format, see [`crate::level`].
impl FromStr for World {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::level::parse_level(s)
    }
}

/// Grid rows with the agent's cell in brackets, then the held plates:
///
/// ```text
/// [1] _ _
/// _ _ _
/// _ _ _
/// plates: [2, 3]
/// ```
impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.grid.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                if column > 0 {
                    f.write_str(" ")?;
                }
                let here = self.position == Position::new(column, row);
                if here {
                    f.write_str("[")?;
                }
                match cell {
                    Some(plate) => write!(f, "{plate}")?,
                    None => f.write_str("_")?,
                }
                if here {
                    f.write_str("]")?;
                }
            }
            f.write_str("\n")?;
        }
        f.write_str("plates: [")?;
        for (i, plate) in self.plates.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{plate}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests;
