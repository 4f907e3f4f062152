//! World state and stepwise interpreter for the plate language.
//!
//! - [`world`]: the grid, agent position and held plates
//! - [`level`]: the `.level` text format
//! - [`execute`]: one primitive against a world
//! - [`Stepper`]: runs a program one observable step per `next`

mod error;
mod exec;
pub mod level;
mod stepper;
pub mod world;

pub use error::{EvalError, LevelError, WorldError};
pub use exec::{execute, would_succeed};
pub use level::parse_level;
pub use stepper::{run_program, run_to_end, RunOutcome, RunSummary, Step, Stepper};
pub use world::{Cell, Plate, Position, World};
