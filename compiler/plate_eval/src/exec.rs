//! Primitive execution.

use plate_ir::Command;

use crate::world::World;

/// Execute one primitive against `world` and report whether it succeeded.
///
/// A failed primitive leaves `world` unchanged. The same call backs both
/// plain commands and loop conditions.
#[tracing::instrument(level = "trace", skip(world), ret)]
pub fn execute(world: &mut World, command: Command) -> bool {
    match command {
        Command::Pick => world.pick(),
        Command::Drop => world.drop_plate(),
        Command::Move(direction) => world.move_agent(direction),
    }
}

/// Report whether [`execute`] would succeed, without touching `world`.
pub fn would_succeed(world: &World, command: Command) -> bool {
    match command {
        Command::Pick => world.current_cell().is_some(),
        Command::Drop => world.current_cell().is_none() && !world.plates().is_empty(),
        Command::Move(direction) => world.position().step(direction, world.size()).is_some(),
    }
}
