//! Resumable, step-at-a-time program execution.
//!
//! A [`Stepper`] is an explicit state machine: a stack of frames recording
//! where execution stands in each enclosing node sequence and loop. Each
//! call to `next` runs forward to the next observable step (one primitive
//! command, or one loop condition that held) and returns, leaving the world
//! ready to inspect.
//!
//! Step order for the loop forms:
//!
//! - `WHILE (c) { b }`: test `c`; if it held, yield it and run `b`, then
//!   test again. A failed test ends the loop without a step.
//! - `DO { b } WHILE (c)`: run `b` first with no step for entering the loop,
//!   then continue as `WHILE`.

use std::fmt;

use plate_ir::{Command, Node};

use crate::error::EvalError;
use crate::exec::{execute, would_succeed};
use crate::world::World;

/// One observable unit of execution.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Step {
    /// A primitive from a program or loop body, and whether it took effect.
    Command { command: Command, succeeded: bool },
    /// A loop condition that held. Conditions that fail produce no step.
    Condition { command: Command },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Command {
                command,
                succeeded: true,
            } => write!(f, "{command}"),
            Step::Command {
                command,
                succeeded: false,
            } => write!(f, "{command} (no effect)"),
            Step::Condition { command } => write!(f, "{command} (condition held)"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum LoopPhase {
    /// Test the condition next.
    Check,
    /// Run the body next.
    Body,
}

#[derive(Copy, Clone, Debug)]
enum Frame<'p> {
    Sequence {
        nodes: &'p [Node],
        index: usize,
    },
    Loop {
        condition: &'p Node,
        body: &'p [Node],
        phase: LoopPhase,
    },
}

/// Cursor over a running program.
///
/// Yields `Ok(step)` once per step and `None` when the program is done.
/// After an `Err` it yields `None` forever; the world keeps every change
/// made before the failing step.
pub struct Stepper<'w, 'p> {
    world: &'w mut World,
    frames: Vec<Frame<'p>>,
    steps: u64,
}

impl<'w, 'p> Stepper<'w, 'p> {
    pub fn new(world: &'w mut World, program: &'p [Node]) -> Self {
        Stepper {
            world,
            frames: vec![Frame::Sequence {
                nodes: program,
                index: 0,
            }],
            steps: 0,
        }
    }

    /// The world as of the last step.
    pub fn world(&self) -> &World {
        self.world
    }

    /// Number of steps yielded so far.
    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    /// Check if no further step can happen: the next pull yields `None`
    /// or an error.
    ///
    /// Looks ahead on a copy of the frames. Pending loop conditions are
    /// tested with [`would_succeed`], so the world is never touched.
    pub fn is_finished(&self) -> bool {
        let mut frames = self.frames.clone();
        loop {
            match next_action(&mut frames) {
                None => return true,
                Some(Action::Command(_)) => return false,
                Some(Action::Check(condition)) => match condition.as_command() {
                    Some(command) if would_succeed(self.world, command) => return false,
                    Some(_) => {
                        frames.pop();
                    }
                    None => return true,
                },
            }
        }
    }

    /// Current nesting depth: 1 at top level, plus one sequence and one loop
    /// frame per enclosing loop.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    fn yielded(&mut self, step: Step) -> Option<Result<Step, EvalError>> {
        self.steps += 1;
        tracing::trace!(step = self.steps, %step, position = %self.world.position(), "step");
        Some(Ok(step))
    }

    fn fail(&mut self, error: EvalError) -> Option<Result<Step, EvalError>> {
        tracing::debug!(%error, steps = self.steps, "run aborted");
        self.frames.clear();
        Some(Err(error))
    }
}

impl Iterator for Stepper<'_, '_> {
    type Item = Result<Step, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match next_action(&mut self.frames)? {
                Action::Command(command) => {
                    let succeeded = execute(self.world, command);
                    return self.yielded(Step::Command { command, succeeded });
                }
                Action::Check(condition) => {
                    let Some(command) = condition.as_command() else {
                        return self.fail(EvalError::invalid_condition(condition));
                    };
                    if execute(self.world, command) {
                        if let Some(Frame::Loop { phase, .. }) = self.frames.last_mut() {
                            *phase = LoopPhase::Body;
                        }
                        return self.yielded(Step::Condition { command });
                    }
                    tracing::debug!(%command, steps = self.steps, "loop exited");
                    self.frames.pop();
                }
            }
        }
    }
}

/// What the frames want done next.
#[derive(Copy, Clone, Debug)]
enum Action<'p> {
    /// Run a primitive from a sequence.
    Command(Command),
    /// Test the condition of the loop frame on top.
    Check(&'p Node),
}

/// Advance `frames` past structural bookkeeping to the next action.
///
/// Entering loops and bodies and popping exhausted sequences never mutate
/// the world or count as a step. On `Check` the loop frame stays on top in
/// the `Check` phase for the caller to resolve.
fn next_action<'p>(frames: &mut Vec<Frame<'p>>) -> Option<Action<'p>> {
    loop {
        match *frames.last_mut()? {
            Frame::Sequence {
                nodes,
                ref mut index,
            } => {
                let Some(node) = nodes.get(*index) else {
                    frames.pop();
                    continue;
                };
                *index += 1;

                let command = match node {
                    Node::While { condition, body } => {
                        frames.push(Frame::Loop {
                            condition,
                            body,
                            phase: LoopPhase::Check,
                        });
                        continue;
                    }
                    Node::DoWhile { condition, body } => {
                        frames.push(Frame::Loop {
                            condition,
                            body,
                            phase: LoopPhase::Body,
                        });
                        continue;
                    }
                    Node::Pick => Command::Pick,
                    Node::Drop => Command::Drop,
                    Node::Move { direction } => Command::Move(*direction),
                };
                return Some(Action::Command(command));
            }
            Frame::Loop {
                condition,
                body,
                ref mut phase,
            } => match *phase {
                LoopPhase::Body => {
                    *phase = LoopPhase::Check;
                    frames.push(Frame::Sequence {
                        nodes: body,
                        index: 0,
                    });
                }
                LoopPhase::Check => return Some(Action::Check(condition)),
            },
        }
    }
}

impl std::iter::FusedIterator for Stepper<'_, '_> {}

/// Start running `program` against `world`.
pub fn run_program<'w, 'p>(world: &'w mut World, program: &'p [Node]) -> Stepper<'w, 'p> {
    Stepper::new(world, program)
}

/// How a [`run_to_end`] call stopped.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RunOutcome {
    /// The program ran out of work.
    Finished,
    /// The step limit was reached while another step was still pending.
    StepLimit,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RunSummary {
    pub steps: u64,
    pub outcome: RunOutcome,
}

/// Drive `program` to completion, stopping early after `limit` steps.
///
/// Reaching the limit is `StepLimit` only if another step would follow. A
/// program whose last step lands exactly on the limit is `Finished`, as is
/// one whose only remaining work is a loop condition that fails.
pub fn run_to_end(
    world: &mut World,
    program: &[Node],
    limit: Option<u64>,
) -> Result<RunSummary, EvalError> {
    let mut stepper = Stepper::new(world, program);
    loop {
        if limit.is_some_and(|limit| stepper.steps_taken() >= limit) && !stepper.is_finished() {
            return Ok(RunSummary {
                steps: stepper.steps_taken(),
                outcome: RunOutcome::StepLimit,
            });
        }
        match stepper.next() {
            Some(step) => {
                step?;
            }
            None => {
                return Ok(RunSummary {
                    steps: stepper.steps_taken(),
                    outcome: RunOutcome::Finished,
                })
            }
        }
    }
}
