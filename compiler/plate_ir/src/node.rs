//! Syntax tree nodes.
//!
//! The node set is closed. Each node owns its children; there is no sharing
//! and no back-reference, so a program is a plain `Vec<Node>`.

use std::fmt;

/// Cardinal step direction for `MOVE`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in keyword order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse an uppercase direction literal.
    pub fn from_keyword(text: &str) -> Option<Direction> {
        match text {
            "UP" => Some(Direction::Up),
            "DOWN" => Some(Direction::Down),
            "LEFT" => Some(Direction::Left),
            "RIGHT" => Some(Direction::Right),
            _ => None,
        }
    }

    /// The source keyword for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }

    /// Unit step as `(columns, rows)`. `UP` decreases the row.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A primitive command: the only node kinds that mutate the world, and the
/// only ones allowed as a loop condition.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Command {
    Pick,
    Drop,
    Move(Direction),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Pick => f.write_str("PICK"),
            Command::Drop => f.write_str("DROP"),
            Command::Move(direction) => write!(f, "MOVE {direction}"),
        }
    }
}

impl From<Command> for Node {
    fn from(command: Command) -> Self {
        match command {
            Command::Pick => Node::Pick,
            Command::Drop => Node::Drop,
            Command::Move(direction) => Node::Move { direction },
        }
    }
}

/// Syntax tree node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Node {
    Pick,
    Drop,
    Move {
        direction: Direction,
    },
    /// Test `condition`, run `body` while it succeeds.
    While {
        condition: Box<Node>,
        body: Vec<Node>,
    },
    /// Run `body` once, then keep running it while `condition` succeeds.
    DoWhile {
        condition: Box<Node>,
        body: Vec<Node>,
    },
}

impl Node {
    /// Shorthand for `Node::Move { direction }`.
    pub fn moving(direction: Direction) -> Node {
        Node::Move { direction }
    }

    /// Build a `While` node.
    pub fn while_loop(condition: Node, body: Vec<Node>) -> Node {
        Node::While {
            condition: Box::new(condition),
            body,
        }
    }

    /// Build a `DoWhile` node.
    pub fn do_while(condition: Node, body: Vec<Node>) -> Node {
        Node::DoWhile {
            condition: Box::new(condition),
            body,
        }
    }

    /// View this node as a primitive command, if it is one.
    pub fn as_command(&self) -> Option<Command> {
        match self {
            Node::Pick => Some(Command::Pick),
            Node::Drop => Some(Command::Drop),
            Node::Move { direction } => Some(Command::Move(*direction)),
            Node::While { .. } | Node::DoWhile { .. } => None,
        }
    }

    /// Check if this node is `Pick`, `Drop` or `Move`.
    pub fn is_primitive(&self) -> bool {
        self.as_command().is_some()
    }
}

/// Renders the node back to source form, e.g. `WHILE (MOVE LEFT) { DROP }`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Pick => f.write_str("PICK"),
            Node::Drop => f.write_str("DROP"),
            Node::Move { direction } => write!(f, "MOVE {direction}"),
            Node::While { condition, body } => {
                write!(f, "WHILE ({condition}) ")?;
                write_body(f, body)
            }
            Node::DoWhile { condition, body } => {
                f.write_str("DO ")?;
                write_body(f, body)?;
                write!(f, " WHILE ({condition})")
            }
        }
    }
}

fn write_body(f: &mut fmt::Formatter<'_>, body: &[Node]) -> fmt::Result {
    if body.is_empty() {
        return f.write_str("{}");
    }
    f.write_str("{ ")?;
    for (i, node) in body.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{node}")?;
    }
    f.write_str(" }")
}
