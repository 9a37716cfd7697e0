use crate::shape::{Direction, PipeShape};

/// A cell's (row, column) coordinates. This is the node's identity key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i64,
    pub col: i64,
}

impl Position {
    pub fn new(row: i64, col: i64) -> Self {
        Position { row, col }
    }

    pub(crate) fn step(&self, direction: Direction) -> Position {
        let (dr, dc) = direction.delta();
        Position {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Source,
    Sink,
    Pipe(PipeShape),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridNode {
    pub symbol: char,
    pub position: Position,
    pub kind: NodeKind,
}

impl GridNode {
    /// The absolute positions this node connects outward to. Connections may
    /// point at cells that do not exist in the grid; the traversal treats
    /// those as dead ends.
    pub fn connections(&self) -> Vec<Position> {
        let directions: &[Direction] = match self.kind {
            // Sources and sinks are connectable from any side.
            NodeKind::Source | NodeKind::Sink => &Direction::ALL,
            NodeKind::Pipe(shape) => shape.directions(),
        };

        directions.iter().map(|d| self.position.step(*d)).collect()
    }
}
