use std::collections::{HashMap, HashSet, VecDeque};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::node::{GridNode, NodeKind, Position};
use crate::parser;

pub struct PipeGraph {
    nodes: HashMap<Position, GridNode>,
    source: Position,
}

impl PipeGraph {
    /// Build the graph from parsed nodes. Fails on duplicate positions and
    /// on anything other than exactly one source.
    pub fn from_nodes(nodes: Vec<GridNode>) -> Result<PipeGraph> {
        let mut map: HashMap<Position, GridNode> = HashMap::with_capacity(nodes.len());
        let mut sources: Vec<Position> = Vec::new();

        for node in nodes {
            if node.kind == NodeKind::Source {
                sources.push(node.position);
            }

            let position = node.position;
            if map.insert(position, node).is_some() {
                return Err(Error::DuplicatePosition(position));
            }
        }

        let source = match sources.len() {
            0 => return Err(Error::MissingSource),
            1 => sources[0],
            n => return Err(Error::MultipleSources(n)),
        };

        Ok(PipeGraph { nodes: map, source })
    }

    pub fn source(&self) -> Position {
        self.source
    }

    pub fn node_at(&self, position: Position) -> Option<&GridNode> {
        self.nodes.get(&position)
    }

    /// Collect the labels of every sink reachable from the source, sorted
    /// ascending and concatenated into one string.
    pub fn reachable_sinks(&self) -> String {
        let mut queue = VecDeque::from([self.source]);
        let mut visited: HashSet<Position> = HashSet::from([self.source]);
        let mut sinks: HashSet<char> = HashSet::new();

        while let Some(position) = queue.pop_front() {
            let node = &self.nodes[&position];

            if node.kind == NodeKind::Sink {
                sinks.insert(node.symbol);
            }

            for next in node.connections() {
                // Connections into empty cells are dead ends, not errors.
                if !self.nodes.contains_key(&next) {
                    continue;
                }
                // Marking at enqueue time keeps every node out of the queue
                // after its first discovery.
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        tracing::debug!("traversal visited {} of {} nodes", visited.len(), self.nodes.len());

        sinks.into_iter().sorted().collect()
    }
}

/// Run the whole query in one call: grid description lines in, sorted
/// reachable sink labels out.
pub fn connected_sinks<I, S>(lines: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let nodes = parser::parse_lines(lines)?;
    let graph = PipeGraph::from_nodes(nodes)?;
    Ok(graph.reachable_sinks())
}

/// Convenience wrapper over [`connected_sinks`] that loads the grid
/// description from a file.
pub fn connected_sinks_from_path<P: AsRef<Path>>(path: P) -> Result<String> {
    let file = std::fs::File::open(path)?;
    let lines: Vec<String> = BufReader::new(file).lines().collect::<io::Result<_>>()?;
    connected_sinks(&lines)
}
