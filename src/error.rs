use crate::node::Position;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("line {line}: expected `<symbol> <row> <col>`, found {found} field(s)")]
    MissingFields { line: usize, found: usize },

    #[error("line {line}: unexpected fields after `<symbol> <row> <col>`")]
    TrailingFields { line: usize },

    #[error("line {line}: invalid row `{value}`")]
    InvalidRow { line: usize, value: String },

    #[error("line {line}: invalid column `{value}`")]
    InvalidColumn { line: usize, value: String },

    #[error("line {line}: unrecognized symbol `{symbol}`")]
    UnknownSymbol { line: usize, symbol: String },

    #[error("duplicate cell at ({}, {})", .0.row, .0.col)]
    DuplicatePosition(Position),

    #[error("grid has no source cell")]
    MissingSource,

    #[error("grid has {0} source cells, expected exactly one")]
    MultipleSources(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
