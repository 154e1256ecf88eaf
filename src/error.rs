use crate::{combinatorics::Simplex, VertexIdx};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
  #[error("vertex position {index} out of range for simplex with {nvertices} vertices")]
  IndexOutOfRange { index: usize, nvertices: usize },
  #[error("a simplex needs at least one vertex")]
  EmptySimplex,
  #[error("vertices of {simplex} are not strictly increasing (first offending vertex {vertex})")]
  NotStrictlyIncreasing { simplex: Simplex, vertex: VertexIdx },
}

pub type Result<T> = std::result::Result<T, ChainError>;
