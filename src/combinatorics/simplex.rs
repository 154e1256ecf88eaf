use crate::{
  error::{ChainError, Result},
  Dim, VertexIdx,
};

use itertools::Itertools as _;

/// A simplex given by its ordered(!) list of vertices.
///
/// Equality is structural and order-sensitive: `[0,1]` and `[1,0]` are
/// different simplices. Vertices are not validated, use
/// [`Simplex::try_sorted`] when geometric validity is required.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Simplex(Vec<VertexIdx>);

/// constructors
impl Simplex {
  pub fn new(vertices: Vec<VertexIdx>) -> Self {
    Self(vertices)
  }
  /// The simplex without vertices, the only face of a vertex.
  pub fn empty() -> Self {
    Self::default()
  }
  pub fn vertex(v: VertexIdx) -> Self {
    Self(vec![v])
  }
  pub fn edge(a: VertexIdx, b: VertexIdx) -> Self {
    Self(vec![a, b])
  }
  /// The standard simplex `[0,1,...,dim]`.
  pub fn standard(dim: Dim) -> Self {
    Self((0..=dim).collect())
  }

  /// Non-empty simplex with strictly increasing vertices.
  pub fn try_sorted(vertices: Vec<VertexIdx>) -> Result<Self> {
    let simplex = Self::new(vertices);
    if simplex.is_empty() {
      tracing::warn!("rejected simplex without vertices");
      return Err(ChainError::EmptySimplex);
    }
    let offending = simplex
      .iter()
      .tuple_windows()
      .find(|&(a, b)| a >= b)
      .map(|(_, b)| b);
    if let Some(vertex) = offending {
      tracing::warn!("rejected simplex {simplex} with unordered vertex {vertex}");
      return Err(ChainError::NotStrictlyIncreasing { simplex, vertex });
    }
    Ok(simplex)
  }
}

impl Simplex {
  pub fn nvertices(&self) -> usize {
    self.0.len()
  }
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
  /// `nvertices - 1`, or `None` for the empty simplex (dimension -1).
  pub fn dim(&self) -> Option<Dim> {
    self.nvertices().checked_sub(1)
  }

  pub fn vertices(&self) -> &[VertexIdx] {
    &self.0
  }
  pub fn into_vertices(self) -> Vec<VertexIdx> {
    self.0
  }
  pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, VertexIdx>> {
    self.0.iter().copied()
  }

  pub fn is_strictly_increasing(&self) -> bool {
    self.iter().tuple_windows().all(|(a, b)| a < b)
  }

  /// The face opposite to the vertex at position `i`.
  ///
  /// Remaining vertices keep their relative order.
  pub fn face_at(&self, i: usize) -> Result<Self> {
    if i >= self.nvertices() {
      return Err(ChainError::IndexOutOfRange {
        index: i,
        nvertices: self.nvertices(),
      });
    }
    Ok(self.face_at_unchecked(i))
  }

  /// All faces together with the position of the removed vertex,
  /// by increasing position.
  pub fn faces(&self) -> impl Iterator<Item = (usize, Simplex)> + '_ {
    (0..self.nvertices()).map(|i| (i, self.face_at_unchecked(i)))
  }

  fn face_at_unchecked(&self, i: usize) -> Self {
    let mut vertices = self.0.clone();
    vertices.remove(i);
    Self(vertices)
  }
}

impl std::ops::Index<usize> for Simplex {
  type Output = VertexIdx;
  fn index(&self, index: usize) -> &Self::Output {
    &self.0[index]
  }
}

impl From<Vec<VertexIdx>> for Simplex {
  fn from(value: Vec<VertexIdx>) -> Self {
    Self::new(value)
  }
}
impl<const N: usize> From<[VertexIdx; N]> for Simplex {
  fn from(value: [VertexIdx; N]) -> Self {
    Self::new(value.to_vec())
  }
}

impl std::fmt::Display for Simplex {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "[{}]", self.iter().join(","))
  }
}
