//! The simplicial boundary operator.
//!
//! ∂[v0,...,vn] = Σ_i (-1)^i [v0,...,v̂i,...,vn], extended linearly to chains.
//! Applying it twice gives the zero chain after simplification: the face
//! missing the vertices at positions i < j is produced once by removing
//! i then j-1 and once by removing j then i, with opposite signs.

use crate::{
  chain::Chain,
  combinatorics::{Sign, Simplex},
};

/// The signed faces of `simplex`, ordered by the position of the removed vertex.
///
/// Has exactly `simplex.nvertices()` terms. The boundary of a vertex is the
/// empty simplex, the boundary of the empty simplex is the zero chain.
pub fn boundary_of_simplex(simplex: &Simplex) -> Chain {
  simplex
    .faces()
    .map(|(i, face)| (Sign::from_parity(i).as_coeff(), face))
    .collect()
}

/// Linear extension of [`boundary_of_simplex`].
///
/// The result is not simplified, the expansions of the terms are
/// concatenated in input order.
pub fn boundary(chain: &Chain) -> Chain {
  let boundary: Chain = chain
    .iter()
    .flat_map(|(coeff, simplex)| {
      boundary_of_simplex(simplex)
        .into_iter()
        .map(move |(sign, face)| (coeff * sign, face))
    })
    .collect();
  tracing::trace!(
    "boundary of chain with {} terms has {} terms",
    chain.len(),
    boundary.len()
  );
  boundary
}

/// Applies the boundary operator `n` times.
pub fn boundary_power(chain: &Chain, n: usize) -> Chain {
  (0..n).fold(chain.clone(), |chain, _| boundary(&chain))
}

impl Simplex {
  pub fn boundary(&self) -> Chain {
    boundary_of_simplex(self)
  }
}
impl Chain {
  pub fn boundary(&self) -> Chain {
    boundary(self)
  }
}
