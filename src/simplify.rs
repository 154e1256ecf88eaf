use crate::{chain::Chain, combinatorics::Simplex, Coeff};

use indexmap::IndexMap;
use itertools::Itertools as _;

/// How [`simplify_with`] combines terms.
///
/// Both strategies produce the same chain: one term per distinct simplex
/// with nonzero coefficient, in order of first occurrence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SimplifyStrategy {
  /// Sum the coefficients of each distinct simplex by a scan over the whole chain.
  Direct,
  /// Accumulate coefficients in an insertion ordered hash map.
  #[default]
  Hashed,
}

/// Sum of the coefficients of all terms with face `target`.
pub fn collect_coefficient(target: &Simplex, chain: &Chain) -> Coeff {
  chain
    .iter()
    .filter(|(_, face)| face == target)
    .map(|(coeff, _)| coeff)
    .sum()
}

/// The faces of `chain` without repetitions, in order of first occurrence.
pub fn distinct_faces(chain: &Chain) -> Vec<Simplex> {
  chain.iter().map(|(_, face)| face).unique().cloned().collect()
}

pub fn simplify(chain: &Chain) -> Chain {
  simplify_with(chain, SimplifyStrategy::default())
}

pub fn simplify_with(chain: &Chain, strategy: SimplifyStrategy) -> Chain {
  let simplified = match strategy {
    SimplifyStrategy::Direct => simplify_direct(chain),
    SimplifyStrategy::Hashed => simplify_hashed(chain),
  };
  if simplified.len() < chain.len() {
    tracing::debug!(
      "simplified chain from {} to {} terms",
      chain.len(),
      simplified.len()
    );
  }
  simplified
}

fn simplify_direct(chain: &Chain) -> Chain {
  distinct_faces(chain)
    .into_iter()
    .map(|face| (collect_coefficient(&face, chain), face))
    .filter(|&(coeff, _)| coeff != 0)
    .collect()
}

fn simplify_hashed(chain: &Chain) -> Chain {
  let mut coeffs: IndexMap<&Simplex, Coeff> = IndexMap::new();
  for (coeff, face) in chain {
    *coeffs.entry(face).or_default() += coeff;
  }
  coeffs
    .into_iter()
    .filter(|&(_, coeff)| coeff != 0)
    .map(|(face, coeff)| (coeff, face.clone()))
    .collect()
}

impl Chain {
  pub fn simplified(&self) -> Chain {
    simplify(self)
  }
}
