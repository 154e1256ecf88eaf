//! Algebraic laws of the boundary operator and the simplifier.

use proptest::prelude::*;

use simploid::{
  boundary, boundary_of_simplex, boundary_power, distinct_faces, simplify, simplify_with, Chain,
  Coeff, Simplex, SimplifyStrategy,
};

// Geometric simplices with strictly increasing vertices.
fn sorted_simplex() -> impl Strategy<Value = Simplex> {
  proptest::collection::btree_set(0usize..20, 1..=7)
    .prop_map(|vertices| Simplex::new(vertices.into_iter().collect()))
}

// Arbitrary vertex lists, repeated vertices and the empty simplex included.
// The vertex range is small so that terms share faces.
fn any_simplex() -> impl Strategy<Value = Simplex> {
  proptest::collection::vec(0usize..4, 0..5).prop_map(Simplex::new)
}

fn coeff() -> impl Strategy<Value = Coeff> {
  -5 as Coeff..=5
}

fn any_chain() -> impl Strategy<Value = Chain> {
  proptest::collection::vec((coeff(), any_simplex()), 0..10).prop_map(Chain::new)
}

proptest! {
  #[test]
  fn dimension_law(simplex in sorted_simplex()) {
    prop_assert_eq!(simplex.dim(), Some(simplex.nvertices() - 1));
  }

  #[test]
  fn boundary_length_law(simplex in any_simplex()) {
    prop_assert_eq!(boundary_of_simplex(&simplex).len(), simplex.nvertices());
  }

  #[test]
  fn sign_alternation(simplex in any_simplex()) {
    for (i, (coeff, face)) in boundary_of_simplex(&simplex).into_iter().enumerate() {
      prop_assert_eq!(coeff, if i % 2 == 0 { 1 } else { -1 });
      prop_assert_eq!(Ok(face), simplex.face_at(i));
    }
  }

  #[test]
  fn boundary_squared_vanishes(simplex in sorted_simplex()) {
    let twice = boundary_power(&Chain::unit(simplex), 2);
    prop_assert_eq!(simplify(&twice), Chain::zero());
  }

  #[test]
  fn every_boundary_is_cycle(chain in any_chain()) {
    prop_assert!(boundary(&chain).is_cycle());
  }

  #[test]
  fn linearity(a in any_chain(), b in any_chain()) {
    prop_assert_eq!(
      boundary(&a.clone().add(b.clone())),
      boundary(&a).add(boundary(&b))
    );
  }

  #[test]
  fn scaling(n in coeff(), chain in any_chain()) {
    let lhs = simplify(&boundary(&chain.clone().scale(n)));
    let rhs = simplify(&simplify(&boundary(&chain)).scale(n));
    prop_assert_eq!(lhs, rhs);
  }

  #[test]
  fn simplify_idempotent(chain in any_chain()) {
    let once = simplify(&chain);
    prop_assert_eq!(simplify(&once), once);
  }

  #[test]
  fn simplified_faces_unique_and_nonzero(chain in any_chain()) {
    let simplified = simplify(&chain);
    prop_assert!(simplified.iter().all(|&(coeff, _)| coeff != 0));
    prop_assert_eq!(distinct_faces(&simplified).len(), simplified.len());
  }

  #[test]
  fn strategies_agree(chain in any_chain()) {
    prop_assert_eq!(
      simplify_with(&chain, SimplifyStrategy::Direct),
      simplify_with(&chain, SimplifyStrategy::Hashed)
    );
  }

  #[test]
  fn chain_equality_ignores_term_order(chain in any_chain()) {
    let reversed: Chain = chain.clone().into_iter().rev().collect();
    prop_assert!(chain.eq_as_chains(&reversed));
    prop_assert!((chain - reversed).simplified().is_empty());
  }
}
