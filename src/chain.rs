use crate::{
  combinatorics::{Sign, Simplex},
  Coeff,
};

use itertools::Itertools as _;

pub type Term = (Coeff, Simplex);

/// Chain literal, `chain![(1, [1, 2]), (-1, [0, 2])]`.
#[macro_export]
macro_rules! chain {
  ($(($coeff:expr, [$($vertex:expr),* $(,)?])),* $(,)?) => {
    $crate::Chain::new(vec![$(($coeff, $crate::Simplex::new(vec![$($vertex),*]))),*])
  };
}

/// Formal integer linear combination of simplices.
///
/// Terms are kept in insertion order and the same simplex may appear
/// several times. Use [`Chain::simplified`] to combine them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Chain(Vec<Term>);

/// constructors
impl Chain {
  pub fn new(terms: Vec<Term>) -> Self {
    Self(terms)
  }
  pub fn zero() -> Self {
    Self::default()
  }
  pub fn term(coeff: Coeff, simplex: Simplex) -> Self {
    Self(vec![(coeff, simplex)])
  }
  pub fn unit(simplex: Simplex) -> Self {
    Self::term(1, simplex)
  }
}

impl Chain {
  pub fn len(&self) -> usize {
    self.0.len()
  }
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
  pub fn terms(&self) -> &[Term] {
    &self.0
  }
  pub fn into_terms(self) -> Vec<Term> {
    self.0
  }
  pub fn iter(&self) -> std::slice::Iter<'_, Term> {
    self.0.iter()
  }
}

/// Arithmetic. None of these combine terms.
impl Chain {
  /// Concatenation of the terms of both chains.
  #[allow(clippy::should_implement_trait)]
  pub fn add(mut self, other: Self) -> Self {
    self.0.extend(other.0);
    self
  }
  #[allow(clippy::should_implement_trait)]
  pub fn neg(self) -> Self {
    self.scale(Sign::Neg.as_coeff())
  }
  pub fn scale(self, factor: Coeff) -> Self {
    self
      .0
      .into_iter()
      .map(|(coeff, simplex)| (factor * coeff, simplex))
      .collect()
  }
}

impl Chain {
  /// Equality of the represented chains, independent of term order and
  /// of how coefficients are split between repeated simplices.
  ///
  /// The derived [`PartialEq`] instead compares the literal term sequences.
  pub fn eq_as_chains(&self, other: &Self) -> bool {
    let lhs = self.simplified().into_terms().into_iter().counts();
    let rhs = other.simplified().into_terms().into_iter().counts();
    lhs == rhs
  }

  /// Whether the boundary of `self` vanishes.
  pub fn is_cycle(&self) -> bool {
    self.boundary().simplified().is_empty()
  }
}

impl std::ops::Add for Chain {
  type Output = Self;
  fn add(self, other: Self) -> Self::Output {
    Chain::add(self, other)
  }
}
impl std::ops::Sub for Chain {
  type Output = Self;
  fn sub(self, other: Self) -> Self::Output {
    Chain::add(self, Chain::neg(other))
  }
}
impl std::ops::Neg for Chain {
  type Output = Self;
  fn neg(self) -> Self::Output {
    Chain::neg(self)
  }
}
impl std::ops::Mul<Coeff> for Chain {
  type Output = Self;
  fn mul(self, factor: Coeff) -> Self::Output {
    self.scale(factor)
  }
}

impl FromIterator<Term> for Chain {
  fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}
impl Extend<Term> for Chain {
  fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
    self.0.extend(iter)
  }
}
impl IntoIterator for Chain {
  type Item = Term;
  type IntoIter = std::vec::IntoIter<Term>;
  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}
impl<'a> IntoIterator for &'a Chain {
  type Item = &'a Term;
  type IntoIter = std::slice::Iter<'a, Term>;
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl std::fmt::Display for Chain {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    if self.is_empty() {
      return write!(f, "0");
    }
    for (i, (coeff, simplex)) in self.iter().enumerate() {
      let sign = Sign::from_bool(*coeff >= 0);
      match (i, sign) {
        (0, Sign::Pos) => {}
        (0, Sign::Neg) => write!(f, "-")?,
        (_, sign) => write!(f, " {sign} ")?,
      }
      write!(f, "{}·{simplex}", coeff.unsigned_abs())?;
    }
    Ok(())
  }
}
