use crate::Coeff;

use num_integer::Integer as _;

/// Orientation sign of a boundary face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Sign {
  #[default]
  Pos = 1,
  Neg = -1,
}

impl Sign {
  pub fn from_bool(b: bool) -> Self {
    match b {
      true => Self::Pos,
      false => Self::Neg,
    }
  }

  /// Sign of the face obtained by removing the vertex at position `n`.
  ///
  /// Even positions give a positive, odd positions a negative sign.
  pub fn from_parity(n: usize) -> Self {
    Self::from_bool(n.is_even())
  }

  pub fn other(self) -> Self {
    match self {
      Self::Pos => Self::Neg,
      Self::Neg => Self::Pos,
    }
  }
  pub fn flip(&mut self) {
    *self = self.other()
  }

  pub fn as_coeff(self) -> Coeff {
    self as i8 as Coeff
  }

  pub fn is_pos(self) -> bool {
    self == Self::Pos
  }
  pub fn is_neg(self) -> bool {
    self == Self::Neg
  }
}

impl std::ops::Neg for Sign {
  type Output = Self;
  fn neg(self) -> Self::Output {
    self.other()
  }
}
impl std::ops::Mul for Sign {
  type Output = Self;
  fn mul(self, other: Self) -> Self::Output {
    Self::from_bool(self == other)
  }
}
impl std::ops::MulAssign for Sign {
  fn mul_assign(&mut self, other: Self) {
    *self = *self * other;
  }
}
impl std::ops::Mul<Coeff> for Sign {
  type Output = Coeff;
  fn mul(self, coeff: Coeff) -> Self::Output {
    match self {
      Self::Pos => coeff,
      Self::Neg => -coeff,
    }
  }
}

impl From<Sign> for char {
  fn from(sign: Sign) -> Self {
    match sign {
      Sign::Pos => '+',
      Sign::Neg => '-',
    }
  }
}
impl std::fmt::Display for Sign {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{}", char::from(*self))
  }
}
