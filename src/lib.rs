//! Formal integer chains of simplices and the simplicial boundary operator.

pub mod boundary;
pub mod chain;
pub mod combinatorics;
pub mod error;
pub mod simplify;

pub use boundary::{boundary, boundary_of_simplex, boundary_power};
pub use chain::{Chain, Term};
pub use combinatorics::{Sign, Simplex};
pub use error::ChainError;
pub use simplify::{collect_coefficient, distinct_faces, simplify, simplify_with, SimplifyStrategy};

pub type Dim = usize;
pub type VertexIdx = usize;
pub type Coeff = i64;
