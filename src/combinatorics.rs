mod sign;
mod simplex;

pub use sign::Sign;
pub use simplex::Simplex;
