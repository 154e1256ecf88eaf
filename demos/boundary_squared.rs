use simploid::{boundary, simplify, Chain, Simplex};

fn main() {
  tracing_subscriber::fmt::init();

  for dim in 1..=3 {
    let simplex = Simplex::standard(dim);
    let chain = Chain::unit(simplex.clone());
    let once = boundary(&chain);
    let twice = boundary(&once);

    println!("simplex {simplex} (dim {dim})");
    println!("  ∂  = {once}");
    println!("  ∂∂ = {twice}");
    println!("  simplified ∂∂ = {}", simplify(&twice));
  }
}
