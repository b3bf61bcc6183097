pub mod bernstein;

pub use bernstein::*;
