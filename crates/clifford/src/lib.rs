//! Gamma matrices and the Clifford algebras they generate.

extern crate nalgebra as na;

pub mod algebra;
pub mod matrix;

pub use algebra::{CliffordAlgebra, Signature};
pub use matrix::{anticommutator, commutator, GammaMatrix};

pub type Cplx = na::Complex<f64>;
