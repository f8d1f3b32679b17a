use crate::{
  matrix::{commutator, GammaMatrix},
  Cplx,
};

use index_combo::{sign::Sign, DomainError, IndexSet};

/// The split of the generator count `d = p + q` into `p` hermitian
/// ("type-H", square +1) and `q` anti-hermitian ("type-L", square -1)
/// base generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature {
  p: usize,
  q: usize,
}

impl Signature {
  pub fn new(p: usize, q: usize) -> Self {
    Self { p, q }
  }

  pub fn p(&self) -> usize {
    self.p
  }
  pub fn q(&self) -> usize {
    self.q
  }
  pub fn d(&self) -> usize {
    self.p + self.q
  }

  /// Dimension of the irreducible matrix representation, `2^(d/2)`.
  pub fn repr_dim(&self) -> usize {
    1 << (self.d() / 2)
  }
}

impl From<(usize, usize)> for Signature {
  fn from((p, q): (usize, usize)) -> Self {
    Self::new(p, q)
  }
}

impl std::fmt::Display for Signature {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "({}, {})", self.p, self.q)
  }
}

/// The `d` base gamma matrices of a Clifford algebra with signature
/// `(p, q)`, all of dimension [`Signature::repr_dim`].
#[derive(Debug, Clone)]
pub struct CliffordAlgebra {
  signature: Signature,
  gammas: Vec<GammaMatrix>,
}

impl CliffordAlgebra {
  /// Builds the base generators by the recursive Kronecker-product
  /// construction over the Pauli matrices, then turns the last `q` of
  /// them anti-hermitian.
  pub fn new(signature: Signature) -> Self {
    let mut gammas = euclidean_generators(signature.d());
    for gamma in gammas.iter_mut().skip(signature.p()) {
      *gamma = gamma.clone() * Cplx::i();
    }
    Self { signature, gammas }
  }

  pub fn signature(&self) -> Signature {
    self.signature
  }
  /// Number of generators `d`.
  pub fn len(&self) -> usize {
    self.gammas.len()
  }
  pub fn is_empty(&self) -> bool {
    self.gammas.is_empty()
  }
  pub fn gammas(&self) -> &[GammaMatrix] {
    &self.gammas
  }
  pub fn repr_dim(&self) -> usize {
    self.signature.repr_dim()
  }

  pub fn gamma(&self, index: usize) -> Result<&GammaMatrix, DomainError> {
    self.gammas.get(index).ok_or(DomainError::IndexOutOfRange {
      index,
      ngenerators: self.gammas.len(),
    })
  }

  /// The fully antisymmetrized product of the generators indexed by
  /// `sequence`, which need not be sorted.
  ///
  /// Base cases: the empty sequence yields the identity, a single
  /// index yields the generator itself and a pair yields the
  /// commutator. Longer sequences expand recursively with
  /// alternating signs and a `1/(2n)` normalization, which for
  /// `n >= 2` equals `2^(3-n)` times the conventional
  /// `(1/n!) sum_sigma sgn(sigma)` antisymmetrized product.
  ///
  /// The expansion visits every suffix permutation, so the cost is
  /// `n!` matrix products; fine for the handful of generators this is
  /// used with.
  pub fn antisymmetric_product(&self, sequence: &IndexSet) -> Result<GammaMatrix, DomainError> {
    let d = self.gammas.len();
    if sequence.len() > d {
      return Err(DomainError::SubsetTooLarge {
        size: sequence.len(),
        ngenerators: d,
      });
    }
    for index in sequence.iter() {
      if index >= d {
        return Err(DomainError::IndexOutOfRange {
          index,
          ngenerators: d,
        });
      }
    }
    if sequence.len() > 8 {
      tracing::warn!(
        "antisymmetrizing {} indices costs {}! matrix products",
        sequence.len(),
        sequence.len()
      );
    }

    Ok(antisymmetrize(&self.gammas, self.repr_dim(), sequence))
  }
}

fn antisymmetrize(gammas: &[GammaMatrix], dim: usize, sequence: &IndexSet) -> GammaMatrix {
  let n = sequence.len();
  match n {
    0 => GammaMatrix::unity(dim),
    1 => gammas[sequence[0]].clone(),
    2 => commutator(&gammas[sequence[0]], &gammas[sequence[1]]),
    _ => {
      let mut sum = GammaMatrix::zeros(dim);
      for i in 0..n {
        let mut rest = sequence.clone();
        rest.remove(i);
        let term = &gammas[sequence[i]] * &antisymmetrize(gammas, dim, &rest);
        match Sign::from_parity(i) {
          Sign::Pos => sum += term,
          Sign::Neg => sum -= term,
        }
      }
      sum / (2 * n)
    }
  }
}

/// Hermitian generators of the Euclidean Clifford algebra with `d`
/// generators, each squaring to the identity.
///
/// Even `d` tensors the `(d-2)`-generator set with sigma3 and appends
/// `1 (x) sigma1` and `1 (x) sigma2`; odd `d` appends the chirality
/// element `i^m gamma_0 ... gamma_{2m-1}` of the even subalgebra.
fn euclidean_generators(d: usize) -> Vec<GammaMatrix> {
  if d == 0 {
    return Vec::new();
  }

  if d % 2 == 0 {
    let [sigma1, sigma2, sigma3] = pauli_matrices();
    let mut gammas: Vec<_> = euclidean_generators(d - 2)
      .into_iter()
      .map(|gamma| gamma.kronecker(&sigma3))
      .collect();
    let eye = GammaMatrix::unity(1 << (d / 2 - 1));
    gammas.push(eye.kronecker(&sigma1));
    gammas.push(eye.kronecker(&sigma2));
    gammas
  } else {
    let m = d / 2;
    let mut gammas = euclidean_generators(d - 1);
    let product = gammas
      .iter()
      .fold(GammaMatrix::unity(1 << m), |acc, gamma| &acc * gamma);
    gammas.push(product * Cplx::i().powu(m as u32));
    gammas
  }
}

fn pauli_matrices() -> [GammaMatrix; 3] {
  let zero = Cplx::new(0.0, 0.0);
  let one = Cplx::new(1.0, 0.0);
  let i = Cplx::i();
  [
    GammaMatrix::new(na::dmatrix![zero, one; one, zero]),
    GammaMatrix::new(na::dmatrix![zero, -i; i, zero]),
    GammaMatrix::new(na::dmatrix![one, zero; zero, -one]),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::matrix::anticommutator;

  use index_combo::{factorial, sign::sort_signed};
  use itertools::Itertools;

  const EPS: f64 = 1e-12;

  #[test]
  fn generators_anticommute() {
    for (p, q) in [(1, 0), (2, 0), (1, 1), (0, 2), (2, 1), (1, 2), (2, 2), (3, 0)] {
      let algebra = CliffordAlgebra::new(Signature::new(p, q));
      let d = algebra.len();
      let k = algebra.repr_dim();

      for i in 0..d {
        for j in 0..d {
          let computed = anticommutator(algebra.gamma(i).unwrap(), algebra.gamma(j).unwrap());
          let expected = if i != j {
            GammaMatrix::zeros(k)
          } else {
            let eta = if i < p { 2.0 } else { -2.0 };
            GammaMatrix::unity(k) * Cplx::new(eta, 0.0)
          };
          assert!(computed.eq_epsilon(&expected, EPS), "(p, q) = ({p}, {q}), i = {i}, j = {j}");
        }
      }
    }
  }

  #[test]
  fn generator_hermiticity_split() {
    let signature = Signature::new(2, 3);
    let algebra = CliffordAlgebra::new(signature);
    for (index, gamma) in algebra.gammas().iter().enumerate() {
      if index < signature.p() {
        assert!(gamma.is_hermitian(EPS));
      } else {
        assert!(gamma.is_anti_hermitian(EPS));
      }
    }
  }

  #[test]
  fn antisymmetric_product_base_cases() {
    let algebra = CliffordAlgebra::new(Signature::new(2, 1));
    let k = algebra.repr_dim();

    let empty = algebra.antisymmetric_product(&IndexSet::none()).unwrap();
    assert_eq!(empty, GammaMatrix::unity(k));

    for index in 0..algebra.len() {
      let single = algebra
        .antisymmetric_product(&IndexSet::single(index))
        .unwrap();
      assert_eq!(&single, algebra.gamma(index).unwrap());
    }

    let pair = algebra
      .antisymmetric_product(&IndexSet::from([0, 2]))
      .unwrap();
    let expected = commutator(algebra.gamma(0).unwrap(), algebra.gamma(2).unwrap());
    assert_eq!(pair, expected);
  }

  #[test]
  fn antisymmetric_product_alternates() {
    let algebra = CliffordAlgebra::new(Signature::new(3, 0));
    let forward = algebra
      .antisymmetric_product(&IndexSet::from([0, 1, 2]))
      .unwrap();
    let swapped = algebra
      .antisymmetric_product(&IndexSet::from([1, 0, 2]))
      .unwrap();
    assert!(forward.eq_epsilon(&-swapped, EPS));
  }

  #[test]
  fn antisymmetric_product_domain_errors() {
    let algebra = CliffordAlgebra::new(Signature::new(1, 1));

    let computed = algebra.antisymmetric_product(&IndexSet::from([0, 2]));
    assert_eq!(
      computed,
      Err(DomainError::IndexOutOfRange {
        index: 2,
        ngenerators: 2
      })
    );

    let computed = algebra.antisymmetric_product(&IndexSet::from([0, 1, 0]));
    assert_eq!(
      computed,
      Err(DomainError::SubsetTooLarge {
        size: 3,
        ngenerators: 2
      })
    );
  }

  /// `(1/n!) sum_sigma sgn(sigma) gamma_sigma(0) ... gamma_sigma(n-1)`,
  /// summed over explicit permutations.
  fn permutation_antisymmetrization(
    algebra: &CliffordAlgebra,
    sequence: &IndexSet,
  ) -> GammaMatrix {
    let n = sequence.len();
    let mut sum = GammaMatrix::zeros(algebra.repr_dim());
    for permutation in sequence.iter().permutations(n) {
      let mut sorted = permutation.clone();
      let sign = sort_signed(&mut sorted);

      let product = permutation
        .iter()
        .fold(GammaMatrix::unity(algebra.repr_dim()), |acc, &index| {
          &acc * algebra.gamma(index).unwrap()
        });
      match sign {
        Sign::Pos => sum += product,
        Sign::Neg => sum -= product,
      }
    }
    sum / factorial(n) as usize
  }

  // The recursive expansion equals 2^(3-n) times the conventional
  // antisymmetrized product. Checked here against brute-force
  // permutation sums, including sizes beyond four.
  #[test]
  fn recursion_matches_permutation_sum() {
    for (p, q, sequence) in [
      (3, 0, IndexSet::from([0, 1, 2])),
      (2, 1, IndexSet::from([0, 1, 2])),
      (4, 0, IndexSet::from([0, 1, 2, 3])),
      (2, 2, IndexSet::from([0, 1, 2, 3])),
      (5, 0, IndexSet::from([0, 1, 2, 3, 4])),
      (3, 2, IndexSet::from([0, 1, 2, 3, 4])),
    ] {
      let algebra = CliffordAlgebra::new(Signature::new(p, q));
      let computed = algebra.antisymmetric_product(&sequence).unwrap();
      let scale = 1 << (sequence.len() - 3);
      let expected = permutation_antisymmetrization(&algebra, &sequence) / scale;
      assert!(
        computed.eq_epsilon(&expected, EPS),
        "(p, q) = ({p}, {q}), n = {}",
        sequence.len()
      );
    }
  }
}
