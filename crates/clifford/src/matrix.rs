use crate::Cplx;

/// A square complex matrix of fixed dimension.
///
/// Every matrix participating in one computation shares the same
/// dimension; the binary operations assert this.
#[derive(Debug, Clone, PartialEq)]
pub struct GammaMatrix {
  elems: na::DMatrix<Cplx>,
}

impl GammaMatrix {
  pub fn new(elems: na::DMatrix<Cplx>) -> Self {
    assert!(elems.is_square());
    Self { elems }
  }

  /// The identity matrix of dimension `k`.
  pub fn unity(k: usize) -> Self {
    Self {
      elems: na::DMatrix::identity(k, k),
    }
  }
  pub fn zeros(k: usize) -> Self {
    Self {
      elems: na::DMatrix::zeros(k, k),
    }
  }

  pub fn size(&self) -> usize {
    self.elems.nrows()
  }
  pub fn elems(&self) -> &na::DMatrix<Cplx> {
    &self.elems
  }

  pub fn adjoint(&self) -> Self {
    Self {
      elems: self.elems.adjoint(),
    }
  }
  pub fn trace(&self) -> Cplx {
    self.elems.trace()
  }

  pub fn kronecker(&self, other: &Self) -> Self {
    Self {
      elems: self.elems.kronecker(&other.elems),
    }
  }

  pub fn is_hermitian(&self, eps: f64) -> bool {
    (self.elems.adjoint() - &self.elems).norm() <= eps
  }
  pub fn is_anti_hermitian(&self, eps: f64) -> bool {
    (self.elems.adjoint() + &self.elems).norm() <= eps
  }

  pub fn eq_epsilon(&self, other: &Self, eps: f64) -> bool {
    self.size() == other.size() && (&self.elems - &other.elems).norm() <= eps
  }
}

pub fn commutator(a: &GammaMatrix, b: &GammaMatrix) -> GammaMatrix {
  a * b - b * a
}
pub fn anticommutator(a: &GammaMatrix, b: &GammaMatrix) -> GammaMatrix {
  a * b + b * a
}

impl std::ops::Add for GammaMatrix {
  type Output = Self;
  fn add(mut self, other: Self) -> Self::Output {
    self += other;
    self
  }
}
impl std::ops::AddAssign for GammaMatrix {
  fn add_assign(&mut self, other: Self) {
    assert_eq!(self.size(), other.size());
    self.elems += other.elems;
  }
}

impl std::ops::Sub for GammaMatrix {
  type Output = Self;
  fn sub(mut self, other: Self) -> Self::Output {
    self -= other;
    self
  }
}
impl std::ops::SubAssign for GammaMatrix {
  fn sub_assign(&mut self, other: Self) {
    assert_eq!(self.size(), other.size());
    self.elems -= other.elems;
  }
}

impl std::ops::Neg for GammaMatrix {
  type Output = Self;
  fn neg(self) -> Self::Output {
    Self { elems: -self.elems }
  }
}

impl std::ops::Mul for &GammaMatrix {
  type Output = GammaMatrix;
  fn mul(self, other: Self) -> Self::Output {
    assert_eq!(self.size(), other.size());
    GammaMatrix {
      elems: &self.elems * &other.elems,
    }
  }
}
impl std::ops::Mul for GammaMatrix {
  type Output = Self;
  fn mul(self, other: Self) -> Self::Output {
    &self * &other
  }
}

impl std::ops::Mul<Cplx> for GammaMatrix {
  type Output = Self;
  fn mul(mut self, scalar: Cplx) -> Self::Output {
    self.elems *= scalar;
    self
  }
}
/// Division by a positive integer scalar.
impl std::ops::Div<usize> for GammaMatrix {
  type Output = Self;
  fn div(self, divisor: usize) -> Self::Output {
    assert!(divisor > 0);
    Self {
      elems: self.elems.map(|a| a / divisor as f64),
    }
  }
}

impl std::ops::Index<(usize, usize)> for GammaMatrix {
  type Output = Cplx;
  fn index(&self, index: (usize, usize)) -> &Self::Output {
    &self.elems[index]
  }
}

impl std::fmt::Display for GammaMatrix {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{}", self.elems)
  }
}
