//! Building blocks of the z-expansion: the conformal variable, Blaschke
//! factors, and polynomial bases orthonormal on an arc of the unit circle.

use num_complex::Complex64;

use heft_core::{ErrorInfo, HeftError};
use heft_num::conformal;

/// Conformal variable with fixed branch point and subtraction point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZVariable {
    /// Branch point t_+ of the cut q^2 plane.
    pub t_plus: f64,
    /// Subtraction point t_0 mapped to z = 0.
    pub t_0: f64,
}

impl ZVariable {
    /// Creates the map for the given branch and subtraction points.
    pub fn new(t_plus: f64, t_0: f64) -> Self {
        Self { t_plus, t_0 }
    }

    /// z(q^2) for real q^2 below the branch point; NaN on the cut.
    pub fn z(&self, q2: f64) -> f64 {
        conformal::z_real(q2, self.t_plus, self.t_0)
    }

    /// z(q^2) for complex q^2.
    pub fn z_complex(&self, q2: Complex64) -> Complex64 {
        conformal::z_of(q2, self.t_plus, self.t_0)
    }

    /// dq^2/dz at the given z, from inverting the conformal map.
    pub fn dq2_dz(&self, z: Complex64) -> Complex64 {
        let b2 = self.t_plus - self.t_0;
        let one = Complex64::new(1.0, 0.0);
        -4.0 * b2 * (one + z) / ((one - z) * (one - z) * (one - z))
    }
}

/// Product of unit-circle-unitary factors carrying sub-threshold poles.
///
/// Each resonance at z_r inside the disk contributes
/// (z - z_r) / (1 - z conj(z_r)) * |z_r| / z_r.
#[derive(Debug, Clone, Default)]
pub struct BlaschkeFactor {
    poles: Vec<Complex64>,
}

impl BlaschkeFactor {
    /// A factor with no poles (identically one).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the factor for resonance masses below the branch point of `z_var`.
    ///
    /// Masses at or above the branch point do not correspond to bound-state
    /// poles and are skipped.
    pub fn from_resonances(z_var: &ZVariable, masses: &[f64]) -> Self {
        let mut poles = Vec::new();
        for &mass in masses {
            let q2 = mass * mass;
            if q2 < z_var.t_plus {
                poles.push(Complex64::new(z_var.z(q2), 0.0));
            }
        }
        Self { poles }
    }

    /// Adds a pole at the given position inside the unit disk.
    pub fn push_pole(&mut self, z_r: Complex64) {
        self.poles.push(z_r);
    }

    /// Positions of the accumulated poles.
    pub fn poles(&self) -> &[Complex64] {
        &self.poles
    }

    /// Evaluates the product at z.
    pub fn eval(&self, z: Complex64) -> Complex64 {
        let one = Complex64::new(1.0, 0.0);
        let mut product = one;
        for &z_r in &self.poles {
            let phase = if z_r.norm() == 0.0 {
                one
            } else {
                Complex64::new(z_r.norm(), 0.0) / z_r
            };
            product *= (z - z_r) / (one - z * z_r.conj()) * phase;
        }
        product
    }

    /// Derivative of the single-pole factor for `z_r` evaluated at its zero.
    ///
    /// Needed for residues: near z_r the factor behaves like
    /// (z - z_r) * eval_derivative_at_pole(z_r).
    pub fn derivative_at_pole(&self, z_r: Complex64) -> Complex64 {
        let one = Complex64::new(1.0, 0.0);
        let phase = if z_r.norm() == 0.0 {
            one
        } else {
            Complex64::new(z_r.norm(), 0.0) / z_r
        };
        phase / (one - z_r * z_r.conj())
    }

    /// Evaluates the product omitting the factor for the pole at `skip`.
    pub fn eval_without(&self, z: Complex64, skip: Complex64) -> Complex64 {
        let one = Complex64::new(1.0, 0.0);
        let mut product = one;
        let mut skipped = false;
        for &z_r in &self.poles {
            if !skipped && (z_r - skip).norm() < 1e-12 {
                skipped = true;
                continue;
            }
            let phase = if z_r.norm() == 0.0 {
                one
            } else {
                Complex64::new(z_r.norm(), 0.0) / z_r
            };
            product *= (z - z_r) / (one - z * z_r.conj()) * phase;
        }
        product
    }
}

/// Polynomials orthonormal on the arc |z| = 1, |arg z| <= alpha.
///
/// The Gram matrix of monomials under the normalized arc measure is
/// G_mn = sin((m - n) alpha) / ((m - n) alpha); a Cholesky factorization
/// yields real coefficients for the orthonormal combinations.
#[derive(Debug, Clone)]
pub struct ArcPolynomials {
    alpha: f64,
    /// coeffs[k][j]: coefficient of z^j in p_k(z).
    coeffs: Vec<Vec<f64>>,
}

impl ArcPolynomials {
    /// Constructs the first `order + 1` orthonormal polynomials.
    pub fn new(alpha: f64, order: usize) -> Result<Self, HeftError> {
        if !(0.0..=std::f64::consts::PI).contains(&alpha) || alpha == 0.0 {
            return Err(HeftError::Internal(
                ErrorInfo::new("invalid-arc", "arc opening angle must lie in (0, pi]")
                    .with_context("alpha", format!("{alpha}")),
            ));
        }
        let n = order + 1;
        let mut gram = vec![vec![0.0f64; n]; n];
        for (m, row) in gram.iter_mut().enumerate() {
            for (k, entry) in row.iter_mut().enumerate() {
                let d = m as f64 - k as f64;
                *entry = if m == k {
                    1.0
                } else {
                    (d * alpha).sin() / (d * alpha)
                };
            }
        }

        // Cholesky: G = L L^T
        let mut lower = vec![vec![0.0f64; n]; n];
        for i in 0..n {
            for j in 0..=i {
                let mut sum = gram[i][j];
                for k in 0..j {
                    sum -= lower[i][k] * lower[j][k];
                }
                if i == j {
                    if sum <= 0.0 {
                        return Err(HeftError::Internal(
                            ErrorInfo::new(
                                "gram-not-positive",
                                "arc Gram matrix is not positive definite",
                            )
                            .with_context("order", format!("{order}")),
                        ));
                    }
                    lower[i][j] = sum.sqrt();
                } else {
                    lower[i][j] = sum / lower[j][j];
                }
            }
        }

        // rows of L^{-1} are the monomial coefficients of the orthonormal set
        let mut coeffs = vec![vec![0.0f64; n]; n];
        for k in 0..n {
            // solve L x = e_k by forward substitution
            for i in k..n {
                let mut sum = if i == k { 1.0 } else { 0.0 };
                for j in k..i {
                    sum -= lower[i][j] * coeffs[j][k];
                }
                coeffs[i][k] = sum / lower[i][i];
            }
            // zero above the diagonal stays zero
        }
        // coeffs[i][k] currently holds (L^{-1})_{ik}; p_i(z) = sum_k (L^{-1})_{ik} z^k
        Ok(Self { alpha, coeffs })
    }

    /// Arc opening half-angle.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Number of polynomials.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns whether the basis is empty.
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Evaluates p_0..p_order at z.
    pub fn eval(&self, z: Complex64) -> Vec<Complex64> {
        let n = self.coeffs.len();
        let mut powers = Vec::with_capacity(n);
        let mut power = Complex64::new(1.0, 0.0);
        for _ in 0..n {
            powers.push(power);
            power *= z;
        }
        self.coeffs
            .iter()
            .map(|row| {
                row.iter()
                    .zip(powers.iter())
                    .map(|(&c, &p)| c * p)
                    .sum::<Complex64>()
            })
            .collect()
    }
}
