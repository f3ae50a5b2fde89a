//! CKM matrix elements from Wolfenstein parameters.

use num_complex::Complex64;

use heft_num::{pow2, pow3, pow4, pow5};

/// Complex CKM matrix elements to O(lambda^5) in the Wolfenstein expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct CkmMatrix {
    /// V_ud
    pub v_ud: Complex64,
    /// V_us
    pub v_us: Complex64,
    /// V_ub
    pub v_ub: Complex64,
    /// V_cd
    pub v_cd: Complex64,
    /// V_cs
    pub v_cs: Complex64,
    /// V_cb
    pub v_cb: Complex64,
    /// V_td
    pub v_td: Complex64,
    /// V_ts
    pub v_ts: Complex64,
    /// V_tb
    pub v_tb: Complex64,
}

impl CkmMatrix {
    /// Assembles the matrix from (lambda, A, rhobar, etabar).
    pub fn from_wolfenstein(lambda: f64, a: f64, rhobar: f64, etabar: f64) -> Self {
        // unbarred apex coordinates
        let norm = 1.0 - 0.5 * pow2(lambda);
        let rho = rhobar / norm;
        let eta = etabar / norm;
        let apex = Complex64::new(rho, eta);
        let one = Complex64::new(1.0, 0.0);

        Self {
            v_ud: Complex64::new(1.0 - 0.5 * pow2(lambda) - 0.125 * pow4(lambda), 0.0),
            v_us: Complex64::new(lambda, 0.0),
            v_ub: a * pow3(lambda) * apex.conj(),
            v_cd: Complex64::new(-lambda, 0.0)
                + a * a * pow5(lambda) * (Complex64::new(0.5, 0.0) - apex),
            v_cs: Complex64::new(
                1.0 - 0.5 * pow2(lambda) - 0.125 * pow4(lambda) * (1.0 + 4.0 * a * a),
                0.0,
            ),
            v_cb: Complex64::new(a * pow2(lambda), 0.0),
            v_td: a * pow3(lambda) * (one - apex),
            v_ts: Complex64::new(-a * pow2(lambda), 0.0)
                + a * pow4(lambda) * (Complex64::new(0.5, 0.0) - apex),
            v_tb: Complex64::new(1.0 - 0.5 * a * a * pow4(lambda), 0.0),
        }
    }

    /// |V_tb V_ts^*|, the normalization of b->s transitions.
    pub fn abs_v_tb_v_ts(&self) -> f64 {
        (self.v_tb * self.v_ts.conj()).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitudes_match_pdg_ranges() {
        let ckm = CkmMatrix::from_wolfenstein(0.22535, 0.807, 0.132, 0.340);
        assert!((ckm.v_us.norm() - 0.225).abs() < 1e-2);
        assert!((ckm.v_cb.norm() - 0.041).abs() < 2e-3);
        assert!(ckm.v_ub.norm() > 0.003 && ckm.v_ub.norm() < 0.005);
        assert!((ckm.v_ts.norm() - 0.040).abs() < 3e-3);
        assert!(ckm.v_tb.norm() > 0.998);
        // V_ub carries the CP phase gamma
        assert!(ckm.v_ub.arg() < 0.0);
    }

    #[test]
    fn first_row_is_nearly_unitary() {
        let ckm = CkmMatrix::from_wolfenstein(0.22535, 0.807, 0.132, 0.340);
        let sum = ckm.v_ud.norm_sqr() + ckm.v_us.norm_sqr() + ckm.v_ub.norm_sqr();
        assert!((sum - 1.0).abs() < 1e-4);
    }
}
