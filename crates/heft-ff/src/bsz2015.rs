//! P -> V form factors in the BSZ2015 simplified-series parameterization.
//!
//! Each form factor is a resonance pole times a quadratic series in
//! z(q^2) - z(0). Two coefficients are fixed by exact kinematic identities:
//! A_12(0) is tied to A_0(0) and T_2(0) = T_1(0).

use heft_core::{HeftError, ParameterId, ParameterUser, Parameters, UsedParameter};
use heft_num::{lambda, pow2};

use crate::traits::PToVFormFactors;
use crate::zexp::ZVariable;

// b-bar s resonance masses by J^P channel
const M_RES_0M: f64 = 5.366;
const M_RES_1M: f64 = 5.415;
const M_RES_1P: f64 = 5.829;

/// Static descriptor of a P -> V process served by BSZ2015.
#[derive(Debug, Clone, Copy)]
pub struct BszProcess {
    /// Parameter prefix, e.g. `B->K^*`.
    pub prefix: &'static str,
    /// Name of the parent-mass parameter.
    pub m_parent: &'static str,
    /// Name of the vector-meson-mass parameter.
    pub m_vector: &'static str,
}

/// B -> K^* served from the `B->K^*::...@BSZ2015` parameters.
pub const B_TO_KSTAR: BszProcess = BszProcess {
    prefix: "B->K^*",
    m_parent: "mass::B_d",
    m_vector: "mass::K^*_d",
};

/// B_s -> phi served from the `B_s->phi::...@BSZ2015` parameters.
pub const BS_TO_PHI: BszProcess = BszProcess {
    prefix: "B_s->phi",
    m_parent: "mass::B_s",
    m_vector: "mass::phi",
};

#[derive(Debug)]
struct Series {
    alpha: Vec<UsedParameter>,
    m_res: f64,
}

/// BSZ2015 parameterization of a P -> V transition.
#[derive(Debug)]
pub struct BSZ2015FormFactors {
    user: ParameterUser,
    m_parent: UsedParameter,
    m_vector: UsedParameter,
    a_0: Series,
    a_1: Series,
    /// A_12 series without its alpha_0 (fixed by the A_0(0) identity).
    a_12_tail: Series,
    v: Series,
    t_1: Series,
    /// T_2 series without its alpha_0 (fixed by T_2(0) = T_1(0)).
    t_2_tail: Series,
    t_23: Series,
}

impl BSZ2015FormFactors {
    /// Binds the parameterization for the given process.
    pub fn new(process: &BszProcess, parameters: &Parameters) -> Result<Self, HeftError> {
        let user = ParameterUser::new();
        let bind_series = |label: &str, m_res: f64, orders: std::ops::Range<usize>| -> Result<Series, HeftError> {
            let mut alpha = Vec::new();
            for k in orders {
                alpha.push(user.bind(
                    parameters,
                    &format!("{}::alpha^{label}_{k}@BSZ2015", process.prefix),
                )?);
            }
            Ok(Series { alpha, m_res })
        };

        Ok(Self {
            m_parent: user.bind(parameters, process.m_parent)?,
            m_vector: user.bind(parameters, process.m_vector)?,
            a_0: bind_series("A0", M_RES_0M, 0..3)?,
            a_1: bind_series("A1", M_RES_1P, 0..3)?,
            a_12_tail: bind_series("A12", M_RES_1P, 1..3)?,
            v: bind_series("V", M_RES_1M, 0..3)?,
            t_1: bind_series("T1", M_RES_1M, 0..3)?,
            t_2_tail: bind_series("T2", M_RES_1P, 1..3)?,
            t_23: bind_series("T23", M_RES_1P, 0..3)?,
            user,
        })
    }

    fn z_var(&self) -> ZVariable {
        let m_b = self.m_parent.value();
        let m_v = self.m_vector.value();
        let t_plus = pow2(m_b + m_v);
        let t_minus = pow2(m_b - m_v);
        let t_0 = t_plus * (1.0 - (1.0 - t_minus / t_plus).sqrt());
        ZVariable::new(t_plus, t_0)
    }

    fn series(&self, series: &Series, alpha_0: Option<f64>, q2: f64) -> f64 {
        let z_var = self.z_var();
        let dz = z_var.z(q2) - z_var.z(0.0);
        let mut value = 0.0;
        let mut power = match alpha_0 {
            Some(fixed) => {
                value += fixed;
                dz
            }
            None => 1.0,
        };
        for alpha in &series.alpha {
            value += alpha.value() * power;
            power *= dz;
        }
        value / (1.0 - q2 / pow2(series.m_res))
    }

    /// alpha_0 of A_12 from the exact A_12(0) = A_0(0) (m^2_B - m^2_V) / (8 m_B m_V) identity.
    fn a_12_alpha0(&self) -> f64 {
        let m_b = self.m_parent.value();
        let m_v = self.m_vector.value();
        self.a_0.alpha[0].value() * (pow2(m_b) - pow2(m_v)) / (8.0 * m_b * m_v)
    }
}

impl PToVFormFactors for BSZ2015FormFactors {
    fn v(&self, q2: f64) -> f64 {
        self.series(&self.v, None, q2)
    }

    fn a_0(&self, q2: f64) -> f64 {
        self.series(&self.a_0, None, q2)
    }

    fn a_1(&self, q2: f64) -> f64 {
        self.series(&self.a_1, None, q2)
    }

    fn a_2(&self, q2: f64) -> f64 {
        let m_b = self.m_parent.value();
        let m_v = self.m_vector.value();
        let lam = lambda(pow2(m_b), pow2(m_v), q2);
        if lam.abs() < 1e-12 {
            return f64::NAN;
        }
        (pow2(m_b + m_v) * (pow2(m_b) - pow2(m_v) - q2) * self.a_1(q2)
            - 16.0 * m_b * pow2(m_v) * (m_b + m_v) * self.a_12(q2))
            / lam
    }

    fn a_12(&self, q2: f64) -> f64 {
        self.series(&self.a_12_tail, Some(self.a_12_alpha0()), q2)
    }

    fn t_1(&self, q2: f64) -> f64 {
        self.series(&self.t_1, None, q2)
    }

    fn t_2(&self, q2: f64) -> f64 {
        let alpha_0 = self.t_1.alpha[0].value();
        self.series(&self.t_2_tail, Some(alpha_0), q2)
    }

    fn t_3(&self, q2: f64) -> f64 {
        let m_b = self.m_parent.value();
        let m_v = self.m_vector.value();
        let lam = lambda(pow2(m_b), pow2(m_v), q2);
        if lam.abs() < 1e-12 {
            return f64::NAN;
        }
        ((pow2(m_b) - pow2(m_v)) * (pow2(m_b) + 3.0 * pow2(m_v) - q2) * self.t_2(q2)
            - 8.0 * m_b * pow2(m_v) * (m_b - m_v) * self.t_23(q2))
            / lam
    }

    fn t_23(&self, q2: f64) -> f64 {
        self.series(&self.t_23, None, q2)
    }

    fn used_parameter_ids(&self) -> Vec<ParameterId> {
        self.user.used_ids()
    }
}
