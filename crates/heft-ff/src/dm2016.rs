//! Lambda_b -> Lambda form factors in a DM2016-style z-expansion.
//!
//! Lattice-determined helicity form factors, each a single-pole times a
//! linear series in z(q^2). Pole masses are the b-bar s states of the
//! matching J^P channel; the branch point sits at the B K threshold.

use heft_core::{HeftError, ParameterId, ParameterUser, Parameters, UsedParameter};
use heft_num::pow2;

use crate::traits::OneHalfPlusFormFactors;
use crate::zexp::ZVariable;

const M_POLE_0M: f64 = 5.367;
const M_POLE_1M: f64 = 5.416;
const M_POLE_0P: f64 = 5.711;
const M_POLE_1P: f64 = 5.750;

#[derive(Debug)]
struct Entry {
    a_0: UsedParameter,
    a_1: UsedParameter,
    m_pole: f64,
}

/// DM2016 parameterization of the Lambda_b -> Lambda transition.
#[derive(Debug)]
pub struct DM2016FormFactors {
    user: ParameterUser,
    m_b_meson: UsedParameter,
    m_k_meson: UsedParameter,
    m_lambda_b: UsedParameter,
    m_lambda: UsedParameter,
    f_time_v: Entry,
    f_long_v: Entry,
    f_perp_v: Entry,
    f_time_a: Entry,
    f_long_a: Entry,
    f_perp_a: Entry,
}

impl DM2016FormFactors {
    /// Binds the parameterization to a parameter set.
    pub fn new(parameters: &Parameters) -> Result<Self, HeftError> {
        let user = ParameterUser::new();
        let bind = |label: &str, m_pole: f64| -> Result<Entry, HeftError> {
            Ok(Entry {
                a_0: user.bind(
                    parameters,
                    &format!("Lambda_b->Lambda::a_0_{label}@DM2016"),
                )?,
                a_1: user.bind(
                    parameters,
                    &format!("Lambda_b->Lambda::a_1_{label}@DM2016"),
                )?,
                m_pole,
            })
        };
        Ok(Self {
            m_b_meson: user.bind(parameters, "mass::B_d")?,
            m_k_meson: user.bind(parameters, "mass::K_d")?,
            m_lambda_b: user.bind(parameters, "mass::Lambda_b")?,
            m_lambda: user.bind(parameters, "mass::Lambda")?,
            f_time_v: bind("time^V", M_POLE_0P)?,
            f_long_v: bind("long^V", M_POLE_1M)?,
            f_perp_v: bind("perp^V", M_POLE_1M)?,
            f_time_a: bind("time^A", M_POLE_0M)?,
            f_long_a: bind("long^A", M_POLE_1P)?,
            f_perp_a: bind("perp^A", M_POLE_1P)?,
            user,
        })
    }

    fn z_var(&self) -> ZVariable {
        let t_plus = pow2(self.m_b_meson.value() + self.m_k_meson.value());
        let t_0 = pow2(self.m_lambda_b.value() - self.m_lambda.value());
        ZVariable::new(t_plus, t_0)
    }

    fn eval(&self, entry: &Entry, q2: f64) -> f64 {
        let z = self.z_var().z(q2);
        (entry.a_0.value() + entry.a_1.value() * z) / (1.0 - q2 / pow2(entry.m_pole))
    }
}

impl OneHalfPlusFormFactors for DM2016FormFactors {
    fn f_time_v(&self, q2: f64) -> f64 {
        self.eval(&self.f_time_v, q2)
    }

    fn f_long_v(&self, q2: f64) -> f64 {
        self.eval(&self.f_long_v, q2)
    }

    fn f_perp_v(&self, q2: f64) -> f64 {
        self.eval(&self.f_perp_v, q2)
    }

    fn f_time_a(&self, q2: f64) -> f64 {
        self.eval(&self.f_time_a, q2)
    }

    fn f_long_a(&self, q2: f64) -> f64 {
        self.eval(&self.f_long_a, q2)
    }

    fn f_perp_a(&self, q2: f64) -> f64 {
        self.eval(&self.f_perp_a, q2)
    }

    fn used_parameter_ids(&self) -> Vec<ParameterId> {
        self.user.used_ids()
    }
}
