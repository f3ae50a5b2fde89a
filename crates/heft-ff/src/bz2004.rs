//! B -> K form factors in the BZ2004v2 parameterization.
//!
//! Single-pole plus effective-pole forms fitted from light-cone sum rules.
//! The lowest b-bar s vector resonance fixes the physical pole of f_+ and
//! f_T; f_0 carries only the effective fit pole.

use heft_core::{HeftError, ParameterId, ParameterUser, Parameters, UsedParameter};

use crate::traits::PToPFormFactors;

// m_{B_s^*}^2, the 1^- pole below the B K threshold
const M_RES_SQ: f64 = 29.2681;

/// BZ2004v2 parameterization of the B -> K transition.
#[derive(Debug)]
pub struct BZ2004FormFactors {
    user: ParameterUser,
    r1_p: UsedParameter,
    r2_p: UsedParameter,
    m_fit2_p: UsedParameter,
    r2_0: UsedParameter,
    m_fit2_0: UsedParameter,
    r1_t: UsedParameter,
    r2_t: UsedParameter,
    m_fit2_t: UsedParameter,
}

impl BZ2004FormFactors {
    /// Binds the parameterization to a parameter set.
    pub fn new(parameters: &Parameters) -> Result<Self, HeftError> {
        let user = ParameterUser::new();
        Ok(Self {
            r1_p: user.bind(parameters, "B->K::r1_p@BZ2004v2")?,
            r2_p: user.bind(parameters, "B->K::r2_p@BZ2004v2")?,
            m_fit2_p: user.bind(parameters, "B->K::m_fit^2@BZ2004v2")?,
            r2_0: user.bind(parameters, "B->K::r2_0@BZ2004v2")?,
            m_fit2_0: user.bind(parameters, "B->K::m_fit^2_0@BZ2004v2")?,
            r1_t: user.bind(parameters, "B->K::r1_t@BZ2004v2")?,
            r2_t: user.bind(parameters, "B->K::r2_t@BZ2004v2")?,
            m_fit2_t: user.bind(parameters, "B->K::m_fit^2_t@BZ2004v2")?,
            user,
        })
    }
}

impl PToPFormFactors for BZ2004FormFactors {
    fn f_p(&self, q2: f64) -> f64 {
        self.r1_p.value() / (1.0 - q2 / M_RES_SQ) + self.r2_p.value() / (1.0 - q2 / self.m_fit2_p.value())
    }

    fn f_0(&self, q2: f64) -> f64 {
        self.r2_0.value() / (1.0 - q2 / self.m_fit2_0.value())
    }

    fn f_t(&self, q2: f64) -> f64 {
        self.r1_t.value() / (1.0 - q2 / M_RES_SQ) + self.r2_t.value() / (1.0 - q2 / self.m_fit2_t.value())
    }

    fn used_parameter_ids(&self) -> Vec<ParameterId> {
        self.user.used_ids()
    }
}
