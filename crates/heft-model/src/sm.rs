//! The Standard Model of short-distance physics.

use num_complex::Complex64;

use heft_core::{HeftError, ParameterId, ParameterUser, Parameters, UsedParameter};

use crate::ckm::CkmMatrix;
use crate::model::{LeptonFlavor, Model};
use crate::qcd;
use crate::transition::{BToS, ChargedCurrent};
use crate::wilson::WilsonCoefficients;

/// Standard Model: fixed Wilson coefficients at mu_b, lepton-flavor universal.
#[derive(Debug)]
pub struct StandardModel {
    user: ParameterUser,
    alpha_s_mz: UsedParameter,
    m_z: UsedParameter,
    mu_b: UsedParameter,
    m_b: UsedParameter,
    m_c: UsedParameter,
    ckm_lambda: UsedParameter,
    ckm_a: UsedParameter,
    ckm_rhobar: UsedParameter,
    ckm_etabar: UsedParameter,
    // b->s sector: c1..c6, c7, c8, c9, c10 (real at mu_b in the SM)
    c_low: [UsedParameter; 6],
    c7: UsedParameter,
    c8: UsedParameter,
    c9: UsedParameter,
    c10: UsedParameter,
    cc_cvl: UsedParameter,
}

impl StandardModel {
    /// Binds the Standard Model to a parameter set.
    pub fn new(parameters: &Parameters) -> Result<Self, HeftError> {
        let user = ParameterUser::new();
        let c_low = [
            user.bind(parameters, "b->s::c1")?,
            user.bind(parameters, "b->s::c2")?,
            user.bind(parameters, "b->s::c3")?,
            user.bind(parameters, "b->s::c4")?,
            user.bind(parameters, "b->s::c5")?,
            user.bind(parameters, "b->s::c6")?,
        ];
        Ok(Self {
            alpha_s_mz: user.bind(parameters, "QCD::alpha_s(MZ)")?,
            m_z: user.bind(parameters, "mass::Z")?,
            mu_b: user.bind(parameters, "QCD::mu_b")?,
            m_b: user.bind(parameters, "mass::b(MSbar)")?,
            m_c: user.bind(parameters, "mass::c")?,
            ckm_lambda: user.bind(parameters, "CKM::lambda")?,
            ckm_a: user.bind(parameters, "CKM::A")?,
            ckm_rhobar: user.bind(parameters, "CKM::rhobar")?,
            ckm_etabar: user.bind(parameters, "CKM::etabar")?,
            c_low,
            c7: user.bind(parameters, "b->s::Re{c7}")?,
            c8: user.bind(parameters, "b->s::c8")?,
            c9: user.bind(parameters, "b->s::Re{c9}")?,
            c10: user.bind(parameters, "b->s::Re{c10}")?,
            cc_cvl: user.bind(parameters, "b->clnu::Re{cVL}")?,
            user,
        })
    }
}

impl StandardModel {
    /// Strong coupling at the coefficient scale mu_b.
    pub fn alpha_s_at_mu_b(&self) -> f64 {
        self.alpha_s(self.mu_b.value())
    }
}

impl Model for StandardModel {
    fn alpha_s(&self, mu: f64) -> f64 {
        let alpha_mz = self.alpha_s_mz.value();
        let m_z = self.m_z.value();
        let mu_b = self.mu_b.value();
        if mu >= mu_b {
            qcd::alpha_s_evolve(alpha_mz, m_z, mu, 5)
        } else {
            let at_mu_b = qcd::alpha_s_evolve(alpha_mz, m_z, mu_b, 5);
            qcd::alpha_s_evolve(at_mu_b, mu_b, mu, 4)
        }
    }

    fn m_b_msbar(&self, mu: f64) -> f64 {
        let m_b = self.m_b.value();
        let alpha_at_mb = self.alpha_s(m_b);
        let mu_b = self.mu_b.value();
        if mu >= mu_b {
            qcd::msbar_mass_evolve(m_b, alpha_at_mb, m_b, mu, 5)
        } else {
            let at_mu_b = qcd::msbar_mass_evolve(m_b, alpha_at_mb, m_b, mu_b, 5);
            qcd::msbar_mass_evolve(at_mu_b, self.alpha_s(mu_b), mu_b, mu, 4)
        }
    }

    fn m_c_msbar(&self, mu: f64) -> f64 {
        let m_c = self.m_c.value();
        qcd::msbar_mass_evolve(m_c, self.alpha_s(m_c), m_c, mu, 4)
    }

    fn m_b_pole(&self) -> f64 {
        let m_b = self.m_b.value();
        qcd::pole_from_msbar(m_b, self.alpha_s(m_b))
    }

    fn m_c_pole(&self) -> f64 {
        let m_c = self.m_c.value();
        qcd::pole_from_msbar(m_c, self.alpha_s(m_c))
    }

    fn ckm(&self) -> CkmMatrix {
        CkmMatrix::from_wolfenstein(
            self.ckm_lambda.value(),
            self.ckm_a.value(),
            self.ckm_rhobar.value(),
            self.ckm_etabar.value(),
        )
    }

    fn wilson_coefficients_b_to_s(
        &self,
        _lepton: LeptonFlavor,
        cp_conjugate: bool,
    ) -> WilsonCoefficients<BToS> {
        let mut wc = WilsonCoefficients::<BToS>::default();
        for (idx, c) in self.c_low.iter().enumerate() {
            wc.sm_like[idx] = Complex64::new(c.value(), 0.0);
        }
        wc.sm_like[6] = Complex64::new(self.c7.value(), 0.0);
        wc.sm_like[7] = Complex64::new(self.c8.value(), 0.0);
        wc.sm_like[8] = Complex64::new(self.c9.value(), 0.0);
        wc.sm_like[9] = Complex64::new(self.c10.value(), 0.0);
        wc.alpha_s = self.alpha_s(self.mu_b.value());
        if cp_conjugate {
            wc.cp_conjugate()
        } else {
            wc
        }
    }

    fn wilson_coefficients_charged_current(
        &self,
        _lepton: LeptonFlavor,
        cp_conjugate: bool,
    ) -> WilsonCoefficients<ChargedCurrent> {
        let mut wc = WilsonCoefficients::<ChargedCurrent>::default();
        wc.sm_like[0] = Complex64::new(self.cc_cvl.value(), 0.0);
        wc.alpha_s = self.alpha_s(self.mu_b.value());
        if cp_conjugate {
            wc.cp_conjugate()
        } else {
            wc
        }
    }

    fn used_parameter_ids(&self) -> Vec<ParameterId> {
        self.user.used_ids()
    }
}
