//! Timelike pion vector form factor on the z plane.
//!
//! A unit-normalized series divided by an outer function whose modulus on
//! the unit circle encodes the dispersive weight with the fixed
//! susceptibility chi = 3.52e-3 GeV^-2. The KKRvD2024 variant adds the
//! rho(770) as a conjugate pair of second-sheet Blaschke poles.

use num_complex::Complex64;

use heft_core::{HeftError, ParameterId, ParameterUser, Parameters, UsedParameter};
use heft_num::pow2;

use crate::traits::VacuumToPPFormFactors;
use crate::zexp::{BlaschkeFactor, ZVariable};

// hadronic susceptibility of the isovector current, fixed by the source
const CHI_PIPI: f64 = 3.52e-3;

/// Pion vector form factor, EGJvD2020 series or KKRvD2024 refinement.
#[derive(Debug)]
pub struct PionVectorFF {
    user: ParameterUser,
    m_pi: UsedParameter,
    b: [UsedParameter; 4],
    m_rho: UsedParameter,
    gamma_rho: UsedParameter,
    with_rho_poles: bool,
}

impl PionVectorFF {
    /// Binds the EGJvD2020 variant (no explicit resonance factor).
    pub fn egjvd2020(parameters: &Parameters) -> Result<Self, HeftError> {
        Self::build(parameters, false)
    }

    /// Binds the KKRvD2024 variant (rho poles through a Blaschke factor).
    pub fn kkrvd2024(parameters: &Parameters) -> Result<Self, HeftError> {
        Self::build(parameters, true)
    }

    fn build(parameters: &Parameters, with_rho_poles: bool) -> Result<Self, HeftError> {
        let user = ParameterUser::new();
        let b = [
            user.bind(parameters, "pi->pi::b_1@KKRvD2024")?,
            user.bind(parameters, "pi->pi::b_2@KKRvD2024")?,
            user.bind(parameters, "pi->pi::b_3@KKRvD2024")?,
            user.bind(parameters, "pi->pi::b_4@KKRvD2024")?,
        ];
        Ok(Self {
            m_pi: user.bind(parameters, "mass::pi^+")?,
            b,
            m_rho: user.bind(parameters, "pi->pi::M@KKRvD2024")?,
            gamma_rho: user.bind(parameters, "pi->pi::Gamma@KKRvD2024")?,
            with_rho_poles,
            user,
        })
    }

    fn z_var(&self) -> ZVariable {
        // t_0 = 0 maps the photon point to z = 0
        ZVariable::new(4.0 * pow2(self.m_pi.value()), 0.0)
    }

    fn outer(&self, z: Complex64) -> Complex64 {
        let t_plus = 4.0 * pow2(self.m_pi.value());
        let one = Complex64::new(1.0, 0.0);
        let norm = (32.0 * std::f64::consts::PI * CHI_PIPI * pow2(t_plus)).sqrt();
        (one + z) * (one + z) * (one - z).sqrt() / norm
    }

    fn blaschke(&self) -> BlaschkeFactor {
        let mut factor = BlaschkeFactor::new();
        if self.with_rho_poles {
            let m = self.m_rho.value();
            let gamma = self.gamma_rho.value();
            let pole_q2 = Complex64::new(pow2(m), -m * gamma);
            let z_var = self.z_var();
            let z_pole = z_var.z_complex(pole_q2);
            factor.push_pole(z_pole);
            factor.push_pole(z_pole.conj());
        }
        factor
    }

    /// Saturation of the dispersive bound by the series coefficients.
    pub fn saturation(&self) -> f64 {
        let zero = Complex64::new(0.0, 0.0);
        let c_0 = (self.outer(zero) * self.blaschke().eval(zero)).norm();
        pow2(c_0) + self.b.iter().map(|b| pow2(b.value())).sum::<f64>()
    }
}

impl VacuumToPPFormFactors for PionVectorFF {
    fn f_p(&self, q2: f64) -> Complex64 {
        let z_var = self.z_var();
        let z = z_var.z_complex(Complex64::new(q2, 0.0));
        let blaschke = self.blaschke();
        // unit normalization at q^2 = 0
        let zero = Complex64::new(0.0, 0.0);
        let c_0 = self.outer(zero) * blaschke.eval(zero);
        let mut series = c_0;
        let mut power = z;
        for b in &self.b {
            series += b.value() * power;
            power *= z;
        }
        series / (self.outer(z) * blaschke.eval(z))
    }

    fn used_parameter_ids(&self) -> Vec<ParameterId> {
        self.user.used_ids()
    }
}
