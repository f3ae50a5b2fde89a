//! B_s -> phi J/psi (and psi(2S)) from the non-local amplitude residues.

use std::f64::consts::PI;

use heft_core::{HeftError, Options, ParameterId, ParameterUser, Parameters, UsedParameter};
use heft_ff::{FormFactorFactory, NonlocalFormFactors};
use heft_num::{lambda, pow2};

/// Charmonium selected by the `psi` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charmonium {
    /// J/psi
    JPsi,
    /// psi(2S)
    Psi2S,
}

/// Observables of the B_s -> phi psi decay.
pub struct BsToPhiPsi {
    user: ParameterUser,
    nonlocal: Box<dyn NonlocalFormFactors>,
    charmonium: Charmonium,
    m_bs: UsedParameter,
    m_phi: UsedParameter,
    m_jpsi: UsedParameter,
    m_psi2s: UsedParameter,
    life_time: UsedParameter,
    hbar: UsedParameter,
}

struct SquaredAmplitudes {
    perp: f64,
    para: f64,
    long: f64,
}

impl SquaredAmplitudes {
    fn total(&self) -> f64 {
        self.perp + self.para + self.long
    }
}

impl BsToPhiPsi {
    /// Constructs the decay bound to parameters and options.
    pub fn new(parameters: &Parameters, options: &Options) -> Result<Self, HeftError> {
        let user = ParameterUser::new();
        let tag = options.switch("nonlocal-formfactors", &["GvDV2020", "GRvDV2021"], "GvDV2020")?;
        let nonlocal = FormFactorFactory::nonlocal(
            &format!("B_s->phiccbar::{tag}"),
            parameters,
            options,
        )?;
        let charmonium = match options.switch("psi", &["J/psi", "psi(2S)"], "J/psi")?.as_str() {
            "psi(2S)" => Charmonium::Psi2S,
            _ => Charmonium::JPsi,
        };
        Ok(Self {
            charmonium,
            m_bs: user.bind(parameters, "mass::B_s")?,
            m_phi: user.bind(parameters, "mass::phi")?,
            m_jpsi: user.bind(parameters, "mass::J/psi")?,
            m_psi2s: user.bind(parameters, "mass::psi(2S)")?,
            life_time: user.bind(parameters, "life_time::B_s")?,
            hbar: user.bind(parameters, "QM::hbar")?,
            nonlocal,
            user,
        })
    }

    fn m_psi(&self) -> f64 {
        match self.charmonium {
            Charmonium::JPsi => self.m_jpsi.value(),
            Charmonium::Psi2S => self.m_psi2s.value(),
        }
    }

    fn squared_amplitudes(&self) -> SquaredAmplitudes {
        let (r_perp, r_para, r_long) = match self.charmonium {
            Charmonium::JPsi => (
                self.nonlocal.h_perp_residue_jpsi(),
                self.nonlocal.h_para_residue_jpsi(),
                self.nonlocal.h_long_residue_jpsi(),
            ),
            Charmonium::Psi2S => (
                self.nonlocal.h_perp_residue_psi2s(),
                self.nonlocal.h_para_residue_psi2s(),
                self.nonlocal.h_long_residue_psi2s(),
            ),
        };
        let m_b = self.m_bs.value();
        let q2 = pow2(self.m_psi());
        let lam = lambda(pow2(m_b), pow2(self.m_phi.value()), q2).max(0.0);

        SquaredAmplitudes {
            perp: 2.0 * lam / pow2(pow2(m_b)) * r_perp.norm_sqr(),
            para: 2.0 * lam / pow2(pow2(m_b)) * r_para.norm_sqr(),
            long: pow2(pow2(m_b) - pow2(self.m_phi.value()) - q2) / (pow2(m_b) * q2)
                * r_long.norm_sqr(),
        }
    }

    /// Decay width in internal units.
    pub fn decay_width(&self) -> f64 {
        let m_b = self.m_bs.value();
        let lam = lambda(pow2(m_b), pow2(self.m_phi.value()), pow2(self.m_psi()));
        if lam <= 0.0 {
            return 0.0;
        }
        lam.sqrt() / (16.0 * PI * pow2(m_b) * m_b) * self.squared_amplitudes().total()
    }

    /// Branching ratio in internal units.
    pub fn branching_ratio(&self) -> f64 {
        self.decay_width() * self.life_time.value() / self.hbar.value()
    }

    /// Longitudinal polarization fraction.
    pub fn longitudinal_polarization(&self) -> f64 {
        let amps = self.squared_amplitudes();
        amps.long / amps.total()
    }

    /// Perpendicular polarization fraction.
    pub fn perpendicular_polarization(&self) -> f64 {
        let amps = self.squared_amplitudes();
        amps.perp / amps.total()
    }

    /// Identifiers of all parameters this decay reads.
    pub fn used_parameter_ids(&self) -> Vec<ParameterId> {
        let mut ids = self.user.used_ids();
        ids.extend(self.nonlocal.used_parameter_ids());
        ids.sort();
        ids.dedup();
        ids
    }
}
