//! B -> D^* l nu with HQET form factors.
//!
//! Helicity amplitudes H_+, H_-, H_0, H_t feed the differential width, the
//! D^* polarization fractions, the lepton-side asymmetries, and R(D^*).

use std::f64::consts::PI;

use heft_core::{HeftError, Options, ParameterId, ParameterUser, Parameters, UsedParameter};
use heft_ff::{FormFactorFactory, PToVFormFactors};
use heft_model::{make_model, LeptonFlavor, Model};
use heft_num::{integrate, lambda, pow2, QuadratureOpts};

/// Helicity amplitudes at fixed q^2 (real for real couplings and form factors).
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
pub struct HelicityAmplitudes {
    /// H_+
    pub h_plus: f64,
    /// H_-
    pub h_minus: f64,
    /// H_0
    pub h_zero: f64,
    /// H_t
    pub h_time: f64,
}

/// Observables of the B -> D^* l nu decay.
pub struct BToDstarLeptonNeutrino {
    user: ParameterUser,
    model: Box<dyn Model>,
    form_factors: Box<dyn PToVFormFactors>,
    m_l: UsedParameter,
    m_b_meson: UsedParameter,
    m_dstar: UsedParameter,
    g_fermi: UsedParameter,
    life_time: UsedParameter,
    hbar: UsedParameter,
    lepton: LeptonFlavor,
    cp_conjugate: bool,
    opts: QuadratureOpts,
}

impl BToDstarLeptonNeutrino {
    /// Constructs the decay bound to parameters and options.
    pub fn new(parameters: &Parameters, options: &Options) -> Result<Self, HeftError> {
        let user = ParameterUser::new();
        let lepton = LeptonFlavor::from_options(options)?;
        let tag = options.switch("form-factors", &["HQET"], "HQET")?;
        let form_factors =
            FormFactorFactory::p_to_v(&format!("B->D^*::{tag}"), parameters, options)?;
        let model = make_model(parameters, options)?;
        Ok(Self {
            lepton,
            cp_conjugate: options.boolean("cp-conjugate", false)?,
            m_l: user.bind(parameters, lepton.mass_parameter())?,
            m_b_meson: user.bind(parameters, "mass::B_d")?,
            m_dstar: user.bind(parameters, "mass::D_d^*")?,
            g_fermi: user.bind(parameters, "WET::G_Fermi")?,
            life_time: user.bind(parameters, "life_time::B_d")?,
            hbar: user.bind(parameters, "QM::hbar")?,
            model,
            form_factors,
            user,
            opts: QuadratureOpts::default(),
        })
    }

    /// Kinematic limits of the dilepton mass squared.
    pub fn q2_range(&self) -> (f64, f64) {
        (
            pow2(self.m_l.value()) + 1e-6,
            pow2(self.m_b_meson.value() - self.m_dstar.value()),
        )
    }

    /// Helicity amplitudes at fixed q^2.
    pub fn helicity_amplitudes(&self, q2: f64) -> HelicityAmplitudes {
        let m_b = self.m_b_meson.value();
        let m_v = self.m_dstar.value();
        let lam = lambda(pow2(m_b), pow2(m_v), q2);
        if lam <= 0.0 || q2 <= 0.0 {
            return HelicityAmplitudes::default();
        }
        let p = lam.sqrt() / (2.0 * m_b);

        let wc = self
            .model
            .wilson_coefficients_charged_current(self.lepton, self.cp_conjugate);
        let g_v = (wc.c_v_l() + wc.c_v_r()).re;
        let g_a = (wc.c_v_l() - wc.c_v_r()).re;

        let v = self.form_factors.v(q2);
        let a_0 = self.form_factors.a_0(q2);
        let a_1 = self.form_factors.a_1(q2);
        let a_2 = self.form_factors.a_2(q2);

        let vector_part = 2.0 * m_b * p * v / (m_b + m_v) * g_v;
        let axial_part = (m_b + m_v) * a_1 * g_a;
        let h_zero = ((pow2(m_b) - pow2(m_v) - q2) * pow2(m_b + m_v) * a_1
            - 4.0 * pow2(m_b) * pow2(p) * a_2)
            * g_a
            / (2.0 * m_v * q2.sqrt() * (m_b + m_v));
        let h_time = 2.0 * m_b * p * a_0 * g_a / q2.sqrt();

        HelicityAmplitudes {
            h_plus: axial_part - vector_part,
            h_minus: axial_part + vector_part,
            h_zero,
            h_time,
        }
    }

    fn norm(&self, q2: f64) -> f64 {
        let m_b = self.m_b_meson.value();
        let m_l = self.m_l.value();
        let lam = lambda(pow2(m_b), pow2(self.m_dstar.value()), q2);
        if lam <= 0.0 || q2 <= pow2(m_l) {
            return 0.0;
        }
        let ckm = self.model.ckm();
        pow2(self.g_fermi.value()) * ckm.v_cb.norm_sqr() * q2 * lam.sqrt()
            * pow2(1.0 - pow2(m_l) / q2)
            / (192.0 * PI * PI * PI * pow2(m_b) * m_b)
    }

    /// dGamma/dq^2 in GeV^-1.
    pub fn differential_decay_width(&self, q2: f64) -> f64 {
        let n = self.norm(q2);
        if n == 0.0 {
            return 0.0;
        }
        let amp = self.helicity_amplitudes(q2);
        let ml2_q2 = pow2(self.m_l.value()) / q2;
        let transverse = pow2(amp.h_plus) + pow2(amp.h_minus);
        n * ((1.0 + ml2_q2 / 2.0) * (transverse + pow2(amp.h_zero))
            + 1.5 * ml2_q2 * pow2(amp.h_time))
    }

    /// Longitudinal D^* width density at fixed q^2.
    pub fn differential_longitudinal_width(&self, q2: f64) -> f64 {
        let n = self.norm(q2);
        if n == 0.0 {
            return 0.0;
        }
        let amp = self.helicity_amplitudes(q2);
        let ml2_q2 = pow2(self.m_l.value()) / q2;
        n * ((1.0 + ml2_q2 / 2.0) * pow2(amp.h_zero) + 1.5 * ml2_q2 * pow2(amp.h_time))
    }

    /// Density of events with lepton helicity +1/2 at fixed q^2.
    pub fn differential_positive_helicity_width(&self, q2: f64) -> f64 {
        let n = self.norm(q2);
        if n == 0.0 {
            return 0.0;
        }
        let amp = self.helicity_amplitudes(q2);
        let ml2_q2 = pow2(self.m_l.value()) / q2;
        n * ml2_q2 / 2.0
            * (pow2(amp.h_plus) + pow2(amp.h_minus) + pow2(amp.h_zero)
                + 3.0 * pow2(amp.h_time))
    }

    /// Integrated decay width over the full phase space.
    pub fn integrated_decay_width(&self) -> f64 {
        let (q2_min, q2_max) = self.q2_range();
        integrate(
            |q2| self.differential_decay_width(q2),
            q2_min,
            q2_max,
            &self.opts,
        )
        .value
    }

    /// Integrated branching ratio over the full phase space.
    pub fn integrated_branching_ratio(&self) -> f64 {
        self.integrated_decay_width() * self.life_time.value() / self.hbar.value()
    }

    /// Longitudinal D^* polarization fraction, integrated.
    pub fn integrated_f_l(&self) -> f64 {
        let (q2_min, q2_max) = self.q2_range();
        let longitudinal = integrate(
            |q2| self.differential_longitudinal_width(q2),
            q2_min,
            q2_max,
            &self.opts,
        )
        .value;
        longitudinal / self.integrated_decay_width()
    }

    /// Lepton polarization asymmetry (Gamma(-1/2) - Gamma(+1/2)) / Gamma, integrated.
    pub fn integrated_lepton_polarization(&self) -> f64 {
        let (q2_min, q2_max) = self.q2_range();
        let positive = integrate(
            |q2| self.differential_positive_helicity_width(q2),
            q2_min,
            q2_max,
            &self.opts,
        )
        .value;
        let total = self.integrated_decay_width();
        (total - 2.0 * positive) / total
    }

    /// Forward-backward asymmetry, integrated.
    pub fn integrated_forward_backward_asymmetry(&self) -> f64 {
        let (q2_min, q2_max) = self.q2_range();
        let asymmetric = integrate(
            |q2| {
                let n = self.norm(q2);
                if n == 0.0 {
                    return 0.0;
                }
                let amp = self.helicity_amplitudes(q2);
                let ml2_q2 = pow2(self.m_l.value()) / q2;
                n * 0.75
                    * (pow2(amp.h_minus) - pow2(amp.h_plus)
                        + 4.0 * ml2_q2 * amp.h_zero * amp.h_time)
            },
            q2_min,
            q2_max,
            &self.opts,
        )
        .value;
        asymmetric / self.integrated_decay_width()
    }

    /// Transverse-to-total interference coefficient driving the cos(2 chi) modulation.
    pub fn integrated_chi_interference(&self) -> f64 {
        let (q2_min, q2_max) = self.q2_range();
        let interference = integrate(
            |q2| {
                let n = self.norm(q2);
                if n == 0.0 {
                    return 0.0;
                }
                let amp = self.helicity_amplitudes(q2);
                let ml2_q2 = pow2(self.m_l.value()) / q2;
                -n * (1.0 + ml2_q2 / 2.0) * amp.h_plus * amp.h_minus / 2.0
            },
            q2_min,
            q2_max,
            &self.opts,
        )
        .value;
        interference / self.integrated_decay_width()
    }

    /// Identifiers of all parameters this decay reads.
    pub fn used_parameter_ids(&self) -> Vec<ParameterId> {
        let mut ids = self.user.used_ids();
        ids.extend(self.model.used_parameter_ids());
        ids.extend(self.form_factors.used_parameter_ids());
        ids.sort();
        ids.dedup();
        ids
    }
}

/// Lepton-universality ratio R_D^* = Gamma(tau) / average of Gamma(e), Gamma(mu).
pub fn r_dstar(parameters: &Parameters, options: &Options) -> Result<f64, HeftError> {
    let make = |flavor: &str| -> Result<BToDstarLeptonNeutrino, HeftError> {
        let merged = options.clone() + &Options::from_pairs([("l", flavor)]);
        BToDstarLeptonNeutrino::new(parameters, &merged)
    };
    let tau = make("tau")?.integrated_decay_width();
    let electron = make("e")?.integrated_decay_width();
    let muon = make("mu")?.integrated_decay_width();
    Ok(tau / (0.5 * (electron + muon)))
}
