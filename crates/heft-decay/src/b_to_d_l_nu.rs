//! B -> D l nu with HQET form factors.

use std::f64::consts::PI;

use heft_core::{HeftError, Options, ParameterId, ParameterUser, Parameters, UsedParameter};
use heft_ff::{FormFactorFactory, PToPFormFactors};
use heft_model::{make_model, LeptonFlavor, Model};
use heft_num::{integrate, lambda, pow2, QuadratureOpts};

/// Observables of the B -> D l nu decay.
pub struct BToDLeptonNeutrino {
    user: ParameterUser,
    model: Box<dyn Model>,
    form_factors: Box<dyn PToPFormFactors>,
    m_l: UsedParameter,
    m_b_meson: UsedParameter,
    m_d: UsedParameter,
    m_b_quark: UsedParameter,
    m_c_quark: UsedParameter,
    g_fermi: UsedParameter,
    life_time: UsedParameter,
    hbar: UsedParameter,
    lepton: LeptonFlavor,
    cp_conjugate: bool,
    opts: QuadratureOpts,
}

impl BToDLeptonNeutrino {
    /// Constructs the decay bound to parameters and options.
    pub fn new(parameters: &Parameters, options: &Options) -> Result<Self, HeftError> {
        let user = ParameterUser::new();
        let lepton = LeptonFlavor::from_options(options)?;
        let tag = options.switch("form-factors", &["HQET"], "HQET")?;
        let form_factors =
            FormFactorFactory::p_to_p(&format!("B->D::{tag}"), parameters, options)?;
        let model = make_model(parameters, options)?;
        Ok(Self {
            lepton,
            cp_conjugate: options.boolean("cp-conjugate", false)?,
            m_l: user.bind(parameters, lepton.mass_parameter())?,
            m_b_meson: user.bind(parameters, "mass::B_d")?,
            m_d: user.bind(parameters, "mass::D^+")?,
            m_b_quark: user.bind_or_declare(parameters, "HQET::m_b_pole", 4.71),
            m_c_quark: user.bind_or_declare(parameters, "HQET::m_c_pole", 1.35),
            g_fermi: user.bind(parameters, "WET::G_Fermi")?,
            life_time: user.bind(parameters, "life_time::B_d")?,
            hbar: user.bind(parameters, "QM::hbar")?,
            model,
            form_factors,
            user,
            opts: QuadratureOpts::default(),
        })
    }

    /// dGamma/dq^2 in GeV^-1.
    pub fn differential_decay_width(&self, q2: f64) -> f64 {
        let m_b = self.m_b_meson.value();
        let m_d = self.m_d.value();
        let m_l = self.m_l.value();
        let lam = lambda(pow2(m_b), pow2(m_d), q2);
        if lam <= 0.0 || q2 <= pow2(m_l) {
            return 0.0;
        }
        let wc = self
            .model
            .wilson_coefficients_charged_current(self.lepton, self.cp_conjugate);
        let ckm = self.model.ckm();
        let g_v = wc.c_v_l() + wc.c_v_r();
        let g_s = wc.c_s_l() + wc.c_s_r();

        let f_p = self.form_factors.f_p(q2);
        let f_0 = self.form_factors.f_0(q2);

        let h_0 = (lam / q2).sqrt() * f_p;
        let h_t = (pow2(m_b) - pow2(m_d)) / q2.sqrt() * f_0;
        let h_s = (pow2(m_b) - pow2(m_d)) / (self.m_b_quark.value() - self.m_c_quark.value()) * f_0;

        let ml2_q2 = pow2(m_l) / q2;
        let norm = pow2(self.g_fermi.value()) * ckm.v_cb.norm_sqr() * q2 * lam.sqrt()
            * pow2(1.0 - ml2_q2)
            / (192.0 * PI * PI * PI * pow2(m_b) * m_b);

        let vector_part = g_v.norm_sqr()
            * ((1.0 + ml2_q2 / 2.0) * pow2(h_0) + 1.5 * ml2_q2 * pow2(h_t));
        let scalar_part = 1.5 * (g_s * h_s).norm_sqr()
            + 3.0 * ml2_q2.sqrt() * (g_v * g_s.conj()).re * h_t * h_s;

        norm * (vector_part + scalar_part)
    }

    /// Decay width integrated over the full phase space.
    pub fn integrated_decay_width(&self) -> f64 {
        let q2_min = pow2(self.m_l.value()) + 1e-6;
        let q2_max = pow2(self.m_b_meson.value() - self.m_d.value());
        integrate(
            |q2| self.differential_decay_width(q2),
            q2_min,
            q2_max,
            &self.opts,
        )
        .value
    }

    /// Branching ratio integrated over [q2_min, q2_max].
    pub fn integrated_branching_ratio(&self, q2_min: f64, q2_max: f64) -> f64 {
        integrate(
            |q2| self.differential_decay_width(q2),
            q2_min,
            q2_max,
            &self.opts,
        )
        .value
            * self.life_time.value()
            / self.hbar.value()
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

/// Lepton-universality ratio R_D = Gamma(tau) / average of Gamma(e), Gamma(mu).
pub fn r_d(parameters: &Parameters, options: &Options) -> Result<f64, HeftError> {
    let make = |flavor: &str| -> Result<BToDLeptonNeutrino, HeftError> {
        let merged = options.clone() + &Options::from_pairs([("l", flavor)]);
        BToDLeptonNeutrino::new(parameters, &merged)
    };
    let tau = make("tau")?.integrated_decay_width();
    let electron = make("e")?.integrated_decay_width();
    let muon = make("mu")?.integrated_decay_width();
    Ok(tau / (0.5 * (electron + muon)))
}
