//! B -> K^* l+ l- angular observables.
//!
//! Transversity amplitudes in naive factorization with effective
//! coefficients; the angular distribution is expanded into the J_i basis
//! and the published observables (F_L, A_FB, S_i, P'_5, R_K*) are ratios
//! of integrated coefficients.

use num_complex::Complex64;
use std::f64::consts::PI;

use heft_core::{HeftError, Options, ParameterId, ParameterUser, Parameters, UsedParameter};
use heft_ff::{FormFactorFactory, PToVFormFactors};
use heft_model::{make_model, LeptonFlavor, Model};
use heft_num::{integrate, lambda, pow2, QuadratureOpts};

use crate::b_to_k_ll::{c7_effective, c9_effective};

/// Angular coefficients of the four-fold distribution at fixed q^2.
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
pub struct AngularJ {
    /// J_1s
    pub j1s: f64,
    /// J_1c
    pub j1c: f64,
    /// J_2s
    pub j2s: f64,
    /// J_2c
    pub j2c: f64,
    /// J_3
    pub j3: f64,
    /// J_4
    pub j4: f64,
    /// J_5
    pub j5: f64,
    /// J_6s
    pub j6s: f64,
    /// J_9
    pub j9: f64,
}

impl AngularJ {
    /// dGamma/dq^2 reconstructed from the coefficients.
    pub fn decay_width(&self) -> f64 {
        0.75 * (2.0 * self.j1s + self.j1c) - 0.25 * (2.0 * self.j2s + self.j2c)
    }
}

/// Observables of the B -> K^* l+ l- decay.
pub struct BToKstarDilepton {
    user: ParameterUser,
    model: Box<dyn Model>,
    form_factors: Box<dyn PToVFormFactors>,
    lepton: LeptonFlavor,
    cp_conjugate: bool,
    m_b_meson: UsedParameter,
    m_kstar: UsedParameter,
    m_l: UsedParameter,
    g_fermi: UsedParameter,
    alpha_e: UsedParameter,
    mu_b: UsedParameter,
    life_time: UsedParameter,
    hbar: UsedParameter,
    opts: QuadratureOpts,
}

struct Amplitudes {
    perp_l: Complex64,
    perp_r: Complex64,
    para_l: Complex64,
    para_r: Complex64,
    long_l: Complex64,
    long_r: Complex64,
    time: Complex64,
    beta: f64,
    m_l2_over_q2: f64,
}

impl BToKstarDilepton {
    /// Constructs the decay bound to parameters and options.
    pub fn new(parameters: &Parameters, options: &Options) -> Result<Self, HeftError> {
        let user = ParameterUser::new();
        let lepton = LeptonFlavor::from_options(options)?;
        let tag = options.switch("form-factors", &["BSZ2015"], "BSZ2015")?;
        let form_factors =
            FormFactorFactory::p_to_v(&format!("B->K^*::{tag}"), parameters, options)?;
        let model = make_model(parameters, options)?;
        Ok(Self {
            lepton,
            cp_conjugate: options.boolean("cp-conjugate", false)?,
            m_b_meson: user.bind(parameters, "mass::B_d")?,
            m_kstar: user.bind(parameters, "mass::K^*_d")?,
            m_l: user.bind(parameters, lepton.mass_parameter())?,
            g_fermi: user.bind(parameters, "WET::G_Fermi")?,
            alpha_e: user.bind(parameters, "QED::alpha_e(m_b)")?,
            mu_b: user.bind(parameters, "QCD::mu_b")?,
            life_time: user.bind(parameters, "life_time::B_d")?,
            hbar: user.bind(parameters, "QM::hbar")?,
            model,
            form_factors,
            user,
            opts: QuadratureOpts::default(),
        })
    }

    fn amplitudes(&self, q2: f64) -> Option<Amplitudes> {
        let m_b = self.m_b_meson.value();
        let m_v = self.m_kstar.value();
        let m_l = self.m_l.value();
        let mu = self.mu_b.value();
        let lam = lambda(pow2(m_b), pow2(m_v), q2);
        if lam <= 0.0 || q2 <= 4.0 * pow2(m_l) {
            return None;
        }
        let beta = (1.0 - 4.0 * pow2(m_l) / q2).sqrt();

        let wc = self
            .model
            .wilson_coefficients_b_to_s(self.lepton, self.cp_conjugate);
        let m_b_quark = self.model.m_b_msbar(mu);
        let m_c_quark = self.model.m_c_msbar(mu);
        let ckm = self.model.ckm();

        let c7 = c7_effective(&wc);
        let c7p = wc.c_prime(7);
        let c9 = c9_effective(&wc, q2, m_c_quark, m_b_quark, mu);
        let c9p = wc.c_prime(9);
        let c10 = wc.c(10);
        let c10p = wc.c_prime(10);

        let n2 = pow2(self.g_fermi.value()) * pow2(self.alpha_e.value())
            * pow2(ckm.abs_v_tb_v_ts())
            * q2
            * lam.sqrt()
            * beta
            / (3.0 * 1024.0 * pow2(pow2(PI)) * PI * pow2(m_b) * m_b);
        let n = n2.sqrt();

        let v = self.form_factors.v(q2);
        let a_0 = self.form_factors.a_0(q2);
        let a_1 = self.form_factors.a_1(q2);
        let a_2 = self.form_factors.a_2(q2);
        let t_1 = self.form_factors.t_1(q2);
        let t_2 = self.form_factors.t_2(q2);
        let t_3 = self.form_factors.t_3(q2);

        let perp = |chirality: f64| -> Complex64 {
            ((c9 + c9p) + chirality * (c10 + c10p)) * v / (m_b + m_v)
                + 2.0 * m_b_quark / q2 * (c7 + c7p) * t_1
        };
        let para = |chirality: f64| -> Complex64 {
            ((c9 - c9p) + chirality * (c10 - c10p)) * a_1 / (m_b - m_v)
                + 2.0 * m_b_quark / q2 * (c7 - c7p) * t_2
        };
        let long = |chirality: f64| -> Complex64 {
            let wilson = (c9 - c9p) + chirality * (c10 - c10p);
            let ff_part = (pow2(m_b) - pow2(m_v) - q2) * (m_b + m_v) * a_1
                - lam * a_2 / (m_b + m_v);
            let dipole = 2.0 * m_b_quark * (c7 - c7p)
                * ((pow2(m_b) + 3.0 * pow2(m_v) - q2) * t_2
                    - lam / (pow2(m_b) - pow2(m_v)) * t_3);
            (wilson * ff_part + dipole) / (2.0 * m_v * q2.sqrt())
        };

        let sqrt_2lam = (2.0 * lam).sqrt();
        Some(Amplitudes {
            perp_l: sqrt_2lam * n * perp(-1.0),
            perp_r: sqrt_2lam * n * perp(1.0),
            para_l: -std::f64::consts::SQRT_2 * (pow2(m_b) - pow2(m_v)) * n * para(-1.0),
            para_r: -std::f64::consts::SQRT_2 * (pow2(m_b) - pow2(m_v)) * n * para(1.0),
            long_l: -n * long(-1.0),
            long_r: -n * long(1.0),
            time: 2.0 * n * lam.sqrt() / q2.sqrt() * (c10 - c10p) * a_0,
            beta,
            m_l2_over_q2: pow2(m_l) / q2,
        })
    }

    /// Angular coefficients at fixed q^2.
    pub fn angular_coefficients(&self, q2: f64) -> AngularJ {
        let Some(amp) = self.amplitudes(q2) else {
            return AngularJ::default();
        };
        let beta2 = pow2(amp.beta);
        let ml2 = amp.m_l2_over_q2;

        let sum_trans_l = amp.perp_l.norm_sqr() + amp.para_l.norm_sqr();
        let sum_trans_r = amp.perp_r.norm_sqr() + amp.para_r.norm_sqr();
        let sum_long = amp.long_l.norm_sqr() + amp.long_r.norm_sqr();

        AngularJ {
            j1s: (2.0 + beta2) / 4.0 * (sum_trans_l + sum_trans_r)
                + 4.0 * ml2
                    * (amp.perp_l * amp.perp_r.conj() + amp.para_l * amp.para_r.conj()).re,
            j1c: sum_long
                + 4.0 * ml2
                    * (amp.time.norm_sqr() + 2.0 * (amp.long_l * amp.long_r.conj()).re),
            j2s: beta2 / 4.0 * (sum_trans_l + sum_trans_r),
            j2c: -beta2 * sum_long,
            j3: beta2 / 2.0
                * (amp.perp_l.norm_sqr() - amp.para_l.norm_sqr() + amp.perp_r.norm_sqr()
                    - amp.para_r.norm_sqr()),
            j4: beta2 / std::f64::consts::SQRT_2
                * ((amp.long_l * amp.para_l.conj()).re + (amp.long_r * amp.para_r.conj()).re),
            j5: std::f64::consts::SQRT_2
                * amp.beta
                * ((amp.long_l * amp.perp_l.conj()).re - (amp.long_r * amp.perp_r.conj()).re),
            j6s: 2.0 * amp.beta
                * ((amp.para_l * amp.perp_l.conj()).re - (amp.para_r * amp.perp_r.conj()).re),
            j9: beta2
                * ((amp.perp_l * amp.para_l.conj()).im + (amp.perp_r * amp.para_r.conj()).im),
        }
    }

    /// dBR/dq^2 in GeV^-2.
    pub fn differential_branching_ratio(&self, q2: f64) -> f64 {
        self.angular_coefficients(q2).decay_width() * self.life_time.value() / self.hbar.value()
    }

    /// Branching ratio integrated over [q2_min, q2_max].
    pub fn integrated_branching_ratio(&self, q2_min: f64, q2_max: f64) -> f64 {
        integrate(
            |q2| self.differential_branching_ratio(q2),
            q2_min,
            q2_max,
            &self.opts,
        )
        .value
    }

    fn integrated_j<F: Fn(&AngularJ) -> f64>(&self, q2_min: f64, q2_max: f64, select: F) -> f64 {
        integrate(
            |q2| select(&self.angular_coefficients(q2)),
            q2_min,
            q2_max,
            &self.opts,
        )
        .value
    }

    /// Longitudinal polarization fraction integrated over [q2_min, q2_max].
    pub fn integrated_f_l(&self, q2_min: f64, q2_max: f64) -> f64 {
        let j1c = self.integrated_j(q2_min, q2_max, |j| j.j1c);
        let j2c = self.integrated_j(q2_min, q2_max, |j| j.j2c);
        let width = self.integrated_j(q2_min, q2_max, AngularJ::decay_width);
        (j1c - j2c / 3.0) * 0.75 / width
    }

    /// Forward-backward asymmetry integrated over [q2_min, q2_max].
    pub fn integrated_forward_backward_asymmetry(&self, q2_min: f64, q2_max: f64) -> f64 {
        let j6s = self.integrated_j(q2_min, q2_max, |j| j.j6s);
        let width = self.integrated_j(q2_min, q2_max, AngularJ::decay_width);
        0.75 * j6s / width
    }

    /// S_5 integrated over [q2_min, q2_max].
    pub fn integrated_s_5(&self, q2_min: f64, q2_max: f64) -> f64 {
        self.integrated_j(q2_min, q2_max, |j| j.j5)
            / self.integrated_j(q2_min, q2_max, AngularJ::decay_width)
    }

    /// Optimized observable P'_5 integrated over [q2_min, q2_max].
    pub fn integrated_p_prime_5(&self, q2_min: f64, q2_max: f64) -> f64 {
        let j5 = self.integrated_j(q2_min, q2_max, |j| j.j5);
        let j2s = self.integrated_j(q2_min, q2_max, |j| j.j2s);
        let j2c = self.integrated_j(q2_min, q2_max, |j| j.j2c);
        j5 / (2.0 * (-j2c * j2s).sqrt())
    }

    /// Zero crossing of the forward-backward asymmetry, if any, in [1, 9] GeV^2.
    pub fn a_fb_zero_crossing(&self) -> Option<f64> {
        let mut lo = 1.0;
        let mut hi = 9.0;
        let f = |q2: f64| self.angular_coefficients(q2).j6s;
        if f(lo) * f(hi) > 0.0 {
            return None;
        }
        for _ in 0..64 {
            let mid = 0.5 * (lo + hi);
            if f(lo) * f(mid) <= 0.0 {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        Some(0.5 * (lo + hi))
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

/// Lepton-universality ratio R_K* over [q2_min, q2_max].
pub fn r_kstar(
    parameters: &Parameters,
    options: &Options,
    q2_min: f64,
    q2_max: f64,
) -> Result<f64, HeftError> {
    let muon_options = options.clone() + &Options::from_pairs([("l", "mu")]);
    let electron_options = options.clone() + &Options::from_pairs([("l", "e")]);
    let muons = BToKstarDilepton::new(parameters, &muon_options)?;
    let electrons = BToKstarDilepton::new(parameters, &electron_options)?;
    Ok(muons.integrated_branching_ratio(q2_min, q2_max)
        / electrons.integrated_branching_ratio(q2_min, q2_max))
}
