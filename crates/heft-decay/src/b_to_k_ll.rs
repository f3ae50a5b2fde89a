//! B -> K l+ l- at low hadronic recoil.
//!
//! Effective Wilson coefficients absorb the quark loops through the
//! one-loop function h(q^2, m); the angular distribution in cos(theta_l)
//! is a_l + b_l cos(theta_l) + c_l cos^2(theta_l).

use num_complex::Complex64;
use std::f64::consts::PI;

use heft_core::{HeftError, Options, ParameterId, ParameterUser, Parameters, UsedParameter};
use heft_ff::{FormFactorFactory, PToPFormFactors};
use heft_model::{make_model, BToS, LeptonFlavor, Model, WilsonCoefficients};
use heft_num::{integrate, lambda, pow2, QuadratureOpts};

/// One-loop quark-loop function h(q^2, m_q) at scale mu.
pub fn h_loop(q2: f64, m_q: f64, mu: f64) -> Complex64 {
    if m_q <= 0.0 {
        return Complex64::new(8.0 / 27.0 - 4.0 / 9.0 * (q2 / pow2(mu)).ln(), 4.0 * PI / 9.0);
    }
    let z = 4.0 * pow2(m_q) / q2;
    let mut value = Complex64::new(
        -4.0 / 9.0 * ((pow2(m_q) / pow2(mu)).ln() - 2.0 / 3.0 - z),
        0.0,
    );
    let factor = -4.0 / 9.0 * (2.0 + z) * (z - 1.0).abs().sqrt();
    if z > 1.0 {
        value += factor * (1.0 / (z - 1.0).sqrt()).atan();
    } else {
        value += factor
            * Complex64::new(((1.0 + (1.0 - z).sqrt()) / z.sqrt()).ln(), -PI / 2.0);
    }
    value
}

/// Effective c7 including the mixing of c3..c6.
pub fn c7_effective(wc: &WilsonCoefficients<BToS>) -> Complex64 {
    wc.c(7) - wc.c(3) / 3.0 - 4.0 * wc.c(4) / 9.0 - 20.0 * wc.c(5) / 3.0 - 80.0 * wc.c(6) / 9.0
}

/// Effective c9 including the quark loops at scale mu.
pub fn c9_effective(
    wc: &WilsonCoefficients<BToS>,
    q2: f64,
    m_c: f64,
    m_b: f64,
    mu: f64,
) -> Complex64 {
    let y_c = h_loop(q2, m_c, mu) * (4.0 / 3.0 * wc.c(1) + wc.c(2) + 6.0 * wc.c(3) + 60.0 * wc.c(5));
    let y_b = -0.5
        * h_loop(q2, m_b, mu)
        * (7.0 * wc.c(3) + 4.0 / 3.0 * wc.c(4) + 76.0 * wc.c(5) + 64.0 / 3.0 * wc.c(6));
    let y_0 = -0.5
        * h_loop(q2, 0.0, mu)
        * (wc.c(3) + 4.0 / 3.0 * wc.c(4) + 16.0 * wc.c(5) + 64.0 / 3.0 * wc.c(6));
    let y_const = 4.0 / 3.0 * wc.c(3) + 64.0 / 9.0 * wc.c(5) + 64.0 / 27.0 * wc.c(6);
    wc.c(9) + y_c + y_b + y_0 + y_const
}

struct AngularCoefficients {
    a_l: f64,
    b_l: f64,
    c_l: f64,
}

/// Observables of the B -> K l+ l- decay.
pub struct BToKDilepton {
    user: ParameterUser,
    model: Box<dyn Model>,
    form_factors: Box<dyn PToPFormFactors>,
    lepton: LeptonFlavor,
    cp_conjugate: bool,
    m_b_meson: UsedParameter,
    m_k: UsedParameter,
    m_l: UsedParameter,
    m_s: UsedParameter,
    g_fermi: UsedParameter,
    alpha_e: UsedParameter,
    mu_b: UsedParameter,
    life_time: UsedParameter,
    hbar: UsedParameter,
    opts: QuadratureOpts,
}

impl BToKDilepton {
    /// Constructs the decay bound to parameters and options.
    pub fn new(parameters: &Parameters, options: &Options) -> Result<Self, HeftError> {
        let user = ParameterUser::new();
        let lepton = LeptonFlavor::from_options(options)?;
        let tag = options.switch("form-factors", &["BZ2004v2"], "BZ2004v2")?;
        let form_factors =
            FormFactorFactory::p_to_p(&format!("B->K::{tag}"), parameters, options)?;
        let model = make_model(parameters, options)?;
        let spectator = options.switch("q", &["u", "d"], "d")?;
        let (m_b_name, life_time_name) = if spectator == "u" {
            ("mass::B_u", "life_time::B_u")
        } else {
            ("mass::B_d", "life_time::B_d")
        };
        let m_k_name = if spectator == "u" { "mass::K_u" } else { "mass::K_d" };
        Ok(Self {
            lepton,
            cp_conjugate: options.boolean("cp-conjugate", false)?,
            m_b_meson: user.bind(parameters, m_b_name)?,
            m_k: user.bind(parameters, m_k_name)?,
            m_l: user.bind(parameters, lepton.mass_parameter())?,
            m_s: user.bind_or_declare(parameters, "mass::s(2GeV)", 0.095),
            g_fermi: user.bind(parameters, "WET::G_Fermi")?,
            alpha_e: user.bind(parameters, "QED::alpha_e(m_b)")?,
            mu_b: user.bind(parameters, "QCD::mu_b")?,
            life_time: user.bind(parameters, life_time_name)?,
            hbar: user.bind(parameters, "QM::hbar")?,
            model,
            form_factors,
            user,
            opts: QuadratureOpts::default(),
        })
    }

    fn coefficients(&self, q2: f64) -> AngularCoefficients {
        let m_b_meson = self.m_b_meson.value();
        let m_k = self.m_k.value();
        let m_l = self.m_l.value();
        let mu = self.mu_b.value();
        let wc = self
            .model
            .wilson_coefficients_b_to_s(self.lepton, self.cp_conjugate);
        let m_b_quark = self.model.m_b_msbar(mu);
        let m_c_quark = self.model.m_c_msbar(mu);

        let lam = lambda(pow2(m_b_meson), pow2(m_k), q2);
        if lam <= 0.0 || q2 <= 4.0 * pow2(m_l) {
            return AngularCoefficients {
                a_l: 0.0,
                b_l: 0.0,
                c_l: 0.0,
            };
        }
        let beta_l = (1.0 - 4.0 * pow2(m_l) / q2).sqrt();

        let f_p = self.form_factors.f_p(q2);
        let f_0 = self.form_factors.f_0(q2);
        let f_t = self.form_factors.f_t(q2);

        let c7eff = c7_effective(&wc) + wc.c_prime(7);
        let c9eff = c9_effective(&wc, q2, m_c_quark, m_b_quark, mu) + wc.c_prime(9);
        let c10 = wc.c(10) + wc.c_prime(10);

        let f_v = c9eff * f_p + 2.0 * m_b_quark / (m_b_meson + m_k) * c7eff * f_t;
        let f_a = c10 * f_p;
        let scalar_norm = (pow2(m_b_meson) - pow2(m_k)) / (2.0 * (m_b_quark - self.m_s.value()));
        let f_s = scalar_norm * (wc.c_s() + wc.c_s_prime()) * f_0;
        let f_p_amp = scalar_norm * (wc.c_p() + wc.c_p_prime()) * f_0
            - m_l * c10
                * (f_p - (pow2(m_b_meson) - pow2(m_k)) / q2 * (f_0 - f_p));

        let ckm = self.model.ckm();
        let gamma_0 = pow2(self.g_fermi.value()) * pow2(self.alpha_e.value())
            * pow2(ckm.abs_v_tb_v_ts())
            / (256.0 * pow2(pow2(PI)) * PI * pow2(m_b_meson) * m_b_meson);
        let norm = gamma_0 * lam.sqrt() * beta_l;

        let a_l = norm
            * (q2 * f_p_amp.norm_sqr()
                + 0.25 * lam * (f_a.norm_sqr() + f_v.norm_sqr())
                + 2.0 * m_l * (pow2(m_b_meson) - pow2(m_k) + q2) * (f_p_amp * f_a.conj()).re
                + 4.0 * pow2(m_l) * pow2(m_b_meson) * f_a.norm_sqr());
        let b_l = norm * 2.0 * m_l * lam.sqrt() * beta_l * (f_s * f_v.conj()).re;
        let c_l = -norm * 0.25 * lam * pow2(beta_l) * (f_a.norm_sqr() + f_v.norm_sqr());

        AngularCoefficients { a_l, b_l, c_l }
    }

    /// dGamma/dq^2 in GeV.
    pub fn differential_decay_width(&self, q2: f64) -> f64 {
        let c = self.coefficients(q2);
        2.0 * (c.a_l + c.c_l / 3.0)
    }

    /// dBR/dq^2 in GeV^-2.
    pub fn differential_branching_ratio(&self, q2: f64) -> f64 {
        self.differential_decay_width(q2) * self.life_time.value() / self.hbar.value()
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

    /// Forward-backward asymmetry integrated over [q2_min, q2_max].
    pub fn integrated_forward_backward_asymmetry(&self, q2_min: f64, q2_max: f64) -> f64 {
        let numerator = integrate(|q2| self.coefficients(q2).b_l, q2_min, q2_max, &self.opts).value;
        let width = integrate(
            |q2| self.differential_decay_width(q2),
            q2_min,
            q2_max,
            &self.opts,
        )
        .value;
        numerator / width
    }

    /// Flat term F_H integrated over [q2_min, q2_max].
    pub fn integrated_flat_term(&self, q2_min: f64, q2_max: f64) -> f64 {
        let numerator = integrate(
            |q2| {
                let c = self.coefficients(q2);
                2.0 * (c.a_l + c.c_l)
            },
            q2_min,
            q2_max,
            &self.opts,
        )
        .value;
        let width = integrate(
            |q2| self.differential_decay_width(q2),
            q2_min,
            q2_max,
            &self.opts,
        )
        .value;
        numerator / width
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
