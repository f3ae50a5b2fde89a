//! Lambda_b -> Lambda J/psi from the non-local amplitude residues.
//!
//! The decay amplitudes are the residues of the non-local h_lambda at the
//! J/psi pole, weighted by the helicity kinematics. Rates are quoted in the
//! internal units of the non-local parameterization.

use std::f64::consts::PI;

use heft_core::{HeftError, Options, ParameterId, ParameterUser, Parameters, UsedParameter};
use heft_ff::{BaryonicNonlocalFormFactors, FormFactorFactory};
use heft_num::{lambda, pow2};

/// Angular coefficients of the Lambda_b -> Lambda (-> p pi) J/psi cascade.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct KCoefficients {
    /// K_1ss
    pub k1ss: f64,
    /// K_1cc
    pub k1cc: f64,
    /// K_2ss
    pub k2ss: f64,
    /// K_2cc
    pub k2cc: f64,
}

/// Observables of the Lambda_b -> Lambda J/psi decay.
pub struct LambdaBToLambdaPsi {
    user: ParameterUser,
    nonlocal: Box<dyn BaryonicNonlocalFormFactors>,
    m_lambda_b: UsedParameter,
    m_lambda: UsedParameter,
    m_psi: UsedParameter,
    life_time: UsedParameter,
    hbar: UsedParameter,
    alpha_decay: UsedParameter,
}

struct SquaredAmplitudes {
    v_perp: f64,
    v_long: f64,
    a_perp: f64,
    a_long: f64,
}

impl SquaredAmplitudes {
    fn total(&self) -> f64 {
        self.v_perp + self.v_long + self.a_perp + self.a_long
    }
}

impl LambdaBToLambdaPsi {
    /// Constructs the decay bound to parameters and options.
    pub fn new(parameters: &Parameters, options: &Options) -> Result<Self, HeftError> {
        let user = ParameterUser::new();
        let tag = options.switch("nonlocal-formfactors", &["BRvD2021"], "BRvD2021")?;
        let nonlocal = FormFactorFactory::baryonic_nonlocal(
            &format!("Lambda_b->Lambdaccbar::{tag}"),
            parameters,
            options,
        )?;
        Ok(Self {
            m_lambda_b: user.bind(parameters, "mass::Lambda_b")?,
            m_lambda: user.bind(parameters, "mass::Lambda")?,
            m_psi: user.bind(parameters, "mass::J/psi")?,
            life_time: user.bind(parameters, "life_time::Lambda_b")?,
            hbar: user.bind(parameters, "QM::hbar")?,
            alpha_decay: user.bind_or_declare(parameters, "Lambda->ppi::alpha", 0.748),
            nonlocal,
            user,
        })
    }

    fn squared_amplitudes(&self) -> SquaredAmplitudes {
        let m_b = self.m_lambda_b.value();
        let m_l = self.m_lambda.value();
        let q2 = pow2(self.m_psi.value());
        let s_plus = pow2(m_b + m_l) - q2;
        let s_minus = pow2(m_b - m_l) - q2;

        let r_v_perp = self.nonlocal.h_v_perp_residue_jpsi();
        let r_v_long = self.nonlocal.h_v_long_residue_jpsi();
        let r_a_perp = self.nonlocal.h_a_perp_residue_jpsi();
        let r_a_long = self.nonlocal.h_a_long_residue_jpsi();

        SquaredAmplitudes {
            v_perp: 2.0 * s_minus * r_v_perp.norm_sqr(),
            v_long: s_minus / q2 * pow2(m_b + m_l) * r_v_long.norm_sqr(),
            a_perp: 2.0 * s_plus * r_a_perp.norm_sqr(),
            a_long: s_plus / q2 * pow2(m_b - m_l) * r_a_long.norm_sqr(),
        }
    }

    /// Decay width in internal units.
    pub fn decay_width(&self) -> f64 {
        let m_b = self.m_lambda_b.value();
        let lam = lambda(pow2(m_b), pow2(self.m_lambda.value()), pow2(self.m_psi.value()));
        if lam <= 0.0 {
            return 0.0;
        }
        lam.sqrt() / (16.0 * PI * pow2(m_b) * m_b) * self.squared_amplitudes().total()
    }

    /// Branching ratio in internal units.
    pub fn branching_ratio(&self) -> f64 {
        self.decay_width() * self.life_time.value() / self.hbar.value()
    }

    /// Angular coefficients of the cascade.
    pub fn k_coefficients(&self) -> KCoefficients {
        let amps = self.squared_amplitudes();
        let total = amps.total();
        if total <= 0.0 {
            return KCoefficients {
                k1ss: 0.25,
                k1cc: 0.5,
                k2ss: 0.0,
                k2cc: 0.0,
            };
        }
        let longitudinal = (amps.v_long + amps.a_long) / total;
        // normalization: 2 K_1ss + K_1cc = 1
        let k1cc = longitudinal;
        let k1ss = 0.5 * (1.0 - longitudinal);
        // parity-odd coefficients carry the Lambda decay parameter
        let alpha = self.alpha_decay.value();
        let interference = (amps.v_perp - amps.a_perp) / total;
        KCoefficients {
            k1ss,
            k1cc,
            k2ss: 0.5 * alpha * interference,
            k2cc: alpha * (amps.v_long - amps.a_long) / total,
        }
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
