//! Non-local charm-loop amplitudes on the z plane.
//!
//! The branch point sits at the open-charm threshold t_+ = 4 m_D^2; the
//! J/psi and psi(2S) appear as explicit sub-threshold poles through
//! Blaschke factors. GvDV2020 expands the pole-free remainder in z
//! monomials, GRvDV2021 and BRvD2021 in polynomials orthonormal on the arc
//! of the unit circle above the pair-production threshold.

use num_complex::Complex64;

use heft_core::{HeftError, ParameterId, ParameterUser, Parameters, UsedParameter};
use heft_num::pow2;

use crate::traits::{BaryonicNonlocalFormFactors, NonlocalFormFactors};
use crate::zexp::{ArcPolynomials, BlaschkeFactor, ZVariable};

#[derive(Debug)]
struct ComplexParameter {
    re: UsedParameter,
    im: UsedParameter,
}

impl ComplexParameter {
    fn bind(
        user: &ParameterUser,
        parameters: &Parameters,
        prefix: &str,
        symbol: &str,
    ) -> Result<Self, HeftError> {
        Ok(Self {
            re: user.bind(parameters, &format!("{prefix}::Re{{{symbol}}}"))?,
            im: user.bind(parameters, &format!("{prefix}::Im{{{symbol}}}"))?,
        })
    }

    fn value(&self) -> Complex64 {
        Complex64::new(self.re.value(), self.im.value())
    }
}

/// Polynomial basis used by the pole-free remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Basis {
    /// z monomials (GvDV2020).
    Monomials,
    /// Orthonormal polynomials on the pair-production arc (GRvDV2021, BRvD2021).
    Arc,
}

/// Kinematic frame shared by the mesonic and baryonic amplitudes.
#[derive(Debug)]
struct Frame {
    m_d0: UsedParameter,
    m_jpsi: UsedParameter,
    m_psi2s: UsedParameter,
    t_0: UsedParameter,
    /// Sum of the daughter masses fixing the pair-production threshold.
    m_pair_sum: f64,
    basis: Basis,
    order: usize,
}

impl Frame {
    fn z_var(&self) -> ZVariable {
        ZVariable::new(4.0 * pow2(self.m_d0.value()), self.t_0.value())
    }

    fn blaschke(&self) -> BlaschkeFactor {
        BlaschkeFactor::from_resonances(
            &self.z_var(),
            &[self.m_jpsi.value(), self.m_psi2s.value()],
        )
    }

    fn basis_values(&self, z: Complex64) -> Result<Vec<Complex64>, HeftError> {
        match self.basis {
            Basis::Monomials => {
                let mut out = Vec::with_capacity(self.order + 1);
                let mut power = Complex64::new(1.0, 0.0);
                for _ in 0..=self.order {
                    out.push(power);
                    power *= z;
                }
                Ok(out)
            }
            Basis::Arc => {
                let z_pair = self.z_var().z_complex(Complex64::new(pow2(self.m_pair_sum), 0.0));
                let alpha = z_pair.arg().abs();
                Ok(ArcPolynomials::new(alpha, self.order)?.eval(z))
            }
        }
    }

    fn series(&self, alpha: &[ComplexParameter], z: Complex64) -> Result<Complex64, HeftError> {
        let basis = self.basis_values(z)?;
        Ok(alpha
            .iter()
            .zip(basis.iter())
            .map(|(a, p)| a.value() * p)
            .sum())
    }

    fn amplitude(&self, alpha: &[ComplexParameter], q2: f64) -> Result<Complex64, HeftError> {
        let z = self.z_var().z_complex(Complex64::new(q2, 0.0));
        Ok(self.series(alpha, z)? / self.blaschke().eval(z))
    }

    /// Residue in q^2 of the amplitude at the pole for `mass`.
    fn residue(&self, alpha: &[ComplexParameter], mass: f64) -> Result<Complex64, HeftError> {
        let z_var = self.z_var();
        let z_pole = Complex64::new(z_var.z(pow2(mass)), 0.0);
        let blaschke = self.blaschke();
        let numerator = self.series(alpha, z_pole)?;
        let derivative = blaschke.derivative_at_pole(z_pole);
        let remainder = blaschke.eval_without(z_pole, z_pole);
        Ok(z_var.dq2_dz(z_pole) * numerator / (derivative * remainder))
    }
}

/// Static descriptor of a mesonic non-local process.
#[derive(Debug, Clone, Copy)]
pub struct MesonicProcess {
    /// Parameter prefix, e.g. `B->K^*ccbar`.
    pub prefix: &'static str,
    /// Name of the parent-mass parameter.
    pub m_parent: &'static str,
    /// Name of the vector-meson-mass parameter.
    pub m_vector: &'static str,
}

/// B -> K^* ccbar amplitudes.
pub const B_TO_KSTAR_CCBAR: MesonicProcess = MesonicProcess {
    prefix: "B->K^*ccbar",
    m_parent: "mass::B_d",
    m_vector: "mass::K^*_d",
};

/// B_s -> phi ccbar amplitudes.
pub const BS_TO_PHI_CCBAR: MesonicProcess = MesonicProcess {
    prefix: "B_s->phiccbar",
    m_parent: "mass::B_s",
    m_vector: "mass::phi",
};

/// Mesonic non-local amplitudes in the GvDV2020 / GRvDV2021 parameterizations.
#[derive(Debug)]
pub struct MesonicNonlocal {
    user: ParameterUser,
    frame: Frame,
    alpha_perp: Vec<ComplexParameter>,
    alpha_para: Vec<ComplexParameter>,
    alpha_long: Vec<ComplexParameter>,
}

impl MesonicNonlocal {
    /// Binds the GvDV2020 variant (monomial basis).
    pub fn gvdv2020(process: &MesonicProcess, parameters: &Parameters) -> Result<Self, HeftError> {
        Self::build(process, parameters, Basis::Monomials)
    }

    /// Binds the GRvDV2021 variant (orthonormal arc basis).
    pub fn grvdv2021(process: &MesonicProcess, parameters: &Parameters) -> Result<Self, HeftError> {
        Self::build(process, parameters, Basis::Arc)
    }

    fn build(
        process: &MesonicProcess,
        parameters: &Parameters,
        basis: Basis,
    ) -> Result<Self, HeftError> {
        let user = ParameterUser::new();
        let bind_amp = |label: &str| -> Result<Vec<ComplexParameter>, HeftError> {
            (0..3)
                .map(|k| {
                    ComplexParameter::bind(
                        &user,
                        parameters,
                        process.prefix,
                        &format!("alpha_{k}^{label}"),
                    )
                })
                .collect()
        };
        let m_parent = user.bind(parameters, process.m_parent)?;
        let m_vector = user.bind(parameters, process.m_vector)?;
        let frame = Frame {
            m_d0: user.bind(parameters, "mass::D^0")?,
            m_jpsi: user.bind(parameters, "mass::J/psi")?,
            m_psi2s: user.bind(parameters, "mass::psi(2S)")?,
            t_0: user.bind_or_declare(parameters, &format!("{}::t_0", process.prefix), 4.0),
            m_pair_sum: m_parent.value() + m_vector.value(),
            basis,
            order: 2,
        };
        Ok(Self {
            alpha_perp: bind_amp("perp")?,
            alpha_para: bind_amp("para")?,
            alpha_long: bind_amp("long")?,
            frame,
            user,
        })
    }

    fn eval(&self, alpha: &[ComplexParameter], q2: f64) -> Complex64 {
        self.frame
            .amplitude(alpha, q2)
            .unwrap_or(Complex64::new(f64::NAN, f64::NAN))
    }

    fn res(&self, alpha: &[ComplexParameter], mass: f64) -> Complex64 {
        self.frame
            .residue(alpha, mass)
            .unwrap_or(Complex64::new(f64::NAN, f64::NAN))
    }
}

impl NonlocalFormFactors for MesonicNonlocal {
    fn h_perp(&self, q2: f64) -> Complex64 {
        self.eval(&self.alpha_perp, q2)
    }

    fn h_para(&self, q2: f64) -> Complex64 {
        self.eval(&self.alpha_para, q2)
    }

    fn h_long(&self, q2: f64) -> Complex64 {
        self.eval(&self.alpha_long, q2)
    }

    fn h_perp_residue_jpsi(&self) -> Complex64 {
        self.res(&self.alpha_perp, self.frame.m_jpsi.value())
    }

    fn h_para_residue_jpsi(&self) -> Complex64 {
        self.res(&self.alpha_para, self.frame.m_jpsi.value())
    }

    fn h_long_residue_jpsi(&self) -> Complex64 {
        self.res(&self.alpha_long, self.frame.m_jpsi.value())
    }

    fn h_perp_residue_psi2s(&self) -> Complex64 {
        self.res(&self.alpha_perp, self.frame.m_psi2s.value())
    }

    fn h_para_residue_psi2s(&self) -> Complex64 {
        self.res(&self.alpha_para, self.frame.m_psi2s.value())
    }

    fn h_long_residue_psi2s(&self) -> Complex64 {
        self.res(&self.alpha_long, self.frame.m_psi2s.value())
    }

    fn used_parameter_ids(&self) -> Vec<ParameterId> {
        self.user.used_ids()
    }
}

/// Baryonic non-local amplitudes in the BRvD2021 parameterization.
#[derive(Debug)]
pub struct BaryonicNonlocal {
    user: ParameterUser,
    frame: Frame,
    alpha_v_perp: Vec<ComplexParameter>,
    alpha_v_long: Vec<ComplexParameter>,
    alpha_a_perp: Vec<ComplexParameter>,
    alpha_a_long: Vec<ComplexParameter>,
}

impl BaryonicNonlocal {
    /// Binds the Lambda_b -> Lambda amplitudes to a parameter set.
    pub fn brvd2021(parameters: &Parameters) -> Result<Self, HeftError> {
        const PREFIX: &str = "Lambda_b->Lambdaccbar";
        let user = ParameterUser::new();
        let bind_amp = |label: &str| -> Result<Vec<ComplexParameter>, HeftError> {
            (0..2)
                .map(|k| {
                    ComplexParameter::bind(&user, parameters, PREFIX, &format!("alpha_{k}^{label}"))
                })
                .collect()
        };
        let m_lambda_b = user.bind(parameters, "mass::Lambda_b")?;
        let m_lambda = user.bind(parameters, "mass::Lambda")?;
        let frame = Frame {
            m_d0: user.bind(parameters, "mass::D^0")?,
            m_jpsi: user.bind(parameters, "mass::J/psi")?,
            m_psi2s: user.bind(parameters, "mass::psi(2S)")?,
            t_0: user.bind(parameters, &format!("{PREFIX}::t_0"))?,
            m_pair_sum: m_lambda_b.value() + m_lambda.value(),
            basis: Basis::Arc,
            order: 1,
        };
        Ok(Self {
            alpha_v_perp: bind_amp("V_perp")?,
            alpha_v_long: bind_amp("V_long")?,
            alpha_a_perp: bind_amp("A_perp")?,
            alpha_a_long: bind_amp("A_long")?,
            frame,
            user,
        })
    }

    fn eval(&self, alpha: &[ComplexParameter], q2: f64) -> Complex64 {
        self.frame
            .amplitude(alpha, q2)
            .unwrap_or(Complex64::new(f64::NAN, f64::NAN))
    }

    fn res_jpsi(&self, alpha: &[ComplexParameter]) -> Complex64 {
        self.frame
            .residue(alpha, self.frame.m_jpsi.value())
            .unwrap_or(Complex64::new(f64::NAN, f64::NAN))
    }
}

impl BaryonicNonlocalFormFactors for BaryonicNonlocal {
    fn h_v_perp(&self, q2: f64) -> Complex64 {
        self.eval(&self.alpha_v_perp, q2)
    }

    fn h_v_long(&self, q2: f64) -> Complex64 {
        self.eval(&self.alpha_v_long, q2)
    }

    fn h_a_perp(&self, q2: f64) -> Complex64 {
        self.eval(&self.alpha_a_perp, q2)
    }

    fn h_a_long(&self, q2: f64) -> Complex64 {
        self.eval(&self.alpha_a_long, q2)
    }

    fn h_v_perp_residue_jpsi(&self) -> Complex64 {
        self.res_jpsi(&self.alpha_v_perp)
    }

    fn h_v_long_residue_jpsi(&self) -> Complex64 {
        self.res_jpsi(&self.alpha_v_long)
    }

    fn h_a_perp_residue_jpsi(&self) -> Complex64 {
        self.res_jpsi(&self.alpha_a_perp)
    }

    fn h_a_long_residue_jpsi(&self) -> Complex64 {
        self.res_jpsi(&self.alpha_a_long)
    }

    fn used_parameter_ids(&self) -> Vec<ParameterId> {
        self.user.used_ids()
    }
}
