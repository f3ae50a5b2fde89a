//! Form-factor interfaces, polymorphic over the transition tag.

use heft_core::ParameterId;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Transition tags recognized by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Pseudoscalar to pseudoscalar.
    PToP,
    /// Pseudoscalar to vector.
    PToV,
    /// Vector to pseudoscalar.
    VToP,
    /// Vector to vector.
    VToV,
    /// Vacuum to a pseudoscalar pair (timelike).
    VacuumToPP,
    /// Spin-1/2+ baryon to spin-1/2+ baryon.
    OneHalfPlusToOneHalfPlus,
}

impl TransitionKind {
    /// Human readable tag name used in error contexts.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PToP => "P->P",
            Self::PToV => "P->V",
            Self::VToP => "V->P",
            Self::VToV => "V->V",
            Self::VacuumToPP => "Vacuum->PP",
            Self::OneHalfPlusToOneHalfPlus => "1/2^+->1/2^+",
        }
    }
}

/// P -> P transitions: f_+, f_0, f_T as real functions of q^2.
pub trait PToPFormFactors: std::fmt::Debug {
    /// Vector form factor f_+(q^2).
    fn f_p(&self, q2: f64) -> f64;

    /// Scalar form factor f_0(q^2).
    fn f_0(&self, q2: f64) -> f64;

    /// Tensor form factor f_T(q^2).
    fn f_t(&self, q2: f64) -> f64;

    /// Identifiers of the parameters read by this form factor.
    fn used_parameter_ids(&self) -> Vec<ParameterId>;
}

/// P -> V transitions in the standard transversity-adapted basis.
pub trait PToVFormFactors {
    /// V(q^2)
    fn v(&self, q2: f64) -> f64;
    /// A_0(q^2)
    fn a_0(&self, q2: f64) -> f64;
    /// A_1(q^2)
    fn a_1(&self, q2: f64) -> f64;
    /// A_2(q^2)
    fn a_2(&self, q2: f64) -> f64;
    /// A_12(q^2)
    fn a_12(&self, q2: f64) -> f64;
    /// T_1(q^2)
    fn t_1(&self, q2: f64) -> f64;
    /// T_2(q^2)
    fn t_2(&self, q2: f64) -> f64;
    /// T_3(q^2)
    fn t_3(&self, q2: f64) -> f64;
    /// T_23(q^2)
    fn t_23(&self, q2: f64) -> f64;

    /// Identifiers of the parameters read by this form factor.
    fn used_parameter_ids(&self) -> Vec<ParameterId>;
}

/// 1/2^+ -> 1/2^+ baryonic transitions (helicity basis).
pub trait OneHalfPlusFormFactors {
    /// Timelike vector form factor f_t^V(q^2).
    fn f_time_v(&self, q2: f64) -> f64;
    /// Longitudinal vector form factor f_0^V(q^2).
    fn f_long_v(&self, q2: f64) -> f64;
    /// Perpendicular vector form factor f_perp^V(q^2).
    fn f_perp_v(&self, q2: f64) -> f64;
    /// Timelike axial form factor f_t^A(q^2).
    fn f_time_a(&self, q2: f64) -> f64;
    /// Longitudinal axial form factor f_0^A(q^2).
    fn f_long_a(&self, q2: f64) -> f64;
    /// Perpendicular axial form factor f_perp^A(q^2).
    fn f_perp_a(&self, q2: f64) -> f64;

    /// Identifiers of the parameters read by this form factor.
    fn used_parameter_ids(&self) -> Vec<ParameterId>;
}

/// Vacuum -> PP timelike form factors (complex above threshold).
pub trait VacuumToPPFormFactors {
    /// The timelike vector form factor F(q^2), complex above threshold.
    fn f_p(&self, q2: f64) -> Complex64;

    /// Identifiers of the parameters read by this form factor.
    fn used_parameter_ids(&self) -> Vec<ParameterId>;
}

/// Non-local charm-loop amplitudes H_lambda for b -> s ccbar transitions.
///
/// The three mesonic helicity amplitudes carry charmonium poles; the
/// residues at the J/psi and psi(2S) poles drive the B -> V psi modes.
pub trait NonlocalFormFactors {
    /// H_perp(q^2)
    fn h_perp(&self, q2: f64) -> Complex64;
    /// H_para(q^2)
    fn h_para(&self, q2: f64) -> Complex64;
    /// H_long(q^2)
    fn h_long(&self, q2: f64) -> Complex64;

    /// Residue of H_perp at the J/psi pole.
    fn h_perp_residue_jpsi(&self) -> Complex64;
    /// Residue of H_para at the J/psi pole.
    fn h_para_residue_jpsi(&self) -> Complex64;
    /// Residue of H_long at the J/psi pole.
    fn h_long_residue_jpsi(&self) -> Complex64;

    /// Residue of H_perp at the psi(2S) pole.
    fn h_perp_residue_psi2s(&self) -> Complex64;
    /// Residue of H_para at the psi(2S) pole.
    fn h_para_residue_psi2s(&self) -> Complex64;
    /// Residue of H_long at the psi(2S) pole.
    fn h_long_residue_psi2s(&self) -> Complex64;

    /// Identifiers of the parameters read by this amplitude.
    fn used_parameter_ids(&self) -> Vec<ParameterId>;
}

/// Non-local charm-loop amplitudes for 1/2^+ -> 1/2^+ transitions.
///
/// Baryonic transitions carry separate vector and axial helicity
/// amplitudes in place of the mesonic perp/para/long triplet.
pub trait BaryonicNonlocalFormFactors {
    /// h_V_perp(q^2)
    fn h_v_perp(&self, q2: f64) -> Complex64;
    /// h_V_long(q^2)
    fn h_v_long(&self, q2: f64) -> Complex64;
    /// h_A_perp(q^2)
    fn h_a_perp(&self, q2: f64) -> Complex64;
    /// h_A_long(q^2)
    fn h_a_long(&self, q2: f64) -> Complex64;

    /// Residue of h_V_perp at the J/psi pole.
    fn h_v_perp_residue_jpsi(&self) -> Complex64;
    /// Residue of h_V_long at the J/psi pole.
    fn h_v_long_residue_jpsi(&self) -> Complex64;
    /// Residue of h_A_perp at the J/psi pole.
    fn h_a_perp_residue_jpsi(&self) -> Complex64;
    /// Residue of h_A_long at the J/psi pole.
    fn h_a_long_residue_jpsi(&self) -> Complex64;

    /// Identifiers of the parameters read by this amplitude.
    fn used_parameter_ids(&self) -> Vec<ParameterId>;
}
