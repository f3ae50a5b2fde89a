//! The model interface and its factory.

use heft_core::{ErrorInfo, HeftError, Options, ParameterId, Parameters};
use serde::{Deserialize, Serialize};

use crate::ckm::CkmMatrix;
use crate::sm::StandardModel;
use crate::transition::{BToS, ChargedCurrent};
use crate::wilson::WilsonCoefficients;
use crate::wilson_scan::{ConstrainedWilsonScan, WilsonScan};

/// Lepton flavor selected by the `l` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeptonFlavor {
    /// Electron.
    Electron,
    /// Muon.
    Muon,
    /// Tau.
    Tau,
}

impl LeptonFlavor {
    /// Reads the `l` option (`e`, `mu`, `tau`; default `mu`).
    pub fn from_options(options: &Options) -> Result<Self, HeftError> {
        match options.switch("l", &["e", "mu", "tau"], "mu")?.as_str() {
            "e" => Ok(Self::Electron),
            "tau" => Ok(Self::Tau),
            _ => Ok(Self::Muon),
        }
    }

    /// Name of the lepton mass parameter.
    pub fn mass_parameter(&self) -> &'static str {
        match self {
            Self::Electron => "mass::e",
            Self::Muon => "mass::mu",
            Self::Tau => "mass::tau",
        }
    }

    /// Sector suffix used for lepton-flavor-specific Wilson parameters.
    pub fn sector_suffix(&self) -> &'static str {
        match self {
            Self::Electron => "ee",
            Self::Muon => "mumu",
            Self::Tau => "tautau",
        }
    }
}

/// Interface exposing short-distance inputs to the decay modules.
pub trait Model: std::fmt::Debug {
    /// Strong coupling at scale `mu`.
    fn alpha_s(&self, mu: f64) -> f64;

    /// MSbar bottom mass at scale `mu`.
    fn m_b_msbar(&self, mu: f64) -> f64;

    /// MSbar charm mass at scale `mu`.
    fn m_c_msbar(&self, mu: f64) -> f64;

    /// One-loop pole bottom mass.
    fn m_b_pole(&self) -> f64;

    /// One-loop pole charm mass.
    fn m_c_pole(&self) -> f64;

    /// CKM matrix elements.
    fn ckm(&self) -> CkmMatrix;

    /// b -> s Wilson coefficients for the given lepton flavor.
    fn wilson_coefficients_b_to_s(
        &self,
        lepton: LeptonFlavor,
        cp_conjugate: bool,
    ) -> WilsonCoefficients<BToS>;

    /// b -> c l nu Wilson coefficients for the given lepton flavor.
    fn wilson_coefficients_charged_current(
        &self,
        lepton: LeptonFlavor,
        cp_conjugate: bool,
    ) -> WilsonCoefficients<ChargedCurrent>;

    /// Identifiers of all parameters this model reads.
    fn used_parameter_ids(&self) -> Vec<ParameterId>;
}

/// Names accepted by the `model` option.
pub const MODEL_NAMES: [&str; 3] = ["SM", "WilsonScan", "ConstrainedWilsonScan"];

/// Constructs the model selected by the `model` option (default `SM`).
pub fn make_model(
    parameters: &Parameters,
    options: &Options,
) -> Result<Box<dyn Model>, HeftError> {
    match options.switch("model", &MODEL_NAMES, "SM")?.as_str() {
        "WilsonScan" => Ok(Box::new(WilsonScan::new(parameters, options)?)),
        "ConstrainedWilsonScan" => Ok(Box::new(ConstrainedWilsonScan::new(parameters, options)?)),
        "SM" => Ok(Box::new(StandardModel::new(parameters)?)),
        other => Err(HeftError::Options(
            ErrorInfo::new("unknown-model", format!("unknown model '{other}'"))
                .with_context("permitted", MODEL_NAMES.join(", ")),
        )),
    }
}
