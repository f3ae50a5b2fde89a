//! B -> D^* (-> D pi) l nu single-angle distributions.
//!
//! The three normalized PDFs in cos(theta_D), cos(theta_l), and the azimuth
//! chi follow from the D^* polarization fractions and interference
//! coefficients of the parent B -> D^* l nu decay; each integrates to one
//! over its full angular range by construction.

use std::f64::consts::PI;

use heft_core::{HeftError, Options, ParameterId, Parameters};
use heft_num::{integrate, QuadratureOpts};

use crate::b_to_dstar_l_nu::BToDstarLeptonNeutrino;

/// Single-angle PDFs of the B -> D^* (-> D pi) l nu cascade.
pub struct BToDPiLeptonNeutrino {
    parent: BToDstarLeptonNeutrino,
    opts: QuadratureOpts,
}

impl BToDPiLeptonNeutrino {
    /// Constructs the cascade bound to parameters and options.
    pub fn new(parameters: &Parameters, options: &Options) -> Result<Self, HeftError> {
        Ok(Self {
            parent: BToDstarLeptonNeutrino::new(parameters, options)?,
            opts: QuadratureOpts::default(),
        })
    }

    /// Normalized PDF in cos(theta_D).
    pub fn pdf_d(&self, cos_theta_d: f64) -> f64 {
        let f_l = self.parent.integrated_f_l();
        0.75 * (2.0 * f_l * cos_theta_d * cos_theta_d
            + (1.0 - f_l) * (1.0 - cos_theta_d * cos_theta_d))
    }

    /// Normalized PDF in cos(theta_l).
    pub fn pdf_l(&self, cos_theta_l: f64) -> f64 {
        let f_l = self.parent.integrated_f_l();
        let a_fb = self.parent.integrated_forward_backward_asymmetry();
        0.375 * ((1.0 - f_l) * (1.0 + cos_theta_l * cos_theta_l)
            + 2.0 * f_l * (1.0 - cos_theta_l * cos_theta_l))
            + 0.5 * a_fb * cos_theta_l
    }

    /// Normalized PDF in the azimuthal angle chi.
    pub fn pdf_chi(&self, chi: f64) -> f64 {
        let interference = self.parent.integrated_chi_interference();
        (1.0 + interference * (2.0 * chi).cos()) / (2.0 * PI)
    }

    /// PDF in cos(theta_D) integrated over [min, max].
    pub fn integrated_pdf_d(&self, min: f64, max: f64) -> f64 {
        let f_l = self.parent.integrated_f_l();
        integrate(
            |c| 0.75 * (2.0 * f_l * c * c + (1.0 - f_l) * (1.0 - c * c)),
            min,
            max,
            &self.opts,
        )
        .value
    }

    /// PDF in cos(theta_l) integrated over [min, max].
    pub fn integrated_pdf_l(&self, min: f64, max: f64) -> f64 {
        let f_l = self.parent.integrated_f_l();
        let a_fb = self.parent.integrated_forward_backward_asymmetry();
        integrate(
            |c| {
                0.375 * ((1.0 - f_l) * (1.0 + c * c) + 2.0 * f_l * (1.0 - c * c))
                    + 0.5 * a_fb * c
            },
            min,
            max,
            &self.opts,
        )
        .value
    }

    /// PDF in chi integrated over [min, max].
    pub fn integrated_pdf_chi(&self, min: f64, max: f64) -> f64 {
        let interference = self.parent.integrated_chi_interference();
        integrate(
            |chi| (1.0 + interference * (2.0 * chi).cos()) / (2.0 * std::f64::consts::PI),
            min,
            max,
            &self.opts,
        )
        .value
    }

    /// Longitudinal D^* polarization fraction of the parent decay.
    pub fn f_l(&self) -> f64 {
        self.parent.integrated_f_l()
    }

    /// Lepton polarization asymmetry of the parent decay.
    pub fn lepton_polarization(&self) -> f64 {
        self.parent.integrated_lepton_polarization()
    }

    /// Identifiers of all parameters this cascade reads.
    pub fn used_parameter_ids(&self) -> Vec<ParameterId> {
        self.parent.used_parameter_ids()
    }
}
