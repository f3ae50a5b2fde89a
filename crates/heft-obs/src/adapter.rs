//! Adapters exposing form-factor methods as observables.

use heft_core::{HeftError, KinematicVariable, Kinematics, Options, ParameterId, Parameters};
use heft_ff::{FormFactorFactory, PToPFormFactors, PToVFormFactors};

use crate::observable::Evaluator;

type PToPMethod = fn(&dyn PToPFormFactors, f64) -> f64;
type PToVMethod = fn(&dyn PToVFormFactors, f64) -> f64;

/// Wraps one P -> P form-factor method as a function of `q2`.
pub struct PToPAdapter {
    form_factors: Box<dyn PToPFormFactors>,
    q2: KinematicVariable,
    method: PToPMethod,
}

impl PToPAdapter {
    /// Builds the adapter for the given process and default parameterization.
    pub fn make(
        process: &str,
        default_tag: &str,
        allowed: &[&str],
        method: PToPMethod,
        parameters: &Parameters,
        kinematics: &Kinematics,
        options: &Options,
    ) -> Result<Box<dyn Evaluator>, HeftError> {
        let tag = options.switch("form-factors", allowed, default_tag)?;
        Ok(Box::new(Self {
            form_factors: FormFactorFactory::p_to_p(
                &format!("{process}::{tag}"),
                parameters,
                options,
            )?,
            q2: kinematics.get("q2")?,
            method,
        }))
    }
}

impl Evaluator for PToPAdapter {
    fn evaluate(&self) -> f64 {
        (self.method)(self.form_factors.as_ref(), self.q2.value())
    }

    fn used_parameter_ids(&self) -> Vec<ParameterId> {
        self.form_factors.used_parameter_ids()
    }
}

/// Wraps one P -> V form-factor method as a function of `q2`.
pub struct PToVAdapter {
    form_factors: Box<dyn PToVFormFactors>,
    q2: KinematicVariable,
    method: PToVMethod,
}

impl PToVAdapter {
    /// Builds the adapter for the given process and default parameterization.
    pub fn make(
        process: &str,
        default_tag: &str,
        allowed: &[&str],
        method: PToVMethod,
        parameters: &Parameters,
        kinematics: &Kinematics,
        options: &Options,
    ) -> Result<Box<dyn Evaluator>, HeftError> {
        let tag = options.switch("form-factors", allowed, default_tag)?;
        Ok(Box::new(Self {
            form_factors: FormFactorFactory::p_to_v(
                &format!("{process}::{tag}"),
                parameters,
                options,
            )?,
            q2: kinematics.get("q2")?,
            method,
        }))
    }
}

impl Evaluator for PToVAdapter {
    fn evaluate(&self) -> f64 {
        (self.method)(self.form_factors.as_ref(), self.q2.value())
    }

    fn used_parameter_ids(&self) -> Vec<ParameterId> {
        self.form_factors.used_parameter_ids()
    }
}

/// Ratio of two P -> V form-factor methods at the same `q2`.
pub struct PToVRatioAdapter {
    form_factors: Box<dyn PToVFormFactors>,
    q2: KinematicVariable,
    numerator: PToVMethod,
    denominator: PToVMethod,
}

impl PToVRatioAdapter {
    /// Builds the ratio adapter for the given process.
    pub fn make(
        process: &str,
        default_tag: &str,
        allowed: &[&str],
        numerator: PToVMethod,
        denominator: PToVMethod,
        parameters: &Parameters,
        kinematics: &Kinematics,
        options: &Options,
    ) -> Result<Box<dyn Evaluator>, HeftError> {
        let tag = options.switch("form-factors", allowed, default_tag)?;
        Ok(Box::new(Self {
            form_factors: FormFactorFactory::p_to_v(
                &format!("{process}::{tag}"),
                parameters,
                options,
            )?,
            q2: kinematics.get("q2")?,
            numerator,
            denominator,
        }))
    }
}

impl Evaluator for PToVRatioAdapter {
    fn evaluate(&self) -> f64 {
        let q2 = self.q2.value();
        (self.numerator)(self.form_factors.as_ref(), q2)
            / (self.denominator)(self.form_factors.as_ref(), q2)
    }

    fn used_parameter_ids(&self) -> Vec<ParameterId> {
        self.form_factors.used_parameter_ids()
    }
}
