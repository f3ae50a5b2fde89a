//! The observable interface: an evaluator bound to its parameter,
//! kinematic, and option context.

use heft_core::{HeftError, Kinematics, Options, ParameterId, Parameters, UsedParameter};

use crate::registry;

/// Evaluation backend of an observable.
pub trait Evaluator {
    /// Computes the current value.
    fn evaluate(&self) -> f64;

    /// Identifiers of the parameters the evaluator reads.
    fn used_parameter_ids(&self) -> Vec<ParameterId>;
}

/// An evaluator bound to its construction context.
///
/// Cloning re-runs the registry's factory against the same or a replacement
/// parameter set, so clones track subsequent parameter mutations exactly
/// like the original.
pub struct Observable {
    pub(crate) name: String,
    pub(crate) latex: Option<&'static str>,
    pub(crate) parameters: Parameters,
    pub(crate) kinematics: Kinematics,
    pub(crate) options: Options,
    pub(crate) evaluator: Box<dyn Evaluator>,
}

impl std::fmt::Debug for Observable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("name", &self.name)
            .field("latex", &self.latex)
            .field("parameters", &self.parameters)
            .field("kinematics", &self.kinematics)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Observable {
    /// Evaluates the observable in its current context.
    pub fn evaluate(&self) -> f64 {
        self.evaluator.evaluate()
    }

    /// Qualified name this observable was created from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// LaTeX label, when the registry provides one.
    pub fn latex(&self) -> Option<&'static str> {
        self.latex
    }

    /// The bound parameter set.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The bound kinematics.
    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    /// The bound options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Identifiers of the parameters this observable reads.
    pub fn used_parameter_ids(&self) -> Vec<ParameterId> {
        self.evaluator.used_parameter_ids()
    }

    /// Clones the observable against the same parameter set.
    pub fn clone_observable(&self) -> Result<Observable, HeftError> {
        self.clone_with(&self.parameters)
    }

    /// Clones the observable against a replacement parameter set.
    pub fn clone_with(&self, parameters: &Parameters) -> Result<Observable, HeftError> {
        registry::make_observable(
            &self.name,
            parameters,
            &self.kinematics,
            &self.options,
        )
    }
}

/// Fallback evaluator returning the value of a single parameter.
pub(crate) struct ParameterEvaluator {
    pub(crate) parameter: UsedParameter,
}

impl Evaluator for ParameterEvaluator {
    fn evaluate(&self) -> f64 {
        self.parameter.value()
    }

    fn used_parameter_ids(&self) -> Vec<ParameterId> {
        vec![self.parameter.id()]
    }
}
