#![deny(missing_docs)]
#![doc = "Core parameter, option, and kinematics types for the heft observable engine."]

pub mod errors;
pub mod kinematics;
pub mod name;
pub mod options;
pub mod parameters;

mod defaults;

pub use errors::{ErrorInfo, HeftError};
pub use kinematics::{KinematicVariable, Kinematics};
pub use name::{ParameterName, QualifiedName};
pub use options::Options;
pub use parameters::{ParameterEntry, ParameterId, ParameterUser, Parameters, UsedParameter};
