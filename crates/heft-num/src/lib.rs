//! Numeric leaves of the heft engine: kinematic primitives, the conformal
//! variable, the complex dilogarithm, and adaptive quadrature.

pub mod conformal;
pub mod integrate;
pub mod kin;
pub mod polylog;

pub use conformal::{z_of, z_real};
pub use integrate::{integrate, integrate_default, Quadrature, QuadratureOpts};
pub use kin::{lambda, pow2, pow3, pow4, pow5, power_of};
pub use polylog::{cdilog, dilog};
