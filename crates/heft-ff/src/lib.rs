#![deny(missing_docs)]
#![doc = "Parameterized hadronic form factors: z-expansion machinery, the catalog of concrete parameterizations, and their factory."]

pub mod bsz2015;
pub mod bz2004;
pub mod dm2016;
pub mod factory;
pub mod hqet;
pub mod nonlocal;
pub mod pivff;
pub mod traits;
pub mod zexp;

pub use factory::FormFactorFactory;
pub use traits::{
    BaryonicNonlocalFormFactors, NonlocalFormFactors, OneHalfPlusFormFactors, PToPFormFactors,
    PToVFormFactors, TransitionKind, VacuumToPPFormFactors,
};
pub use zexp::{ArcPolynomials, BlaschkeFactor, ZVariable};
