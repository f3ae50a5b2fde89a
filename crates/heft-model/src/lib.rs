#![deny(missing_docs)]
#![doc = "Wilson-coefficient containers, QCD running, CKM inputs, and short-distance models."]

pub mod ckm;
pub mod model;
pub mod qcd;
pub mod sm;
pub mod transition;
pub mod wilson;
pub mod wilson_scan;

pub use ckm::CkmMatrix;
pub use model::{make_model, LeptonFlavor, Model, MODEL_NAMES};
pub use sm::StandardModel;
pub use transition::{BToD, BToS, BToU, ChargedCurrent, Transition};
pub use wilson::{WilsonCoefficients, SM_LIKE_SLOTS};
pub use wilson_scan::{ConstrainedWilsonScan, WilsonScan};
