#![deny(missing_docs)]
#![doc = "Decay modules: helicity amplitudes, differential rates, and integrated observables."]

pub mod b_to_d_l_nu;
pub mod b_to_d_pi_l_nu;
pub mod b_to_dstar_l_nu;
pub mod b_to_k_ll;
pub mod b_to_kstar_ll;
pub mod bs_to_phi_psi;
pub mod lambdab_to_lambda_psi;

pub use b_to_d_l_nu::{r_d, BToDLeptonNeutrino};
pub use b_to_d_pi_l_nu::BToDPiLeptonNeutrino;
pub use b_to_dstar_l_nu::{r_dstar, BToDstarLeptonNeutrino};
pub use b_to_k_ll::BToKDilepton;
pub use b_to_kstar_ll::{r_kstar, BToKstarDilepton};
pub use bs_to_phi_psi::BsToPhiPsi;
pub use lambdab_to_lambda_psi::LambdaBToLambdaPsi;
