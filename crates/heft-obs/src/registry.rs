//! The observable catalog: qualified names mapped to factory entries.

use std::sync::OnceLock;

use heft_core::{
    ErrorInfo, HeftError, KinematicVariable, Kinematics, Options, ParameterId, Parameters,
    QualifiedName,
};
use heft_decay::{
    BToDLeptonNeutrino, BToDPiLeptonNeutrino, BToDstarLeptonNeutrino, BToKDilepton,
    BToKstarDilepton, BsToPhiPsi, LambdaBToLambdaPsi,
};
use heft_ff::{PToPFormFactors, PToVFormFactors};

use crate::adapter::{PToPAdapter, PToVAdapter, PToVRatioAdapter};
use crate::observable::{Evaluator, Observable, ParameterEvaluator};

/// Factory record for one registered observable.
pub struct ObservableEntry {
    /// Qualified name, e.g. `B->Kll::BR`.
    pub name: &'static str,
    /// LaTeX label.
    pub latex: &'static str,
    /// Kinematic variables the observable dereferences at evaluation time.
    pub kinematic_variables: &'static [&'static str],
    /// Factory binding an evaluator to (parameters, kinematics, options).
    pub make: fn(&Parameters, &Kinematics, &Options) -> Result<Box<dyn Evaluator>, HeftError>,
}

trait Deps {
    fn dep_ids(&self) -> Vec<ParameterId>;
}

macro_rules! impl_deps {
    ($($ty:ty),*) => {
        $(impl Deps for $ty {
            fn dep_ids(&self) -> Vec<ParameterId> {
                self.used_parameter_ids()
            }
        })*
    };
}

impl_deps!(
    BToKDilepton,
    BToKstarDilepton,
    BToDLeptonNeutrino,
    BToDstarLeptonNeutrino,
    BToDPiLeptonNeutrino,
    LambdaBToLambdaPsi,
    BsToPhiPsi
);

struct Fn0<D: Deps> {
    decay: D,
    f: fn(&D) -> f64,
}

impl<D: Deps> Evaluator for Fn0<D> {
    fn evaluate(&self) -> f64 {
        (self.f)(&self.decay)
    }

    fn used_parameter_ids(&self) -> Vec<ParameterId> {
        self.decay.dep_ids()
    }
}

struct Fn1<D: Deps> {
    decay: D,
    a: KinematicVariable,
    f: fn(&D, f64) -> f64,
}

impl<D: Deps> Evaluator for Fn1<D> {
    fn evaluate(&self) -> f64 {
        (self.f)(&self.decay, self.a.value())
    }

    fn used_parameter_ids(&self) -> Vec<ParameterId> {
        self.decay.dep_ids()
    }
}

struct Fn2<D: Deps> {
    decay: D,
    a: KinematicVariable,
    b: KinematicVariable,
    f: fn(&D, f64, f64) -> f64,
}

impl<D: Deps> Evaluator for Fn2<D> {
    fn evaluate(&self) -> f64 {
        (self.f)(&self.decay, self.a.value(), self.b.value())
    }

    fn used_parameter_ids(&self) -> Vec<ParameterId> {
        self.decay.dep_ids()
    }
}

/// Lepton-universality ratio built from two bound modes.
struct LeptonRatio<D: Deps> {
    numerator: D,
    denominator_e: D,
    denominator_mu: Option<D>,
    a: Option<KinematicVariable>,
    b: Option<KinematicVariable>,
    rate: fn(&D, Option<f64>, Option<f64>) -> f64,
}

impl<D: Deps> Evaluator for LeptonRatio<D> {
    fn evaluate(&self) -> f64 {
        let a = self.a.as_ref().map(KinematicVariable::value);
        let b = self.b.as_ref().map(KinematicVariable::value);
        let numerator = (self.rate)(&self.numerator, a, b);
        let denominator = match &self.denominator_mu {
            Some(muon) => {
                0.5 * ((self.rate)(&self.denominator_e, a, b) + (self.rate)(muon, a, b))
            }
            None => (self.rate)(&self.denominator_e, a, b),
        };
        numerator / denominator
    }

    fn used_parameter_ids(&self) -> Vec<ParameterId> {
        let mut ids = self.numerator.dep_ids();
        ids.extend(self.denominator_e.dep_ids());
        if let Some(muon) = &self.denominator_mu {
            ids.extend(muon.dep_ids());
        }
        ids.sort();
        ids.dedup();
        ids
    }
}

fn with_lepton(options: &Options, flavor: &str) -> Options {
    options.clone() + &Options::from_pairs([("l", flavor)])
}

fn build_entries() -> Vec<ObservableEntry> {
    vec![
        // B -> K l l
        ObservableEntry {
            name: "B->Kll::dBR/dq2",
            latex: r"d\mathcal{B}(B\to K\ell^+\ell^-)/dq^2",
            kinematic_variables: &["q2"],
            make: |p, k, o| {
                Ok(Box::new(Fn1 {
                    decay: BToKDilepton::new(p, o)?,
                    a: k.get("q2")?,
                    f: |d, q2| d.differential_branching_ratio(q2),
                }))
            },
        },
        ObservableEntry {
            name: "B->Kll::BR",
            latex: r"\mathcal{B}(B\to K\ell^+\ell^-)",
            kinematic_variables: &["q2_min", "q2_max"],
            make: |p, k, o| {
                Ok(Box::new(Fn2 {
                    decay: BToKDilepton::new(p, o)?,
                    a: k.get("q2_min")?,
                    b: k.get("q2_max")?,
                    f: |d, a, b| d.integrated_branching_ratio(a, b),
                }))
            },
        },
        ObservableEntry {
            name: "B->Kll::A_FB",
            latex: r"A_{\rm FB}(B\to K\ell^+\ell^-)",
            kinematic_variables: &["q2_min", "q2_max"],
            make: |p, k, o| {
                Ok(Box::new(Fn2 {
                    decay: BToKDilepton::new(p, o)?,
                    a: k.get("q2_min")?,
                    b: k.get("q2_max")?,
                    f: |d, a, b| d.integrated_forward_backward_asymmetry(a, b),
                }))
            },
        },
        ObservableEntry {
            name: "B->Kll::F_H",
            latex: r"F_H(B\to K\ell^+\ell^-)",
            kinematic_variables: &["q2_min", "q2_max"],
            make: |p, k, o| {
                Ok(Box::new(Fn2 {
                    decay: BToKDilepton::new(p, o)?,
                    a: k.get("q2_min")?,
                    b: k.get("q2_max")?,
                    f: |d, a, b| d.integrated_flat_term(a, b),
                }))
            },
        },
        // B -> K^* l l
        ObservableEntry {
            name: "B->K^*ll::dBR/dq2",
            latex: r"d\mathcal{B}(B\to K^{*}\ell^+\ell^-)/dq^2",
            kinematic_variables: &["q2"],
            make: |p, k, o| {
                Ok(Box::new(Fn1 {
                    decay: BToKstarDilepton::new(p, o)?,
                    a: k.get("q2")?,
                    f: |d, q2| d.differential_branching_ratio(q2),
                }))
            },
        },
        ObservableEntry {
            name: "B->K^*ll::BR",
            latex: r"\mathcal{B}(B\to K^{*}\ell^+\ell^-)",
            kinematic_variables: &["q2_min", "q2_max"],
            make: |p, k, o| {
                Ok(Box::new(Fn2 {
                    decay: BToKstarDilepton::new(p, o)?,
                    a: k.get("q2_min")?,
                    b: k.get("q2_max")?,
                    f: |d, a, b| d.integrated_branching_ratio(a, b),
                }))
            },
        },
        ObservableEntry {
            name: "B->K^*ll::F_L",
            latex: r"F_L(B\to K^{*}\ell^+\ell^-)",
            kinematic_variables: &["q2_min", "q2_max"],
            make: |p, k, o| {
                Ok(Box::new(Fn2 {
                    decay: BToKstarDilepton::new(p, o)?,
                    a: k.get("q2_min")?,
                    b: k.get("q2_max")?,
                    f: |d, a, b| d.integrated_f_l(a, b),
                }))
            },
        },
        ObservableEntry {
            name: "B->K^*ll::A_FB",
            latex: r"A_{\rm FB}(B\to K^{*}\ell^+\ell^-)",
            kinematic_variables: &["q2_min", "q2_max"],
            make: |p, k, o| {
                Ok(Box::new(Fn2 {
                    decay: BToKstarDilepton::new(p, o)?,
                    a: k.get("q2_min")?,
                    b: k.get("q2_max")?,
                    f: |d, a, b| d.integrated_forward_backward_asymmetry(a, b),
                }))
            },
        },
        ObservableEntry {
            name: "B->K^*ll::S_5",
            latex: r"S_5(B\to K^{*}\ell^+\ell^-)",
            kinematic_variables: &["q2_min", "q2_max"],
            make: |p, k, o| {
                Ok(Box::new(Fn2 {
                    decay: BToKstarDilepton::new(p, o)?,
                    a: k.get("q2_min")?,
                    b: k.get("q2_max")?,
                    f: |d, a, b| d.integrated_s_5(a, b),
                }))
            },
        },
        ObservableEntry {
            name: "B->K^*ll::P'_5",
            latex: r"P'_5(B\to K^{*}\ell^+\ell^-)",
            kinematic_variables: &["q2_min", "q2_max"],
            make: |p, k, o| {
                Ok(Box::new(Fn2 {
                    decay: BToKstarDilepton::new(p, o)?,
                    a: k.get("q2_min")?,
                    b: k.get("q2_max")?,
                    f: |d, a, b| d.integrated_p_prime_5(a, b),
                }))
            },
        },
        ObservableEntry {
            name: "B->K^*ll::R_K^*",
            latex: r"R_{K^*}",
            kinematic_variables: &["q2_min", "q2_max"],
            make: |p, k, o| {
                Ok(Box::new(LeptonRatio {
                    numerator: BToKstarDilepton::new(p, &with_lepton(o, "mu"))?,
                    denominator_e: BToKstarDilepton::new(p, &with_lepton(o, "e"))?,
                    denominator_mu: None,
                    a: Some(k.get("q2_min")?),
                    b: Some(k.get("q2_max")?),
                    rate: |d, a, b| {
                        d.integrated_branching_ratio(a.unwrap_or(1.1), b.unwrap_or(6.0))
                    },
                }))
            },
        },
        // B -> D l nu
        ObservableEntry {
            name: "B->Dlnu::BR",
            latex: r"\mathcal{B}(B\to D\ell\nu)",
            kinematic_variables: &["q2_min", "q2_max"],
            make: |p, k, o| {
                Ok(Box::new(Fn2 {
                    decay: BToDLeptonNeutrino::new(p, o)?,
                    a: k.get("q2_min")?,
                    b: k.get("q2_max")?,
                    f: |d, a, b| d.integrated_branching_ratio(a, b),
                }))
            },
        },
        ObservableEntry {
            name: "B->Dlnu::R_D",
            latex: r"R_D",
            kinematic_variables: &[],
            make: |p, _k, o| {
                Ok(Box::new(LeptonRatio {
                    numerator: BToDLeptonNeutrino::new(p, &with_lepton(o, "tau"))?,
                    denominator_e: BToDLeptonNeutrino::new(p, &with_lepton(o, "e"))?,
                    denominator_mu: Some(BToDLeptonNeutrino::new(p, &with_lepton(o, "mu"))?),
                    a: None,
                    b: None,
                    rate: |d, _, _| d.integrated_decay_width(),
                }))
            },
        },
        // B -> D^* l nu
        ObservableEntry {
            name: "B->D^*lnu::BR",
            latex: r"\mathcal{B}(B\to D^{*}\ell\nu)",
            kinematic_variables: &[],
            make: |p, _k, o| {
                Ok(Box::new(Fn0 {
                    decay: BToDstarLeptonNeutrino::new(p, o)?,
                    f: |d| d.integrated_branching_ratio(),
                }))
            },
        },
        ObservableEntry {
            name: "B->D^*lnu::F_L",
            latex: r"F_L(B\to D^{*}\ell\nu)",
            kinematic_variables: &[],
            make: |p, _k, o| {
                Ok(Box::new(Fn0 {
                    decay: BToDstarLeptonNeutrino::new(p, o)?,
                    f: |d| d.integrated_f_l(),
                }))
            },
        },
        ObservableEntry {
            name: "B->D^*lnu::A_FB",
            latex: r"A_{\rm FB}(B\to D^{*}\ell\nu)",
            kinematic_variables: &[],
            make: |p, _k, o| {
                Ok(Box::new(Fn0 {
                    decay: BToDstarLeptonNeutrino::new(p, o)?,
                    f: |d| d.integrated_forward_backward_asymmetry(),
                }))
            },
        },
        ObservableEntry {
            name: "B->D^*lnu::P_l",
            latex: r"P_\ell(B\to D^{*}\ell\nu)",
            kinematic_variables: &[],
            make: |p, _k, o| {
                Ok(Box::new(Fn0 {
                    decay: BToDstarLeptonNeutrino::new(p, o)?,
                    f: |d| d.integrated_lepton_polarization(),
                }))
            },
        },
        ObservableEntry {
            name: "B->D^*lnu::R_D^*",
            latex: r"R_{D^*}",
            kinematic_variables: &[],
            make: |p, _k, o| {
                Ok(Box::new(LeptonRatio {
                    numerator: BToDstarLeptonNeutrino::new(p, &with_lepton(o, "tau"))?,
                    denominator_e: BToDstarLeptonNeutrino::new(p, &with_lepton(o, "e"))?,
                    denominator_mu: Some(BToDstarLeptonNeutrino::new(p, &with_lepton(o, "mu"))?),
                    a: None,
                    b: None,
                    rate: |d, _, _| d.integrated_decay_width(),
                }))
            },
        },
        // B -> D^* (-> D pi) l nu
        ObservableEntry {
            name: "B->Dpilnu::P(cos(theta_D))",
            latex: r"P(\cos\theta_D)",
            kinematic_variables: &["cos(theta_D)"],
            make: |p, k, o| {
                Ok(Box::new(Fn1 {
                    decay: BToDPiLeptonNeutrino::new(p, o)?,
                    a: k.get("cos(theta_D)")?,
                    f: |d, c| d.pdf_d(c),
                }))
            },
        },
        ObservableEntry {
            name: "B->Dpilnu::P(cos(theta_l))",
            latex: r"P(\cos\theta_\ell)",
            kinematic_variables: &["cos(theta_l)"],
            make: |p, k, o| {
                Ok(Box::new(Fn1 {
                    decay: BToDPiLeptonNeutrino::new(p, o)?,
                    a: k.get("cos(theta_l)")?,
                    f: |d, c| d.pdf_l(c),
                }))
            },
        },
        ObservableEntry {
            name: "B->Dpilnu::P(chi)",
            latex: r"P(\chi)",
            kinematic_variables: &["chi"],
            make: |p, k, o| {
                Ok(Box::new(Fn1 {
                    decay: BToDPiLeptonNeutrino::new(p, o)?,
                    a: k.get("chi")?,
                    f: |d, c| d.pdf_chi(c),
                }))
            },
        },
        ObservableEntry {
            name: "B->Dpilnu::integrated_P(cos(theta_D))",
            latex: r"\int P(\cos\theta_D)",
            kinematic_variables: &["z_min", "z_max"],
            make: |p, k, o| {
                Ok(Box::new(Fn2 {
                    decay: BToDPiLeptonNeutrino::new(p, o)?,
                    a: k.get("z_min")?,
                    b: k.get("z_max")?,
                    f: |d, a, b| d.integrated_pdf_d(a, b),
                }))
            },
        },
        ObservableEntry {
            name: "B->Dpilnu::integrated_P(cos(theta_l))",
            latex: r"\int P(\cos\theta_\ell)",
            kinematic_variables: &["z_min", "z_max"],
            make: |p, k, o| {
                Ok(Box::new(Fn2 {
                    decay: BToDPiLeptonNeutrino::new(p, o)?,
                    a: k.get("z_min")?,
                    b: k.get("z_max")?,
                    f: |d, a, b| d.integrated_pdf_l(a, b),
                }))
            },
        },
        ObservableEntry {
            name: "B->Dpilnu::integrated_P(chi)",
            latex: r"\int P(\chi)",
            kinematic_variables: &["chi_min", "chi_max"],
            make: |p, k, o| {
                Ok(Box::new(Fn2 {
                    decay: BToDPiLeptonNeutrino::new(p, o)?,
                    a: k.get("chi_min")?,
                    b: k.get("chi_max")?,
                    f: |d, a, b| d.integrated_pdf_chi(a, b),
                }))
            },
        },
        // Lambda_b -> Lambda J/psi
        ObservableEntry {
            name: "Lambda_b->LambdaJ/psi::BR",
            latex: r"\mathcal{B}(\Lambda_b\to\Lambda J/\psi)",
            kinematic_variables: &[],
            make: |p, _k, o| {
                Ok(Box::new(Fn0 {
                    decay: LambdaBToLambdaPsi::new(p, o)?,
                    f: |d| d.branching_ratio(),
                }))
            },
        },
        ObservableEntry {
            name: "Lambda_b->LambdaJ/psi::K_1ss",
            latex: r"K_{1ss}",
            kinematic_variables: &[],
            make: |p, _k, o| {
                Ok(Box::new(Fn0 {
                    decay: LambdaBToLambdaPsi::new(p, o)?,
                    f: |d| d.k_coefficients().k1ss,
                }))
            },
        },
        ObservableEntry {
            name: "Lambda_b->LambdaJ/psi::K_1cc",
            latex: r"K_{1cc}",
            kinematic_variables: &[],
            make: |p, _k, o| {
                Ok(Box::new(Fn0 {
                    decay: LambdaBToLambdaPsi::new(p, o)?,
                    f: |d| d.k_coefficients().k1cc,
                }))
            },
        },
        ObservableEntry {
            name: "Lambda_b->LambdaJ/psi::K_2ss",
            latex: r"K_{2ss}",
            kinematic_variables: &[],
            make: |p, _k, o| {
                Ok(Box::new(Fn0 {
                    decay: LambdaBToLambdaPsi::new(p, o)?,
                    f: |d| d.k_coefficients().k2ss,
                }))
            },
        },
        ObservableEntry {
            name: "Lambda_b->LambdaJ/psi::K_2cc",
            latex: r"K_{2cc}",
            kinematic_variables: &[],
            make: |p, _k, o| {
                Ok(Box::new(Fn0 {
                    decay: LambdaBToLambdaPsi::new(p, o)?,
                    f: |d| d.k_coefficients().k2cc,
                }))
            },
        },
        // B_s -> phi psi
        ObservableEntry {
            name: "B_s->phiJ/psi::BR",
            latex: r"\mathcal{B}(B_s\to\phi\psi)",
            kinematic_variables: &[],
            make: |p, _k, o| {
                Ok(Box::new(Fn0 {
                    decay: BsToPhiPsi::new(p, o)?,
                    f: |d| d.branching_ratio(),
                }))
            },
        },
        ObservableEntry {
            name: "B_s->phiJ/psi::F_L",
            latex: r"F_L(B_s\to\phi\psi)",
            kinematic_variables: &[],
            make: |p, _k, o| {
                Ok(Box::new(Fn0 {
                    decay: BsToPhiPsi::new(p, o)?,
                    f: |d| d.longitudinal_polarization(),
                }))
            },
        },
        ObservableEntry {
            name: "B_s->phiJ/psi::F_perp",
            latex: r"F_\perp(B_s\to\phi\psi)",
            kinematic_variables: &[],
            make: |p, _k, o| {
                Ok(Box::new(Fn0 {
                    decay: BsToPhiPsi::new(p, o)?,
                    f: |d| d.perpendicular_polarization(),
                }))
            },
        },
        // form-factor adapters
        ObservableEntry {
            name: "B->K::f_+(q2)",
            latex: r"f_+^{B\to K}(q^2)",
            kinematic_variables: &["q2"],
            make: |p, k, o| {
                PToPAdapter::make("B->K", "BZ2004v2", &["BZ2004v2"], |ff, q2| ff.f_p(q2), p, k, o)
            },
        },
        ObservableEntry {
            name: "B->K::f_0(q2)",
            latex: r"f_0^{B\to K}(q^2)",
            kinematic_variables: &["q2"],
            make: |p, k, o| {
                PToPAdapter::make("B->K", "BZ2004v2", &["BZ2004v2"], |ff, q2| ff.f_0(q2), p, k, o)
            },
        },
        ObservableEntry {
            name: "B->K::f_T(q2)",
            latex: r"f_T^{B\to K}(q^2)",
            kinematic_variables: &["q2"],
            make: |p, k, o| {
                PToPAdapter::make("B->K", "BZ2004v2", &["BZ2004v2"], |ff, q2| ff.f_t(q2), p, k, o)
            },
        },
        ObservableEntry {
            name: "B->D::f_+(q2)",
            latex: r"f_+^{B\to D}(q^2)",
            kinematic_variables: &["q2"],
            make: |p, k, o| {
                PToPAdapter::make("B->D", "HQET", &["HQET"], |ff, q2| ff.f_p(q2), p, k, o)
            },
        },
        ObservableEntry {
            name: "B->K^*::V(q2)",
            latex: r"V^{B\to K^*}(q^2)",
            kinematic_variables: &["q2"],
            make: |p, k, o| {
                PToVAdapter::make("B->K^*", "BSZ2015", &["BSZ2015"], |ff, q2| ff.v(q2), p, k, o)
            },
        },
        ObservableEntry {
            name: "B->K^*::A_0(q2)",
            latex: r"A_0^{B\to K^*}(q^2)",
            kinematic_variables: &["q2"],
            make: |p, k, o| {
                PToVAdapter::make("B->K^*", "BSZ2015", &["BSZ2015"], |ff, q2| ff.a_0(q2), p, k, o)
            },
        },
        ObservableEntry {
            name: "B->K^*::A_1(q2)",
            latex: r"A_1^{B\to K^*}(q^2)",
            kinematic_variables: &["q2"],
            make: |p, k, o| {
                PToVAdapter::make("B->K^*", "BSZ2015", &["BSZ2015"], |ff, q2| ff.a_1(q2), p, k, o)
            },
        },
        ObservableEntry {
            name: "B->K^*::A_12(q2)",
            latex: r"A_{12}^{B\to K^*}(q^2)",
            kinematic_variables: &["q2"],
            make: |p, k, o| {
                PToVAdapter::make("B->K^*", "BSZ2015", &["BSZ2015"], |ff, q2| ff.a_12(q2), p, k, o)
            },
        },
        ObservableEntry {
            name: "B->K^*::T_1(q2)",
            latex: r"T_1^{B\to K^*}(q^2)",
            kinematic_variables: &["q2"],
            make: |p, k, o| {
                PToVAdapter::make("B->K^*", "BSZ2015", &["BSZ2015"], |ff, q2| ff.t_1(q2), p, k, o)
            },
        },
        ObservableEntry {
            name: "B->K^*::T_23(q2)",
            latex: r"T_{23}^{B\to K^*}(q^2)",
            kinematic_variables: &["q2"],
            make: |p, k, o| {
                PToVAdapter::make("B->K^*", "BSZ2015", &["BSZ2015"], |ff, q2| ff.t_23(q2), p, k, o)
            },
        },
        ObservableEntry {
            name: "B->D^*::A_1(q2)",
            latex: r"A_1^{B\to D^*}(q^2)",
            kinematic_variables: &["q2"],
            make: |p, k, o| {
                PToVAdapter::make("B->D^*", "HQET", &["HQET"], |ff, q2| ff.a_1(q2), p, k, o)
            },
        },
        ObservableEntry {
            name: "B->K^*::V/A_1(q2)",
            latex: r"V/A_1^{B\to K^*}(q^2)",
            kinematic_variables: &["q2"],
            make: |p, k, o| {
                PToVRatioAdapter::make(
                    "B->K^*",
                    "BSZ2015",
                    &["BSZ2015"],
                    |ff, q2| ff.v(q2),
                    |ff, q2| ff.a_1(q2),
                    p,
                    k,
                    o,
                )
            },
        },
    ]
}

static REGISTRY: OnceLock<Vec<ObservableEntry>> = OnceLock::new();

/// All registered entries.
pub fn entries() -> &'static [ObservableEntry] {
    REGISTRY.get_or_init(build_entries)
}

/// Finds an entry by its registered qualified name.
pub fn find(name: &str) -> Option<&'static ObservableEntry> {
    entries().iter().find(|entry| entry.name == name)
}

/// Creates an observable from its qualified name.
///
/// Trailing `,key=value` pairs are stripped into an options delta that takes
/// precedence over `options`. A bare name matching a parameter (with no
/// option delta) falls back to a parameter-value observable.
pub fn make_observable(
    raw: &str,
    parameters: &Parameters,
    kinematics: &Kinematics,
    options: &Options,
) -> Result<Observable, HeftError> {
    let parsed = QualifiedName::parse(raw)?;
    let merged = options.clone() + &parsed.options;
    let bare = parsed.full();

    if let Some(entry) = find(&bare) {
        let evaluator = (entry.make)(parameters, kinematics, &merged)?;
        return Ok(Observable {
            name: raw.to_string(),
            latex: Some(entry.latex),
            parameters: parameters.clone(),
            kinematics: kinematics.clone(),
            options: merged,
            evaluator,
        });
    }

    if parsed.options.is_empty() && parameters.contains(&bare) {
        let user = heft_core::ParameterUser::new();
        let parameter = user.bind(parameters, &bare)?;
        return Ok(Observable {
            name: raw.to_string(),
            latex: None,
            parameters: parameters.clone(),
            kinematics: kinematics.clone(),
            options: merged,
            evaluator: Box::new(ParameterEvaluator { parameter }),
        });
    }

    Err(HeftError::ObservableName(
        ErrorInfo::new(
            "unknown-observable",
            format!("unknown observable '{bare}'"),
        )
        .with_context("input", raw)
        .with_hint("list known names through heft_obs::registry::entries()"),
    ))
}
