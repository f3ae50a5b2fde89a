//! Wilson-coefficient scan models.

use num_complex::Complex64;

use heft_core::{HeftError, Options, ParameterId, ParameterUser, Parameters, UsedParameter};

use crate::ckm::CkmMatrix;
use crate::model::{LeptonFlavor, Model};
use crate::sm::StandardModel;
use crate::transition::{BToS, ChargedCurrent};
use crate::wilson::{st, WilsonCoefficients};

/// One scanned complex coefficient.
#[derive(Debug)]
enum ScanEntry {
    Cartesian { re: UsedParameter, im: UsedParameter },
    Polar { abs: UsedParameter, arg: UsedParameter },
}

impl ScanEntry {
    fn value(&self) -> Complex64 {
        match self {
            ScanEntry::Cartesian { re, im } => Complex64::new(re.value(), im.value()),
            ScanEntry::Polar { abs, arg } => Complex64::from_polar(abs.value(), arg.value()),
        }
    }
}

fn bind_entry(
    user: &ParameterUser,
    parameters: &Parameters,
    sector: &str,
    symbol: &str,
    polar: bool,
) -> Result<ScanEntry, HeftError> {
    if polar {
        Ok(ScanEntry::Polar {
            abs: user.bind_or_declare(parameters, &format!("{sector}::Abs{{{symbol}}}"), 0.0),
            arg: user.bind_or_declare(parameters, &format!("{sector}::Arg{{{symbol}}}"), 0.0),
        })
    } else {
        Ok(ScanEntry::Cartesian {
            re: user.bind_or_declare(parameters, &format!("{sector}::Re{{{symbol}}}"), 0.0),
            im: user.bind_or_declare(parameters, &format!("{sector}::Im{{{symbol}}}"), 0.0),
        })
    }
}

#[derive(Debug)]
struct FlavorOverride {
    c9: ScanEntry,
    c10: ScanEntry,
}

/// Shared implementation of the scan models.
#[derive(Debug)]
struct Scan {
    base: StandardModel,
    user: ParameterUser,
    c7: ScanEntry,
    c9: ScanEntry,
    c10: ScanEntry,
    c7_prime: ScanEntry,
    c9_prime: ScanEntry,
    c10_prime: ScanEntry,
    c_s: ScanEntry,
    c_s_prime: ScanEntry,
    /// Unconstrained pseudoscalar/tensor entries; absent in the constrained model.
    free_scalars: Option<FreeScalars>,
    overrides: [Option<FlavorOverride>; 3],
    cc: ChargedCurrentEntries,
}

#[derive(Debug)]
struct FreeScalars {
    c_p: ScanEntry,
    c_p_prime: ScanEntry,
    c_t: ScanEntry,
    c_t5: ScanEntry,
}

#[derive(Debug)]
struct ChargedCurrentEntries {
    c_v_l: ScanEntry,
    c_v_r: ScanEntry,
    c_s_l: ScanEntry,
    c_s_r: ScanEntry,
    c_t: ScanEntry,
}

fn flavor_index(lepton: LeptonFlavor) -> usize {
    match lepton {
        LeptonFlavor::Electron => 0,
        LeptonFlavor::Muon => 1,
        LeptonFlavor::Tau => 2,
    }
}

impl Scan {
    fn new(parameters: &Parameters, options: &Options, constrained: bool) -> Result<Self, HeftError> {
        let polar = options.switch("parameterization", &["cartesian", "polar"], "cartesian")? == "polar";
        let base = StandardModel::new(parameters)?;
        let user = ParameterUser::new();

        let free_scalars = if constrained {
            None
        } else {
            Some(FreeScalars {
                c_p: bind_entry(&user, parameters, "b->s", "cP", polar)?,
                c_p_prime: bind_entry(&user, parameters, "b->s", "cP'", polar)?,
                c_t: bind_entry(&user, parameters, "b->s", "cT", polar)?,
                c_t5: bind_entry(&user, parameters, "b->s", "cT5", polar)?,
            })
        };

        // lepton-flavor-specific sectors take effect when the user declared
        // the corresponding Re{c9} (or Abs{c9}) before constructing the model;
        // undeclared partners inherit the universal values
        let mut overrides: [Option<FlavorOverride>; 3] = [None, None, None];
        for lepton in [LeptonFlavor::Electron, LeptonFlavor::Muon, LeptonFlavor::Tau] {
            let sector = format!("b->s{}", lepton.sector_suffix());
            let marker = if polar {
                format!("{sector}::Abs{{c9}}")
            } else {
                format!("{sector}::Re{{c9}}")
            };
            if parameters.contains(&marker) {
                let inherit = |symbol: &str, part: &str| -> f64 {
                    parameters
                        .value_of(&format!("b->s::{part}{{{symbol}}}"))
                        .unwrap_or(0.0)
                };
                let bind_flavor = |symbol: &str| -> ScanEntry {
                    if polar {
                        ScanEntry::Polar {
                            abs: user.bind_or_declare(
                                parameters,
                                &format!("{sector}::Abs{{{symbol}}}"),
                                inherit(symbol, "Re").abs(),
                            ),
                            arg: user.bind_or_declare(
                                parameters,
                                &format!("{sector}::Arg{{{symbol}}}"),
                                0.0,
                            ),
                        }
                    } else {
                        ScanEntry::Cartesian {
                            re: user.bind_or_declare(
                                parameters,
                                &format!("{sector}::Re{{{symbol}}}"),
                                inherit(symbol, "Re"),
                            ),
                            im: user.bind_or_declare(
                                parameters,
                                &format!("{sector}::Im{{{symbol}}}"),
                                inherit(symbol, "Im"),
                            ),
                        }
                    }
                };
                overrides[flavor_index(lepton)] = Some(FlavorOverride {
                    c9: bind_flavor("c9"),
                    c10: bind_flavor("c10"),
                });
            }
        }

        Ok(Self {
            c7: bind_entry(&user, parameters, "b->s", "c7", polar)?,
            c9: bind_entry(&user, parameters, "b->s", "c9", polar)?,
            c10: bind_entry(&user, parameters, "b->s", "c10", polar)?,
            c7_prime: bind_entry(&user, parameters, "b->s", "c7'", polar)?,
            c9_prime: bind_entry(&user, parameters, "b->s", "c9'", polar)?,
            c10_prime: bind_entry(&user, parameters, "b->s", "c10'", polar)?,
            c_s: bind_entry(&user, parameters, "b->s", "cS", polar)?,
            c_s_prime: bind_entry(&user, parameters, "b->s", "cS'", polar)?,
            free_scalars,
            overrides,
            cc: ChargedCurrentEntries {
                c_v_l: bind_entry(&user, parameters, "b->clnu", "cVL", polar)?,
                c_v_r: bind_entry(&user, parameters, "b->clnu", "cVR", polar)?,
                c_s_l: bind_entry(&user, parameters, "b->clnu", "cSL", polar)?,
                c_s_r: bind_entry(&user, parameters, "b->clnu", "cSR", polar)?,
                c_t: bind_entry(&user, parameters, "b->clnu", "cT", polar)?,
            },
            base,
            user,
        })
    }

    fn b_to_s(&self, lepton: LeptonFlavor, cp_conjugate: bool) -> WilsonCoefficients<BToS> {
        // c1..c6 and c8 are not scanned; take them from the SM assembly
        let mut wc = self.base.wilson_coefficients_b_to_s(lepton, false);
        wc.sm_like[6] = self.c7.value();
        let (c9, c10) = match &self.overrides[flavor_index(lepton)] {
            Some(entry) => (entry.c9.value(), entry.c10.value()),
            None => (self.c9.value(), self.c10.value()),
        };
        wc.sm_like[8] = c9;
        wc.sm_like[9] = c10;
        wc.primed[6] = self.c7_prime.value();
        wc.primed[8] = self.c9_prime.value();
        wc.primed[9] = self.c10_prime.value();

        let c_s = self.c_s.value();
        let c_s_prime = self.c_s_prime.value();
        wc.scalar_tensor[st::S] = c_s;
        wc.scalar_tensor[st::S_PRIME] = c_s_prime;
        match &self.free_scalars {
            Some(free) => {
                wc.scalar_tensor[st::P] = free.c_p.value();
                wc.scalar_tensor[st::P_PRIME] = free.c_p_prime.value();
                wc.scalar_tensor[st::T] = free.c_t.value();
                wc.scalar_tensor[st::T5] = free.c_t5.value();
            }
            None => {
                // SU(2)_L relations: cP = -cS, cP' = cS', cT = cT5 = 0
                wc.scalar_tensor[st::P] = -c_s;
                wc.scalar_tensor[st::P_PRIME] = c_s_prime;
                wc.scalar_tensor[st::T] = Complex64::new(0.0, 0.0);
                wc.scalar_tensor[st::T5] = Complex64::new(0.0, 0.0);
            }
        }

        if cp_conjugate {
            wc.cp_conjugate()
        } else {
            wc
        }
    }

    fn charged_current(&self, cp_conjugate: bool) -> WilsonCoefficients<ChargedCurrent> {
        let mut wc = WilsonCoefficients::<ChargedCurrent>::default();
        wc.sm_like[0] = self.cc.c_v_l.value();
        wc.primed[0] = self.cc.c_v_r.value();
        wc.scalar_tensor[st::S] = self.cc.c_s_l.value();
        wc.scalar_tensor[st::S_PRIME] = self.cc.c_s_r.value();
        wc.scalar_tensor[st::T] = self.cc.c_t.value();
        wc.alpha_s = self.base.alpha_s_at_mu_b();
        if cp_conjugate {
            wc.cp_conjugate()
        } else {
            wc
        }
    }

    fn used_ids(&self) -> Vec<ParameterId> {
        let mut ids = self.base.used_parameter_ids();
        ids.extend(self.user.used_ids());
        ids.sort();
        ids.dedup();
        ids
    }
}

/// Scan model: every coefficient an independent parameter, organized per
/// lepton flavor where universality violation is possible.
#[derive(Debug)]
pub struct WilsonScan {
    inner: Scan,
}

impl WilsonScan {
    /// Binds the scan model to a parameter set.
    pub fn new(parameters: &Parameters, options: &Options) -> Result<Self, HeftError> {
        Ok(Self {
            inner: Scan::new(parameters, options, false)?,
        })
    }
}

/// Scan model with SU(2)_L-enforced relations between scalar coefficients.
#[derive(Debug)]
pub struct ConstrainedWilsonScan {
    inner: Scan,
}

impl ConstrainedWilsonScan {
    /// Binds the constrained scan model to a parameter set.
    pub fn new(parameters: &Parameters, options: &Options) -> Result<Self, HeftError> {
        Ok(Self {
            inner: Scan::new(parameters, options, true)?,
        })
    }
}

macro_rules! delegate_model {
    ($ty:ident) => {
        impl Model for $ty {
            fn alpha_s(&self, mu: f64) -> f64 {
                self.inner.base.alpha_s(mu)
            }

            fn m_b_msbar(&self, mu: f64) -> f64 {
                self.inner.base.m_b_msbar(mu)
            }

            fn m_c_msbar(&self, mu: f64) -> f64 {
                self.inner.base.m_c_msbar(mu)
            }

            fn m_b_pole(&self) -> f64 {
                self.inner.base.m_b_pole()
            }

            fn m_c_pole(&self) -> f64 {
                self.inner.base.m_c_pole()
            }

            fn ckm(&self) -> CkmMatrix {
                self.inner.base.ckm()
            }

            fn wilson_coefficients_b_to_s(
                &self,
                lepton: LeptonFlavor,
                cp_conjugate: bool,
            ) -> WilsonCoefficients<BToS> {
                self.inner.b_to_s(lepton, cp_conjugate)
            }

            fn wilson_coefficients_charged_current(
                &self,
                _lepton: LeptonFlavor,
                cp_conjugate: bool,
            ) -> WilsonCoefficients<ChargedCurrent> {
                self.inner.charged_current(cp_conjugate)
            }

            fn used_parameter_ids(&self) -> Vec<ParameterId> {
                self.inner.used_ids()
            }
        }
    };
}

delegate_model!(WilsonScan);
delegate_model!(ConstrainedWilsonScan);
