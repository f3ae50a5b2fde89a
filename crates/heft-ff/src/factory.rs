//! String-keyed catalog of form-factor constructors.
//!
//! Qualified names follow `"Process::Parameterization"`; dispatch happens
//! by lookup at construction time and a miss is a descriptive error.

use heft_core::{ErrorInfo, HeftError, Options, Parameters};

use crate::bsz2015::{BSZ2015FormFactors, BS_TO_PHI, B_TO_KSTAR};
use crate::bz2004::BZ2004FormFactors;
use crate::dm2016::DM2016FormFactors;
use crate::hqet::{HqetBToD, HqetBToDstar};
use crate::nonlocal::{BaryonicNonlocal, MesonicNonlocal, BS_TO_PHI_CCBAR, B_TO_KSTAR_CCBAR};
use crate::pivff::PionVectorFF;
use crate::traits::{
    BaryonicNonlocalFormFactors, NonlocalFormFactors, OneHalfPlusFormFactors, PToPFormFactors,
    PToVFormFactors, TransitionKind, VacuumToPPFormFactors,
};

fn no_such_form_factor(kind: TransitionKind, name: &str, known: &[&str]) -> HeftError {
    HeftError::FormFactor(
        ErrorInfo::new(
            "no-such-form-factor",
            format!("no form factor '{name}' for a {} transition", kind.name()),
        )
        .with_context("name", name)
        .with_context("known", known.join(", ")),
    )
}

/// Entry point for form-factor construction.
#[derive(Debug)]
pub struct FormFactorFactory;

impl FormFactorFactory {
    /// Creates a P -> P form factor, e.g. `"B->K::BZ2004v2"`.
    pub fn p_to_p(
        name: &str,
        parameters: &Parameters,
        options: &Options,
    ) -> Result<Box<dyn PToPFormFactors>, HeftError> {
        const KNOWN: [&str; 2] = ["B->K::BZ2004v2", "B->D::HQET"];
        match name {
            "B->K::BZ2004v2" => Ok(Box::new(BZ2004FormFactors::new(parameters)?)),
            "B->D::HQET" => Ok(Box::new(HqetBToD::new(parameters, options)?)),
            _ => Err(no_such_form_factor(TransitionKind::PToP, name, &KNOWN)),
        }
    }

    /// Creates a P -> V form factor, e.g. `"B->K^*::BSZ2015"`.
    pub fn p_to_v(
        name: &str,
        parameters: &Parameters,
        options: &Options,
    ) -> Result<Box<dyn PToVFormFactors>, HeftError> {
        const KNOWN: [&str; 3] = ["B->K^*::BSZ2015", "B_s->phi::BSZ2015", "B->D^*::HQET"];
        match name {
            "B->K^*::BSZ2015" => Ok(Box::new(BSZ2015FormFactors::new(&B_TO_KSTAR, parameters)?)),
            "B_s->phi::BSZ2015" => Ok(Box::new(BSZ2015FormFactors::new(&BS_TO_PHI, parameters)?)),
            "B->D^*::HQET" => Ok(Box::new(HqetBToDstar::new(parameters, options)?)),
            _ => Err(no_such_form_factor(TransitionKind::PToV, name, &KNOWN)),
        }
    }

    /// Creates a 1/2^+ -> 1/2^+ form factor, e.g. `"Lambda_b->Lambda::DM2016"`.
    pub fn one_half_plus(
        name: &str,
        parameters: &Parameters,
        _options: &Options,
    ) -> Result<Box<dyn OneHalfPlusFormFactors>, HeftError> {
        const KNOWN: [&str; 1] = ["Lambda_b->Lambda::DM2016"];
        match name {
            "Lambda_b->Lambda::DM2016" => Ok(Box::new(DM2016FormFactors::new(parameters)?)),
            _ => Err(no_such_form_factor(
                TransitionKind::OneHalfPlusToOneHalfPlus,
                name,
                &KNOWN,
            )),
        }
    }

    /// Creates a Vacuum -> PP form factor, e.g. `"pi->pi::KKRvD2024"`.
    pub fn vacuum_to_pp(
        name: &str,
        parameters: &Parameters,
        _options: &Options,
    ) -> Result<Box<dyn VacuumToPPFormFactors>, HeftError> {
        const KNOWN: [&str; 2] = ["pi->pi::EGJvD2020", "pi->pi::KKRvD2024"];
        match name {
            "pi->pi::EGJvD2020" => Ok(Box::new(PionVectorFF::egjvd2020(parameters)?)),
            "pi->pi::KKRvD2024" => Ok(Box::new(PionVectorFF::kkrvd2024(parameters)?)),
            _ => Err(no_such_form_factor(TransitionKind::VacuumToPP, name, &KNOWN)),
        }
    }

    /// Creates a mesonic non-local amplitude, e.g. `"B->K^*ccbar::GvDV2020"`.
    pub fn nonlocal(
        name: &str,
        parameters: &Parameters,
        _options: &Options,
    ) -> Result<Box<dyn NonlocalFormFactors>, HeftError> {
        const KNOWN: [&str; 4] = [
            "B->K^*ccbar::GvDV2020",
            "B->K^*ccbar::GRvDV2021",
            "B_s->phiccbar::GvDV2020",
            "B_s->phiccbar::GRvDV2021",
        ];
        match name {
            "B->K^*ccbar::GvDV2020" => Ok(Box::new(MesonicNonlocal::gvdv2020(
                &B_TO_KSTAR_CCBAR,
                parameters,
            )?)),
            "B->K^*ccbar::GRvDV2021" => Ok(Box::new(MesonicNonlocal::grvdv2021(
                &B_TO_KSTAR_CCBAR,
                parameters,
            )?)),
            "B_s->phiccbar::GvDV2020" => Ok(Box::new(MesonicNonlocal::gvdv2020(
                &BS_TO_PHI_CCBAR,
                parameters,
            )?)),
            "B_s->phiccbar::GRvDV2021" => Ok(Box::new(MesonicNonlocal::grvdv2021(
                &BS_TO_PHI_CCBAR,
                parameters,
            )?)),
            _ => Err(no_such_form_factor(TransitionKind::PToV, name, &KNOWN)),
        }
    }

    /// Creates a baryonic non-local amplitude, e.g. `"Lambda_b->Lambdaccbar::BRvD2021"`.
    pub fn baryonic_nonlocal(
        name: &str,
        parameters: &Parameters,
        _options: &Options,
    ) -> Result<Box<dyn BaryonicNonlocalFormFactors>, HeftError> {
        const KNOWN: [&str; 1] = ["Lambda_b->Lambdaccbar::BRvD2021"];
        match name {
            "Lambda_b->Lambdaccbar::BRvD2021" => {
                Ok(Box::new(BaryonicNonlocal::brvd2021(parameters)?))
            }
            _ => Err(no_such_form_factor(
                TransitionKind::OneHalfPlusToOneHalfPlus,
                name,
                &KNOWN,
            )),
        }
    }
}
