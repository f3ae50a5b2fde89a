//! Kinematic variables with stable handles shared across an observable.

use std::cell::Cell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::errors::{ErrorInfo, HeftError};

fn kinematics_error(code: &str, message: impl Into<String>) -> HeftError {
    HeftError::Kinematics(ErrorInfo::new(code, message.into()))
}

/// Handle to a single kinematic variable.
///
/// The handle's identity is stable across one observable instance: the
/// observable dereferences the handle at evaluation time, so updating the
/// variable through [`Kinematics::set`] (or through any clone of the handle)
/// is visible on the next evaluation.
#[derive(Debug, Clone)]
pub struct KinematicVariable {
    name: Rc<str>,
    slot: Rc<Cell<f64>>,
}

impl KinematicVariable {
    /// Returns the variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads the current value.
    pub fn value(&self) -> f64 {
        self.slot.get()
    }

    /// Updates the value in place.
    pub fn set(&self, value: f64) {
        self.slot.set(value);
    }
}

/// Insertion-ordered collection of kinematic variables.
#[derive(Debug, Clone, Default)]
pub struct Kinematics {
    entries: IndexMap<String, KinematicVariable>,
}

impl Kinematics {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection from name/value pairs.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut kinematics = Self::new();
        for (name, value) in pairs {
            kinematics.declare(&name.into(), value);
        }
        kinematics
    }

    /// Declares a variable, returning its handle.
    ///
    /// Re-declaring an existing name returns the existing handle with its
    /// current value intact.
    pub fn declare(&mut self, name: &str, value: f64) -> KinematicVariable {
        if let Some(variable) = self.entries.get(name) {
            return variable.clone();
        }
        let variable = KinematicVariable {
            name: Rc::from(name),
            slot: Rc::new(Cell::new(value)),
        };
        self.entries.insert(name.to_string(), variable.clone());
        variable
    }

    /// Returns the handle for a declared variable.
    pub fn get(&self, name: &str) -> Result<KinematicVariable, HeftError> {
        self.entries.get(name).cloned().ok_or_else(|| {
            kinematics_error(
                "unknown-kinematic-variable",
                format!("unknown kinematic variable '{name}'"),
            )
        })
    }

    /// Sets the value of a declared variable.
    pub fn set(&self, name: &str, value: f64) -> Result<(), HeftError> {
        self.get(name)?.set(value);
        Ok(())
    }

    /// Reads the value of a declared variable.
    pub fn value_of(&self, name: &str) -> Result<f64, HeftError> {
        Ok(self.get(name)?.value())
    }

    /// Returns the declared names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Returns the current (name, value) pairs in insertion order.
    pub fn values(&self) -> Vec<(String, f64)> {
        self.entries
            .iter()
            .map(|(name, variable)| (name.clone(), variable.value()))
            .collect()
    }
}
