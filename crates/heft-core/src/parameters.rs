//! Parameter registry with stable identifiers and change tracking.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::errors::{ErrorInfo, HeftError};

fn parameter_error(code: &str, message: impl Into<String>) -> HeftError {
    HeftError::Parameter(ErrorInfo::new(code, message.into()))
}

/// Identifier for a parameter within a [`Parameters`] registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParameterId(u64);

impl ParameterId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Descriptor for a single named real-valued parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterEntry {
    /// Qualified name, `sector::symbol` or `sector::symbol@suffix`.
    pub name: String,
    /// LaTeX label for display purposes.
    pub latex: String,
    /// Current value.
    pub value: f64,
    /// Default value the parameter was declared with.
    pub default: f64,
    /// Lower end of the allowed range.
    pub min: f64,
    /// Upper end of the allowed range.
    pub max: f64,
}

#[derive(Debug, Default)]
struct ParameterStore {
    index: IndexMap<String, usize>,
    entries: Vec<ParameterEntry>,
    generations: Vec<u64>,
}

/// Insertion-ordered registry of named real parameters.
///
/// Cloning a `Parameters` handle shares the underlying storage, so every
/// observable constructed from the same handle sees parameter mutations on
/// its next evaluation. An independent copy with the same values is obtained
/// through [`Parameters::clone_values`].
#[derive(Debug, Clone, Default)]
pub struct Parameters {
    store: Rc<RefCell<ParameterStore>>,
}

impl Parameters {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry populated with the built-in default table.
    pub fn defaults() -> Self {
        let parameters = Self::new();
        for (name, latex, value, min, max) in defaults::TABLE {
            parameters.declare_full(name, latex, *value, *min, *max);
        }
        parameters
    }

    /// Declares a parameter with full metadata, returning its identifier.
    ///
    /// Re-declaring an existing name leaves the stored value untouched.
    pub fn declare_full(
        &self,
        name: &str,
        latex: &str,
        value: f64,
        min: f64,
        max: f64,
    ) -> ParameterId {
        let mut store = self.store.borrow_mut();
        if let Some(&slot) = store.index.get(name) {
            return ParameterId::from_raw(slot as u64);
        }
        let slot = store.entries.len();
        store.entries.push(ParameterEntry {
            name: name.to_string(),
            latex: latex.to_string(),
            value,
            default: value,
            min,
            max,
        });
        store.generations.push(0);
        store.index.insert(name.to_string(), slot);
        ParameterId::from_raw(slot as u64)
    }

    /// Declares a parameter with an unconstrained range and no label.
    pub fn declare(&self, name: &str, value: f64) -> ParameterId {
        self.declare_full(name, "", value, f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Looks up a parameter identifier by qualified name.
    pub fn lookup(&self, name: &str) -> Result<ParameterId, HeftError> {
        let store = self.store.borrow();
        store
            .index
            .get(name)
            .map(|&slot| ParameterId::from_raw(slot as u64))
            .ok_or_else(|| {
                parameter_error("unknown-parameter", format!("unknown parameter '{name}'"))
            })
    }

    /// Returns whether the registry contains the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.store.borrow().index.contains_key(name)
    }

    /// Returns the current value of the identified parameter.
    pub fn value(&self, id: ParameterId) -> f64 {
        self.store.borrow().entries[id.as_raw() as usize].value
    }

    /// Returns the current value of a parameter by name.
    pub fn value_of(&self, name: &str) -> Result<f64, HeftError> {
        let id = self.lookup(name)?;
        Ok(self.value(id))
    }

    /// Sets the value of the identified parameter and bumps its generation.
    pub fn set_value(&self, id: ParameterId, value: f64) {
        let mut store = self.store.borrow_mut();
        let slot = id.as_raw() as usize;
        store.entries[slot].value = value;
        store.generations[slot] += 1;
    }

    /// Sets the value of a parameter by name.
    pub fn set(&self, name: &str, value: f64) -> Result<(), HeftError> {
        let id = self.lookup(name)?;
        self.set_value(id, value);
        Ok(())
    }

    /// Returns the mutation generation of the identified parameter.
    ///
    /// The generation increments on every `set`, which lets cached
    /// observables detect staleness without subscribing to callbacks.
    pub fn generation(&self, id: ParameterId) -> u64 {
        self.store.borrow().generations[id.as_raw() as usize]
    }

    /// Returns a copy of the descriptor for the identified parameter.
    pub fn entry(&self, id: ParameterId) -> ParameterEntry {
        self.store.borrow().entries[id.as_raw() as usize].clone()
    }

    /// Returns the number of declared parameters.
    pub fn len(&self) -> usize {
        self.store.borrow().entries.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the declared names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.store.borrow().index.keys().cloned().collect()
    }

    /// Creates an independent registry holding copies of all current values.
    pub fn clone_values(&self) -> Parameters {
        let other = Parameters::new();
        {
            let store = self.store.borrow();
            let mut target = other.store.borrow_mut();
            target.entries = store.entries.clone();
            target.generations = vec![0; store.entries.len()];
            target.index = store.index.clone();
        }
        other
    }

    /// Returns whether two handles share the same underlying storage.
    pub fn shares_storage_with(&self, other: &Parameters) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

/// A parameter bound for repeated reads by an observable.
#[derive(Debug, Clone)]
pub struct UsedParameter {
    parameters: Parameters,
    id: ParameterId,
}

impl UsedParameter {
    /// Returns the bound identifier.
    pub fn id(&self) -> ParameterId {
        self.id
    }

    /// Reads the current value.
    pub fn value(&self) -> f64 {
        self.parameters.value(self.id)
    }

    /// Returns the mutation generation of the bound parameter.
    pub fn generation(&self) -> u64 {
        self.parameters.generation(self.id)
    }
}

/// Records which parameters a component reads.
///
/// Components bind their inputs through [`ParameterUser::bind`]; the
/// accumulated identifier set forms the component's dependence set used for
/// cache invalidation.
#[derive(Debug, Default)]
pub struct ParameterUser {
    ids: RefCell<BTreeSet<u64>>,
}

impl ParameterUser {
    /// Creates an empty usage record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a parameter by name, registering it in the dependence set.
    pub fn bind(&self, parameters: &Parameters, name: &str) -> Result<UsedParameter, HeftError> {
        let id = parameters.lookup(name)?;
        self.ids.borrow_mut().insert(id.as_raw());
        Ok(UsedParameter {
            parameters: parameters.clone(),
            id,
        })
    }

    /// Binds a parameter, declaring it with the given default if absent.
    pub fn bind_or_declare(&self, parameters: &Parameters, name: &str, default: f64) -> UsedParameter {
        let id = match parameters.lookup(name) {
            Ok(id) => id,
            Err(_) => parameters.declare(name, default),
        };
        self.ids.borrow_mut().insert(id.as_raw());
        UsedParameter {
            parameters: parameters.clone(),
            id,
        }
    }

    /// Merges another usage record into this one.
    pub fn absorb(&self, other: &ParameterUser) {
        let other_ids = other.ids.borrow();
        self.ids.borrow_mut().extend(other_ids.iter().copied());
    }

    /// Removes an identifier from the dependence set.
    pub fn drop_id(&self, id: ParameterId) {
        self.ids.borrow_mut().remove(&id.as_raw());
    }

    /// Returns the accumulated identifiers in ascending order.
    pub fn used_ids(&self) -> Vec<ParameterId> {
        self.ids
            .borrow()
            .iter()
            .map(|&raw| ParameterId::from_raw(raw))
            .collect()
    }
}
