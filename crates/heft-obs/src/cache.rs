//! Cached observables with generation-based invalidation.

use std::cell::RefCell;

use heft_core::ParameterId;

use crate::observable::Observable;

/// Snapshot of an evaluation: the value plus the context it was valid for.
#[derive(Debug, Clone, PartialEq)]
pub struct IntermediateResult {
    generations: Vec<(ParameterId, u64)>,
    kinematics: Vec<(String, f64)>,
    value: f64,
}

impl IntermediateResult {
    /// The cached value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Observable wrapper that splits evaluation into `prepare` and
/// `evaluate_with`.
///
/// The intermediate result records the mutation generation of every
/// dependent parameter and the bound kinematic values; it is invalidated as
/// soon as any of them changes. Plain `evaluate` keeps an internal
/// intermediate and re-prepares on demand.
pub struct CachedObservable {
    inner: Observable,
    cache: RefCell<Option<IntermediateResult>>,
}

impl CachedObservable {
    /// Wraps an observable for cached evaluation.
    pub fn new(inner: Observable) -> Self {
        Self {
            inner,
            cache: RefCell::new(None),
        }
    }

    /// The wrapped observable.
    pub fn inner(&self) -> &Observable {
        &self.inner
    }

    fn snapshot(&self) -> (Vec<(ParameterId, u64)>, Vec<(String, f64)>) {
        let generations = self
            .inner
            .used_parameter_ids()
            .into_iter()
            .map(|id| (id, self.inner.parameters().generation(id)))
            .collect();
        (generations, self.inner.kinematics().values())
    }

    /// Whether an intermediate result is still valid in the current context.
    pub fn is_valid(&self, intermediate: &IntermediateResult) -> bool {
        let (generations, kinematics) = self.snapshot();
        intermediate.generations == generations && intermediate.kinematics == kinematics
    }

    /// Runs the full evaluation and snapshots the context.
    pub fn prepare(&self) -> IntermediateResult {
        let value = self.inner.evaluate();
        let (generations, kinematics) = self.snapshot();
        IntermediateResult {
            generations,
            kinematics,
            value,
        }
    }

    /// Returns the intermediate's value if still valid, re-preparing otherwise.
    pub fn evaluate_with(&self, intermediate: &IntermediateResult) -> f64 {
        if self.is_valid(intermediate) {
            intermediate.value
        } else {
            self.prepare().value
        }
    }

    /// Cached evaluation with automatic invalidation.
    pub fn evaluate(&self) -> f64 {
        let mut cache = self.cache.borrow_mut();
        if let Some(intermediate) = cache.as_ref() {
            if self.is_valid(intermediate) {
                return intermediate.value;
            }
        }
        let fresh = self.prepare();
        let value = fresh.value;
        *cache = Some(fresh);
        value
    }

    /// Whether this observable may reuse another's intermediate results.
    ///
    /// Reuse requires the same underlying parameter storage, identical
    /// kinematic values, and identical options.
    pub fn shares_cache_with(&self, other: &CachedObservable) -> bool {
        self.inner
            .parameters()
            .shares_storage_with(other.inner.parameters())
            && self.inner.kinematics().values() == other.inner.kinematics().values()
            && self.inner.options() == other.inner.options()
            && self.inner.name() == other.inner.name()
    }
}
