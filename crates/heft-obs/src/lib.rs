#![deny(missing_docs)]
#![doc = "Observable registry and dispatch: qualified names, factory entries, adapters, and cached evaluation."]

pub mod adapter;
pub mod cache;
pub mod observable;
pub mod registry;

pub use cache::{CachedObservable, IntermediateResult};
pub use observable::{Evaluator, Observable};
pub use registry::{entries, make_observable, ObservableEntry};
