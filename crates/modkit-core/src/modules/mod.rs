//! Module registry: explicit registration table, resolver, cache.
//!
//! The registry replaces runtime code loading with units registered
//! explicitly at startup. It keeps the classic loader contract otherwise:
//! specifier resolution with an index fallback, at most one cache entry per
//! resolved identifier, cache registration before execution so circular
//! requires terminate, and unmodified error propagation to the requesting
//! caller.

mod error;
mod registry;
mod resolver;
mod set;

pub use error::ModuleError;
pub use registry::{Exports, ModuleCtx, ModuleRegistry};
pub use set::{InitFn, ModuleId, ModuleSet};
