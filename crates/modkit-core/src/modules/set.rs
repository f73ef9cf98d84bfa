//! The registration table: named units registered at startup.

use std::collections::BTreeMap;
use std::fmt;

use super::ModuleCtx;

/// Canonical module identifier (normalized `/`-separated path).
pub type ModuleId = String;

/// Init function of a registered unit. Runs at most once per registry,
/// inside a `ModuleCtx` carrying the module record and a require binding.
pub type InitFn = Box<dyn Fn(&mut ModuleCtx<'_>) -> anyhow::Result<()>>;

/// Table of registered units, keyed by identifier.
///
/// Registration replaces runtime code loading: every unit the process can
/// load is declared here, explicitly, before the registry is built.
#[derive(Default)]
pub struct ModuleSet {
    units: BTreeMap<ModuleId, InitFn>,
}

impl ModuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `init` under `id`. A second registration under the same
    /// identifier replaces the first.
    pub fn register<F>(&mut self, id: impl Into<ModuleId>, init: F)
    where
        F: Fn(&mut ModuleCtx<'_>) -> anyhow::Result<()> + 'static,
    {
        self.units.insert(id.into(), Box::new(init));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.units.contains_key(id)
    }

    pub(super) fn get(&self, id: &str) -> Option<&InitFn> {
        self.units.get(id)
    }

    /// Registered identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl fmt::Debug for ModuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleSet")
            .field("units", &self.units.keys().collect::<Vec<_>>())
            .finish()
    }
}
