//! Module registry: per-process cache plus loader over a registration table.
//!
//! Loading follows the classic require contract: resolve the specifier,
//! return the cached exports when present, otherwise register a fresh module
//! record *before* running the unit's init function so that cyclic requires
//! observe the in-progress exports instead of recursing.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::Value;

use crate::config::ModulesConfig;

use super::resolver::resolve_specifier;
use super::{ModuleError, ModuleId, ModuleSet};

/// Shared handle to a unit's exports value.
///
/// Starts as an empty JSON object and is mutated while the unit executes.
/// Cycle participants hold the same handle, so they see whatever had been
/// exported by the time they asked.
pub type Exports = Rc<RefCell<Value>>;

fn fresh_exports() -> Exports {
    Rc::new(RefCell::new(Value::Object(serde_json::Map::new())))
}

/// Mutable module record: the `module` binding of an executing unit.
#[derive(Debug)]
struct ModuleRecord {
    id: ModuleId,
    exports: Exports,
}

/// Registry owning the registration table and the per-process module cache.
///
/// Explicitly constructed by the entry point and passed down; independent
/// registries (and caches) coexist freely in tests. Cache entries live for
/// the registry's lifetime and are never invalidated.
#[derive(Debug)]
pub struct ModuleRegistry {
    set: ModuleSet,
    index_fallback: bool,
    cache: RefCell<BTreeMap<ModuleId, Rc<RefCell<ModuleRecord>>>>,
}

impl ModuleRegistry {
    pub fn new(set: ModuleSet) -> Self {
        Self {
            set,
            index_fallback: true,
            cache: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn with_config(set: ModuleSet, cfg: &ModulesConfig) -> Self {
        Self {
            set,
            index_fallback: cfg.index_fallback,
            cache: RefCell::new(BTreeMap::new()),
        }
    }

    /// Canonical identifier for a top-level specifier.
    pub fn resolve(&self, specifier: &str) -> Result<ModuleId, ModuleError> {
        resolve_specifier(&self.set, specifier, None, self.index_fallback)
    }

    /// Loads a top-level specifier and returns its exports.
    pub fn load(&self, specifier: &str) -> Result<Exports, ModuleError> {
        self.load_from(specifier, None)
    }

    /// Registered identifiers, for listing.
    pub fn ids(&self) -> Vec<ModuleId> {
        self.set.ids().map(str::to_string).collect()
    }

    /// Whether `id` has a cache entry (including one left by a failed load).
    pub fn is_cached(&self, id: &str) -> bool {
        self.cache.borrow().contains_key(id)
    }

    fn load_from(&self, specifier: &str, origin: Option<&str>) -> Result<Exports, ModuleError> {
        let id = resolve_specifier(&self.set, specifier, origin, self.index_fallback)?;

        {
            let cache = self.cache.borrow();
            if let Some(record) = cache.get(&id) {
                return Ok(record.borrow().exports.clone());
            }
        }

        let init = self.set.get(&id).ok_or_else(|| ModuleError::Resolution {
            specifier: specifier.to_string(),
        })?;

        tracing::debug!("loading module id={id}");

        // Cache before executing so re-entrant requires of `id` observe the
        // in-progress exports. A failed init leaves this entry (and its
        // partial exports) in place.
        let record = Rc::new(RefCell::new(ModuleRecord {
            id: id.clone(),
            exports: fresh_exports(),
        }));
        self.cache.borrow_mut().insert(id.clone(), record.clone());

        let mut ctx = ModuleCtx {
            registry: self,
            record: record.clone(),
        };
        init(&mut ctx).map_err(|source| ModuleError::Load {
            id: id.clone(),
            source,
        })?;

        let exports = record.borrow().exports.clone();
        Ok(exports)
    }
}

/// Execution scope of a unit: the `(module, exports, require)` triple.
pub struct ModuleCtx<'a> {
    registry: &'a ModuleRegistry,
    record: Rc<RefCell<ModuleRecord>>,
}

impl ModuleCtx<'_> {
    /// Canonical identifier of the executing unit.
    pub fn id(&self) -> ModuleId {
        self.record.borrow().id.clone()
    }

    /// Current exports handle.
    pub fn exports(&self) -> Exports {
        self.record.borrow().exports.clone()
    }

    /// Sets one key on the exports object.
    ///
    /// Fails when the exports value was replaced with a non-object via
    /// `set_exports`.
    pub fn export(&mut self, key: &str, value: Value) -> anyhow::Result<()> {
        let record = self.record.borrow();
        let mut exports = record.exports.borrow_mut();
        match exports.as_object_mut() {
            Some(map) => {
                map.insert(key.to_string(), value);
                Ok(())
            }
            None => anyhow::bail!("exports of '{}' is not an object", record.id),
        }
    }

    /// Replaces the exports value wholesale, like assigning `module.exports`.
    ///
    /// Units that grabbed the previous handle through a cyclic require keep
    /// observing the old value; later loads see the replacement.
    pub fn set_exports(&mut self, value: Value) {
        self.record.borrow_mut().exports = Rc::new(RefCell::new(value));
    }

    /// Loads another unit, resolving relative specifiers against this one.
    pub fn require(&self, specifier: &str) -> Result<Exports, ModuleError> {
        let origin = self.id();
        self.registry.load_from(specifier, Some(&origin))
    }
}
