//! Error kinds for the module registry.

use thiserror::Error;

use super::ModuleId;

/// Failure modes of the module registry. Both kinds are fatal to the
/// requesting `load`/`resolve` call and propagate unmodified; the registry
/// performs no retry and no cache cleanup.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// The specifier does not map to any registered unit.
    #[error("cannot resolve module specifier '{specifier}'")]
    Resolution { specifier: String },

    /// A unit's init function failed while executing. The cache entry keeps
    /// whatever partial exports existed at failure time.
    #[error("failed to load module '{id}'")]
    Load {
        id: ModuleId,
        #[source]
        source: anyhow::Error,
    },
}
