//! `modkit resolve <specifier>` – print the canonical identifier.

use anyhow::Result;
use modkit_core::modules::ModuleRegistry;

pub fn run_resolve(registry: &ModuleRegistry, specifier: &str) -> Result<()> {
    let id = registry.resolve(specifier)?;
    println!("{id}");
    Ok(())
}
