//! `modkit list` – list the registered unit identifiers.

use modkit_core::modules::ModuleRegistry;

pub fn run_list(registry: &ModuleRegistry) {
    for id in registry.ids() {
        println!("{id}");
    }
}
