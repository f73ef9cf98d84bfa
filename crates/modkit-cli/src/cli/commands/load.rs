//! `modkit load <specifier>` – run one registered unit and show its exports.

use anyhow::Result;
use modkit_core::logger::LoggerRegistry;
use modkit_core::modules::ModuleRegistry;

pub fn run_load(
    registry: &ModuleRegistry,
    loggers: &mut LoggerRegistry,
    specifier: &str,
) -> Result<()> {
    let id = registry.resolve(specifier)?;
    let exports = registry.load(specifier)?;
    loggers.default_logger().log(&format!("loaded {id}"));
    println!("{}", serde_json::to_string_pretty(&*exports.borrow())?);
    Ok(())
}
