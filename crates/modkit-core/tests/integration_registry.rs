//! Integration test: a multi-unit registration table driven end to end,
//! plus the URL-to-path mapping used to lay out a mirror directory.

use std::rc::Rc;

use modkit_core::config::{ModkitConfig, ModulesConfig};
use modkit_core::logger::LoggerRegistry;
use modkit_core::modules::{ModuleRegistry, ModuleSet};
use modkit_core::url_model::url_to_filename;
use serde_json::json;
use tempfile::tempdir;

fn demo_set() -> ModuleSet {
    let mut set = ModuleSet::new();
    set.register("main", |ctx| {
        let greeting = ctx.require("greeting")?;
        let text = greeting.borrow()["text"].clone();
        ctx.export("greeting", text)?;
        ctx.export("status", json!("ok"))?;
        Ok(())
    });
    set.register("greeting/index", |ctx| {
        ctx.export("text", json!("hello"))?;
        Ok(())
    });
    set
}

#[test]
fn top_level_load_collects_exports_across_units() {
    let registry = ModuleRegistry::new(demo_set());

    let exports = registry.load("main").unwrap();
    assert_eq!(exports.borrow()["greeting"], json!("hello"));
    assert_eq!(exports.borrow()["status"], json!("ok"));

    // The transitively required unit is cached under its canonical id, and
    // both spellings return the same handle.
    assert!(registry.is_cached("greeting/index"));
    let direct = registry.load("greeting/index").unwrap();
    let via_fallback = registry.load("greeting").unwrap();
    assert!(Rc::ptr_eq(&direct, &via_fallback));
}

#[test]
fn registries_are_independent() {
    let first = ModuleRegistry::new(demo_set());
    let second = ModuleRegistry::new(demo_set());

    first.load("main").unwrap();
    assert!(first.is_cached("main"));
    assert!(!second.is_cached("main"));
}

#[test]
fn config_drives_logger_name_and_resolution() {
    let cfg = ModkitConfig::default();
    let mut loggers = LoggerRegistry::new(cfg.default_logger_name.clone());
    assert_eq!(loggers.default_logger().name(), "DEFAULT");

    let strict = ModulesConfig {
        index_fallback: false,
    };
    let registry = ModuleRegistry::with_config(demo_set(), &strict);
    assert!(registry.load("greeting").is_err());
    assert!(registry.load("greeting/index").is_ok());
}

#[test]
fn mapped_urls_lay_out_a_mirror_directory() {
    let mirror = tempdir().unwrap();

    for url in [
        "http://example.com/",
        "http://example.com/some/page",
        "http://example.com/index.htm",
    ] {
        let rel = url_to_filename(url).unwrap();
        let path = mirror.path().join(&rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, b"<html></html>").unwrap();
    }

    assert!(mirror.path().join("example.com.html").exists());
    assert!(mirror.path().join("example.com/some/page.html").exists());
    assert!(mirror.path().join("example.com/index.htm").exists());
}
