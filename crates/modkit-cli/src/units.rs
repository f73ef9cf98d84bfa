//! Built-in registration table for the CLI.
//!
//! These units are the table the `load`, `resolve`, and `list` commands
//! operate on. They are deliberately small: together they exercise exports,
//! requires with the index fallback, wholesale exports replacement, and the
//! circular-require contract.

use modkit_core::modules::ModuleSet;
use serde_json::json;

pub fn builtin_units() -> ModuleSet {
    let mut set = ModuleSet::new();

    set.register("main", |ctx| {
        let greeting = ctx.require("greeting")?;
        let text = greeting.borrow()["text"].clone();
        ctx.export("greeting", text)?;
        ctx.export("status", json!("ok"))?;
        Ok(())
    });

    set.register("greeting/index", |ctx| {
        ctx.export("text", json!("hello from the greeting unit"))?;
        Ok(())
    });

    // Replaces its exports object outright, like assigning `module.exports`.
    set.register("answer", |ctx| {
        ctx.set_exports(json!(42));
        Ok(())
    });

    // a and b require each other; b runs while a is mid-execution and
    // records which keys a had exported by then.
    set.register("cycle/a", |ctx| {
        ctx.export("started", json!(true))?;
        let b = ctx.require("./b")?;
        ctx.export("b_saw", b.borrow()["a_keys"].clone())?;
        ctx.export("finished", json!(true))?;
        Ok(())
    });

    set.register("cycle/b", |ctx| {
        let a = ctx.require("./a")?;
        let keys: Vec<String> = a
            .borrow()
            .as_object()
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default();
        ctx.export("a_keys", json!(keys))?;
        Ok(())
    });

    set
}
