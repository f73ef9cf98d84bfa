//! `modkit map-url <url>` – print the mirror path for a URL.

use std::path::Path;

use anyhow::Result;
use modkit_core::url_model::url_to_filename;

pub fn run_map_url(url: &str, mirror_dir: Option<&Path>) -> Result<()> {
    let relative = url_to_filename(url)?;
    match mirror_dir {
        Some(base) => println!("{}", base.join(&relative).display()),
        None => println!("{relative}"),
    }
    Ok(())
}
