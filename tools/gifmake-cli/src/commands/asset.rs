//! Named assets from an asset directory.

use std::path::PathBuf;

use anyhow::Context;
use gifmake_animation_core::AssemblyOptions;
use gifmake_gif_source::{animation_from_gif_name, AssetBundle};

pub fn run(
    name: String,
    dir: PathBuf,
    json: bool,
    options: &AssemblyOptions,
) -> anyhow::Result<()> {
    let bundle = AssetBundle::new(dir);
    let assembly = animation_from_gif_name(&bundle, &name, options)
        .with_context(|| format!("Failed to assemble asset '{name}'"))?;

    if !json {
        println!("Asset: {name} ({})", bundle.root().display());
    }
    super::print_summary(&assembly.summary, json)
}

pub fn list(dir: PathBuf) -> anyhow::Result<()> {
    let bundle = AssetBundle::new(dir);
    let names = bundle
        .names()
        .with_context(|| format!("Failed to read asset directory {}", bundle.root().display()))?;

    if names.is_empty() {
        println!("No GIF assets in {}", bundle.root().display());
    } else {
        for name in names {
            println!("{name}");
        }
    }

    Ok(())
}
