//! Assemble a GIF file and print the result.

use std::path::PathBuf;

use anyhow::Context;
use gifmake_animation_core::AssemblyOptions;
use gifmake_gif_source::animation_from_gif_path;

pub fn run(path: PathBuf, json: bool, options: &AssemblyOptions) -> anyhow::Result<()> {
    let assembly = animation_from_gif_path(&path, options)
        .with_context(|| format!("Failed to assemble {}", path.display()))?;

    if assembly.sequence.is_empty() {
        tracing::warn!(path = %path.display(), "GIF has no usable frames");
    }

    super::print_summary(&assembly.summary, json)
}
