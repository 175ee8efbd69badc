//! Show how a GIF's frames map onto the tick grid.

use std::path::PathBuf;

use anyhow::Context;
use gifmake_animation_core::extraction::resolve_delay;
use gifmake_animation_core::{assemble_with, AssemblyOptions, FrameSource};
use gifmake_gif_source::GifFrameSource;

pub fn run(path: PathBuf, options: &AssemblyOptions) -> anyhow::Result<()> {
    let source = GifFrameSource::from_path(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    println!("GIF: {}", path.display());
    println!("  Canvas: {}x{}", source.width(), source.height());
    println!("  Frames: {}", source.count());
    println!();

    println!("Frame delays:");
    for index in 0..source.count() {
        let meta = source.properties_at(index).unwrap_or_default();
        let effective = resolve_delay(source.properties_at(index), options);
        let status = if source.image_at(index).is_some() {
            ""
        } else {
            " (undecodable)"
        };
        println!(
            "  #{index}: declared {} / standard {} -> {:.3}s{status}",
            format_secs(meta.unclamped_delay_secs),
            format_secs(meta.standard_delay_secs),
            effective
        );
    }
    println!();

    let assembly = assemble_with(&source, options);
    super::print_summary(&assembly.summary, false)
}

fn format_secs(secs: Option<f64>) -> String {
    match secs {
        Some(s) => format!("{s:.3}s"),
        None => "-".to_string(),
    }
}
