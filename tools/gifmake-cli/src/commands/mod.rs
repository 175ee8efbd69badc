pub mod assemble;
pub mod asset;
pub mod config;
pub mod info;

use gifmake_animation_core::AnimationSummary;

/// Print an animation summary as text, or as pretty JSON.
pub(crate) fn print_summary(summary: &AnimationSummary, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    println!("Animation:");
    println!(
        "  Tick unit: {} ms ({:.2} fps)",
        summary.tick_unit_ms,
        summary.frames_per_second()
    );
    println!(
        "  Frames: {} kept of {}, {} after expansion",
        summary.frame_indices.len(),
        summary.source_frame_count,
        summary.sequence_length
    );
    println!(
        "  Duration: {} ms ({:.3}s)",
        summary.total_duration_ms, summary.duration_secs
    );
    println!();

    println!("Expansion:");
    for ((index, delay), count) in summary
        .frame_indices
        .iter()
        .zip(&summary.delays_ms)
        .zip(&summary.expansion_counts)
    {
        println!("  #{index}: {delay} ms -> x{count}");
    }

    if !summary.skipped_frames.is_empty() {
        println!();
        println!("Skipped (undecodable): {:?}", summary.skipped_frames);
    }

    Ok(())
}
