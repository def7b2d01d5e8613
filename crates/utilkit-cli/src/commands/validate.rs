//! Catalog validation command

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;
use utilkit_animation::{load_catalog_from_file, ClipCatalog};

/// Summarize each clip's timing, flags and triggers.
pub fn report<F>(catalog: &ClipCatalog<F>, source: &str) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}: {} clip(s)", source, catalog.len())?;

    for (index, clip) in catalog.clips().iter().enumerate() {
        let timing = clip.timing();
        let total = if timing.total_duration.is_infinite() {
            "loops".to_string()
        } else {
            format!("{:.3}s", timing.total_duration)
        };
        let mut flags = Vec::new();
        if clip.ping_pong {
            flags.push("ping-pong");
        }
        if clip.delay > 0.0 {
            flags.push("delayed");
        }
        if catalog.autoplay() == Some(index) {
            flags.push("autoplay");
        }

        writeln!(
            out,
            "  [{}] {} - {} frame(s) @ {} fps, iteration {:.3}s, total {}{}",
            index,
            clip.name,
            clip.frame_count(),
            clip.fps,
            timing.iteration_duration,
            total,
            if flags.is_empty() {
                String::new()
            } else {
                format!(" ({})", flags.join(", "))
            }
        )?;
        for trigger in &clip.triggers {
            writeln!(out, "      frame {} -> {}", trigger.frame, trigger.event)?;
        }
    }

    Ok(out)
}

pub fn run(catalog_path: &str) -> Result<()> {
    let catalog = load_catalog_from_file(Path::new(catalog_path))
        .with_context(|| format!("Invalid clip catalog: {}", catalog_path))?;
    print!("{}", report(&catalog, catalog_path)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use utilkit_animation::load_catalog_from_str;

    #[test]
    fn report_lists_timings_flags_and_triggers() {
        let catalog = load_catalog_from_str(
            r#"
autoplay = "idle"

[[clips]]
name = "idle"
fps = 2.0
looping = true
ping_pong = true
frames = ["a", "b"]

[[clips]]
name = "hit"
fps = 4.0
delay = 0.5
frames = ["c", "d"]

[[clips.triggers]]
frame = 1
event = "impact"
"#,
        )
        .unwrap();

        let text = report(&catalog, "hero.clips.toml").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "hero.clips.toml: 2 clip(s)",
                "  [0] idle - 2 frame(s) @ 2 fps, iteration 1.000s, total loops (ping-pong, autoplay)",
                "  [1] hit - 2 frame(s) @ 4 fps, iteration 0.500s, total 0.500s (delayed)",
                "      frame 1 -> impact",
            ]
        );
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let path = std::env::temp_dir().join("utilkit_validate_missing.clips.toml");
        assert!(run(&path.display().to_string()).is_err());
    }
}
