//! Constants command - generates a Rust module of clip names and indices
//!
//! Lets game code refer to `clips::WALK_INDEX` instead of repeating string
//! lookups at runtime.

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;
use utilkit_animation::{load_catalog_from_file, ClipCatalog};

const DIGIT_PREFIX: &str = "K_";

/// Turn a clip name into an UPPER_SNAKE_CASE identifier.
pub fn constant_name(label: &str) -> String {
    let mut out = String::new();
    let mut prev_lower = false;

    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            if ch.is_ascii_uppercase() && prev_lower {
                out.push('_');
            }
            out.push(ch.to_ascii_uppercase());
            prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        } else {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            prev_lower = false;
        }
    }

    let out = out.trim_end_matches('_').to_string();
    if out.is_empty() {
        return format!("{}EMPTY", DIGIT_PREFIX);
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        format!("{}{}", DIGIT_PREFIX, out)
    } else {
        out
    }
}

/// Render the generated module source.
///
/// Fails if two clip names collapse to the same identifier.
pub fn generate<F>(catalog: &ClipCatalog<F>, source: &str) -> Result<String> {
    let mut taken: HashMap<String, &str> = HashMap::new();
    for clip in catalog.clips() {
        let name = constant_name(&clip.name);
        if let Some(previous) = taken.insert(name.clone(), &clip.name) {
            bail!(
                "Clips '{}' and '{}' both map to constant {}",
                previous,
                clip.name,
                name
            );
        }
    }

    let mut output = String::new();
    writeln!(output, "// This file is auto-generated from {}. Do not modify.", source)?;
    writeln!(output)?;

    for (index, clip) in catalog.clips().iter().enumerate() {
        let name = constant_name(&clip.name);
        writeln!(output, "pub const {}: &str = {:?};", name, clip.name)?;
        writeln!(output, "pub const {}_INDEX: usize = {};", name, index)?;
    }

    writeln!(output)?;
    writeln!(output, "pub const TOTAL_CLIPS: usize = {};", catalog.len())?;
    Ok(output)
}

pub fn run(catalog_path: &str, output: Option<&str>) -> Result<()> {
    let catalog = load_catalog_from_file(Path::new(catalog_path))
        .with_context(|| format!("Failed to load clip catalog {}", catalog_path))?;
    let source = generate(&catalog, catalog_path)?;

    match output {
        Some(path) => {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, source).with_context(|| format!("Failed to write {}", path))?;
            println!("Constants for {} clip(s) written to {}", catalog.len(), path);
        }
        None => print!("{}", source),
    }

    Ok(())
}
