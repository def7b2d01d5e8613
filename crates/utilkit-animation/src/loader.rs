//! TOML-based clip catalog loading

use crate::catalog::ClipCatalog;
use crate::clip::ClipDefinition;
use serde::{Deserialize, Serialize};
use std::path::Path;
use utilkit_core::{KitError, Result};

/// On-disk shape of a `.clips.toml` file
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    autoplay: Option<String>,
    #[serde(default)]
    clips: Vec<ClipDefinition<String>>,
}

/// Load a clip catalog from a `.clips.toml` file.
///
/// Frame handles are the asset names listed in `frames`:
/// ```toml
/// autoplay = "walk"
///
/// [[clips]]
/// name = "walk"
/// fps = 4.0
/// looping = true
/// frames = ["walk_0", "walk_1", "walk_2", "walk_3"]
///
/// [[clips.triggers]]
/// frame = 2
/// event = "footstep"
/// ```
pub fn load_catalog_from_file(path: &Path) -> Result<ClipCatalog<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        std::io::Error::new(e.kind(), format!("Failed to read {}: {}", path.display(), e))
    })?;
    let catalog = load_catalog_from_str(&content).map_err(|e| match e {
        KitError::TomlParseError(msg) => {
            KitError::TomlParseError(format!("Failed to parse {}: {}", path.display(), msg))
        }
        other => other,
    })?;
    log::info!(
        "loaded {} clip(s) from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Parse and validate a clip catalog from a TOML string.
pub fn load_catalog_from_str(content: &str) -> Result<ClipCatalog<String>> {
    let file: CatalogFile = toml::from_str(content)?;

    let catalog = ClipCatalog::new(file.clips)?;
    match file.autoplay {
        Some(name) => catalog.with_autoplay(&name),
        None => Ok(catalog),
    }
}

/// Render a catalog back to TOML.
pub fn save_catalog_to_string(catalog: &ClipCatalog<String>) -> Result<String> {
    let file = CatalogFile {
        autoplay: catalog
            .autoplay()
            .and_then(|i| catalog.get(i))
            .map(|clip| clip.name.clone()),
        clips: catalog.clips().to_vec(),
    };
    Ok(toml::to_string_pretty(&file)?)
}
