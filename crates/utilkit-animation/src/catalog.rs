//! Validated, read-only collection of clips addressed by index or name

use crate::clip::ClipDefinition;
use std::collections::HashSet;
use utilkit_core::{KitError, Result};

/// The clips one player can choose from.
///
/// Clips are validated when the catalog is built, so playback never has to
/// deal with empty frame lists or non-positive frame rates.
#[derive(Debug, Clone)]
pub struct ClipCatalog<F> {
    clips: Vec<ClipDefinition<F>>,
    autoplay: Option<usize>,
}

impl<F> ClipCatalog<F> {
    /// Build a catalog, rejecting malformed clips and duplicate names.
    pub fn new(mut clips: Vec<ClipDefinition<F>>) -> Result<Self> {
        // fields may have been edited after an earlier timing() read
        clips.iter_mut().for_each(ClipDefinition::invalidate_timing);

        let mut seen = HashSet::new();
        for clip in &clips {
            if let Some(reason) = clip.validation_error() {
                return Err(KitError::InvalidClip {
                    clip: clip.name.clone(),
                    reason,
                });
            }
            if !seen.insert(clip.name.as_str()) {
                return Err(KitError::InvalidClip {
                    clip: clip.name.clone(),
                    reason: "duplicate clip name".into(),
                });
            }
        }
        Ok(Self {
            clips,
            autoplay: None,
        })
    }

    /// Name the clip that [`AnimationPlayer::enable`](crate::AnimationPlayer::enable) starts.
    pub fn with_autoplay(mut self, name: &str) -> Result<Self> {
        let index = self
            .position(name)
            .ok_or_else(|| KitError::InvalidClipReference(name.to_string()))?;
        self.autoplay = Some(index);
        Ok(self)
    }

    pub fn autoplay(&self) -> Option<usize> {
        self.autoplay
    }

    /// Index of the clip called `name`.
    ///
    /// A missing clip is logged but not fatal; callers decide what to do
    /// with `None`. Cache the index to avoid repeated string lookups.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let index = self.position(name);
        if index.is_none() {
            log::error!("{}", KitError::ClipNotFound(name.to_string()));
        }
        index
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.clips.iter().position(|c| c.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&ClipDefinition<F>> {
        self.clips.get(index)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&ClipDefinition<F>> {
        self.position(name).map(|i| &self.clips[i])
    }

    pub fn clips(&self) -> &[ClipDefinition<F>] {
        &self.clips
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

impl<F> Default for ClipCatalog<F> {
    fn default() -> Self {
        Self {
            clips: Vec::new(),
            autoplay: None,
        }
    }
}
