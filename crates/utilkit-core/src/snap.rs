//! Grid snapping for a selection of transforms
//!
//! `AutoSnap` is owned by the host and ticked from its update loop while
//! enabled. It only rewrites the selection when the lead transform has moved
//! or rotated since the last update, so hand-placed values are never fought
//! over frame after frame.

use crate::math::snap_and_round;
use crate::types::{Transform, Vec3};
use serde::{Deserialize, Serialize};

/// User-facing snap options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    pub snap_position: bool,
    pub snap_rotation: bool,
    /// Grid size for positions
    pub snap_value: f32,
    /// Added to every snapped position component
    pub snap_offset: f32,
    /// Step in degrees for rotations
    pub rotation_snap_value: f32,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            snap_position: true,
            snap_rotation: true,
            snap_value: 1.0,
            snap_offset: 0.0,
            rotation_snap_value: 15.0,
        }
    }
}

impl SnapSettings {
    pub fn snap_position_of(&self, position: Vec3) -> Vec3 {
        position.map(|v| snap_and_round(v, self.snap_value) + self.snap_offset)
    }

    pub fn snap_rotation_of(&self, rotation: Vec3) -> Vec3 {
        rotation.map(|v| snap_and_round(v, self.rotation_snap_value))
    }
}

/// Snaps the host's current selection while enabled.
#[derive(Debug, Clone, Default)]
pub struct AutoSnap {
    pub settings: SnapSettings,
    enabled: bool,
    prev_position: Vec3,
    prev_rotation: Vec3,
}

impl AutoSnap {
    pub fn new(settings: SnapSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Replace the settings. Turning both toggles off disables the snapper.
    pub fn set_settings(&mut self, settings: SnapSettings) {
        self.settings = settings;
        if !settings.snap_position && !settings.snap_rotation {
            self.disable();
        }
    }

    /// Snap `selection` if its lead transform changed since the last call.
    ///
    /// `editing` is false while the host is running gameplay, in which case
    /// nothing is touched. Returns true if any transform was rewritten.
    pub fn update(&mut self, selection: &mut [Transform], editing: bool) -> bool {
        if !self.enabled || !editing {
            return false;
        }
        let Some(lead) = selection.first().copied() else {
            return false;
        };

        let mut snapped = false;

        if self.settings.snap_position && lead.position != self.prev_position {
            for transform in selection.iter_mut() {
                transform.position = self.settings.snap_position_of(transform.position);
            }
            self.prev_position = selection[0].position;
            snapped = true;
        }

        if self.settings.snap_rotation && lead.rotation != self.prev_rotation {
            for transform in selection.iter_mut() {
                transform.rotation = self.settings.snap_rotation_of(transform.rotation);
            }
            self.prev_rotation = selection[0].rotation;
            snapped = true;
        }

        snapped
    }
}
