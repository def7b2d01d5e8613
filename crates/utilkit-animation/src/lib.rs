//! Sprite-frame animation for the utility kit
//!
//! - `ClipDefinition` / `ClipCatalog` - named frame sequences, validated on load
//! - `AnimationPlayer` - tick-driven playback with looping, ping-pong,
//!   reversal, start delay, frame triggers and completion notifications
//! - `loader` - `.clips.toml` catalog files
//! - `facing` - flip a sprite horizontally through its x scale

pub mod catalog;
pub mod clip;
pub mod facing;
pub mod loader;
pub mod player;

pub use catalog::ClipCatalog;
pub use clip::{ClipDefinition, ClipTiming, CompletionBehavior, FrameTrigger};
pub use loader::{load_catalog_from_file, load_catalog_from_str, save_catalog_to_string};
pub use player::{AnimationPlayer, PlaybackCommand, PlaybackState, PlayerState, TriggerEvent};
