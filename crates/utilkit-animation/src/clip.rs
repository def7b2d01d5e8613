//! Sprite clip data types

use serde::{Deserialize, Serialize};
use std::cell::OnceCell;

fn default_fps() -> f64 {
    5.0
}

/// What a non-looping clip does once its last iteration has elapsed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CompletionBehavior {
    /// Keep showing whatever frame was current when the clip finished
    #[default]
    RemainOnFinalFrame,
    /// Jump back to the first frame
    RevertToFirstFrame,
    /// Clear the frame (the frame setter receives `None`)
    HideFrame,
}

/// A named event fired when playback enters `frame`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameTrigger {
    pub frame: usize,
    pub event: String,
}

/// Durations derived from a clip's fps and frame count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipTiming {
    pub seconds_per_frame: f64,
    /// One pass over all frames
    pub iteration_duration: f64,
    /// Infinite for looping clips, two iterations for a single ping-pong
    pub total_duration: f64,
}

/// A named, ordered sequence of frames played back at a fixed rate.
///
/// `F` is whatever the host uses to refer to an image (an asset name, a
/// texture id...). The player never looks inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipDefinition<F> {
    pub name: String,
    #[serde(default = "default_fps")]
    pub fps: f64,
    pub frames: Vec<F>,
    #[serde(default)]
    pub looping: bool,
    #[serde(default)]
    pub ping_pong: bool,
    /// Seconds to wait after `play` before frames start advancing
    #[serde(default)]
    pub delay: f64,
    #[serde(default)]
    pub completion: CompletionBehavior,
    #[serde(default)]
    pub triggers: Vec<FrameTrigger>,
    #[serde(skip)]
    timing: OnceCell<ClipTiming>,
}

impl<F> ClipDefinition<F> {
    pub fn new(name: impl Into<String>, fps: f64, frames: Vec<F>) -> Self {
        Self {
            name: name.into(),
            fps,
            frames,
            looping: false,
            ping_pong: false,
            delay: 0.0,
            completion: CompletionBehavior::default(),
            triggers: Vec::new(),
            timing: OnceCell::new(),
        }
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self.timing.take();
        self
    }

    pub fn ping_pong(mut self, ping_pong: bool) -> Self {
        self.ping_pong = ping_pong;
        self.timing.take();
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_completion(mut self, completion: CompletionBehavior) -> Self {
        self.completion = completion;
        self
    }

    pub fn with_trigger(mut self, frame: usize, event: impl Into<String>) -> Self {
        self.triggers.push(FrameTrigger {
            frame,
            event: event.into(),
        });
        self
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Derived durations, computed on first access and cached.
    pub fn timing(&self) -> &ClipTiming {
        self.timing.get_or_init(|| {
            let seconds_per_frame = 1.0 / self.fps;
            let iteration_duration = seconds_per_frame * self.frames.len() as f64;
            let total_duration = if self.looping {
                f64::INFINITY
            } else if self.ping_pong {
                iteration_duration * 2.0
            } else {
                iteration_duration
            };
            ClipTiming {
                seconds_per_frame,
                iteration_duration,
                total_duration,
            }
        })
    }

    /// Drop the cached timing so the next read sees the current fields.
    pub(crate) fn invalidate_timing(&mut self) {
        self.timing.take();
    }

    /// Triggers registered at `frame`, in declaration order.
    pub fn triggers_at(&self, frame: usize) -> impl Iterator<Item = &FrameTrigger> {
        self.triggers.iter().filter(move |t| t.frame == frame)
    }

    /// Describe the first problem that would make this clip unplayable.
    pub(crate) fn validation_error(&self) -> Option<String> {
        if self.name.is_empty() {
            return Some("name must not be empty".into());
        }
        if self.frames.is_empty() {
            return Some("clip has no frames".into());
        }
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Some(format!("fps must be positive, got {}", self.fps));
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Some(format!("delay must be non-negative, got {}", self.delay));
        }
        if let Some(t) = self.triggers.iter().find(|t| t.frame >= self.frames.len()) {
            return Some(format!(
                "trigger '{}' references frame {} but the clip has {} frames",
                t.event,
                t.frame,
                self.frames.len()
            ));
        }
        None
    }
}
