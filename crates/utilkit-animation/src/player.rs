//! Tick-driven sprite clip playback
//!
//! The player owns a [`ClipCatalog`] and the playback state of at most one
//! active clip. The host calls [`AnimationPlayer::tick`] once per update with
//! the elapsed seconds; the player reports frame changes, frame triggers and
//! completion through callbacks registered up front.
//!
//! Callbacks run synchronously inside `tick`/`play`/`stop` and cannot borrow
//! the player. To change playback from a callback, send a [`PlaybackCommand`]
//! through [`AnimationPlayer::command_sender`]; queued commands are applied at
//! the start of the next tick.

use crate::catalog::ClipCatalog;
use crate::clip::{ClipDefinition, CompletionBehavior};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::collections::HashMap;
use utilkit_core::{KitError, Result};

/// Playback change requested from outside the current call stack
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackCommand {
    Play { clip: String, start_frame: usize },
    PlayIndex { index: usize, start_frame: usize },
    Pause,
    Resume,
    Reverse,
    Stop,
}

/// Coarse player state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Stopped,
    Delaying,
    Playing,
    Paused,
}

/// A named frame trigger that just fired
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerEvent<'a> {
    /// Catalog index of the clip
    pub clip: usize,
    pub frame: usize,
    pub event: &'a str,
}

/// Mutable playback position of the active clip
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackState {
    pub active_clip: Option<usize>,
    pub is_playing: bool,
    pub current_frame: usize,
    /// Seconds into the clip, within `[0, total_duration]`
    pub elapsed_total: f64,
    pub elapsed_delay: f64,
    pub delay_complete: bool,
    pub is_reversed: bool,
    /// Traversing a ping-pong clip backward this iteration
    pub is_ping_pong_return: bool,
    /// A non-looping clip ran to completion
    pub is_finished: bool,
}

type FrameSetter<F> = Box<dyn FnMut(Option<&F>)>;
type CompletedListener = Box<dyn FnMut(usize)>;
type TriggerListener = Box<dyn FnMut(&TriggerEvent<'_>)>;
type FrameListener = Box<dyn FnMut(usize)>;

struct Listeners<F> {
    frame_setter: Option<FrameSetter<F>>,
    completed: Option<CompletedListener>,
    triggers: Vec<TriggerListener>,
    frame_entered: HashMap<(usize, usize), Vec<FrameListener>>,
}

impl<F> Listeners<F> {
    fn new() -> Self {
        Self {
            frame_setter: None,
            completed: None,
            triggers: Vec::new(),
            frame_entered: HashMap::new(),
        }
    }

    fn set_frame(&mut self, frame: Option<&F>) {
        if let Some(setter) = self.frame_setter.as_mut() {
            setter(frame);
        }
    }

    fn completed(&mut self, clip: usize) {
        if let Some(listener) = self.completed.as_mut() {
            listener(clip);
        }
    }

    fn frame_entered(&mut self, clip_index: usize, clip: &ClipDefinition<F>, frame: usize) {
        for trigger in clip.triggers_at(frame) {
            let event = TriggerEvent {
                clip: clip_index,
                frame,
                event: &trigger.event,
            };
            for listener in &mut self.triggers {
                listener(&event);
            }
        }
        if let Some(listeners) = self.frame_entered.get_mut(&(clip_index, frame)) {
            for listener in listeners {
                listener(frame);
            }
        }
    }
}

/// Plays clips from a catalog, one at a time.
pub struct AnimationPlayer<F> {
    catalog: ClipCatalog<F>,
    state: PlaybackState,
    listeners: Listeners<F>,
    command_tx: Sender<PlaybackCommand>,
    command_rx: Receiver<PlaybackCommand>,
}

impl<F> AnimationPlayer<F> {
    pub fn new(catalog: ClipCatalog<F>) -> Self {
        let (command_tx, command_rx) = unbounded();
        Self {
            catalog,
            state: PlaybackState::default(),
            listeners: Listeners::new(),
            command_tx,
            command_rx,
        }
    }

    pub fn catalog(&self) -> &ClipCatalog<F> {
        &self.catalog
    }

    /// Raw playback state
    pub fn playback(&self) -> &PlaybackState {
        &self.state
    }

    pub fn state(&self) -> PlayerState {
        let Some(clip) = self.active_clip() else {
            return PlayerState::Stopped;
        };
        if self.state.is_finished {
            PlayerState::Stopped
        } else if !self.state.is_playing {
            PlayerState::Paused
        } else if !self.state.delay_complete && self.state.elapsed_delay < clip.delay {
            PlayerState::Delaying
        } else {
            PlayerState::Playing
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Index of the current frame, if a clip is active
    pub fn current_frame(&self) -> Option<usize> {
        self.state.active_clip.map(|_| self.state.current_frame)
    }

    pub fn current_frame_handle(&self) -> Option<&F> {
        self.active_clip()
            .and_then(|clip| clip.frames.get(self.state.current_frame))
    }

    pub fn active_clip_index(&self) -> Option<usize> {
        self.state.active_clip
    }

    pub fn active_clip(&self) -> Option<&ClipDefinition<F>> {
        self.state.active_clip.and_then(|i| self.catalog.get(i))
    }

    pub fn is_clip_active(&self, name: &str) -> bool {
        self.active_clip().is_some_and(|clip| clip.name == name)
    }

    /// Catalog index for `name`; see [`ClipCatalog::index_of`].
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.catalog.index_of(name)
    }

    /// Set the sink that displays frames. Receives `None` when nothing should show.
    pub fn on_frame_changed(&mut self, setter: impl FnMut(Option<&F>) + 'static) {
        self.listeners.frame_setter = Some(Box::new(setter));
    }

    /// Set the sink told (with the clip's catalog index) when a non-looping clip finishes.
    pub fn on_completed(&mut self, listener: impl FnMut(usize) + 'static) {
        self.listeners.completed = Some(Box::new(listener));
    }

    /// Listen for every named trigger declared in the catalog.
    pub fn on_trigger(&mut self, listener: impl FnMut(&TriggerEvent<'_>) + 'static) {
        self.listeners.triggers.push(Box::new(listener));
    }

    /// Listen for playback entering `frame` of the clip at `clip_index`.
    pub fn on_frame_entered(
        &mut self,
        clip_index: usize,
        frame: usize,
        listener: impl FnMut(usize) + 'static,
    ) {
        self.listeners
            .frame_entered
            .entry((clip_index, frame))
            .or_default()
            .push(Box::new(listener));
    }

    /// Queue for playback changes requested from inside callbacks.
    pub fn command_sender(&self) -> Sender<PlaybackCommand> {
        self.command_tx.clone()
    }

    /// Play the clip called `name` from `start_frame`.
    ///
    /// An unknown name is a caller error: nothing changes and
    /// [`KitError::InvalidClipReference`] is returned.
    pub fn play(&mut self, name: &str, start_frame: usize) -> Result<()> {
        let Some(index) = self.catalog.index_of(name) else {
            log::warn!("attempted to play clip '{}' which does not exist", name);
            return Err(KitError::InvalidClipReference(name.to_string()));
        };
        self.play_index(index, start_frame)
    }

    /// Play the clip at catalog `index` from `start_frame`.
    pub fn play_index(&mut self, index: usize, start_frame: usize) -> Result<()> {
        let clip = self
            .catalog
            .get(index)
            .ok_or_else(|| KitError::InvalidClipReference(format!("clip index {index}")))?;
        if start_frame >= clip.frame_count() {
            return Err(KitError::FrameOutOfRange {
                clip: clip.name.clone(),
                frame: start_frame,
                frame_count: clip.frame_count(),
            });
        }

        let timing = *clip.timing();
        self.state = PlaybackState {
            active_clip: Some(index),
            is_playing: true,
            current_frame: start_frame,
            elapsed_total: start_frame as f64 * timing.seconds_per_frame,
            ..PlaybackState::default()
        };
        log::debug!("playing clip '{}' from frame {}", clip.name, start_frame);

        self.listeners.set_frame(Some(&clip.frames[start_frame]));
        Ok(())
    }

    pub fn pause(&mut self) {
        self.state.is_playing = false;
    }

    /// Continue a paused clip. Finished clips must be played again instead.
    pub fn resume(&mut self) {
        if self.state.active_clip.is_some() && !self.state.is_finished {
            self.state.is_playing = true;
        }
    }

    /// Flip the playback direction.
    pub fn reverse(&mut self) {
        self.state.is_reversed = !self.state.is_reversed;
    }

    /// Clear the active clip and hide the frame. Stopping twice is a no-op.
    pub fn stop(&mut self) {
        if self.state.active_clip.is_none() {
            return;
        }
        self.state = PlaybackState::default();
        log::debug!("playback stopped");
        self.listeners.set_frame(None);
    }

    /// Start the catalog's autoplay clip, if it names one.
    pub fn enable(&mut self) -> Result<()> {
        match self.catalog.autoplay() {
            Some(index) => self.play_index(index, 0),
            None => Ok(()),
        }
    }

    /// Drop all playback state without touching the displayed frame.
    pub fn disable(&mut self) {
        self.state = PlaybackState::default();
        // anything queued belongs to the session being torn down
        self.command_rx.try_iter().for_each(drop);
    }

    fn apply_pending_commands(&mut self) {
        let pending: Vec<PlaybackCommand> = self.command_rx.try_iter().collect();
        for command in pending {
            let result = match command {
                PlaybackCommand::Play { clip, start_frame } => self.play(&clip, start_frame),
                PlaybackCommand::PlayIndex { index, start_frame } => {
                    self.play_index(index, start_frame)
                }
                PlaybackCommand::Pause => {
                    self.pause();
                    Ok(())
                }
                PlaybackCommand::Resume => {
                    self.resume();
                    Ok(())
                }
                PlaybackCommand::Reverse => {
                    self.reverse();
                    Ok(())
                }
                PlaybackCommand::Stop => {
                    self.stop();
                    Ok(())
                }
            };
            if let Err(e) = result {
                log::warn!("deferred playback command failed: {}", e);
            }
        }
    }

    /// Advance playback by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        self.apply_pending_commands();

        let Some(index) = self.state.active_clip else {
            return;
        };
        if !self.state.is_playing {
            return;
        }
        let Some(clip) = self.catalog.get(index) else {
            return;
        };
        let timing = *clip.timing();
        let state = &mut self.state;

        if !state.delay_complete && state.elapsed_delay < clip.delay {
            state.elapsed_delay += dt;
            if state.elapsed_delay >= clip.delay {
                state.delay_complete = true;
            }
            return;
        }

        if state.is_reversed {
            state.elapsed_total -= dt;
        } else {
            state.elapsed_total += dt;
        }
        state.elapsed_total = state.elapsed_total.clamp(0.0, timing.total_duration);

        let completed_iterations = (state.elapsed_total / timing.iteration_duration).floor() as u64;

        // a non-looping ping-pong gets exactly one forward and one backward pass
        state.is_ping_pong_return = false;
        if clip.ping_pong && (clip.looping || completed_iterations < 2) {
            state.is_ping_pong_return = completed_iterations % 2 == 1;
        }

        let mut phase = state.elapsed_total;
        if state.elapsed_total >= timing.iteration_duration {
            phase = state.elapsed_total % timing.iteration_duration;

            // a ping-pong turnaround also lands on phase 0 halfway through
            if !clip.looping && phase == 0.0 && state.elapsed_total >= timing.total_duration {
                state.is_playing = false;
                state.is_finished = true;
                log::debug!("clip '{}' completed", clip.name);
                self.listeners.completed(index);

                match clip.completion {
                    CompletionBehavior::RemainOnFinalFrame => return,
                    CompletionBehavior::RevertToFirstFrame => {}
                    CompletionBehavior::HideFrame => {
                        self.listeners.set_frame(None);
                        return;
                    }
                }
            }
        }

        if state.is_reversed && state.elapsed_total <= 0.0 {
            state.is_reversed = false;

            if clip.looping {
                state.elapsed_total = 0.0;
            } else {
                state.is_playing = false;
                state.is_finished = true;
                log::debug!("clip '{}' completed in reverse", clip.name);
                self.listeners.completed(index);
                return;
            }
        }

        if state.is_ping_pong_return {
            phase = timing.iteration_duration - phase;
        }

        let last_frame = clip.frame_count() - 1;
        let desired_frame =
            ((phase / timing.seconds_per_frame).floor() as usize).min(last_frame);

        if desired_frame != state.current_frame {
            state.current_frame = desired_frame;
            self.listeners.set_frame(Some(&clip.frames[desired_frame]));
            self.listeners.frame_entered(index, clip, desired_frame);

            // keep the turnaround frame from being shown for two frame durations
            if clip.ping_pong && (desired_frame == 0 || desired_frame == last_frame) {
                if state.is_reversed {
                    state.elapsed_total -= timing.seconds_per_frame;
                } else {
                    state.elapsed_total += timing.seconds_per_frame;
                }
                state.elapsed_total = state.elapsed_total.clamp(0.0, timing.total_duration);
            }
        }
    }
}
