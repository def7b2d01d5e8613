//! Simulate command - ticks a player headlessly and prints what a host would see

use anyhow::{Context, Result};
use serde::Serialize;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use utilkit_animation::{load_catalog_from_file, AnimationPlayer};

pub struct SimulateArgs {
    pub catalog: String,
    pub clip: String,
    pub dt: f64,
    pub ticks: usize,
    pub start_frame: usize,
    pub format: String,
}

/// One observable effect during the simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineEntry {
    Frame {
        tick: usize,
        time: f64,
        frame: Option<String>,
    },
    Trigger {
        tick: usize,
        time: f64,
        frame: usize,
        event: String,
    },
    Completed {
        tick: usize,
        time: f64,
        clip: usize,
    },
}

#[derive(Default)]
struct Clock {
    tick: usize,
    time: f64,
}

/// Run the simulation and collect the timeline.
pub fn simulate(args: &SimulateArgs) -> Result<Vec<TimelineEntry>> {
    if !(args.dt.is_finite() && args.dt > 0.0) {
        anyhow::bail!("--dt must be a positive number of seconds, got {}", args.dt);
    }

    let catalog = load_catalog_from_file(Path::new(&args.catalog))
        .with_context(|| format!("Failed to load clip catalog {}", args.catalog))?;
    let mut player = AnimationPlayer::new(catalog);

    let clock = Rc::new(RefCell::new(Clock::default()));
    let timeline: Rc<RefCell<Vec<TimelineEntry>>> = Rc::default();

    let (c, t) = (clock.clone(), timeline.clone());
    player.on_frame_changed(move |frame| {
        let c = c.borrow();
        t.borrow_mut().push(TimelineEntry::Frame {
            tick: c.tick,
            time: c.time,
            frame: frame.cloned(),
        });
    });
    let (c, t) = (clock.clone(), timeline.clone());
    player.on_trigger(move |event| {
        let c = c.borrow();
        t.borrow_mut().push(TimelineEntry::Trigger {
            tick: c.tick,
            time: c.time,
            frame: event.frame,
            event: event.event.to_string(),
        });
    });
    let (c, t) = (clock.clone(), timeline.clone());
    player.on_completed(move |clip| {
        let c = c.borrow();
        t.borrow_mut().push(TimelineEntry::Completed {
            tick: c.tick,
            time: c.time,
            clip,
        });
    });

    player
        .play(&args.clip, args.start_frame)
        .with_context(|| format!("Cannot play clip '{}'", args.clip))?;

    for tick in 1..=args.ticks {
        {
            let mut c = clock.borrow_mut();
            c.tick = tick;
            c.time += args.dt;
        }
        player.tick(args.dt);
    }
    log::debug!("simulated {} tick(s) of {}s", args.ticks, args.dt);

    let entries = timeline.borrow().clone();
    Ok(entries)
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let timeline = simulate(&args)?;

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&timeline)?),
        "text" => {
            for entry in &timeline {
                match entry {
                    TimelineEntry::Frame { tick, time, frame } => println!(
                        "tick {:>4}  t={:>8.3}s  frame     {}",
                        tick,
                        time,
                        frame.as_deref().unwrap_or("<none>")
                    ),
                    TimelineEntry::Trigger {
                        tick,
                        time,
                        frame,
                        event,
                    } => println!(
                        "tick {:>4}  t={:>8.3}s  trigger   {} (frame {})",
                        tick, time, event, frame
                    ),
                    TimelineEntry::Completed { tick, time, clip } => println!(
                        "tick {:>4}  t={:>8.3}s  completed clip #{}",
                        tick, time, clip
                    ),
                }
            }
        }
        _ => anyhow::bail!("Unknown format: {}", args.format),
    }

    Ok(())
}
