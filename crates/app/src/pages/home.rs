//! Home page: drives the alert ticker in the terminal.
//!
//! Two interval timers feed the engine — the coarse template poll and the
//! per-second clock tick — plus a frame tick standing in for the host's
//! render signal. All three land on this one task, so timer callbacks never
//! race the engine state. Dropping the intervals on exit is the timer
//! teardown.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use tokio::time::{MissedTickBehavior, interval};

use infotools_core::AppConfig;
use infotools_core::ticker::{TickerEngine, TickerMode};

/// Frame cadence for the scroll animation.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Terminal viewport width in columns.
const VIEWPORT_COLUMNS: f64 = 80.0;

/// Read the alert template, treating a missing, unreadable, or empty file as
/// no alert.
fn read_template(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(text) if !text.is_empty() => Some(text),
        Ok(_) => None,
        Err(_) => None,
    }
}

pub async fn run(config: &AppConfig, frames: Option<u64>) -> Result<()> {
    let mut engine = TickerEngine::new(VIEWPORT_COLUMNS, config.scroll_step, config.scroll_scale_x);
    let template_path = config.alert_template_path.clone();

    let mut template_poll = interval(config.template_poll());
    template_poll.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut clock_poll = interval(config.clock_poll());
    clock_poll.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut frame_tick = interval(FRAME_INTERVAL);
    frame_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut stdout = std::io::stdout();
    let mut remaining = frames;

    loop {
        tokio::select! {
            // First tick fires immediately, covering the initial mount.
            _ = template_poll.tick() => {
                let template = read_template(&template_path);
                engine.refresh(template.as_deref(), Local::now().naive_local());
                if engine.mode() == TickerMode::Idle {
                    tracing::debug!("no alert template at {}; ticker idle", template_path.display());
                }
            }
            // Guarded: the clock timer only runs in live-clock mode.
            _ = clock_poll.tick(), if engine.needs_clock_tick() => {
                let template = read_template(&template_path);
                engine.clock_tick(template.as_deref(), Local::now().naive_local());
            }
            _ = frame_tick.tick() => {
                engine.frame();
                if engine.is_visible() {
                    write!(stdout, "\r{}", engine.render_line())?;
                    stdout.flush()?;
                }
                if let Some(n) = remaining.as_mut() {
                    if *n <= 1 {
                        break;
                    }
                    *n -= 1;
                }
            }
        }
    }

    writeln!(stdout)?;
    Ok(())
}
