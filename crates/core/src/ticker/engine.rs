//! Ticker state machine.
//!
//! Tracks the display mode, the substituted text, and the scroll position.
//! The driver feeds it three signals: a coarse template refresh (60 s), a
//! per-second clock tick (live-clock mode only), and a per-frame advance.

use chrono::NaiveDateTime;

use super::scroll::ScrollState;
use super::template;

/// Display state of the ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerMode {
    /// No template (missing or empty file): viewport hidden, no timers.
    Idle,
    /// Template present without a time token: 60-second template poll only.
    StaticContent,
    /// Template contains `$$TIME$$`: template poll plus 1-second clock tick.
    LiveClock,
}

/// The alert ticker engine.
#[derive(Debug)]
pub struct TickerEngine {
    mode: TickerMode,
    text: String,
    scroll: ScrollState,
    scrolling: bool,
    viewport_width: f64,
    step: f64,
    scale_x: f64,
}

impl TickerEngine {
    pub fn new(viewport_width: f64, step: f64, scale_x: f64) -> Self {
        Self {
            mode: TickerMode::Idle,
            text: String::new(),
            scroll: ScrollState::new(viewport_width, 0.0, step),
            scrolling: false,
            viewport_width,
            step,
            scale_x,
        }
    }

    pub fn mode(&self) -> TickerMode {
        self.mode
    }

    /// The substituted text currently shown.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the viewport should be shown at all.
    pub fn is_visible(&self) -> bool {
        self.mode != TickerMode::Idle
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Whether the driver should be running the per-second clock timer.
    pub fn needs_clock_tick(&self) -> bool {
        self.mode == TickerMode::LiveClock
    }

    pub fn offset(&self) -> f64 {
        self.scroll.offset()
    }

    /// Full refresh from the template file contents (the 60-second path).
    ///
    /// `template` is `None` when the file is missing, unreadable, or empty;
    /// that collapses the ticker to [`TickerMode::Idle`]. Otherwise all five
    /// tokens are substituted and the scroll restarts from the right edge.
    pub fn refresh(&mut self, template: Option<&str>, now: NaiveDateTime) {
        match template {
            Some(raw) if !raw.is_empty() => {
                let has_time = template::has_time_token(raw);
                self.text = template::render(raw, now);
                self.mode = if has_time { TickerMode::LiveClock } else { TickerMode::StaticContent };
                self.stop_scroll();
                self.start_scroll();
            }
            _ => {
                self.text.clear();
                self.mode = TickerMode::Idle;
                self.stop_scroll();
            }
        }
    }

    /// The 1-second path: re-substitute from the raw template without
    /// touching the in-flight scroll position.
    ///
    /// Substitution always starts from the raw template, so already
    /// substituted text never compounds. A no-op outside live-clock mode or
    /// when the template has lost its time token since the last refresh.
    pub fn clock_tick(&mut self, template: Option<&str>, now: NaiveDateTime) {
        if self.mode != TickerMode::LiveClock {
            return;
        }
        if let Some(raw) = template
            && !raw.is_empty()
            && template::has_time_token(raw)
        {
            self.text = template::render(raw, now);
        }
    }

    /// Supply the real viewport width: retries deferred setup, and while
    /// scrolling propagates the new width into the scroll state so a resize
    /// takes effect on the next wrap rather than the next template refresh.
    pub fn set_viewport_width(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width;
        if self.scrolling {
            self.scroll.resize_viewport(viewport_width);
        } else if self.is_visible() {
            self.start_scroll();
        }
    }

    /// Advance the scroll one frame. No-op while not scrolling.
    pub fn frame(&mut self) {
        if self.scrolling {
            self.scroll.advance();
        }
    }

    /// Rasterize the current frame into a fixed-width line of text columns.
    pub fn render_line(&self) -> String {
        let width = self.viewport_width.max(0.0) as usize;
        let mut line = vec![' '; width];
        let start = self.scroll.offset();
        for (i, ch) in self.text.chars().enumerate() {
            let col = start + i as f64 * self.scale_x;
            if col >= 0.0 && (col as usize) < width {
                line[col as usize] = ch;
            }
        }
        line.into_iter().collect()
    }

    /// Measure the text and restart the scroll from the right edge.
    ///
    /// Idempotent with respect to the advance source: entering the running
    /// state while already scrolling keeps a single source, the driver's
    /// frame tick gated by the `scrolling` flag.
    fn start_scroll(&mut self) {
        let text_width = self.text.chars().count() as f64 * self.scale_x;
        self.scroll = ScrollState::new(self.viewport_width, text_width, self.step);
        if !self.scroll.is_ready() {
            // Viewport not laid out yet; retried via set_viewport_width.
            return;
        }
        self.scrolling = true;
    }

    fn stop_scroll(&mut self) {
        self.scrolling = false;
    }
}
