//! The per-frame driver: input, containment test, color pick, draw, present.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::config::AppConfig;
use crate::core::{ContainmentMethod, Triangle};
use crate::frame_log::{FrameLog, LogRecord, StopReason};
use crate::input::{map_event, PointerTracker};
use crate::term::{FrameBuffer, FrameClock, SceneView, TerminalRenderer, Viewport};
use crate::types::{InputEvent, Point2, Rgb, INSIDE_COLOR, OUTSIDE_COLOR, SURFACE_HEIGHT, SURFACE_WIDTH};

/// What one rendered frame decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    pub pointer: Point2,
    pub inside: bool,
    pub color: Rgb,
}

/// Owns everything the loop touches; constructed once at startup.
pub struct FrameLoop {
    triangle: Triangle,
    method: ContainmentMethod,
    view: SceneView,
    pointer: PointerTracker,
    fb: FrameBuffer,
    target_fps: u32,
    frames: u64,
    stop: Option<StopReason>,
    needs_full_redraw: bool,
    last_inside: Option<bool>,
    log: Option<FrameLog>,
}

impl FrameLoop {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let log = match &config.log_path {
            Some(path) => Some(FrameLog::open(path)?),
            None => None,
        };
        Ok(Self {
            triangle: Triangle::centered(SURFACE_WIDTH, SURFACE_HEIGHT),
            method: config.method,
            view: SceneView::default(),
            pointer: PointerTracker::new(),
            fb: FrameBuffer::new(0, 0),
            target_fps: config.target_fps,
            frames: 0,
            stop: None,
            needs_full_redraw: false,
            last_inside: None,
            log,
        })
    }

    pub fn method(&self) -> ContainmentMethod {
        self.method
    }

    pub fn is_running(&self) -> bool {
        self.stop.is_none()
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Apply one terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        let Some(input) = map_event(event) else {
            return;
        };
        match input {
            InputEvent::QuitSignal => self.stop_with(StopReason::QuitSignal),
            InputEvent::ExitKey => self.stop_with(StopReason::ExitKey),
            InputEvent::ToggleMethod => {
                self.method = self.method.toggle();
                let rec = LogRecord::method(self.frames, self.method);
                self.log(&rec);
            }
            InputEvent::PointerMoved { .. } => {
                self.pointer.apply(input);
            }
            InputEvent::Resized { .. } => self.needs_full_redraw = true,
        }
    }

    /// Clear, test the pointer against the triangle, and draw it in the
    /// matching color.
    pub fn render(&mut self, viewport: Viewport) -> FrameOutcome {
        let (column, row) = self.pointer.position();
        let pointer = self.view.cell_to_surface(column, row, viewport);
        let inside = self.triangle.intersects(pointer, self.method);
        let color = if inside { INSIDE_COLOR } else { OUTSIDE_COLOR };

        self.view.render_into(&self.triangle, color, viewport, &mut self.fb);

        if self.last_inside != Some(inside) {
            self.last_inside = Some(inside);
            let rec = LogRecord::containment(self.frames, pointer, inside);
            self.log(&rec);
        }
        self.frames += 1;

        FrameOutcome {
            pointer,
            inside,
            color,
        }
    }

    /// Run until a quit signal or exit key.
    ///
    /// The caller owns terminal setup and teardown.
    pub fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let mut clock = FrameClock::new(self.target_fps);
        let rec = LogRecord::start(self.method, self.target_fps, self.triangle.vertices());
        self.log(&rec);

        while self.is_running() {
            while event::poll(Duration::ZERO)? {
                let ev = event::read()?;
                self.handle_event(&ev);
            }
            if !self.is_running() {
                break;
            }

            if self.needs_full_redraw {
                term.invalidate();
                self.needs_full_redraw = false;
            }

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            self.render(Viewport::new(w, h));
            term.present(&self.fb)?;
            clock.tick();
        }

        Ok(())
    }

    fn stop_with(&mut self, reason: StopReason) {
        if self.stop.is_some() {
            return;
        }
        self.stop = Some(reason);
        let rec = LogRecord::stop(self.frames, reason);
        self.log(&rec);
    }

    fn log(&mut self, rec: &LogRecord) {
        if let Some(log) = self.log.as_mut() {
            log.record(rec);
        }
    }
}
