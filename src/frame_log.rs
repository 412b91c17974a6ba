//! Append-only JSON-lines log of frame-loop events.
//!
//! The terminal is owned by the renderer while the loop runs, so records go
//! to a file instead of stdout/stderr.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::ContainmentMethod;
use crate::types::Point2;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    QuitSignal,
    ExitKey,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord {
    Start {
        ts: u64,
        method: &'static str,
        fps: u32,
        vertices: [[f64; 2]; 3],
    },
    Method {
        ts: u64,
        frame: u64,
        method: &'static str,
    },
    Containment {
        ts: u64,
        frame: u64,
        x: f64,
        y: f64,
        inside: bool,
    },
    Stop {
        ts: u64,
        frames: u64,
        reason: StopReason,
    },
}

impl LogRecord {
    pub fn start(method: ContainmentMethod, fps: u32, vertices: [Point2; 3]) -> Self {
        LogRecord::Start {
            ts: now_ms(),
            method: method.as_str(),
            fps,
            vertices: vertices.map(|p| [p.x, p.y]),
        }
    }

    pub fn method(frame: u64, method: ContainmentMethod) -> Self {
        LogRecord::Method {
            ts: now_ms(),
            frame,
            method: method.as_str(),
        }
    }

    pub fn containment(frame: u64, point: Point2, inside: bool) -> Self {
        LogRecord::Containment {
            ts: now_ms(),
            frame,
            x: point.x,
            y: point.y,
            inside,
        }
    }

    pub fn stop(frames: u64, reason: StopReason) -> Self {
        LogRecord::Stop {
            ts: now_ms(),
            frames,
            reason,
        }
    }
}

/// JSON-lines writer. A failed write closes the log; the loop keeps running.
pub struct FrameLog {
    file: Option<File>,
    buf: Vec<u8>,
}

impl FrameLog {
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open frame log {}", path))?;
        Ok(Self {
            file: Some(file),
            buf: Vec::with_capacity(256),
        })
    }

    pub fn record(&mut self, rec: &LogRecord) {
        let Some(file) = self.file.as_mut() else {
            return;
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, rec).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if file.write_all(&self.buf).is_err() {
            self.file = None;
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
