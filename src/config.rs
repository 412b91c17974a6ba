//! Startup configuration from environment variables.

use anyhow::{anyhow, Result};

use crate::core::ContainmentMethod;
use crate::types::TARGET_FPS;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub method: ContainmentMethod,
    pub target_fps: u32,
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            method: ContainmentMethod::Heron,
            target_fps: TARGET_FPS,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from environment variables.
    ///
    /// - `TRIANGLE_METHOD`: `heron` | `projection` (default `heron`)
    /// - `TRIANGLE_FPS`: frame rate cap (default 60)
    /// - `TRIANGLE_LOG_PATH`: JSON-lines frame log (default: none)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let method = match non_empty(lookup("TRIANGLE_METHOD")) {
            Some(v) => ContainmentMethod::from_str(&v)
                .ok_or_else(|| anyhow!("TRIANGLE_METHOD: unknown containment method: {}", v))?,
            None => defaults.method,
        };

        let target_fps = match non_empty(lookup("TRIANGLE_FPS")) {
            Some(v) => match v.parse::<u32>() {
                Ok(fps) if fps > 0 => fps,
                _ => return Err(anyhow!("TRIANGLE_FPS: expected a positive integer, got: {}", v)),
            },
            None => defaults.target_fps,
        };

        let log_path = non_empty(lookup("TRIANGLE_LOG_PATH"));

        Ok(Self {
            method,
            target_fps,
            log_path,
        })
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
