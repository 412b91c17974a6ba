//! Terminal triangle runner (default binary).
//!
//! Draws one triangle, green while the mouse pointer is inside it and red
//! otherwise. Esc / q quit, Tab switches between the Heron and projection
//! containment tests.

use anyhow::Result;

use tui_triangle::term::TerminalRenderer;
use tui_triangle::{AppConfig, FrameLoop};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    let mut frame_loop = FrameLoop::new(&config)?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| frame_loop.run(&mut term));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}
