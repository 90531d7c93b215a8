//! CLI command implementations.

pub mod run;
pub mod show;

use std::fmt::Write as _;

use clap::ValueEnum;

use crate::event_loop::Frame;

/// Output format for rendered demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text views grouped by step
    #[default]
    Text,
    /// JSON (store snapshot for `show`, one frame per line for `run`)
    Json,
}

/// Group frames by step under headings.
#[must_use]
pub fn render_frames_text(frames: &[Frame]) -> String {
    let mut out = String::new();
    let mut current_step = None;
    for frame in frames {
        if current_step != Some(frame.step) {
            current_step = Some(frame.step);
            match &frame.event {
                Some(event) => {
                    let _ = writeln!(out, "== step {}: {event} ==", frame.step);
                }
                None => out.push_str("== initial ==\n"),
            }
        }
        let _ = writeln!(out, "-- {} --\n{}\n", frame.surface, frame.output);
    }
    out
}
