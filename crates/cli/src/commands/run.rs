//! Replay a YAML script of UI events.
//!
//! # Usage
//!
//! ```bash
//! cd-cli run demos/cart.yaml
//! cd-cli run demos/blog.yaml --format json
//! ```

use std::path::Path;

use context_demos_core::CurrencyCode;
use tracing::info;

use super::{OutputFormat, render_frames_text};
use crate::app::App;
use crate::config::Demo;
use crate::error::CliError;
use crate::event_loop::{Frame, replay};
use crate::script::Script;

/// Load the script at `path` and replay it.
///
/// # Errors
///
/// Returns an error if the script cannot be loaded, an event targets a store
/// the demo does not provide, or output fails.
pub async fn run_file(
    path: &Path,
    default_demo: Demo,
    currency: CurrencyCode,
    format: OutputFormat,
) -> Result<String, CliError> {
    info!(path = %path.display(), "Loading script");
    let script = Script::load(path).await?;
    run_script(script, default_demo, currency, format).await
}

/// Replay `script` and format the frames.
///
/// # Errors
///
/// See [`run_file`].
pub async fn run_script(
    script: Script,
    default_demo: Demo,
    currency: CurrencyCode,
    format: OutputFormat,
) -> Result<String, CliError> {
    let demo = script.demo.unwrap_or(default_demo);
    info!(demo = %demo, events = script.events.len(), "Replaying script");

    let frames = replay(App::new(demo, currency), script.events).await?;
    match format {
        OutputFormat::Text => Ok(render_frames_text(&frames)),
        OutputFormat::Json => frames_json(&frames),
    }
}

/// One JSON document per line, one line per frame.
fn frames_json(frames: &[Frame]) -> Result<String, CliError> {
    let mut out = String::new();
    for frame in frames {
        out.push_str(&serde_json::to_string(frame)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_script_text() {
        let script = Script::from_yaml(
            "demo: shopping\nevents:\n  - add_to_cart: 2\n  - update_quantity: { id: 1, quantity: 3 }\n",
        )
        .unwrap();
        let out = run_script(script, Demo::Blog, CurrencyCode::USD, OutputFormat::Text)
            .await
            .unwrap();
        assert!(out.contains("== step 1: add_to_cart 2 =="));
        assert!(out.contains("PC Store [cart: 4]"));
        assert!(out.contains("Total: $4596"));
    }

    #[tokio::test]
    async fn test_run_script_uses_default_demo() {
        let script = Script::from_yaml("events:\n  - filter_category: Design\n").unwrap();
        let out = run_script(script, Demo::Blog, CurrencyCode::USD, OutputFormat::Json)
            .await
            .unwrap();
        let last: serde_json::Value =
            serde_json::from_str(out.lines().last().unwrap()).unwrap();
        assert_eq!(last["step"], 1);
        assert_eq!(last["surface"], "posts");
        assert!(
            last["output"]
                .as_str()
                .unwrap()
                .contains("Modern CSS Techniques")
        );
    }
}
