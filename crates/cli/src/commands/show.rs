//! Render a demo from seed data.
//!
//! # Usage
//!
//! ```bash
//! # Render the shopping demo's header, products, and cart
//! cd-cli show --demo shopping
//!
//! # Dump the blog store snapshot as JSON
//! cd-cli show --demo blog --format json
//! ```

use context_demos_state::{use_blog, use_cart};
use tracing::info;

use super::{OutputFormat, render_frames_text};
use crate::app::App;
use crate::config::Demo;
use crate::error::CliError;
use crate::event_loop::replay;

/// Render every surface of `app` as it stands.
///
/// # Errors
///
/// Returns an error if a surface cannot find its store or fails to render,
/// or if JSON serialization fails.
pub async fn show(app: App, format: OutputFormat) -> Result<String, CliError> {
    info!(demo = %app.demo(), "Rendering demo");
    match format {
        OutputFormat::Text => {
            let frames = replay(app, Vec::new()).await?;
            Ok(render_frames_text(&frames))
        }
        OutputFormat::Json => snapshot_json(&app),
    }
}

fn snapshot_json(app: &App) -> Result<String, CliError> {
    let json = match app.demo() {
        Demo::Shopping => serde_json::to_string_pretty(&*use_cart(app.scope())?.snapshot())?,
        Demo::Blog => serde_json::to_string_pretty(&*use_blog(app.scope())?.snapshot())?,
    };
    Ok(json)
}
