//! Context Demos CLI - terminal front-end for the cart and blog demos.
//!
//! The library half holds everything the `cd-cli` binary runs, so the
//! integration tests can drive the same code:
//!
//! - [`app`] - which store each demo provides and how events reach it
//! - [`views`] - text surfaces rendered with `askama`
//! - [`event_loop`] - single-threaded queue of UI events with re-rendering
//! - [`script`] - YAML event scripts
//! - [`config`] - environment configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod event_loop;
pub mod events;
pub mod script;
pub mod views;

pub use app::App;
pub use config::{Demo, DemoConfig};
pub use error::CliError;
pub use event_loop::{EventLoop, Frame, replay};
pub use events::UiEvent;
pub use script::Script;
