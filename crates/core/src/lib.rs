//! Context Demos Core - Shared types library.
//!
//! This crate provides the domain types used across the workspace:
//! - `state` - Provider/consumer stores for the cart and blog demos
//! - `cli` - Terminal front-end that renders the demos and replays scripts
//!
//! # Architecture
//!
//! The core crate contains only types - no stores, no I/O, no rendering.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids, prices, entry names, and the cart and blog entities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
