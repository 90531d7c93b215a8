//! Integration tests for the context demos.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p context-demos-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Cart operations and aggregates across shared handles
//! - `blog_store` - Category/tag additions and post filtering
//! - `context_scope` - Provider lookup and the missing-provider failure
//! - `demo_scripts` - Scripted runs through the event loop and views
