//! Integration tests replaying the bundled demo scripts.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use context_demos_cli::commands::OutputFormat;
use context_demos_cli::commands::run::run_file;
use context_demos_cli::{App, Demo, Frame, Script, UiEvent, replay};
use context_demos_core::{CurrencyCode, ProductId};

fn demo_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

fn output_at<'a>(frames: &'a [Frame], step: usize, surface: &str) -> Option<&'a str> {
    frames
        .iter()
        .find(|frame| frame.step == step && frame.surface == surface)
        .map(|frame| frame.output.as_str())
}

// =============================================================================
// Cart Script
// =============================================================================

#[tokio::test]
async fn test_cart_script_header_tracks_store() {
    let script = Script::load(&demo_path("cart.yaml")).await.unwrap();
    assert_eq!(script.demo, Some(Demo::Shopping));

    let frames = replay(App::new(Demo::Shopping, CurrencyCode::USD), script.events)
        .await
        .unwrap();

    assert_eq!(output_at(&frames, 0, "header"), Some("PC Store [cart: 1]"));
    assert_eq!(output_at(&frames, 1, "header"), Some("PC Store [cart: 2]"));
    assert_eq!(output_at(&frames, 2, "header"), Some("PC Store [cart: 4]"));
    assert!(output_at(&frames, 2, "cart").unwrap().ends_with("Total: $4596"));
    assert_eq!(output_at(&frames, 3, "header"), Some("PC Store [cart: 5]"));
    // step 5 steps Office PC down to zero, removing it
    let products = output_at(&frames, 5, "products").unwrap();
    assert_eq!(products.matches("In cart:").count(), 1);
    // step 6 removes an id that is not in the cart: nothing re-renders
    assert!(frames.iter().all(|frame| frame.step != 6));
    assert_eq!(
        output_at(&frames, 7, "cart"),
        Some("Shopping Cart\nYour cart is empty")
    );
}

#[tokio::test]
async fn test_cart_script_text_output() {
    let out = run_file(
        &demo_path("cart.yaml"),
        Demo::Blog,
        CurrencyCode::USD,
        OutputFormat::Text,
    )
    .await
    .unwrap();
    assert!(out.starts_with("== initial ==\n-- header --\nPC Store [cart: 1]"));
    assert!(out.contains("== step 2: update_quantity 1 -> 3 =="));
}

// =============================================================================
// Blog Script
// =============================================================================

#[tokio::test]
async fn test_blog_script() {
    let script = Script::load(&demo_path("blog.yaml")).await.unwrap();
    let frames = replay(App::new(Demo::Blog, CurrencyCode::USD), script.events)
        .await
        .unwrap();

    let filtered = output_at(&frames, 1, "posts").unwrap();
    assert!(filtered.starts_with("Blog Posts (category: Technology)"));
    assert!(filtered.contains("Getting Started with React Context API"));
    assert!(!filtered.contains("Modern CSS Techniques"));

    let categories = output_at(&frames, 2, "categories").unwrap();
    assert!(categories.ends_with("- Rust: 0 posts"));

    // blank dialog input adds nothing
    assert!(frames.iter().all(|frame| frame.step != 3));

    let aside = output_at(&frames, 4, "aside").unwrap();
    assert!(aside.ends_with("- Tokio (0)"));

    let by_tag = output_at(&frames, 5, "posts").unwrap();
    assert!(by_tag.starts_with("Blog Posts (tag: JavaScript)"));
    assert_eq!(by_tag.matches("\n* ").count(), 2);

    let cleared = output_at(&frames, 6, "posts").unwrap();
    assert_eq!(cleared.matches("\n* ").count(), 3);
}

// =============================================================================
// Misuse
// =============================================================================

#[tokio::test]
async fn test_cart_event_against_blog_demo_fails() {
    let result = replay(
        App::new(Demo::Blog, CurrencyCode::USD),
        vec![UiEvent::AddToCart(ProductId::new(1))],
    )
    .await;
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Context error: use_cart must be used within a CartProvider"
    );
}
