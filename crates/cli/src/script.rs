//! YAML scripts of UI events.
//!
//! ```yaml
//! demo: shopping
//! events:
//!   - add_to_cart: 2
//!   - update_quantity: { id: 1, quantity: 3 }
//!   - decrement: 2
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Demo;
use crate::error::CliError;
use crate::events::UiEvent;

/// A recorded sequence of interactions with one demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Demo to run; falls back to the configured default.
    #[serde(default)]
    pub demo: Option<Demo>,
    #[serde(default)]
    pub events: Vec<UiEvent>,
}

impl Script {
    /// Parse a script from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Yaml`] if the text is not a valid script.
    pub fn from_yaml(content: &str) -> Result<Self, CliError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read and parse a script file.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ReadScript`] if the file cannot be read, or
    /// [`CliError::Yaml`] if it is not a valid script.
    pub async fn load(path: &Path) -> Result<Self, CliError> {
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| CliError::ReadScript {
                    path: path.to_path_buf(),
                    source,
                })?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use context_demos_core::ProductId;

    use super::*;

    #[test]
    fn test_parse_shopping_script() {
        let script = Script::from_yaml(
            r"
demo: shopping
events:
  - add_to_cart: 2
  - update_quantity: { id: 1, quantity: 3 }
  - increment: 2
  - decrement: 2
  - remove_from_cart: 1
",
        )
        .unwrap();
        assert_eq!(script.demo, Some(Demo::Shopping));
        assert_eq!(
            script.events,
            vec![
                UiEvent::AddToCart(ProductId::new(2)),
                UiEvent::UpdateQuantity {
                    id: ProductId::new(1),
                    quantity: 3,
                },
                UiEvent::Increment(ProductId::new(2)),
                UiEvent::Decrement(ProductId::new(2)),
                UiEvent::RemoveFromCart(ProductId::new(1)),
            ]
        );
    }

    #[test]
    fn test_parse_blog_script() {
        let script = Script::from_yaml(
            r#"
demo: blog
events:
  - add_category: "  Rust  "
  - add_tag: Tokio
  - filter_tag: JavaScript
  - clear_filter
"#,
        )
        .unwrap();
        assert_eq!(script.demo, Some(Demo::Blog));
        assert_eq!(script.events.len(), 4);
        assert_eq!(script.events[0], UiEvent::AddCategory("  Rust  ".to_owned()));
        assert_eq!(script.events[3], UiEvent::ClearFilter);
    }

    #[test]
    fn test_demo_optional() {
        let script = Script::from_yaml("events: []").unwrap();
        assert_eq!(script.demo, None);
        assert!(script.events.is_empty());
    }

    #[test]
    fn test_unknown_event_rejected() {
        let result = Script::from_yaml("events:\n  - checkout: 1\n");
        assert!(matches!(result, Err(CliError::Yaml(_))));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = Script::load(Path::new("/definitely/not/here.yaml")).await;
        assert!(matches!(result, Err(CliError::ReadScript { .. })));
    }
}
