//! Text surfaces that read the demo stores.
//!
//! Every surface looks its store up through the [`ContextScope`] on each
//! render, the way a component calls its context hook, so all surfaces of a
//! demo read the same live store. Surfaces may also keep local UI state
//! (the post filter) that only they react to.

pub mod blog;
pub mod shopping;

use context_demos_state::ContextScope;

use crate::error::CliError;
use crate::events::UiEvent;

pub use blog::{AsideSurface, CategoriesSurface, PostFilter, PostsSurface};
pub use shopping::{CartSurface, HeaderSurface, ProductsSurface};

/// The store a surface renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Cart,
    Blog,
}

/// A display surface.
pub trait Surface {
    /// Short name used as the section heading in output.
    fn name(&self) -> &'static str;

    /// Store whose changes require a re-render.
    fn source(&self) -> StoreKind;

    /// Render the current state.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Context`] if the surface's store is not provided
    /// in `scope`, or [`CliError::Render`] if the template fails.
    fn render(&self, scope: &ContextScope) -> Result<String, CliError>;

    /// React to a UI event that changes local state. Returns whether the
    /// surface needs to re-render.
    fn handle(&mut self, _event: &UiEvent) -> bool {
        false
    }
}
